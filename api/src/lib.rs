//! Client for the Tallyboard statistics service.
//!
//! Everything the dashboard knows about the wire lives here: the month
//! vocabulary, the transaction and summary models, the chart-series
//! projection, and the async client for the four `/api/*` endpoints.

pub mod client;
pub mod error;
pub mod models;

pub use client::StatsClient;
pub use error::{ApiError, ParseMonthError, Result};
pub use models::{ChartSeries, Month, StatisticsSummary, Transaction};
