//! The dashboard: filter state, display slots, fetch boundary, and panels.

mod charts;
mod fetch;
mod filters;
mod state;
mod stats;
mod table;

pub use charts::{CategoryPanel, PriceRangePanel};
pub use fetch::{refresh_all, refresh_transactions};
pub use filters::{MonthFilter, SearchBox};
pub use state::{DashboardState, FilterState, SlotSeq, SlotSeqs};
pub use stats::StatisticsPanel;
pub use table::TransactionsPanel;
