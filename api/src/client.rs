//! Async HTTP client for the four dashboard endpoints.

use indexmap::IndexMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::{ChartSeries, Month, StatisticsSummary, Transaction};

const TRANSACTIONS: &str = "/api/transactions";
const STATISTICS: &str = "/api/statistics";
const BAR_CHART: &str = "/api/bar-chart";
const PIE_CHART: &str = "/api/pie-chart";

/// Client for the statistics service.
///
/// Cheap to clone; every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    /// Client rooted at `base_url`, e.g. `http://127.0.0.1:3030`. The
    /// `/api/...` endpoint paths are appended to it.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Client for whatever environment this process runs in: the
    /// `TALLYBOARD_API_URL` variable when set, otherwise the page origin in
    /// the browser and a local development service natively.
    pub fn from_env() -> Self {
        let configured = std::env::var("TALLYBOARD_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        Self::new(configured.unwrap_or_else(default_base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One page of transaction rows. The response body is the row array
    /// itself; a body of any other shape is a decode failure.
    pub async fn transactions(
        &self,
        month: Month,
        page: u32,
        search: &str,
    ) -> Result<Vec<Transaction>> {
        self.get_json(
            TRANSACTIONS,
            &[
                ("month", month.as_str().to_string()),
                ("page", page.to_string()),
                ("search", search.to_string()),
            ],
        )
        .await
    }

    /// Sales summary for `month`.
    pub async fn statistics(&self, month: Month) -> Result<StatisticsSummary> {
        self.get_json(STATISTICS, &[("month", month.as_str().to_string())])
            .await
    }

    /// Item counts per price range, in the order the service emitted them.
    pub async fn price_ranges(&self, month: Month) -> Result<ChartSeries> {
        let mapping: IndexMap<String, f64> = self
            .get_json(BAR_CHART, &[("month", month.as_str().to_string())])
            .await?;
        Ok(ChartSeries::from_mapping(&mapping))
    }

    /// Item counts per category, in the order the service emitted them.
    pub async fn categories(&self, month: Month) -> Result<ChartSeries> {
        let mapping: IndexMap<String, f64> = self
            .get_json(PIE_CHART, &[("month", month.as_str().to_string())])
            .await?;
        Ok(ChartSeries::from_mapping(&mapping))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{endpoint}", self.base_url);
        debug!(%url, "statistics service request");

        let response = self.client.get(&url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: response.status().as_u16(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(target_arch = "wasm32")]
fn default_base_url() -> String {
    // Same-origin requests, mirroring a dev-server proxy setup.
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> String {
    "http://127.0.0.1:3030".to_string()
}
