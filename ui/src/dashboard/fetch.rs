//! Fetch boundary: the only place the dashboard talks HTTP.
//!
//! Each refresh fans out one task per slot and returns immediately; the
//! tasks never join. A failed fetch is logged and its slot falls back to the
//! empty default. Nothing is retried, no error reaches the view, and the
//! other slots keep whatever they had.

use api::{ChartSeries, StatisticsSummary, StatsClient};
use dioxus::prelude::*;
use tracing::error;

use super::state::DashboardState;

/// Re-fetch all four slots for the current filter. This runs on mount and
/// after every month or page change.
pub fn refresh_all(client: &StatsClient, state: Signal<DashboardState>) {
    refresh_transactions(client, state);
    refresh_statistics(client, state);
    refresh_price_ranges(client, state);
    refresh_categories(client, state);
}

/// Re-fetch the transactions slot alone, with the filter as it stands.
/// This is what submitting the search form runs.
pub fn refresh_transactions(client: &StatsClient, mut state: Signal<DashboardState>) {
    let client = client.clone();
    let (filter, ticket) =
        state.with_mut(|s| (s.filter.clone(), s.seqs.transactions.issue()));

    spawn(async move {
        let rows = client
            .transactions(filter.month, filter.page, &filter.search)
            .await
            .unwrap_or_else(|err| {
                error!("transactions fetch failed: {err}");
                Vec::new()
            });
        state.with_mut(|s| s.apply_transactions(ticket, rows));
    });
}

fn refresh_statistics(client: &StatsClient, mut state: Signal<DashboardState>) {
    let client = client.clone();
    let (month, ticket) = state.with_mut(|s| (s.filter.month, s.seqs.statistics.issue()));

    spawn(async move {
        let summary = client.statistics(month).await.unwrap_or_else(|err| {
            error!("statistics fetch failed: {err}");
            StatisticsSummary::default()
        });
        state.with_mut(|s| s.apply_statistics(ticket, summary));
    });
}

fn refresh_price_ranges(client: &StatsClient, mut state: Signal<DashboardState>) {
    let client = client.clone();
    let (month, ticket) = state.with_mut(|s| (s.filter.month, s.seqs.price_ranges.issue()));

    spawn(async move {
        let series = fetch_series(client.price_ranges(month), "bar chart").await;
        state.with_mut(|s| s.apply_price_ranges(ticket, series));
    });
}

fn refresh_categories(client: &StatsClient, mut state: Signal<DashboardState>) {
    let client = client.clone();
    let (month, ticket) = state.with_mut(|s| (s.filter.month, s.seqs.categories.issue()));

    spawn(async move {
        let series = fetch_series(client.categories(month), "pie chart").await;
        state.with_mut(|s| s.apply_categories(ticket, series));
    });
}

async fn fetch_series(
    request: impl std::future::Future<Output = api::Result<ChartSeries>>,
    slot: &'static str,
) -> ChartSeries {
    request.await.unwrap_or_else(|err| {
        error!("{slot} fetch failed: {err}");
        ChartSeries::default()
    })
}
