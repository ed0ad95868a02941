//! Dashboard state: the filter, the four display slots, and the bookkeeping
//! that keeps slow responses from clobbering newer ones.

use api::{ChartSeries, Month, StatisticsSummary, Transaction};

/// The filter every fetch is parameterized on.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub month: Month,
    pub search: String,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            month: Month::March,
            search: String::new(),
            page: 1,
        }
    }
}

impl FilterState {
    /// Switch months without resetting pagination or the search text.
    pub fn set_month(&mut self, month: Month) {
        self.month = month;
    }

    /// Step back one page, clamped at 1. Returns whether the page moved;
    /// a `false` means the caller should not fetch anything.
    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one page. The service exposes no page count, so there is
    /// no upper bound; a page past the end just comes back empty.
    pub fn next_page(&mut self) {
        self.page += 1;
    }
}

/// Monotonic sequence number for one display slot.
///
/// Every fetch takes a ticket from [`SlotSeq::issue`] before it starts, and
/// its completion is applied only while that ticket is still the latest.
/// An older in-flight response can therefore never overwrite a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotSeq(u64);

impl SlotSeq {
    pub fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// One sequence per display slot. The four slots never share tickets, so a
/// re-fetch of one cannot invalidate an in-flight fetch of another.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotSeqs {
    pub transactions: SlotSeq,
    pub statistics: SlotSeq,
    pub price_ranges: SlotSeq,
    pub categories: SlotSeq,
}

/// Everything the dashboard renders from.
///
/// Rendering is a pure projection of this struct. Mutation happens in two
/// places only: control handlers (filter changes) and the fetch boundary's
/// `apply_*` calls (slot contents).
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub filter: FilterState,
    pub transactions: Vec<Transaction>,
    pub statistics: StatisticsSummary,
    pub price_ranges: ChartSeries,
    pub categories: ChartSeries,
    pub seqs: SlotSeqs,
}

impl DashboardState {
    /// Write a transactions completion into its slot, unless a newer fetch
    /// was issued after `ticket` was taken.
    pub fn apply_transactions(&mut self, ticket: u64, rows: Vec<Transaction>) {
        if self.seqs.transactions.is_current(ticket) {
            self.transactions = rows;
        }
    }

    pub fn apply_statistics(&mut self, ticket: u64, summary: StatisticsSummary) {
        if self.seqs.statistics.is_current(ticket) {
            self.statistics = summary;
        }
    }

    pub fn apply_price_ranges(&mut self, ticket: u64, series: ChartSeries) {
        if self.seqs.price_ranges.is_current(ticket) {
            self.price_ranges = series;
        }
    }

    pub fn apply_categories(&mut self, ticket: u64, series: ChartSeries) {
        if self.seqs.categories.is_current(ticket) {
            self.categories = series;
        }
    }
}
