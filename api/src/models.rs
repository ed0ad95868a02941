//! Wire models for the statistics service.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ParseMonthError;

/// Calendar month filter. The service keys everything off the full English
/// month name, so that is the canonical form here too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order. Drives the month selector.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    /// Exact-name parse, matching the `value` attributes of the selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|month| month.as_str() == s)
            .ok_or_else(|| ParseMonthError(s.to_string()))
    }
}

/// One row of the transactions table.
///
/// Fields render verbatim; in particular `date_of_sale` stays whatever
/// string the service sent, no parsing and no reformatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date_of_sale: String,
}

/// Month-level sales summary. Each field is individually optional: the
/// service omits what it cannot compute, and the UI shows a placeholder for
/// exactly the omitted ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsSummary {
    pub total_sale_amount: Option<f64>,
    pub sold_items: Option<u64>,
    pub not_sold_items: Option<u64>,
}

/// Parallel label/value columns backing one chart.
///
/// Built from a JSON object, so the ordering is whatever the service
/// emitted. Nothing here sorts, validates, or de-duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Project a label → count mapping into parallel columns, keeping the
    /// mapping's emission order.
    pub fn from_mapping(mapping: &IndexMap<String, f64>) -> Self {
        Self {
            labels: mapping.keys().cloned().collect(),
            values: mapping.values().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
