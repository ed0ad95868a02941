//! Statistics summary cards.

use dioxus::prelude::*;

use super::state::DashboardState;
use crate::core::format;

#[component]
pub fn StatisticsPanel(state: Signal<DashboardState>) -> Element {
    let summary = state().statistics;

    rsx! {
        section { class: "dashboard-stats",
            h2 { "Statistics" }
            div { class: "dashboard-stats__cards",
                StatCard {
                    title: "Total Sale Amount",
                    value: format::amount_or_na(summary.total_sale_amount),
                }
                StatCard {
                    title: "Total Sold Items",
                    value: format::count_or_na(summary.sold_items),
                }
                StatCard {
                    title: "Total Not Sold Items",
                    value: format::count_or_na(summary.not_sold_items),
                }
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: String) -> Element {
    rsx! {
        div { class: "dashboard-stats__card",
            span { class: "dashboard-stats__label", "{title}" }
            span { class: "dashboard-stats__value", "{value}" }
        }
    }
}
