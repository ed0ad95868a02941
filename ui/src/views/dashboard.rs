//! The one page of the app: the transaction dashboard.

use api::StatsClient;
use dioxus::prelude::*;

use crate::dashboard::{
    self, CategoryPanel, DashboardState, MonthFilter, PriceRangePanel, SearchBox,
    StatisticsPanel, TransactionsPanel,
};

#[component]
pub fn Dashboard() -> Element {
    let state = use_signal(DashboardState::default);
    let client = use_context_provider(StatsClient::from_env);

    // Initial population. Every later fetch is issued by the control that
    // caused it, so this effect never needs to re-run.
    use_effect(move || dashboard::refresh_all(&client, state));

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Transaction Dashboard" }
            div { class: "dashboard-controls",
                MonthFilter { state }
                SearchBox { state }
            }
            TransactionsPanel { state }
            StatisticsPanel { state }
            div { class: "dashboard-charts",
                PriceRangePanel { state }
                CategoryPanel { state }
            }
        }
    }
}
