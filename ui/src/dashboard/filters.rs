//! Month and search controls.

use api::{Month, StatsClient};
use dioxus::prelude::*;

use super::fetch;
use super::state::DashboardState;

/// Month selector. Changing it re-fetches every slot; the page number and
/// search text are deliberately left where they were.
#[component]
pub fn MonthFilter(mut state: Signal<DashboardState>) -> Element {
    let client = use_context::<StatsClient>();
    let selected = state().filter.month;

    rsx! {
        div { class: "dashboard-controls__month",
            label { r#for: "month-filter", "Select Month:" }
            select {
                id: "month-filter",
                onchange: move |evt| {
                    if let Ok(month) = evt.value().parse::<Month>() {
                        state.with_mut(|s| s.filter.set_month(month));
                        fetch::refresh_all(&client, state);
                    }
                },
                for month in Month::ALL {
                    option {
                        key: "{month}",
                        value: "{month}",
                        selected: month == selected,
                        "{month}"
                    }
                }
            }
        }
    }
}

/// Search form. Typing only edits the filter; the fetch happens on an
/// explicit submit, and it refreshes the transactions slot alone.
#[component]
pub fn SearchBox(mut state: Signal<DashboardState>) -> Element {
    let client = use_context::<StatsClient>();
    let search = state().filter.search;

    rsx! {
        form {
            class: "dashboard-controls__search",
            onsubmit: move |evt| {
                evt.prevent_default();
                fetch::refresh_transactions(&client, state);
            },
            input {
                r#type: "text",
                placeholder: "Search transactions...",
                value: "{search}",
                oninput: move |evt| state.with_mut(|s| s.filter.search = evt.value()),
            }
            button { class: "button button--primary", r#type: "submit", "Search" }
        }
    }
}
