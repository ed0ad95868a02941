//! The transactions table and its pager.

use api::StatsClient;
use dioxus::prelude::*;

use super::fetch;
use super::state::DashboardState;
use crate::core::format;

#[component]
pub fn TransactionsPanel(mut state: Signal<DashboardState>) -> Element {
    let client = use_context::<StatsClient>();
    let snapshot = state();
    let on_first_page = snapshot.filter.page == 1;

    rsx! {
        section { class: "dashboard-table",
            h2 { "Transactions Table" }
            table { class: "dashboard-table__grid",
                thead {
                    tr {
                        th { "Title" }
                        th { "Description" }
                        th { "Price" }
                        th { "Date of Sale" }
                    }
                }
                tbody {
                    if snapshot.transactions.is_empty() {
                        tr {
                            td { class: "dashboard-table__empty", colspan: "4",
                                "No transactions found."
                            }
                        }
                    }
                    for row in snapshot.transactions.iter() {
                        tr { key: "{row.id}",
                            td { "{row.title}" }
                            td { class: "dashboard-table__description", "{row.description}" }
                            td { {format::number(row.price)} }
                            td { "{row.date_of_sale}" }
                        }
                    }
                }
            }
            div { class: "dashboard-table__pager",
                button {
                    class: "button",
                    disabled: on_first_page,
                    onclick: {
                        let client = client.clone();
                        move |_| {
                            // No page move, no fetch.
                            if state.with_mut(|s| s.filter.previous_page()) {
                                fetch::refresh_all(&client, state);
                            }
                        }
                    },
                    "Previous"
                }
                span { class: "dashboard-table__page", "Page {snapshot.filter.page}" }
                button {
                    class: "button",
                    onclick: move |_| {
                        state.with_mut(|s| s.filter.next_page());
                        fetch::refresh_all(&client, state);
                    },
                    "Next"
                }
            }
        }
    }
}
