use dioxus::prelude::*;

use crate::core::{aggregate::CategoryCount, format};
use crate::t;

#[derive(Clone, PartialEq)]
struct BarRow {
    label: String,
    count_text: String,
    width_style: String,
    is_leader: bool,
}

/// The ten most-clicked products as label/bar/count rows, widest first.
#[component]
pub fn TopProductsBar(data: Vec<CategoryCount>) -> Element {
    let max = data.first().map(|entry| entry.count).unwrap_or(0).max(1);

    let rows: Vec<BarRow> = data
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let ratio = entry.count as f64 / max as f64 * 100.0;
            BarRow {
                label: entry.label.clone(),
                count_text: format::format_count(entry.count),
                width_style: format!("width: {ratio:.1}%"),
                is_leader: index == 0,
            }
        })
        .collect();

    rsx! {
        section { class: "dashboard-card chart-bars",
            div { class: "dashboard-card__header",
                h2 { {t!("section-products")} }
            }

            if rows.is_empty() {
                p { class: "dashboard-card__placeholder", "No product clicks in the current view." }
            } else {
                div { class: "chart-bars__axes",
                    span { {t!("axis-product-name")} }
                    span { {t!("axis-click-count")} }
                }
                ul { class: "chart-bars__rows",
                    for row in rows {
                        li { class: "chart-bars__row", key: "{row.label}",
                            span { class: "chart-bars__label", "{row.label}" }
                            span { class: "chart-bars__track",
                                span {
                                    class: if row.is_leader {
                                        "chart-bars__fill chart-bars__fill--leader"
                                    } else {
                                        "chart-bars__fill"
                                    },
                                    style: "{row.width_style}",
                                }
                            }
                            span { class: "chart-bars__count", "{row.count_text}" }
                        }
                    }
                }
            }
        }
    }
}
