use dioxus::prelude::*;

use crate::core::{aggregate::CategoryCount, format};
use crate::t;

use super::charts::{pie_slice_path, PALETTE};

#[component]
pub fn ChannelPie(data: Vec<CategoryCount>) -> Element {
    let total: u64 = data.iter().map(|entry| entry.count).sum();

    // One legend entry and one slice per channel, in ranking order.
    let mut cursor = 0.0;
    let slices: Vec<(f64, f64, &'static str)> = data
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let fraction = if total == 0 {
                0.0
            } else {
                entry.count as f64 / total as f64
            };
            let start = cursor;
            cursor += fraction;
            (start, cursor, PALETTE[index % PALETTE.len()])
        })
        .collect();

    let legend: Vec<(String, String, &'static str)> = data
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let share = format::format_percent(entry.count as f64 / total.max(1) as f64 * 100.0);
            let value = format!("{} · {share}", format::format_count(entry.count));
            (entry.label.clone(), value, PALETTE[index % PALETTE.len()])
        })
        .collect();

    rsx! {
        section { class: "dashboard-card chart-pie",
            div { class: "dashboard-card__header",
                h2 { {t!("section-channel")} }
                span { class: "dashboard-card__meta", {t!("channel-share-title")} }
            }

            if data.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                div { class: "chart-pie__layout",
                    svg {
                        class: "chart-pie__svg",
                        view_box: "0 0 200 200",
                        role: "img",
                        for (start, end, color) in slices {
                            if end - start >= 0.999 {
                                circle { cx: "100", cy: "100", r: "90", fill: "{color}" }
                            } else {
                                path {
                                    d: pie_slice_path(100.0, 100.0, 90.0, start, end),
                                    fill: "{color}",
                                    stroke: "#ffffff",
                                    stroke_width: "1",
                                }
                            }
                        }
                    }
                    ul { class: "chart-pie__legend",
                        for (label, value, color) in legend {
                            li { class: "chart-legend__item", key: "{label}",
                                span {
                                    class: "chart-legend__swatch",
                                    style: "background: {color}",
                                }
                                span { class: "chart-legend__label", "{label}" }
                                span { class: "chart-legend__value", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
