use dioxus::prelude::*;

use crate::core::format;
use crate::t;

use super::charts::{line_points, polyline_points, LINE_COLOR};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 32.0;

/// Visits per observed hour. Hours nobody visited in don't get synthetic
/// zero points; the line simply spans the observed range.
#[component]
pub fn HourlyVisitsLine(data: Vec<(u8, u64)>) -> Element {
    let points = line_points(&data, WIDTH, HEIGHT, PAD);
    let path = polyline_points(&points);
    let max_count = data.iter().map(|(_, count)| *count).max().unwrap_or(0);

    let markers: Vec<(String, String, String)> = data
        .iter()
        .zip(points.iter())
        .map(|((hour, _), (x, y))| (format!("{x:.1}"), format!("{y:.1}"), format::format_hour(*hour)))
        .collect();
    let tick_y = HEIGHT - PAD + 18.0;
    let baseline_y = HEIGHT - PAD;
    let baseline_right = WIDTH - PAD;
    let max_label_y = PAD - 12.0;

    rsx! {
        section { class: "dashboard-card chart-line",
            div { class: "dashboard-card__header",
                h2 { {t!("section-hourly")} }
                span { class: "dashboard-card__meta", {t!("axis-hour")} " / " {t!("axis-visits")} }
            }

            if data.is_empty() {
                p { class: "dashboard-card__placeholder", "No rows match the current filters." }
            } else {
                svg {
                    class: "chart-line__svg",
                    view_box: "0 0 640 240",
                    role: "img",
                    line {
                        x1: "{PAD}",
                        y1: "{baseline_y}",
                        x2: "{baseline_right}",
                        y2: "{baseline_y}",
                        class: "chart-line__axis",
                    }
                    text {
                        x: "{PAD}",
                        y: "{max_label_y}",
                        class: "chart-line__tick",
                        "max {max_count}"
                    }
                    polyline {
                        points: "{path}",
                        fill: "none",
                        stroke: LINE_COLOR,
                        stroke_width: "2",
                    }
                    for (x, y, label) in markers {
                        circle { cx: "{x}", cy: "{y}", r: "3", fill: LINE_COLOR }
                        text {
                            x: "{x}",
                            y: "{tick_y}",
                            class: "chart-line__tick",
                            text_anchor: "middle",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
