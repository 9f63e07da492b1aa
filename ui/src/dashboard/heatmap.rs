use dioxus::prelude::*;

use crate::core::aggregate::WeekdayHourMatrix;
use crate::t;

use super::charts::heat_color;

const LABEL_W: f64 = 86.0;
const CELL: f64 = 22.0;
const GAP: f64 = 2.0;
const TOP: f64 = 8.0;

/// Dense weekday×hour grid. Every one of the 7×24 cells is drawn; zero
/// counts sit at the low end of the ramp.
#[component]
pub fn VisitHeatmap(matrix: WeekdayHourMatrix) -> Element {
    let width = LABEL_W + 24.0 * (CELL + GAP);
    let tick_y = TOP + 7.0 * (CELL + GAP) + 14.0;
    let height = tick_y + 6.0;
    let view_box = format!("0 0 {width:.0} {height:.0}");

    let ticks: Vec<(String, String)> = (0..24u8)
        .step_by(3)
        .map(|hour| {
            let x = LABEL_W + hour as f64 * (CELL + GAP) + CELL / 2.0;
            (format!("{x:.1}"), format!("{hour:02}"))
        })
        .collect();

    rsx! {
        section { class: "dashboard-card chart-heatmap",
            div { class: "dashboard-card__header",
                h2 { {t!("section-heatmap")} }
            }

            svg {
                class: "chart-heatmap__svg",
                view_box: "{view_box}",
                role: "img",
                {heatmap_grid(&matrix)}
                for (x, label) in ticks {
                    text {
                        x: "{x}",
                        y: "{tick_y}",
                        class: "chart-heatmap__tick",
                        text_anchor: "middle",
                        "{label}"
                    }
                }
            }
        }
    }
}

fn heatmap_grid(matrix: &WeekdayHourMatrix) -> Element {
    let max = matrix.max();

    rsx! {
        {matrix.rows().enumerate().map(|(row, (weekday, counts))| {
            let y = TOP + row as f64 * (CELL + GAP);
            let label_y = y + CELL / 2.0 + 4.0;
            let label = weekday.to_string();

            rsx! {
                text {
                    x: "4",
                    y: "{label_y}",
                    class: "chart-heatmap__row-label",
                    "{label}"
                }
                {counts.iter().enumerate().map(|(hour, count)| {
                    let x = LABEL_W + hour as f64 * (CELL + GAP);
                    let fill = heat_color(*count, max);
                    rsx! {
                        rect {
                            x: "{x}",
                            y: "{y}",
                            width: "{CELL}",
                            height: "{CELL}",
                            rx: "2",
                            fill: "{fill}",
                        }
                    }
                })}
            }
        })}
    }
}
