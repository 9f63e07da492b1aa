use dioxus::prelude::*;

use crate::core::format;
use crate::t;

/// The single-number conversion metric.
#[component]
pub fn ConversionTile(rate: f64, total_rows: usize) -> Element {
    let value = format::format_percent(rate);

    rsx! {
        section { class: "dashboard-card metric-tile",
            div { class: "dashboard-card__header",
                h2 { {t!("section-conversion")} }
            }

            div { class: "metric-tile__body",
                span { class: "metric-tile__label", {t!("conversion-label")} }
                strong { class: "metric-tile__value", "{value}" }
                span { class: "metric-tile__meta", "{total_rows} rows in view" }
            }
        }
    }
}
