use dioxus::prelude::*;

use crate::core::session::DashboardSession;
use crate::dashboard::{
    ChannelPie, ConversionTile, ExportPanel, FilterSidebar, HourlyVisitsLine, TopProductsBar,
    UploadCard, VisitHeatmap,
};
use crate::t;

/// The dashboard page. One session signal owns the uploaded table and the
/// filter selection; every interaction re-runs the whole
/// filter → aggregate → render pipeline against it.
#[component]
pub fn Dashboard() -> Element {
    let session = use_signal(DashboardSession::new);
    let snapshot = session();
    let error = snapshot.error().map(str::to_string);
    let aggregates = snapshot.aggregates();

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }

            UploadCard { session }

            if let Some(message) = error {
                div { class: "dashboard-card__error", "⚠️ {message}" }
            }

            if let Some(aggregates) = aggregates {
                div { class: "dashboard__grid",
                    FilterSidebar { session }

                    div { class: "dashboard__charts",
                        ChannelPie { data: aggregates.channel_distribution.clone() }
                        HourlyVisitsLine { data: aggregates.hourly_visits.clone() }
                        TopProductsBar { data: aggregates.top_products.clone() }
                        ConversionTile {
                            rate: aggregates.conversion_rate,
                            total_rows: aggregates.total_rows,
                        }
                        VisitHeatmap { matrix: aggregates.weekday_hour.clone() }
                        ExportPanel { session }
                    }
                }
            }
        }
    }
}
