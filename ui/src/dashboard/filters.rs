use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::core::session::DashboardSession;
use crate::t;

/// The two multi-select filters. Options come from the distinct values of
/// the *unfiltered* table, so deselecting everything still leaves every
/// option visible to re-select.
#[component]
pub fn FilterSidebar(session: Signal<DashboardSession>) -> Element {
    let snapshot = session();
    let Some(table) = snapshot.table() else {
        return rsx! {};
    };

    let regions = table.distinct_regions();
    let devices = table.distinct_devices();
    let selection = snapshot.selection().clone();

    let toggle_region = move |region: String| {
        let mut session = session;
        session.with_mut(|state| {
            let mut selection = state.selection().clone();
            selection.toggle_region(&region);
            state.on_filter_change(selection);
        });
    };
    let toggle_device = move |device: String| {
        let mut session = session;
        session.with_mut(|state| {
            let mut selection = state.selection().clone();
            selection.toggle_device(&device);
            state.on_filter_change(selection);
        });
    };

    rsx! {
        aside { class: "dashboard__sidebar",
            FilterGroup {
                title: t!("filter-region-label"),
                options: regions,
                selected: selection.regions.clone(),
                on_toggle: toggle_region,
            }
            FilterGroup {
                title: t!("filter-device-label"),
                options: devices,
                selected: selection.devices,
                on_toggle: toggle_device,
            }
        }
    }
}

#[component]
fn FilterGroup(
    title: String,
    options: Vec<String>,
    selected: BTreeSet<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "filter-group",
            h3 { class: "filter-group__title", "{title}" }
            ul { class: "filter-group__options",
                for option in options {
                    li { key: "{option}",
                        label { class: "filter-group__option",
                            input {
                                r#type: "checkbox",
                                checked: selected.contains(&option),
                                onchange: {
                                    let option = option.clone();
                                    move |_| on_toggle.call(option.clone())
                                },
                            }
                            span { "{option}" }
                        }
                    }
                }
            }
        }
    }
}
