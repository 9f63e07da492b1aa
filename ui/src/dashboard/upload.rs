use dioxus::prelude::*;

use crate::core::session::DashboardSession;
use crate::t;

/// The upload control. Reading the picked file is the one async step in the
/// whole pipeline; the session handler runs synchronously once the bytes
/// arrive.
#[component]
pub fn UploadCard(session: Signal<DashboardSession>) -> Element {
    let snapshot = session();
    let loaded = snapshot
        .table()
        .map(|table| (snapshot.source().unwrap_or("upload").to_string(), table.len()));

    rsx! {
        section { class: "dashboard-card upload-card",
            div { class: "dashboard-card__header",
                h2 { {t!("upload-label")} }
            }

            label { class: "upload-card__control",
                input {
                    r#type: "file",
                    accept: ".csv",
                    class: "upload-card__input",
                    onchange: move |evt| {
                        let mut session = session;
                        async move {
                            if let Some(file_engine) = evt.files() {
                                for name in file_engine.files() {
                                    if let Some(bytes) = file_engine.read_file(&name).await {
                                        session.with_mut(|state| state.on_upload(&name, &bytes));
                                    }
                                }
                            }
                        }
                    },
                }
            }

            if let Some((source, rows)) = loaded {
                p { class: "upload-card__meta", "{source} · {rows} rows" }
            } else {
                p { class: "dashboard-card__placeholder", {t!("upload-prompt")} }
            }
        }
    }
}
