use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::core::export::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use crate::core::session::DashboardSession;
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// Download panel for the filtered table. The CSV bytes come straight from
/// the session; this component only delivers them to the platform.
#[component]
pub fn ExportPanel(session: Signal<DashboardSession>) -> Element {
    let snapshot = session();
    let filtered_rows = snapshot
        .filtered_table()
        .map(|table| table.len())
        .unwrap_or(0);
    let total_rows = snapshot.table().map(|table| table.len()).unwrap_or(0);

    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some((
            "dashboard-card__meta".to_string(),
            "Preparing CSV…".to_string(),
        )),
        ExportStatus::Done(message) => Some((
            "dashboard-card__meta dashboard-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let csv_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            busy_signal.set(true);
            status_signal.set(ExportStatus::Working);

            let bytes = match session.with(|state| state.export_csv()) {
                Some(Ok(bytes)) => bytes,
                Some(Err(err)) => {
                    status_signal.set(ExportStatus::Error(err.to_string()));
                    busy_signal.set(false);
                    return;
                }
                None => {
                    status_signal.set(ExportStatus::Error("Upload a CSV first".to_string()));
                    busy_signal.set(false);
                    return;
                }
            };

            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                let mut busy_signal = busy_signal;
                platform::spawn_future(async move {
                    match download_bytes(EXPORT_FILE_NAME, EXPORT_MIME_TYPE, bytes).await {
                        Ok(Some(path)) => {
                            status_signal.set(ExportStatus::Done(format!("CSV saved to {path}")))
                        }
                        Ok(None) => {
                            status_signal.set(ExportStatus::Done("CSV download started".to_string()))
                        }
                        Err(err) => status_signal.set(ExportStatus::Error(err)),
                    }
                    busy_signal.set(false);
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let outcome = futures::executor::block_on(download_bytes(
                    EXPORT_FILE_NAME,
                    EXPORT_MIME_TYPE,
                    bytes,
                ));
                match outcome {
                    Ok(Some(path)) => {
                        status_signal.set(ExportStatus::Done(format!("CSV saved to {path}")))
                    }
                    Ok(None) => {
                        status_signal.set(ExportStatus::Done("CSV download started".to_string()))
                    }
                    Err(err) => status_signal.set(ExportStatus::Error(err)),
                }
                busy_signal.set(false);
            }
        }
    };

    rsx! {
        section { class: "dashboard-card export-panel",
            div { class: "dashboard-card__header",
                h2 { {t!("export-title")} }
            }

            ul { class: "export-panel__summary",
                li { strong { "{filtered_rows}" } " rows in the filtered view" }
                li { strong { "{total_rows}" } " rows uploaded" }
            }

            div { class: "export-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: csv_handler,
                    {t!("export-button")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

/// Deliver the bytes: a Blob-backed anchor click on the web, a file under
/// the platform data dir on desktop. Returns the written path when there is
/// one to show.
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Clickview", "Clickview")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}
