//! Platform glue for async work kicked off by UI handlers.

/// Run a future to completion in the browser's event loop. The native
/// export path blocks in place instead (see `dashboard/export.rs`).
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
