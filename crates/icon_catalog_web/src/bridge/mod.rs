//! Browser capability bridge for `icon_catalog_web` service adapters.
//!
//! Calls are routed through `interop`, which selects the `web-sys` implementation on `wasm32`
//! and an unsupported-host shim elsewhere.

mod interop;

pub async fn fetch_text(url: &str) -> Result<String, String> {
    interop::fetch_text(url).await
}

pub async fn save_url_as_file(url: &str, file_name: &str) -> Result<(), String> {
    interop::save_url_as_file(url, file_name).await
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    interop::open_external_url(url).await
}
