//! Shared transport interop for the browser bridge.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_text(url: &str) -> Result<String, String> {
    imp::fetch_text(url).await
}

pub async fn save_url_as_file(url: &str, file_name: &str) -> Result<(), String> {
    imp::save_url_as_file(url, file_name).await
}

pub async fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url).await
}
