//! Fetch-backed catalog transport.

use icon_catalog::{CatalogSource, CatalogSourceFuture};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser catalog source backed by `window.fetch`.
pub struct WebCatalogSource;

impl CatalogSource for WebCatalogSource {
    fn fetch_text<'a>(&'a self, url: &'a str) -> CatalogSourceFuture<'a, Result<String, String>> {
        Box::pin(async move { bridge::fetch_text(url).await })
    }
}
