//! Blob-backed SVG download adapter.

use icon_catalog::{AssetDownloadFuture, AssetDownloader};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser downloader: fetches the asset into a `Blob` and clicks a temporary `download` link.
pub struct WebAssetDownloader;

impl AssetDownloader for WebAssetDownloader {
    fn save_url<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> AssetDownloadFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::save_url_as_file(url, file_name).await })
    }
}
