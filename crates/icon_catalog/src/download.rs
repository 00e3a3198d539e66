//! SVG download contracts and the save-or-open fallback flow.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use crate::ExternalUrlService;

/// Object-safe boxed future used by [`AssetDownloader`].
pub type AssetDownloadFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that fetches an asset and hands it to the user as a saved file.
pub trait AssetDownloader {
    /// Fetches `url` and saves the body under `file_name`.
    fn save_url<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> AssetDownloadFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Downloader for unsupported targets; every save fails so callers fall back.
pub struct NoopAssetDownloader;

impl AssetDownloader for NoopAssetDownloader {
    fn save_url<'a>(
        &'a self,
        _url: &'a str,
        _file_name: &'a str,
    ) -> AssetDownloadFuture<'a, Result<(), String>> {
        Box::pin(async { Err("asset download is unavailable on this host".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Recording downloader used by tests; fails every save when constructed with [`Self::failing`].
pub struct MemoryAssetDownloader {
    saved: Rc<RefCell<Vec<(String, String)>>>,
    failure: Option<String>,
}

impl MemoryAssetDownloader {
    /// Creates a downloader whose saves fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            saved: Rc::default(),
            failure: Some(message.into()),
        }
    }

    /// `(url, file_name)` pairs saved so far.
    pub fn saved(&self) -> Vec<(String, String)> {
        self.saved.borrow().clone()
    }
}

impl AssetDownloader for MemoryAssetDownloader {
    fn save_url<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> AssetDownloadFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if let Some(message) = &self.failure {
                return Err(message.clone());
            }
            self.saved
                .borrow_mut()
                .push((url.to_string(), file_name.to_string()));
            Ok(())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How a download request was ultimately served.
pub enum DownloadOutcome {
    /// The asset was fetched and saved as a file.
    Saved,
    /// Saving failed and the asset URL was opened directly instead.
    OpenedExternally {
        /// Why the save failed.
        save_error: String,
    },
    /// Both the save and the fallback navigation failed.
    Failed {
        /// Why the save failed.
        save_error: String,
        /// Why opening the URL failed.
        open_error: String,
    },
}

/// Saves the asset at `url` as `file_name`, opening the URL directly when the save fails.
pub async fn download_svg<D, E>(
    downloader: &D,
    external_urls: &E,
    url: &str,
    file_name: &str,
) -> DownloadOutcome
where
    D: AssetDownloader + ?Sized,
    E: ExternalUrlService + ?Sized,
{
    let save_error = match downloader.save_url(url, file_name).await {
        Ok(()) => return DownloadOutcome::Saved,
        Err(err) => err,
    };
    match external_urls.open_url(url).await {
        Ok(()) => DownloadOutcome::OpenedExternally { save_error },
        Err(open_error) => DownloadOutcome::Failed {
            save_error,
            open_error,
        },
    }
}
