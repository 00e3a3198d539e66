//! Host service bundle injected into the gallery runtime.

use std::rc::Rc;

use crate::{
    AssetDownloader, CatalogSource, CatalogStore, ExternalUrlService, GalleryConfig,
    NoopAssetDownloader, NoopCatalogSource, NoopExternalUrlService,
};

/// Runtime-selected service bundle handed to the gallery runtime.
///
/// Browser/native adapter selection happens before this bundle crosses into `gallery_runtime`,
/// which keeps the runtime decoupled from `web-sys` details.
#[derive(Clone)]
pub struct GalleryServices {
    /// Gallery tunables.
    pub config: GalleryConfig,
    /// Memoized metadata catalog.
    pub catalog: CatalogStore,
    /// File-save service for rendered SVGs.
    pub downloader: Rc<dyn AssetDownloader>,
    /// Fallback navigation service.
    pub external_urls: Rc<dyn ExternalUrlService>,
}

impl GalleryServices {
    /// Assembles a bundle whose catalog reads `config.metadata_url` through `source`.
    pub fn new(
        config: GalleryConfig,
        source: Rc<dyn CatalogSource>,
        downloader: Rc<dyn AssetDownloader>,
        external_urls: Rc<dyn ExternalUrlService>,
    ) -> Self {
        let catalog = CatalogStore::new(source, config.metadata_url.clone());
        Self {
            config,
            catalog,
            downloader,
            external_urls,
        }
    }

    /// Bundle of no-op adapters for hosts without a browser.
    pub fn noop(config: GalleryConfig) -> Self {
        Self::new(
            config,
            Rc::new(NoopCatalogSource),
            Rc::new(NoopAssetDownloader),
            Rc::new(NoopExternalUrlService),
        )
    }
}

impl std::fmt::Debug for GalleryServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryServices")
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
