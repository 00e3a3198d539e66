use std::rc::Rc;

use icon_catalog::{GalleryConfig, GalleryServices};

use crate::{WebAssetDownloader, WebCatalogSource, WebExternalUrlService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for gallery service adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from this crate.
    Browser,
    /// No-op adapters for offline previews and native builds of the UI.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Builds the service bundle for the selected host strategy.
pub fn build_gallery_services(config: GalleryConfig) -> GalleryServices {
    match selected_host_strategy() {
        HostStrategy::Browser => GalleryServices::new(
            config,
            Rc::new(WebCatalogSource),
            Rc::new(WebAssetDownloader),
            Rc::new(WebExternalUrlService),
        ),
        HostStrategy::Stub => GalleryServices::noop(config),
    }
}
