//! Typed icon-catalog contracts and shared models used by the gallery runtime and browser adapters.
//!
//! This crate is the API-first boundary for the gallery's host services. It owns the catalog
//! models and parser, the memoized [`CatalogStore`], the CDN URL scheme for rendered SVG assets,
//! and the download/external-URL service traits. Concrete browser adapters live in
//! `icon_catalog_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod config;
pub mod download;
pub mod external_url;
pub mod services;
pub mod source;
pub mod store;
pub mod svg_url;

pub use catalog::{parse_catalog, CatalogError, IconMetadata, IconsResponse};
pub use config::{GalleryConfig, DEFAULT_METADATA_URL};
pub use download::{
    download_svg, AssetDownloadFuture, AssetDownloader, DownloadOutcome, MemoryAssetDownloader,
    NoopAssetDownloader,
};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use services::GalleryServices;
pub use source::{CatalogSource, CatalogSourceFuture, MemoryCatalogSource, NoopCatalogSource};
pub use store::CatalogStore;
pub use svg_url::{
    download_file_name, families_in_set, svg_url, IconAxes, IconSet, ASSET_HOST, DEFAULT_FAMILY,
    DEFAULT_FILL, DEFAULT_GRADE, DEFAULT_OPTICAL_SIZE, DEFAULT_WEIGHT,
};
