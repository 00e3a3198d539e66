//! Browser (`wasm32`) implementations of [`icon_catalog`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for catalog fetches, SVG downloads,
//! and new-tab navigation. Transport glue lives under `bridge/`, with a
//! non-wasm shim so the adapters still build and test natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Target-selected adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod catalog;
pub mod download;
pub mod external_url;

pub use adapters::{build_gallery_services, host_strategy_name};
pub use catalog::WebCatalogSource;
pub use download::WebAssetDownloader;
pub use external_url::WebExternalUrlService;
