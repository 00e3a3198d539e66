//! Leptos runtime for the icon gallery: reducer-driven view state, the filter/sort pipeline,
//! virtualized row layout, and the gallery UI components.

pub mod components;
mod effect_executor;
mod host;
pub mod model;
pub mod pipeline;
pub mod reducer;
pub mod rows;
mod runtime_context;

pub use components::{use_gallery_runtime, GalleryProvider, GalleryRuntimeContext, GalleryShell};
pub use model::*;
pub use pipeline::{filter_icons, matches_search, IconQuery};
pub use reducer::{reduce_gallery, GalleryAction, ReducerError, RuntimeEffect};
pub use rows::{
    breakpoint_for_width, columns_for_width, group_rows, visible_row_range, Breakpoint,
    BREAKPOINTS,
};
