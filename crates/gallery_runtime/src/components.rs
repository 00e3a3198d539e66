//! Gallery UI composition: toolbar, virtualized icon grid, and details panel.

mod details;
mod grid;
mod toolbar;

use leptos::*;

use self::{details::DetailsPanel, grid::IconGrid, toolbar::GalleryToolbar};

pub use crate::runtime_context::{use_gallery_runtime, GalleryProvider, GalleryRuntimeContext};

#[component]
fn CatalogStatusBanner() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let state = runtime.state;
    let loading = create_memo(move |_| state.with(|s| s.catalog.is_loading()));
    let error = create_memo(move |_| state.with(|s| s.catalog.error().map(str::to_string)));

    view! {
        <Show when=move || loading.get() fallback=|| ()>
            <div data-ui-slot="catalog-status" role="status" aria-live="polite">
                "Loading icons..."
            </div>
        </Show>
        {move || {
            error
                .get()
                .map(|message| {
                    view! {
                        <div data-ui-slot="catalog-status" data-ui-state="error" role="alert">
                            {format!("Icons could not be loaded: {message}")}
                        </div>
                    }
                })
        }}
    }
}

#[component]
/// Top-level gallery surface; must be rendered inside [`GalleryProvider`].
pub fn GalleryShell() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let has_selection = create_memo(move |_| runtime.state.with(|s| s.selected_icon.is_some()));

    view! {
        <div data-ui-slot="gallery-shell" data-ui-selection=move || has_selection.get().to_string()>
            <GalleryToolbar />
            <CatalogStatusBanner />
            <div data-ui-slot="gallery-body">
                <IconGrid />
                <Show when=move || has_selection.get() fallback=|| ()>
                    <DetailsPanel />
                </Show>
            </div>
        </div>
    }
}
