//! Runtime provider and context wiring for the gallery.
//!
//! This module owns the reducer container, the runtime effect queue, the derived
//! filter/sort/row memos, and host bootstrap wiring. UI composition stays in
//! [`crate::components`].

use icon_catalog::{GalleryServices, IconMetadata};
use leptos::*;

use crate::{
    effect_executor,
    host::{is_new_search, GalleryHostContext, SearchDebouncer},
    model::{CatalogSnapshot, GalleryState},
    pipeline::{filter_icons, IconQuery},
    reducer::{reduce_gallery, GalleryAction, RuntimeEffect},
    rows::{columns_for_width, group_rows},
};

#[derive(Clone, Copy)]
/// Leptos context for reading gallery state and dispatching [`GalleryAction`] values.
pub struct GalleryRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<GalleryHostContext>,
    /// Reactive gallery state signal.
    pub state: RwSignal<GalleryState>,
    /// Queue of runtime effects emitted by the reducer.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Live search box contents, applied to `state` after the debounce window.
    pub search_input: RwSignal<String>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<GalleryAction>,
    /// Icons passing the current query, in display order.
    pub visible_icons: Memo<Vec<IconMetadata>>,
    /// Current grid column count.
    pub columns: Memo<usize>,
    /// `visible_icons` grouped into grid rows.
    pub rows: Memo<Vec<Vec<IconMetadata>>>,
}

impl GalleryRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: GalleryAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: GalleryRuntimeContext) {
    let host = runtime.host.get_value();
    host.install_catalog_boot(runtime.dispatch);
    host.install_viewport_listener(runtime.dispatch);
    install_search_debounce(runtime, host.config().search_debounce_ms);
    effect_executor::install(runtime);
}

fn install_search_debounce(runtime: GalleryRuntimeContext, delay_ms: u32) {
    let debouncer = store_value(SearchDebouncer::new(delay_ms, runtime.dispatch));
    create_effect(move |previous: Option<String>| {
        let text = runtime.search_input.get();
        if is_new_search(previous.as_deref(), &text) {
            debouncer.with_value(|debouncer| debouncer.schedule(text.clone()));
        }
        text
    });
}

#[component]
/// Provides [`GalleryRuntimeContext`] to descendant components and starts the catalog load.
pub fn GalleryProvider(
    /// Injected browser or stub service bundle assembled by the entry layer.
    services: GalleryServices,
    /// Search text to start with, e.g. from a `?q=` link.
    #[prop(default = String::new(), into)]
    initial_search: String,
    children: Children,
) -> impl IntoView {
    let mut initial_state = GalleryState::new(&services.config.default_family);
    initial_state.search = initial_search.clone();

    let host = store_value(GalleryHostContext::new(services));
    let state = create_rw_signal(initial_state);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let search_input = create_rw_signal(initial_search);

    let dispatch = Callback::new(move |action: GalleryAction| {
        let mut next = state.get_untracked();
        match reduce_gallery(&mut next, action) {
            Ok(new_effects) => {
                if next != state.get_untracked() {
                    state.set(next);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("gallery reducer error: {err}"),
        }
    });

    // Each memo only re-runs when its own inputs change, so axis, selection, and viewport
    // updates do not re-filter the catalog.
    let catalog = create_memo(move |_| state.with(|s| s.catalog.snapshot().cloned()));
    let query = create_memo(move |_| state.with(GalleryState::query));
    let visible_icons = create_memo(move |_| {
        catalog.with(|catalog: &Option<CatalogSnapshot>| match catalog {
            Some(catalog) => query.with(|query: &IconQuery| {
                filter_icons(catalog.icons(), query)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            }),
            None => Vec::new(),
        })
    });
    let columns = create_memo(move |_| state.with(|s| columns_for_width(s.viewport_width)));
    let rows = create_memo(move |_| {
        let columns = columns.get();
        visible_icons.with(|icons| group_rows(icons, columns))
    });

    let runtime = GalleryRuntimeContext {
        host,
        state,
        effects,
        search_input,
        dispatch,
        visible_icons,
        columns,
        rows,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`GalleryRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`GalleryProvider`].
pub fn use_gallery_runtime() -> GalleryRuntimeContext {
    use_context::<GalleryRuntimeContext>().expect("GalleryRuntimeContext not provided")
}
