use gallery_runtime::{GalleryProvider, GalleryShell};
use icon_catalog::GalleryConfig;
use icon_catalog_web::{build_gallery_services, host_strategy_name};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

/// Gallery configuration for this build; `ICON_GALLERY_METADATA_URL` at compile time overrides
/// the metadata endpoint.
pub fn gallery_config() -> GalleryConfig {
    let config = GalleryConfig::default();
    match option_env!("ICON_GALLERY_METADATA_URL") {
        Some(url) if !url.trim().is_empty() => config.with_metadata_url(url.trim()),
        _ => config,
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Material Icons" />
        <Meta name="description" content="Browse, search, and download Material Icons and Material Symbols." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=GalleryEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn GalleryEntry() -> impl IntoView {
    let query = use_query_map();
    let initial_search = query.with_untracked(|map| map.get("q").cloned().unwrap_or_default());

    let config = gallery_config();
    logging::log!(
        "icon gallery host strategy: {} (metadata: {})",
        host_strategy_name(),
        config.metadata_url
    );
    let services = build_gallery_services(config);

    view! {
        <GalleryProvider services=services initial_search=initial_search>
            <GalleryShell />
        </GalleryProvider>
    }
}

#[cfg(test)]
mod tests {
    use icon_catalog::DEFAULT_METADATA_URL;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn config_uses_build_time_metadata_override_when_present() {
        let config = gallery_config();
        match option_env!("ICON_GALLERY_METADATA_URL") {
            Some(url) if !url.trim().is_empty() => assert_eq!(config.metadata_url, url.trim()),
            _ => assert_eq!(config.metadata_url, DEFAULT_METADATA_URL),
        }
    }
}
