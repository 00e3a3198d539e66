//! Host-side runtime helpers for executing reducer effects and querying browser environment state.

use std::rc::Rc;

use icon_catalog::{download_svg, DownloadOutcome, GalleryConfig, GalleryServices};
use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{
    model::DEFAULT_VIEWPORT_WIDTH,
    reducer::{GalleryAction, RuntimeEffect},
};

#[derive(Clone)]
/// Host service bundle for gallery side effects.
pub struct GalleryHostContext {
    services: Rc<GalleryServices>,
}

impl GalleryHostContext {
    pub fn new(services: GalleryServices) -> Self {
        Self {
            services: Rc::new(services),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.services.config
    }

    /// Starts the one catalog load for this page view and reports the outcome to `dispatch`.
    pub fn install_catalog_boot(&self, dispatch: Callback<GalleryAction>) {
        let catalog = self.services.catalog.clone();
        create_effect(move |_| {
            let catalog = catalog.clone();
            spawn_local(async move {
                match catalog.load().await {
                    Ok(snapshot) => {
                        logging::log!(
                            "icon catalog loaded: {} icons, {} families",
                            snapshot.icons().len(),
                            snapshot.families().len()
                        );
                        dispatch.call(GalleryAction::CatalogLoaded { catalog: snapshot });
                    }
                    Err(err) => {
                        logging::warn!("icon catalog load failed: {err}");
                        dispatch.call(GalleryAction::CatalogFailed {
                            message: err.to_string(),
                        });
                    }
                }
            });
        });
    }

    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::DownloadSvg { url, file_name } => self.download(url, file_name),
        }
    }

    fn download(&self, url: String, file_name: String) {
        let services = self.services.clone();
        spawn_local(async move {
            let outcome = download_svg(
                services.downloader.as_ref(),
                services.external_urls.as_ref(),
                &url,
                &file_name,
            )
            .await;
            match outcome {
                DownloadOutcome::Saved => {}
                DownloadOutcome::OpenedExternally { save_error } => {
                    logging::warn!("download of `{url}` failed, opened directly: {save_error}");
                }
                DownloadOutcome::Failed {
                    save_error,
                    open_error,
                } => {
                    logging::warn!(
                        "download of `{url}` failed ({save_error}) and opening it failed ({open_error})"
                    );
                }
            }
        });
    }

    /// Current viewport width in CSS pixels.
    pub fn viewport_width(&self) -> u32 {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(width) = leptos::window()
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
            {
                return width.max(0.0) as u32;
            }
        }
        DEFAULT_VIEWPORT_WIDTH
    }

    /// Keeps the reducer's viewport width in sync with window resizes.
    pub fn install_viewport_listener(&self, dispatch: Callback<GalleryAction>) {
        dispatch.call(GalleryAction::SetViewportWidth {
            width: self.viewport_width(),
        });
        #[cfg(target_arch = "wasm32")]
        {
            let host = self.clone();
            let resize_listener = leptos::window_event_listener(leptos::ev::resize, move |_| {
                dispatch.call(GalleryAction::SetViewportWidth {
                    width: host.viewport_width(),
                });
            });
            leptos::on_cleanup(move || resize_listener.remove());
        }
    }
}

/// Returns whether `text` differs from the last value seen by the search input, so repeated
/// identical values never restart the debounce window.
pub fn is_new_search(previous: Option<&str>, text: &str) -> bool {
    previous != Some(text)
}

/// Applies search text after a quiet period; a newer keystroke cancels the pending one.
///
/// Off-browser there is no timer, so text is applied immediately.
pub struct SearchDebouncer {
    #[cfg(target_arch = "wasm32")]
    pending: std::cell::RefCell<Option<gloo_timers::callback::Timeout>>,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    delay_ms: u32,
    dispatch: Callback<GalleryAction>,
}

impl SearchDebouncer {
    pub fn new(delay_ms: u32, dispatch: Callback<GalleryAction>) -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            pending: std::cell::RefCell::new(None),
            delay_ms,
            dispatch,
        }
    }

    pub fn schedule(&self, text: String) {
        let dispatch = self.dispatch;
        #[cfg(target_arch = "wasm32")]
        {
            if self.delay_ms > 0 {
                let timeout = gloo_timers::callback::Timeout::new(self.delay_ms, move || {
                    dispatch.call(GalleryAction::SetSearch { text });
                });
                // Dropping the previous timeout cancels it.
                self.pending.replace(Some(timeout));
                return;
            }
        }
        dispatch.call(GalleryAction::SetSearch { text });
    }
}
