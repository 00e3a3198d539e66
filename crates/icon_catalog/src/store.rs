//! Session-scoped memoized catalog store.

use std::{cell::RefCell, rc::Rc};

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::{parse_catalog, CatalogError, CatalogSource, IconMetadata, IconsResponse};

type CatalogLoad = Shared<LocalBoxFuture<'static, Result<Rc<IconsResponse>, CatalogError>>>;

enum Slot {
    Idle,
    Loading(CatalogLoad),
    Ready(Rc<IconsResponse>),
}

/// Fetches the metadata catalog once and shares the parsed snapshot with every caller.
///
/// Callers that arrive while a fetch is in flight await the same request. A successful result is
/// kept for the lifetime of the store; a failed one is handed to every waiter and then dropped,
/// so only an explicit later [`CatalogStore::load`] goes back to the network.
#[derive(Clone)]
pub struct CatalogStore {
    source: Rc<dyn CatalogSource>,
    metadata_url: Rc<str>,
    slot: Rc<RefCell<Slot>>,
}

impl CatalogStore {
    /// Creates a store that reads the catalog from `metadata_url` through `source`.
    pub fn new(source: Rc<dyn CatalogSource>, metadata_url: impl Into<String>) -> Self {
        Self {
            source,
            metadata_url: Rc::from(metadata_url.into()),
            slot: Rc::new(RefCell::new(Slot::Idle)),
        }
    }

    /// Endpoint the catalog is read from.
    pub fn metadata_url(&self) -> &str {
        &self.metadata_url
    }

    /// Returns the snapshot when it has already been loaded.
    pub fn cached(&self) -> Option<Rc<IconsResponse>> {
        match &*self.slot.borrow() {
            Slot::Ready(catalog) => Some(Rc::clone(catalog)),
            Slot::Idle | Slot::Loading(_) => None,
        }
    }

    /// Returns the shared catalog snapshot, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Returns the transport or parse error of the request this call joined.
    pub async fn load(&self) -> Result<Rc<IconsResponse>, CatalogError> {
        let pending = {
            let mut slot = self.slot.borrow_mut();
            match &*slot {
                Slot::Ready(catalog) => return Ok(Rc::clone(catalog)),
                Slot::Loading(pending) => pending.clone(),
                Slot::Idle => {
                    let pending = self.start_fetch();
                    *slot = Slot::Loading(pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;

        let mut slot = self.slot.borrow_mut();
        let still_current = matches!(&*slot, Slot::Loading(current) if current.ptr_eq(&pending));
        if still_current {
            *slot = match &result {
                Ok(catalog) => Slot::Ready(Rc::clone(catalog)),
                Err(_) => Slot::Idle,
            };
        }
        result
    }

    /// Loads the catalog and returns its icon entries.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogStore::load`] failures.
    pub async fn icons(&self) -> Result<Vec<IconMetadata>, CatalogError> {
        Ok(self.load().await?.icons().to_vec())
    }

    /// Loads the catalog and returns its font families.
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogStore::load`] failures.
    pub async fn families(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.load().await?.families().to_vec())
    }

    /// Loads the catalog and returns its categories (empty when the payload omits them).
    ///
    /// # Errors
    ///
    /// Propagates [`CatalogStore::load`] failures.
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.load().await?.categories().to_vec())
    }

    fn start_fetch(&self) -> CatalogLoad {
        let source = Rc::clone(&self.source);
        let url = Rc::clone(&self.metadata_url);
        async move {
            let raw = source.fetch_text(&url).await.map_err(CatalogError::Fetch)?;
            parse_catalog(&raw).map(Rc::new)
        }
        .boxed_local()
        .shared()
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &*self.slot.borrow() {
            Slot::Idle => "idle",
            Slot::Loading(_) => "loading",
            Slot::Ready(_) => "ready",
        };
        f.debug_struct("CatalogStore")
            .field("metadata_url", &self.metadata_url)
            .field("state", &state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::{channel::oneshot, executor::block_on};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CatalogSourceFuture, MemoryCatalogSource};

    const PAYLOAD: &str = r#")]}'
{"families":["Material Icons"],"icons":[{"name":"home","popularity":10}],"categories":["action"]}"#;

    fn store_with(source: &MemoryCatalogSource) -> CatalogStore {
        CatalogStore::new(Rc::new(source.clone()), "/metadata/icons")
    }

    #[test]
    fn repeated_loads_issue_a_single_request() {
        let source = MemoryCatalogSource::new(PAYLOAD);
        let store = store_with(&source);

        let first = block_on(store.load()).expect("first load");
        let second = block_on(store.load()).expect("second load");

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(source.request_count(), 1);
        assert_eq!(block_on(store.families()).expect("families"), ["Material Icons"]);
        assert_eq!(block_on(store.categories()).expect("categories"), ["action"]);
        assert_eq!(block_on(store.icons()).expect("icons").len(), 1);
        assert_eq!(source.request_count(), 1);
    }

    #[test]
    fn cached_is_empty_until_loaded() {
        let source = MemoryCatalogSource::new(PAYLOAD);
        let store = store_with(&source);
        assert!(store.cached().is_none());
        block_on(store.load()).expect("load");
        assert!(store.cached().is_some());
    }

    #[test]
    fn clones_share_the_same_snapshot() {
        let source = MemoryCatalogSource::new(PAYLOAD);
        let store = store_with(&source);
        let other = store.clone();
        block_on(store.load()).expect("load");
        assert!(other.cached().is_some());
        block_on(other.load()).expect("load");
        assert_eq!(source.request_count(), 1);
    }

    #[test]
    fn fetch_failures_propagate_and_are_not_cached() {
        let source = MemoryCatalogSource::failing("connection reset");
        let store = store_with(&source);

        assert_eq!(
            block_on(store.load()),
            Err(CatalogError::Fetch("connection reset".to_string()))
        );
        assert!(store.cached().is_none());
        assert!(block_on(store.load()).is_err());
        assert_eq!(source.request_count(), 2);
    }

    #[test]
    fn parse_failures_propagate() {
        let source = MemoryCatalogSource::new("<html>502</html>");
        let store = store_with(&source);
        assert_eq!(block_on(store.load()), Err(CatalogError::MissingPayload));
    }

    struct GatedSource {
        gate: RefCell<Option<oneshot::Receiver<String>>>,
        requests: Cell<usize>,
    }

    impl CatalogSource for GatedSource {
        fn fetch_text<'a>(
            &'a self,
            _url: &'a str,
        ) -> CatalogSourceFuture<'a, Result<String, String>> {
            self.requests.set(self.requests.get() + 1);
            let gate = self.gate.borrow_mut().take();
            Box::pin(async move {
                match gate {
                    Some(rx) => rx.await.map_err(|e| e.to_string()),
                    None => Err("gate already consumed".to_string()),
                }
            })
        }
    }

    #[test]
    fn concurrent_loads_join_the_in_flight_request() {
        let (tx, rx) = oneshot::channel();
        let source = Rc::new(GatedSource {
            gate: RefCell::new(Some(rx)),
            requests: Cell::new(0),
        });
        let store = CatalogStore::new(source.clone(), "/metadata/icons");

        let (first, second, ()) = block_on(async {
            futures::join!(store.load(), store.load(), async {
                tx.send(PAYLOAD.to_string()).expect("send payload");
            })
        });

        let first = first.expect("first");
        let second = second.expect("second");
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(source.requests.get(), 1);
    }
}
