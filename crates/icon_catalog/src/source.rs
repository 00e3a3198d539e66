//! Catalog transport contracts and lightweight test adapters.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`CatalogSource`].
pub type CatalogSourceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host transport that retrieves the raw catalog payload as text.
pub trait CatalogSource {
    /// Performs a GET against `url` and returns the response body.
    fn fetch_text<'a>(&'a self, url: &'a str) -> CatalogSourceFuture<'a, Result<String, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Catalog source for unsupported targets; every fetch fails.
pub struct NoopCatalogSource;

impl CatalogSource for NoopCatalogSource {
    fn fetch_text<'a>(&'a self, _url: &'a str) -> CatalogSourceFuture<'a, Result<String, String>> {
        Box::pin(async { Err("catalog fetch is unavailable on this host".to_string()) })
    }
}

#[derive(Debug, Clone)]
/// In-memory catalog source returning a fixed payload and counting requests.
pub struct MemoryCatalogSource {
    payload: Rc<Result<String, String>>,
    requests: Rc<Cell<usize>>,
}

impl MemoryCatalogSource {
    /// Creates a source that answers every request with `payload`.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: Rc::new(Ok(payload.into())),
            requests: Rc::default(),
        }
    }

    /// Creates a source whose requests fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            payload: Rc::new(Err(message.into())),
            requests: Rc::default(),
        }
    }

    /// Number of fetches issued so far.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn fetch_text<'a>(&'a self, _url: &'a str) -> CatalogSourceFuture<'a, Result<String, String>> {
        Box::pin(async move {
            self.requests.set(self.requests.get() + 1);
            (*self.payload).clone()
        })
    }
}
