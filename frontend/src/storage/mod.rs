//! Browser wiring of the queue cache: `window.localStorage` as the backend
//! and the developer console as the diagnostics sink.

use std::ops::Deref;
use std::rc::Rc;

use common::cache::{CacheDiagnostics, CacheError, KeyValueStorage, QueueCache, StorageError};

use crate::helpers::js_error_message;

/// `window.localStorage`, looked up on every call so a storage disabled by
/// the user surfaces as an error instead of a panic.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(js_error_message(&e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(js_error_message(&e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::local()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(js_error_message(&e)))
    }
}

/// Writes cache failures to the browser console.
#[derive(Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

impl CacheDiagnostics for ConsoleDiagnostics {
    fn report(&self, error: &CacheError) {
        gloo_console::warn!(format!("queue cache {}: {}", error.code(), error));
    }
}

pub type DashboardCache = QueueCache<BrowserStorage, ConsoleDiagnostics>;

/// Shared handle to the one cache instance, passed down as a prop.
#[derive(Clone)]
pub struct CacheHandle(Rc<DashboardCache>);

impl CacheHandle {
    pub fn browser() -> Self {
        Self(Rc::new(QueueCache::with_diagnostics(
            BrowserStorage,
            ConsoleDiagnostics,
        )))
    }
}

impl PartialEq for CacheHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for CacheHandle {
    type Target = DashboardCache;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
