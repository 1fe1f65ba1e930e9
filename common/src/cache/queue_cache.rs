//! Client-side record of queues created through the dashboard.
//!
//! The exchange listing endpoint does not reliably return queues, so every
//! queue created or deleted from the dashboard is mirrored here, keyed by
//! exchange id, and laid over the listing with
//! [`QueueCache::merge_into_exchange_list`]. The whole mapping lives under a
//! single storage key as `{ "<exchange id>": [queue, ...] }`.
//!
//! The cache is best effort. Read and write failures go to the injected
//! [`CacheDiagnostics`] and the operation degrades to an empty result or a
//! no-op; callers keep their own in-memory state and never see an error.
//! Records that do not decode as queues are skipped on reads but written
//! back as they were, so another client's entries are never lost.
//! Each operation is a synchronous read-modify-write with no versioning, so
//! with several writers the last one wins.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::config::QUEUE_CACHE_KEY;
use crate::model::exchange::Exchange;
use crate::model::queue::Queue;

use super::diagnostics::{CacheDiagnostics, LogDiagnostics};
use super::error::CacheError;
use super::storage::KeyValueStorage;

/// Cached queues per exchange id.
pub type QueueMap = BTreeMap<String, Vec<Queue>>;

// Stored form. Kept as JSON so records this crate cannot read survive writes.
type RawMap = Map<String, Value>;

pub struct QueueCache<S, D = LogDiagnostics> {
    storage: S,
    diagnostics: D,
    key: String,
}

impl<S: KeyValueStorage> QueueCache<S> {
    pub fn new(storage: S) -> Self {
        Self::with_diagnostics(storage, LogDiagnostics)
    }
}

impl<S: KeyValueStorage, D: CacheDiagnostics> QueueCache<S, D> {
    pub fn with_diagnostics(storage: S, diagnostics: D) -> Self {
        Self {
            storage,
            diagnostics,
            key: QUEUE_CACHE_KEY.to_string(),
        }
    }

    /// Uses `key` instead of the default storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The whole mapping; empty when nothing is stored or the stored value
    /// cannot be read. Records that are not queues are skipped one by one,
    /// so a bad entry never hides the rest.
    pub fn get(&self) -> QueueMap {
        let raw = match self.load() {
            Ok(raw) => raw,
            Err(err) => {
                self.diagnostics.report(&err);
                return QueueMap::new();
            }
        };

        let mut map = QueueMap::new();
        for (exchange_id, entry) in raw {
            let Value::Array(items) = entry else {
                self.skipped(&exchange_id, format!("expected a list, found {entry}"));
                continue;
            };
            let queues: Vec<Queue> = items
                .into_iter()
                .filter_map(|item| match serde_json::from_value(item) {
                    Ok(queue) => Some(queue),
                    Err(e) => {
                        self.skipped(&exchange_id, e.to_string());
                        None
                    }
                })
                .collect();
            map.insert(exchange_id, queues);
        }
        map
    }

    pub fn queues_for(&self, exchange_id: &str) -> Vec<Queue> {
        self.get().remove(exchange_id).unwrap_or_default()
    }

    /// Appends `queue` to the exchange's list. Identical queues are not
    /// collapsed. Other exchanges' entries are written back verbatim.
    pub fn add_queue(&self, exchange_id: &str, queue: Queue) {
        let mut raw = self.load().unwrap_or_else(|err| {
            self.diagnostics.report(&err);
            RawMap::new()
        });
        let value = match serde_json::to_value(&queue) {
            Ok(value) => value,
            Err(e) => return self.write_failed(e.to_string()),
        };

        let entry = raw
            .entry(exchange_id.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(items) => items.push(value),
            other => *other = Value::Array(vec![value]),
        }
        self.store(&raw);
    }

    /// Drops every cached queue of the exchange whose id is `queue_id`.
    /// Storage is left untouched when nothing matches.
    pub fn remove_queue(&self, exchange_id: &str, queue_id: &str) {
        let mut raw = match self.load() {
            Ok(raw) => raw,
            Err(err) => return self.diagnostics.report(&err),
        };
        let Some(Value::Array(items)) = raw.get_mut(exchange_id) else {
            return;
        };

        let before = items.len();
        items.retain(|item| {
            serde_json::from_value::<Queue>(item.clone()).map_or(true, |q| q.id != queue_id)
        });
        if items.len() == before {
            return;
        }
        if items.is_empty() {
            raw.remove(exchange_id);
        }
        self.store(&raw);
    }

    /// Copies of `exchanges`, in the same order, each with `queues` replaced
    /// by the cached list (empty when the exchange has no entry).
    ///
    /// Queues sent by the server are discarded, not merged.
    pub fn merge_into_exchange_list(&self, exchanges: &[Exchange]) -> Vec<Exchange> {
        let map = self.get();
        exchanges
            .iter()
            .map(|exchange| Exchange {
                queues: map.get(&exchange.exchange_id).cloned().unwrap_or_default(),
                ..exchange.clone()
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Err(err) = self.storage.remove_item(&self.key) {
            self.write_failed(err.to_string());
        }
    }

    /// The stored mapping as plain JSON. Only unreadable storage and content
    /// that is not a JSON object are errors.
    fn load(&self) -> Result<RawMap, CacheError> {
        let read_error = |reason: String| CacheError::StorageRead {
            key: self.key.clone(),
            reason,
        };
        let raw = self
            .storage
            .get_item(&self.key)
            .map_err(|e| read_error(e.to_string()))?;

        match raw {
            Some(text) if !text.trim().is_empty() => {
                match serde_json::from_str::<Value>(&text).map_err(|e| read_error(e.to_string()))? {
                    Value::Null => Ok(RawMap::new()),
                    Value::Object(map) => Ok(map),
                    other => Err(read_error(format!("expected an object, found {other}"))),
                }
            }
            _ => Ok(RawMap::new()),
        }
    }

    fn store(&self, raw: &RawMap) {
        let written = serde_json::to_string(raw)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set_item(&self.key, &json)
                    .map_err(|e| e.to_string())
            });

        if let Err(reason) = written {
            self.write_failed(reason);
        }
    }

    fn write_failed(&self, reason: String) {
        self.diagnostics.report(&CacheError::StorageWrite {
            key: self.key.clone(),
            reason,
        });
    }

    fn skipped(&self, exchange_id: &str, reason: String) {
        self.diagnostics.report(&CacheError::SkippedEntry {
            exchange_id: exchange_id.to_string(),
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryStorage, StorageError};
    use crate::model::queue::NewQueue;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<CacheError>>);

    impl CacheDiagnostics for Recorder {
        fn report(&self, error: &CacheError) {
            self.0.borrow_mut().push(error.clone());
        }
    }

    impl Recorder {
        fn codes(&self) -> Vec<&'static str> {
            self.0.borrow().iter().map(CacheError::code).collect()
        }
    }

    struct Unreadable;

    impl KeyValueStorage for Unreadable {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("SecurityError".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("SecurityError".into()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("SecurityError".into()))
        }
    }

    fn queue(id: &str, exchange: &str) -> Queue {
        NewQueue {
            queue: id.to_string(),
            country_code: "CM".into(),
            mcc: "624".into(),
            mnc: "01".into(),
            routing_key: format!("sms.{id}"),
            vhost: "/".into(),
        }
        .into_queue(exchange)
    }

    fn exchange(id: &str, label: &str) -> Exchange {
        serde_json::from_value(json!({
            "exchange_id": id,
            "label": label,
            "description": format!("{label} traffic"),
            "created_at": "2024-03-01T10:00:00Z",
            "owner": "ops",
        }))
        .unwrap()
    }

    fn raw(storage: &MemoryStorage) -> Option<String> {
        storage.get_item(QUEUE_CACHE_KEY).unwrap()
    }

    #[test]
    fn empty_storage_reads_as_empty_mapping() {
        let storage = MemoryStorage::default();
        let recorder = Recorder::default();
        let cache = QueueCache::with_diagnostics(&storage, &recorder);
        assert!(cache.get().is_empty());
        assert!(recorder.codes().is_empty());
    }

    #[test]
    fn added_queue_is_the_last_element() {
        let storage = MemoryStorage::default();
        let cache = QueueCache::new(&storage);
        cache.add_queue("ex1", queue("mtn", "ex1"));
        cache.add_queue("ex1", queue("orange", "ex1"));

        let map = cache.get();
        assert_eq!(map["ex1"].last(), Some(&queue("orange", "ex1")));
        assert_eq!(cache.queues_for("ex1").len(), 2);
        assert!(cache.queues_for("ex2").is_empty());
    }

    #[test]
    fn adding_the_same_queue_twice_keeps_both() {
        let storage = MemoryStorage::default();
        let cache = QueueCache::new(&storage);
        cache.add_queue("ex1", queue("mtn", "ex1"));
        cache.add_queue("ex1", queue("mtn", "ex1"));
        assert_eq!(cache.queues_for("ex1").len(), 2);
    }

    #[test]
    fn corrupt_content_is_reported_and_ignored() {
        let storage = MemoryStorage::default();
        storage.set_item(QUEUE_CACHE_KEY, "{not json").unwrap();
        let recorder = Recorder::default();
        let cache = QueueCache::with_diagnostics(&storage, &recorder);

        assert!(cache.get().is_empty());
        assert_eq!(recorder.codes(), ["storage_read_error"]);

        // The next write replaces the corrupt value.
        cache.add_queue("ex1", queue("mtn", "ex1"));
        assert_eq!(cache.queues_for("ex1").len(), 1);
    }

    #[test]
    fn null_or_blank_content_is_empty() {
        let storage = MemoryStorage::default();
        let recorder = Recorder::default();
        let cache = QueueCache::with_diagnostics(&storage, &recorder);
        for value in ["null", "", "  "] {
            storage.set_item(QUEUE_CACHE_KEY, value).unwrap();
            assert!(cache.get().is_empty());
        }
        assert!(recorder.codes().is_empty());
    }

    #[test]
    fn unreadable_storage_degrades_to_no_ops() {
        let recorder = Recorder::default();
        let cache = QueueCache::with_diagnostics(Unreadable, &recorder);

        assert!(cache.get().is_empty());
        cache.add_queue("ex1", queue("mtn", "ex1"));
        cache.clear();

        assert_eq!(
            recorder.codes(),
            [
                "storage_read_error",
                "storage_read_error",
                "storage_write_error",
                "storage_write_error"
            ]
        );
    }

    #[test]
    fn quota_errors_are_swallowed() {
        let storage = MemoryStorage::with_quota(64);
        let recorder = Recorder::default();
        let cache = QueueCache::with_diagnostics(&storage, &recorder);

        cache.add_queue("ex1", queue("mtn", "ex1"));

        assert_eq!(raw(&storage), None);
        assert_eq!(recorder.codes(), ["storage_write_error"]);
    }

    #[test]
    fn removing_an_unknown_queue_leaves_storage_untouched() {
        let storage = MemoryStorage::default();
        let written_elsewhere = r#"{ "ex1": [ {"queue": "mtn", "mcc": 624} ] }"#;
        storage.set_item(QUEUE_CACHE_KEY, written_elsewhere).unwrap();
        let cache = QueueCache::new(&storage);

        cache.remove_queue("ex1", "nonexistent");
        cache.remove_queue("ex2", "mtn");

        assert_eq!(raw(&storage).as_deref(), Some(written_elsewhere));
    }

    #[test]
    fn removal_matches_entries_stored_under_queue_field() {
        let storage = MemoryStorage::default();
        storage
            .set_item(
                QUEUE_CACHE_KEY,
                r#"{"ex1":[{"queue":"mtn"},{"id":"orange","queue":"legacy"}]}"#,
            )
            .unwrap();
        let cache = QueueCache::new(&storage);

        cache.remove_queue("ex1", "mtn");
        let left = cache.queues_for("ex1");
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, "orange");

        // Only the canonical id matches; "legacy" lost to "id".
        cache.remove_queue("ex1", "legacy");
        assert_eq!(cache.queues_for("ex1").len(), 1);
    }

    #[test]
    fn removing_the_last_queue_drops_the_entry() {
        let storage = MemoryStorage::default();
        let cache = QueueCache::new(&storage);
        cache.add_queue("ex1", queue("mtn", "ex1"));
        cache.add_queue("ex2", queue("mtn", "ex2"));

        cache.remove_queue("ex1", "mtn");

        let map = cache.get();
        assert!(!map.contains_key("ex1"));
        assert_eq!(map["ex2"].len(), 1);
    }

    #[test]
    fn merge_preserves_order_and_other_fields() {
        let storage = MemoryStorage::default();
        let cache = QueueCache::new(&storage);
        cache.add_queue("b", queue("mtn", "b"));

        let input = vec![exchange("c", "Gamma"), exchange("a", "Alpha"), exchange("b", "Beta")];
        let merged = cache.merge_into_exchange_list(&input);

        assert_eq!(merged.len(), input.len());
        for (out, orig) in merged.iter().zip(&input) {
            assert_eq!(out.exchange_id, orig.exchange_id);
            assert_eq!(out.label, orig.label);
            assert_eq!(out.description, orig.description);
            assert_eq!(out.created_at, orig.created_at);
            assert_eq!(out.extra, orig.extra);
        }
        assert!(merged[0].queues.is_empty());
        assert!(merged[1].queues.is_empty());
        assert_eq!(merged[2].queues, vec![queue("mtn", "b")]);
    }

    #[test]
    fn merge_replaces_server_queues() {
        let storage = MemoryStorage::default();
        let cache = QueueCache::new(&storage);
        let mut from_server = exchange("ex1", "Promo");
        from_server.queues = vec![queue("server-side", "ex1")];

        let merged = cache.merge_into_exchange_list(std::slice::from_ref(&from_server));
        assert!(merged[0].queues.is_empty());
        assert_eq!(from_server.queues.len(), 1);

        let as_json = serde_json::to_value(&merged[0]).unwrap();
        assert_eq!(as_json["queues"], json!([]));
    }

    #[test]
    fn merge_serves_duplicate_exchange_ids() {
        let storage = MemoryStorage::default();
        let cache = QueueCache::new(&storage);
        cache.add_queue("ex1", queue("mtn", "ex1"));

        let merged =
            cache.merge_into_exchange_list(&[exchange("ex1", "One"), exchange("ex1", "Again")]);
        assert_eq!(merged[0].queues.len(), 1);
        assert_eq!(merged[1].queues.len(), 1);
    }

    #[test]
    fn custom_key_and_clear() {
        let storage = MemoryStorage::default();
        let cache = QueueCache::new(&storage).with_key("tenant_a_queues");
        cache.add_queue("ex1", queue("mtn", "ex1"));
        assert!(storage.get_item("tenant_a_queues").unwrap().is_some());
        assert_eq!(raw(&storage), None);

        cache.clear();
        assert!(cache.storage().is_empty());
    }

    #[test]
    fn a_bad_entry_does_not_erase_other_exchanges() {
        let storage = MemoryStorage::default();
        let stored = json!({
            "ex1": [{ "id": "mtn", "routing_key": 42 }],
            "ex2": [{ "mcc": "624" }, "orange", { "queue": "nexttel" }],
            "ex4": "not a list",
        });
        storage.set_item(QUEUE_CACHE_KEY, &stored.to_string()).unwrap();
        let recorder = Recorder::default();
        let cache = QueueCache::with_diagnostics(&storage, &recorder);

        let map = cache.get();
        assert_eq!(map["ex1"][0].routing_key, "42");
        assert_eq!(map["ex2"].len(), 1);
        assert_eq!(map["ex2"][0].id, "nexttel");
        assert!(!map.contains_key("ex4"));
        assert_eq!(
            recorder.codes(),
            ["storage_entry_skipped", "storage_entry_skipped", "storage_entry_skipped"]
        );

        cache.add_queue("ex3", queue("camtel", "ex3"));

        assert_eq!(cache.queues_for("ex1").len(), 1);
        assert_eq!(cache.queues_for("ex3").len(), 1);
        let written: Value = serde_json::from_str(&raw(&storage).unwrap()).unwrap();
        assert_eq!(written["ex2"], stored["ex2"]);
        assert_eq!(written["ex4"], stored["ex4"]);
    }

    #[test]
    fn removal_keeps_unreadable_records_of_the_same_exchange() {
        let storage = MemoryStorage::default();
        storage
            .set_item(QUEUE_CACHE_KEY, r#"{"ex1":[{"id":"mtn"},"legacy-name"]}"#)
            .unwrap();
        let cache = QueueCache::new(&storage);

        cache.remove_queue("ex1", "mtn");

        let written: Value = serde_json::from_str(&raw(&storage).unwrap()).unwrap();
        assert_eq!(written, json!({ "ex1": ["legacy-name"] }));
    }

    #[test]
    fn non_object_content_is_a_read_error() {
        let storage = MemoryStorage::default();
        storage.set_item(QUEUE_CACHE_KEY, "[1, 2]").unwrap();
        let recorder = Recorder::default();
        let cache = QueueCache::with_diagnostics(&storage, &recorder);

        assert!(cache.get().is_empty());
        assert_eq!(recorder.codes(), ["storage_read_error"]);
    }
}
