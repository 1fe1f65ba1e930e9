/// Failures inside the queue cache. They are reported to
/// [`CacheDiagnostics`](super::CacheDiagnostics) and never returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    #[error("reading `{key}` failed: {reason}")]
    StorageRead { key: String, reason: String },

    #[error("writing `{key}` failed: {reason}")]
    StorageWrite { key: String, reason: String },

    /// A cached record under `exchange_id` that is not a queue. It stays in
    /// storage untouched and is left out of reads.
    #[error("skipped cached entry of `{exchange_id}`: {reason}")]
    SkippedEntry { exchange_id: String, reason: String },
}

impl CacheError {
    pub fn code(&self) -> &'static str {
        match self {
            CacheError::StorageRead { .. } => "storage_read_error",
            CacheError::StorageWrite { .. } => "storage_write_error",
            CacheError::SkippedEntry { .. } => "storage_entry_skipped",
        }
    }
}

/// Errors raised by a [`KeyValueStorage`](super::KeyValueStorage) backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("{0}")]
    Backend(String),
}
