//! Durable overlay of client-created queues.

mod diagnostics;
mod error;
mod queue_cache;
mod storage;

pub use diagnostics::{CacheDiagnostics, LogDiagnostics};
pub use error::{CacheError, StorageError};
pub use queue_cache::{QueueCache, QueueMap};
pub use storage::{KeyValueStorage, MemoryStorage};
