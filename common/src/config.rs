//! Storage keys and upload limits shared by the dashboard and its tests.

/// Storage key holding the whole queue cache mapping.
pub const QUEUE_CACHE_KEY: &str = "qdroid_exchange_queues";

/// Storage key holding the bearer token consumed by the API client.
pub const TOKEN_KEY: &str = "token";

/// Largest CSV upload accepted for bulk messaging (5 MiB).
pub const MAX_CSV_BYTES: u64 = 5 * 1024 * 1024;

/// Non-blank lines kept for the preview: the header plus five data rows.
pub const PREVIEW_LINE_LIMIT: usize = 6;

/// Upload limits applied by [`crate::csv::validate_and_preview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvLimits {
    pub max_bytes: u64,
    pub preview_lines: usize,
}

impl Default for CsvLimits {
    fn default() -> Self {
        Self {
            max_bytes: MAX_CSV_BYTES,
            preview_lines: PREVIEW_LINE_LIMIT,
        }
    }
}
