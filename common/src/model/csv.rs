use serde::{Deserialize, Serialize};

/// Result of validating an uploaded recipient file.
///
/// The compose dialog renders `rows` as a table (header at index 0, then up to
/// five sample rows) and uses the column indexes to decide how the bulk-send
/// payload is sourced. Rows are kept exactly as parsed, ragged ones included.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CsvPreview {
    /// Header row followed by the sampled data rows.
    pub rows: Vec<Vec<String>>,
    /// Zero-based index of the first column recognised as a phone number.
    pub phone_column_index: usize,
    /// Zero-based index of the first column recognised as message content.
    pub content_column_index: Option<usize>,
}

impl CsvPreview {
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn sample_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    pub fn has_content_column(&self) -> bool {
        self.content_column_index.is_some()
    }

    /// Count shown to the user as "rows". This is the number of retained
    /// preview lines (header included), not the number of lines in the file.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
