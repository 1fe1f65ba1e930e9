//! Upload validation for the bulk compose dialog.

use crate::config::CsvLimits;
use crate::model::csv::CsvPreview;

use super::columns::ColumnLayout;
use super::error::CsvError;
use super::parser::{non_blank_lines, parse_line};

/// A user-selected file whose text becomes available asynchronously.
///
/// Metadata is checked before the content is read, so oversized or misnamed
/// files are refused without loading them.
#[allow(async_fn_in_trait)]
pub trait CsvSource {
    fn name(&self) -> &str;

    /// Size in bytes as reported by the file metadata.
    fn size(&self) -> u64;

    /// Reads the whole file as text. The error is the reader's own message.
    async fn read_text(&self) -> Result<String, String>;
}

/// A file whose content is already in memory.
#[derive(Debug, Clone)]
pub struct InMemoryCsv {
    pub name: String,
    pub text: String,
}

impl InMemoryCsv {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl CsvSource for InMemoryCsv {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.text.len() as u64
    }

    async fn read_text(&self) -> Result<String, String> {
        Ok(self.text.clone())
    }
}

/// Validates `source` with the default limits and returns its preview.
pub async fn validate_and_preview<S: CsvSource>(source: &S) -> Result<CsvPreview, CsvError> {
    validate_and_preview_with(source, CsvLimits::default()).await
}

pub async fn validate_and_preview_with<S: CsvSource>(
    source: &S,
    limits: CsvLimits,
) -> Result<CsvPreview, CsvError> {
    check_file_meta(source.name(), source.size(), &limits)?;
    let text = source.read_text().await.map_err(|e| {
        log::warn!("csv read failed name={} error={}", source.name(), e);
        CsvError::FileRead(e)
    })?;
    let preview = preview_text(&text, &limits)?;
    log::debug!(
        "csv preview name={} rows={} phone_column={} content_column={:?}",
        source.name(),
        preview.row_count(),
        preview.phone_column_index,
        preview.content_column_index
    );
    Ok(preview)
}

/// Extension and size checks, in that order.
pub fn check_file_meta(name: &str, size: u64, limits: &CsvLimits) -> Result<(), CsvError> {
    if !name.to_lowercase().ends_with(".csv") {
        return Err(CsvError::InvalidExtension {
            name: name.to_string(),
        });
    }
    if size > limits.max_bytes {
        return Err(CsvError::FileTooLarge {
            size,
            limit: limits.max_bytes,
        });
    }
    Ok(())
}

/// Content checks: at least one non-blank line and a phone column in the
/// header. Only the first `limits.preview_lines` non-blank lines are parsed.
pub fn preview_text(text: &str, limits: &CsvLimits) -> Result<CsvPreview, CsvError> {
    let rows: Vec<Vec<String>> = non_blank_lines(text)
        .take(limits.preview_lines.max(1))
        .map(parse_line)
        .collect();

    let header = rows.first().ok_or(CsvError::EmptyFile)?;
    let layout = ColumnLayout::detect(header);
    let phone_column_index = layout.phone.ok_or(CsvError::MissingPhoneColumn)?;

    Ok(CsvPreview {
        rows,
        phone_column_index,
        content_column_index: layout.content,
    })
}
