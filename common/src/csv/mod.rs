//! Recipient-file ingestion for bulk messaging.
//!
//! The compose dialog hands an uploaded file to [`validate_and_preview`],
//! shows the returned [`CsvPreview`](crate::model::csv::CsvPreview), and once
//! the user confirms builds the request with [`build_bulk_send_payload`].
//! Numbers typed by hand go through [`parse_manual_recipients`] instead.

mod columns;
mod error;
mod manual;
mod parser;
mod payload;
mod preview;

pub use columns::{ColumnLayout, ColumnRole};
pub use error::CsvError;
pub use manual::{build_manual_payload, parse_manual_recipients};
pub use parser::{non_blank_lines, parse_document, parse_line};
pub use payload::{build_bulk_send_payload, BulkSendForm, ContentMode};
pub use preview::{
    check_file_meta, preview_text, validate_and_preview, validate_and_preview_with, CsvSource,
    InMemoryCsv,
};
