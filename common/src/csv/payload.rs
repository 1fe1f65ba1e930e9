//! Turns a validated recipient file into a bulk-send request.

use crate::model::csv::CsvPreview;
use crate::model::message::{OutboundMessage, SendRequest};

use super::error::CsvError;

/// Where the text of each message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMode {
    /// The same message goes to every recipient.
    Uniform(String),
    /// Each row supplies its own message from the content column.
    PerRow,
}

impl ContentMode {
    /// Per-row mode whenever the file has a content column; the typed
    /// message is only used otherwise.
    pub fn auto(has_content_column: bool, message: &str) -> Self {
        if has_content_column {
            ContentMode::PerRow
        } else {
            ContentMode::Uniform(message.to_string())
        }
    }
}

/// Compose-dialog state needed to build the request.
#[derive(Debug, Clone, Copy)]
pub struct BulkSendForm<'a> {
    pub exchange_id: &'a str,
    /// Parsed rows, header at index 0.
    pub rows: &'a [Vec<String>],
    pub phone_column_index: usize,
    pub content_column_index: Option<usize>,
}

impl<'a> BulkSendForm<'a> {
    /// Form over the sampled rows of `preview`.
    pub fn from_preview(exchange_id: &'a str, preview: &'a CsvPreview) -> Self {
        Self::with_rows(exchange_id, preview, &preview.rows)
    }

    /// Form over `rows` (usually the whole file) using the columns detected
    /// in `preview`.
    pub fn with_rows(exchange_id: &'a str, preview: &CsvPreview, rows: &'a [Vec<String>]) -> Self {
        Self {
            exchange_id,
            rows,
            phone_column_index: preview.phone_column_index,
            content_column_index: preview.content_column_index,
        }
    }
}

/// Builds one message per data row.
///
/// Rows without a phone number are skipped, and so are per-row rows without
/// content. Nothing is returned unless every part of the payload is known:
/// a missing exchange, message, or content column is an error, and so is a
/// file that yields no message at all.
pub fn build_bulk_send_payload(
    mode: &ContentMode,
    form: &BulkSendForm<'_>,
) -> Result<SendRequest, CsvError> {
    let exchange_id = form.exchange_id.trim();
    if exchange_id.is_empty() {
        return Err(CsvError::MissingExchange);
    }

    let content_for = |row: &[String]| -> Option<String> {
        match mode {
            ContentMode::Uniform(message) => Some(message.clone()),
            ContentMode::PerRow => form
                .content_column_index
                .and_then(|idx| cell(row, idx))
                .map(str::to_string),
        }
    };

    match mode {
        ContentMode::Uniform(message) if message.trim().is_empty() => {
            return Err(CsvError::MissingMessage);
        }
        ContentMode::PerRow if form.content_column_index.is_none() => {
            return Err(CsvError::MissingContentColumn);
        }
        _ => {}
    }

    let mut skipped = 0usize;
    let messages: Vec<OutboundMessage> = form
        .rows
        .iter()
        .skip(1)
        .filter_map(|row| {
            let built = cell(row, form.phone_column_index).and_then(|phone| {
                content_for(row).map(|content| OutboundMessage {
                    phone_number: phone.to_string(),
                    content,
                    exchange_id: exchange_id.to_string(),
                })
            });
            if built.is_none() {
                skipped += 1;
            }
            built
        })
        .collect();

    if skipped > 0 {
        log::debug!("bulk payload skipped {} incomplete rows", skipped);
    }
    if messages.is_empty() {
        return Err(CsvError::NoRecipients);
    }
    Ok(SendRequest { messages })
}

fn cell(row: &[String], idx: usize) -> Option<&str> {
    row.get(idx).map(|c| c.trim()).filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CsvLimits;
    use crate::csv::preview_text;

    fn preview(text: &str) -> CsvPreview {
        preview_text(text, &CsvLimits::default()).unwrap()
    }

    #[test]
    fn uniform_mode_pairs_every_phone_with_the_message() {
        let p = preview("name,phone\nAda,+237111\nBob,+237222\n");
        let form = BulkSendForm::from_preview("ex9", &p);
        let request =
            build_bulk_send_payload(&ContentMode::auto(p.has_content_column(), "Promo"), &form)
                .unwrap();

        assert_eq!(request.len(), 2);
        assert!(request.messages.iter().all(|m| m.content == "Promo"));
        assert!(request.messages.iter().all(|m| m.exchange_id == "ex9"));
        assert_eq!(request.messages[1].phone_number, "+237222");
    }

    #[test]
    fn per_row_mode_ignores_the_typed_message() {
        let p = preview("phone,message\n+237111,First\n+237222,Second\n");
        let form = BulkSendForm::from_preview("ex1", &p);
        let mode = ContentMode::auto(p.has_content_column(), "ignored");
        assert_eq!(mode, ContentMode::PerRow);

        let request = build_bulk_send_payload(&mode, &form).unwrap();
        let contents: Vec<_> = request.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["First", "Second"]);
    }

    #[test]
    fn per_row_mode_requires_a_content_column() {
        let p = preview("phone\n+237111\n");
        let form = BulkSendForm::from_preview("ex1", &p);
        let err = build_bulk_send_payload(&ContentMode::PerRow, &form).unwrap_err();
        assert_eq!(err.code(), "missing_content_column");
    }

    #[test]
    fn uniform_mode_requires_a_message() {
        let p = preview("phone\n+237111\n");
        let form = BulkSendForm::from_preview("ex1", &p);
        let err = build_bulk_send_payload(&ContentMode::Uniform("  ".into()), &form).unwrap_err();
        assert_eq!(err, CsvError::MissingMessage);
    }

    #[test]
    fn an_exchange_must_be_selected() {
        let p = preview("phone\n+237111\n");
        let form = BulkSendForm::from_preview("", &p);
        let err = build_bulk_send_payload(&ContentMode::Uniform("Hi".into()), &form).unwrap_err();
        assert_eq!(err, CsvError::MissingExchange);
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let p = preview("phone,content\n+237111,Hi\n,orphan\n+237333\n+237444,  \n");
        let form = BulkSendForm::from_preview("ex1", &p);
        let request = build_bulk_send_payload(&ContentMode::PerRow, &form).unwrap();
        assert_eq!(request.len(), 1);
        assert_eq!(request.messages[0].phone_number, "+237111");
    }

    #[test]
    fn header_only_file_has_no_recipients() {
        let p = preview("phone\n");
        let form = BulkSendForm::from_preview("ex1", &p);
        let err = build_bulk_send_payload(&ContentMode::Uniform("Hi".into()), &form).unwrap_err();
        assert_eq!(err, CsvError::NoRecipients);
    }

    #[test]
    fn full_document_rows_go_beyond_the_preview() {
        let mut text = String::from("phone\n");
        for i in 0..12 {
            text.push_str(&format!("+2370{i:02}\n"));
        }
        let p = preview(&text);
        let all_rows = crate::csv::parse_document(&text);
        let form = BulkSendForm::with_rows("ex1", &p, &all_rows);
        let request = build_bulk_send_payload(&ContentMode::Uniform("Hi".into()), &form).unwrap();
        assert_eq!(p.sample_rows().len(), 5);
        assert_eq!(request.len(), 12);
    }
}
