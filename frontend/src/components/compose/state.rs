//! Runtime state of the bulk compose dialog.

use common::model::csv::CsvPreview;
use yew::prelude::*;

/// How the recipients of a bulk send are provided.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RecipientSource {
    Manual,
    Csv,
}

pub struct BulkComposeComponent {
    pub exchange_id: String,
    pub source: RecipientSource,

    /// Raw text of the manual recipients field.
    pub manual_numbers: String,

    /// Message typed by the user. Ignored when the file has a content column.
    pub message: String,

    /// Name of the file behind `preview`.
    pub file_name: Option<String>,

    pub preview: Option<CsvPreview>,

    /// Every parsed row of the file, header included.
    pub rows: Vec<Vec<String>>,

    /// Inline validation or send error.
    pub error: Option<String>,

    pub reading: bool,
    pub sending: bool,

    pub sheet_ref: NodeRef,
    pub file_input_ref: NodeRef,

    /// Bumped by `reset`. File reads are never aborted, so a result tagged
    /// with an older generation belongs to a closed dialog and is dropped.
    pub generation: u32,
}

impl BulkComposeComponent {
    pub fn new(selected_exchange: Option<String>) -> Self {
        Self {
            exchange_id: selected_exchange.unwrap_or_default(),
            source: RecipientSource::Csv,
            manual_numbers: String::new(),
            message: String::new(),
            file_name: None,
            preview: None,
            rows: Vec::new(),
            error: None,
            reading: false,
            sending: false,
            sheet_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            generation: 0,
        }
    }

    /// Back to a blank form. Node refs and the generation counter survive.
    pub fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        let sheet_ref = std::mem::take(&mut self.sheet_ref);
        let file_input_ref = std::mem::take(&mut self.file_input_ref);
        *self = Self {
            sheet_ref,
            file_input_ref,
            generation,
            ..Self::new(None)
        };
        self.clear_file_input();
    }

    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }

    /// False for results started before the last `reset`.
    pub fn is_current(&self, generation: u32) -> bool {
        generation == self.generation
    }

    /// True when messages come from the file's content column.
    pub fn per_row_content(&self) -> bool {
        self.source == RecipientSource::Csv
            && self
                .preview
                .as_ref()
                .is_some_and(CsvPreview::has_content_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_from_before_a_reset_are_stale() {
        let mut dialog = BulkComposeComponent::new(Some("ex1".into()));
        let started = dialog.generation;
        assert!(dialog.is_current(started));

        dialog.sending = true;
        dialog.reset();

        assert!(!dialog.is_current(started));
        assert!(dialog.is_current(dialog.generation));
        assert!(!dialog.sending);
        assert!(dialog.exchange_id.is_empty());
    }

    #[test]
    fn typed_message_is_used_without_a_content_column() {
        let mut dialog = BulkComposeComponent::new(None);
        assert!(!dialog.per_row_content());

        dialog.preview = Some(CsvPreview {
            rows: vec![vec!["phone".into(), "content".into()]],
            phone_column_index: 0,
            content_column_index: Some(1),
        });
        assert!(dialog.per_row_content());

        dialog.source = RecipientSource::Manual;
        assert!(!dialog.per_row_content());
    }
}
