//! Header-name heuristics for recipient files.

const PHONE_KEYWORDS: [&str; 3] = ["phone", "number", "mobile"];
const CONTENT_KEYWORDS: [&str; 2] = ["content", "message"];

/// What a header cell is used for when building messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Phone,
    Content,
    Unclassified,
}

impl ColumnRole {
    /// Case-insensitive substring match; the phone role is tried first.
    pub fn classify(header: &str) -> Self {
        let header = header.to_lowercase();
        if PHONE_KEYWORDS.iter().any(|k| header.contains(k)) {
            ColumnRole::Phone
        } else if CONTENT_KEYWORDS.iter().any(|k| header.contains(k)) {
            ColumnRole::Content
        } else {
            ColumnRole::Unclassified
        }
    }
}

/// Columns selected from a header row. The first matching cell wins per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    pub phone: Option<usize>,
    pub content: Option<usize>,
}

impl ColumnLayout {
    pub fn detect<S: AsRef<str>>(header: &[S]) -> Self {
        let mut layout = ColumnLayout::default();
        for (idx, cell) in header.iter().enumerate() {
            match ColumnRole::classify(cell.as_ref()) {
                ColumnRole::Phone if layout.phone.is_none() => layout.phone = Some(idx),
                ColumnRole::Content if layout.content.is_none() => layout.content = Some(idx),
                _ => {}
            }
        }
        layout
    }
}
