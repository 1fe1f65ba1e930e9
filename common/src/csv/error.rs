/// Reasons an uploaded recipient file or a bulk-send form is refused.
///
/// Every variant is recoverable: the compose dialog shows it inline and keeps
/// the send button disabled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsvError {
    #[error("Only .csv files are accepted (got \"{name}\")")]
    InvalidExtension { name: String },

    #[error("File is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("The file is empty")]
    EmptyFile,

    #[error("No phone column found: name a column \"phone\", \"number\" or \"mobile\"")]
    MissingPhoneColumn,

    #[error("No content column found: name a column \"content\" or \"message\"")]
    MissingContentColumn,

    #[error("Enter the message to send to every recipient")]
    MissingMessage,

    #[error("Select an exchange before sending")]
    MissingExchange,

    #[error("No recipient with a phone number was found")]
    NoRecipients,

    #[error("Could not read the file: {0}")]
    FileRead(String),
}

impl CsvError {
    /// Stable identifier used by the UI and by tests.
    pub fn code(&self) -> &'static str {
        match self {
            CsvError::InvalidExtension { .. } => "invalid_extension",
            CsvError::FileTooLarge { .. } => "file_too_large",
            CsvError::EmptyFile => "empty_file",
            CsvError::MissingPhoneColumn => "missing_phone_column",
            CsvError::MissingContentColumn => "missing_content_column",
            CsvError::MissingMessage => "missing_message",
            CsvError::MissingExchange => "missing_exchange",
            CsvError::NoRecipients => "no_recipients",
            CsvError::FileRead(_) => "file_read_error",
        }
    }
}
