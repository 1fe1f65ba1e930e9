use common::csv::CsvError;
use common::model::csv::CsvPreview;

use super::state::RecipientSource;
use crate::api::ApiError;

pub enum Msg {
    Close,
    SetExchange(String),
    SetSource(RecipientSource),
    UpdateNumbers(String),
    UpdateMessage(String),
    OpenFileDialog,
    FileSelected(web_sys::File),
    PreviewReady {
        generation: u32,
        preview: CsvPreview,
        rows: Vec<Vec<String>>,
    },
    PreviewFailed {
        generation: u32,
        error: CsvError,
    },
    Send,
    SendFinished {
        generation: u32,
        result: Result<usize, ApiError>,
    },
}
