//! Bridges a browser `File` to the CSV validator.

use std::cell::RefCell;

use common::csv::CsvSource;
use gloo_file::futures::read_as_text;

/// A file picked in the compose dialog.
///
/// The text read during validation is kept so the payload can be built from
/// every row without reading the file a second time.
pub struct BrowserCsv {
    file: gloo_file::File,
    name: String,
    text: RefCell<Option<String>>,
}

impl BrowserCsv {
    pub fn new(file: web_sys::File) -> Self {
        let file = gloo_file::File::from(file);
        let name = file.name();
        Self {
            file,
            name,
            text: RefCell::new(None),
        }
    }

    /// Text read by the last successful `read_text`.
    pub fn take_text(&self) -> Option<String> {
        self.text.borrow_mut().take()
    }
}

impl CsvSource for BrowserCsv {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.file.size()
    }

    async fn read_text(&self) -> Result<String, String> {
        let text = read_as_text(&self.file).await.map_err(|e| e.to_string())?;
        *self.text.borrow_mut() = Some(text.clone());
        Ok(text)
    }
}
