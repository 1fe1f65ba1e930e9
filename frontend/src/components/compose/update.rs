//! Update function for the bulk compose dialog.
//!
//! A single Elm-style `update` receives the dialog state, the `Context` and a
//! `Msg`, mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Validation runs entirely in the browser: the picked file is read once,
//!   checked (extension, size, emptiness, phone column) and previewed, then
//!   parsed in full so the request lists every recipient, not only the sample.
//! - Recipients come from the file or from the manual field; with a content
//!   column each row carries its own text and the typed message is ignored.
//! - Send builds a complete `SendRequest` first; a missing exchange, message
//!   or recipient is shown inline and nothing is posted.
//! - File reads and sends are never aborted. Their results carry the
//!   generation they started in and are dropped once the dialog was reset,
//!   except that a late successful send still toasts and notifies `on_sent`.
//! - Outcomes are reported with toasts; send errors also stay inline.

use common::csv::{
    build_bulk_send_payload, build_manual_payload, parse_document, parse_manual_recipients,
    validate_and_preview, BulkSendForm, ContentMode, CsvError,
};
use common::model::message::SendRequest;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{BulkComposeComponent, RecipientSource};
use crate::helpers::{format_count, show_toast, ToastKind};
use crate::upload::BrowserCsv;

pub fn update(
    component: &mut BulkComposeComponent,
    ctx: &Context<BulkComposeComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Close => {
            ctx.props().on_close.emit(());
            false
        }
        Msg::SetExchange(id) => {
            component.exchange_id = id;
            component.error = None;
            true
        }
        Msg::SetSource(source) => {
            component.source = source;
            component.error = None;
            true
        }
        Msg::UpdateNumbers(text) => {
            component.manual_numbers = text;
            true
        }
        Msg::UpdateMessage(text) => {
            component.message = text;
            true
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            component.file_name = Some(file.name());
            component.preview = None;
            component.rows.clear();
            component.error = None;
            component.reading = true;

            let generation = component.generation;
            let link = ctx.link().clone();
            spawn_local(async move {
                let source = BrowserCsv::new(file);
                match validate_and_preview(&source).await {
                    Ok(preview) => {
                        let rows = source
                            .take_text()
                            .map(|text| parse_document(&text))
                            .unwrap_or_else(|| preview.rows.clone());
                        link.send_message(Msg::PreviewReady {
                            generation,
                            preview,
                            rows,
                        });
                    }
                    Err(error) => link.send_message(Msg::PreviewFailed { generation, error }),
                }
            });
            true
        }
        Msg::PreviewReady {
            generation,
            preview,
            rows,
        } => {
            if !component.is_current(generation) {
                return false;
            }
            component.reading = false;
            component.preview = Some(preview);
            component.rows = rows;
            true
        }
        Msg::PreviewFailed { generation, error } => {
            if !component.is_current(generation) {
                return false;
            }
            component.reading = false;
            component.file_name = None;
            component.error = Some(error.to_string());
            component.clear_file_input();
            true
        }
        Msg::Send => {
            if component.sending || component.reading {
                return false;
            }
            let request = match build_request(component) {
                Ok(request) => request,
                Err(err) => {
                    component.error = Some(err.to_string());
                    return true;
                }
            };

            component.error = None;
            component.sending = true;
            let generation = component.generation;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let sent = request.len();
                let result = api.send_messages(&request).await.map(|_| sent);
                link.send_message(Msg::SendFinished { generation, result });
            });
            true
        }
        Msg::SendFinished { generation, result } if !component.is_current(generation) => {
            // The dialog was closed meanwhile; the request still went through.
            if let Ok(count) = result {
                show_toast(
                    &format!("{} messages queued", format_count(count)),
                    ToastKind::Info,
                );
                ctx.props().on_sent.emit(count);
            }
            false
        }
        Msg::SendFinished {
            result: Ok(count), ..
        } => {
            component.sending = false;
            show_toast(
                &format!("{} messages queued", format_count(count)),
                ToastKind::Info,
            );
            ctx.props().on_sent.emit(count);
            ctx.props().on_close.emit(());
            true
        }
        Msg::SendFinished {
            result: Err(err), ..
        } => {
            component.sending = false;
            component.error = Some(err.to_string());
            show_toast("Sending failed", ToastKind::Error);
            true
        }
    }
}

fn build_request(component: &BulkComposeComponent) -> Result<SendRequest, CsvError> {
    match component.source {
        RecipientSource::Manual => {
            let numbers = parse_manual_recipients(&component.manual_numbers);
            build_manual_payload(&numbers, &component.message, &component.exchange_id)
        }
        RecipientSource::Csv => {
            let preview = component.preview.as_ref().ok_or(CsvError::NoRecipients)?;
            let form = BulkSendForm::with_rows(&component.exchange_id, preview, &component.rows);
            let mode = ContentMode::auto(preview.has_content_column(), &component.message);
            build_bulk_send_payload(&mode, &form)
        }
    }
}
