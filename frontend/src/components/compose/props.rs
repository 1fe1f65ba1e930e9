//! Properties of the bulk compose dialog.

use common::model::exchange::Exchange;
use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct BulkComposeProps {
    /// Exchanges offered in the selector, already merged with the cache.
    pub exchanges: Vec<Exchange>,

    pub api: ApiClient,

    /// Whether the dialog is shown. The parent owns this flag; the dialog
    /// asks to be closed through `on_close` and resets itself once hidden.
    pub open: bool,

    pub on_close: Callback<()>,

    /// Preselected exchange, applied each time the dialog opens.
    #[prop_or_default]
    pub selected_exchange: Option<String>,

    /// Number of messages accepted by the server after a successful send.
    #[prop_or_default]
    pub on_sent: Callback<usize>,
}
