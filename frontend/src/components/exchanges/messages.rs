use common::model::exchange::Exchange;
use common::model::queue::Queue;

use crate::api::ApiError;

/// Editable fields of the queue creation form.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Queue,
    CountryCode,
    Mcc,
    Mnc,
    RoutingKey,
    Vhost,
}

pub enum Msg {
    Load,
    Loaded(Result<Vec<Exchange>, ApiError>),

    SelectExchange(String),
    EditDraft(DraftField, String),
    CreateQueue,
    QueueCreated { exchange_id: String, queue: Queue },
    CreateFailed(ApiError),

    DeleteQueue { exchange_id: String, queue_id: String },
    QueueDeleted { exchange_id: String, queue_id: String },
    DeleteFailed {
        exchange_id: String,
        queue_id: String,
        error: ApiError,
    },
    /// Drops a queue from the cache and the list without asking the server.
    RemoveLocally,
    DismissLocalRemoval,

    OpenCompose,
    CloseCompose,
    MessagesSent(usize),
}
