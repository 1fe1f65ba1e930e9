use common::model::exchange::Exchange;
use common::model::queue::NewQueue;

use super::messages::DraftField;

/// A queue the server refused to delete, kept until the user decides
/// whether to forget it locally.
#[derive(Clone, PartialEq)]
pub struct PendingRemoval {
    pub exchange_id: String,
    pub queue_id: String,
    pub reason: String,
}

pub struct ExchangesComponent {
    pub exchanges: Vec<Exchange>,
    pub loading: bool,
    pub error: Option<String>,

    /// Exchange the creation form and the compose dialog target.
    pub selected: Option<String>,
    pub draft: NewQueue,
    pub creating: bool,
    pub draft_error: Option<String>,

    /// `(exchange id, queue id)` pairs with a delete request in flight.
    pub deleting: Vec<(String, String)>,
    pub pending_removal: Option<PendingRemoval>,

    pub compose_open: bool,
}

impl ExchangesComponent {
    pub fn new() -> Self {
        Self {
            exchanges: Vec::new(),
            loading: true,
            error: None,
            selected: None,
            draft: NewQueue::default(),
            creating: false,
            draft_error: None,
            deleting: Vec::new(),
            pending_removal: None,
            compose_open: false,
        }
    }

    pub fn selected_exchange(&self) -> Option<&Exchange> {
        let id = self.selected.as_deref()?;
        self.exchanges.iter().find(|e| e.exchange_id == id)
    }

    pub fn draft_value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Queue => &self.draft.queue,
            DraftField::CountryCode => &self.draft.country_code,
            DraftField::Mcc => &self.draft.mcc,
            DraftField::Mnc => &self.draft.mnc,
            DraftField::RoutingKey => &self.draft.routing_key,
            DraftField::Vhost => &self.draft.vhost,
        }
    }

    pub fn set_draft_value(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Queue => &mut self.draft.queue,
            DraftField::CountryCode => &mut self.draft.country_code,
            DraftField::Mcc => &mut self.draft.mcc,
            DraftField::Mnc => &mut self.draft.mnc,
            DraftField::RoutingKey => &mut self.draft.routing_key,
            DraftField::Vhost => &mut self.draft.vhost,
        };
        *slot = value;
    }

    pub fn is_deleting(&self, exchange_id: &str, queue_id: &str) -> bool {
        self.deleting
            .iter()
            .any(|(e, q)| e == exchange_id && q == queue_id)
    }

    /// Marks a delete as in flight. False when one is already running.
    pub fn start_delete(&mut self, exchange_id: &str, queue_id: &str) -> bool {
        if self.is_deleting(exchange_id, queue_id) {
            return false;
        }
        self.deleting
            .push((exchange_id.to_string(), queue_id.to_string()));
        true
    }

    pub fn finish_delete(&mut self, exchange_id: &str, queue_id: &str) {
        self.deleting
            .retain(|(e, q)| !(e == exchange_id && q == queue_id));
    }

    /// Mirrors a cache removal in the rendered list.
    pub fn drop_queue(&mut self, exchange_id: &str, queue_id: &str) {
        for exchange in self
            .exchanges
            .iter_mut()
            .filter(|e| e.exchange_id == exchange_id)
        {
            exchange.queues.retain(|q| q.id != queue_id);
        }
    }
}
