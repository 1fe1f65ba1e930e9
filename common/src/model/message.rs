//! Bulk-send request bodies.

use serde::{Deserialize, Serialize};

/// One SMS addressed to one recipient through one exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub phone_number: String,
    pub content: String,
    pub exchange_id: String,
}

/// JSON body of the bulk-send endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    pub messages: Vec<OutboundMessage>,
}

impl SendRequest {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
