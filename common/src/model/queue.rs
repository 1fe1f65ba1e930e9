//! Queue records bound to an exchange.
//!
//! The API and older cache entries name the queue identifier either `id` or
//! `queue`. Both spellings are folded into [`Queue::id`] while deserializing,
//! so the rest of the crate only ever looks at one field.

use serde::{Deserialize, Serialize};

use super::flexible;

/// An AMQP-style queue routing SMS traffic for one carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQueue", into = "WireQueue")]
pub struct Queue {
    /// Canonical queue identifier.
    pub id: String,
    pub country_code: String,
    /// Mobile Country Code.
    pub mcc: String,
    /// Mobile Network Code.
    pub mnc: String,
    pub routing_key: String,
    pub vhost: String,
    /// Identifier of the parent exchange.
    pub exchange: String,
}

/// Body of a queue creation request. The server assigns nothing we rely on,
/// so a successful creation can be cached as [`NewQueue::into_queue`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQueue {
    pub queue: String,
    pub country_code: String,
    pub mcc: String,
    pub mnc: String,
    pub routing_key: String,
    pub vhost: String,
}

impl NewQueue {
    pub fn into_queue(self, exchange_id: &str) -> Queue {
        Queue {
            id: self.queue,
            country_code: self.country_code,
            mcc: self.mcc,
            mnc: self.mnc,
            routing_key: self.routing_key,
            vhost: self.vhost,
            exchange: exchange_id.to_string(),
        }
    }

    /// Name of the first required field left blank, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("queue", &self.queue),
            ("country_code", &self.country_code),
            ("mcc", &self.mcc),
            ("mnc", &self.mnc),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

#[derive(Deserialize)]
struct RawQueue {
    #[serde(default, deserialize_with = "flexible::opt_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    queue: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    country_code: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    mcc: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    mnc: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    routing_key: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    vhost: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    exchange: Option<String>,
}

impl TryFrom<RawQueue> for Queue {
    type Error = String;

    fn try_from(raw: RawQueue) -> Result<Self, Self::Error> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let id = non_blank(raw.id)
            .or_else(|| non_blank(raw.queue))
            .ok_or_else(|| "queue record has neither `id` nor `queue`".to_string())?;

        Ok(Queue {
            id,
            country_code: raw.country_code.unwrap_or_default(),
            mcc: raw.mcc.unwrap_or_default(),
            mnc: raw.mnc.unwrap_or_default(),
            routing_key: raw.routing_key.unwrap_or_default(),
            vhost: raw.vhost.unwrap_or_default(),
            exchange: raw.exchange.unwrap_or_default(),
        })
    }
}

// Written with both identifier spellings so other readers of the same
// storage key keep resolving the queue.
#[derive(Serialize)]
struct WireQueue {
    id: String,
    queue: String,
    country_code: String,
    mcc: String,
    mnc: String,
    routing_key: String,
    vhost: String,
    exchange: String,
}

impl From<Queue> for WireQueue {
    fn from(q: Queue) -> Self {
        WireQueue {
            queue: q.id.clone(),
            id: q.id,
            country_code: q.country_code,
            mcc: q.mcc,
            mnc: q.mnc,
            routing_key: q.routing_key,
            vhost: q.vhost,
            exchange: q.exchange,
        }
    }
}
