//! Exchange records as returned by the listing endpoint.
//!
//! The dashboard does not own exchanges. It only replaces their `queues`
//! array with the locally cached one, so every field it does not know about
//! is carried through untouched in [`Exchange::extra`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::flexible;
use super::queue::Queue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExchange")]
pub struct Exchange {
    pub exchange_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub queues: Vec<Queue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Exchange {
    /// Human readable name: the label when present, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(&self.exchange_id)
    }
}

#[derive(Deserialize)]
struct RawExchange {
    #[serde(default, deserialize_with = "flexible::opt_string")]
    exchange_id: Option<String>,
    #[serde(default, deserialize_with = "flexible::opt_string")]
    id: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    queues: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawExchange> for Exchange {
    type Error = String;

    fn try_from(raw: RawExchange) -> Result<Self, Self::Error> {
        let exchange_id = raw
            .exchange_id
            .or(raw.id)
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| "exchange record has neither `exchange_id` nor `id`".to_string())?;

        Ok(Exchange {
            exchange_id,
            label: raw.label,
            description: raw.description,
            created_at: raw.created_at,
            queues: lenient_queues(raw.queues),
            extra: raw.extra,
        })
    }
}

// Server-side queues are replaced by the cached ones anyway, so an element
// of another shape is dropped instead of failing the whole listing.
fn lenient_queues(value: Option<Value>) -> Vec<Queue> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_either_identifier_field() {
        let a: Exchange = serde_json::from_value(json!({ "exchange_id": "ex1" })).unwrap();
        let b: Exchange = serde_json::from_value(json!({ "id": 42, "label": "Promo" })).unwrap();
        assert_eq!(a.exchange_id, "ex1");
        assert_eq!(b.exchange_id, "42");
        assert_eq!(b.display_name(), "Promo");
        assert_eq!(a.display_name(), "ex1");
    }

    #[test]
    fn null_queues_become_empty() {
        let ex: Exchange =
            serde_json::from_value(json!({ "exchange_id": "ex1", "queues": null })).unwrap();
        assert!(ex.queues.is_empty());
        let out = serde_json::to_value(&ex).unwrap();
        assert_eq!(out["queues"], json!([]));
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let ex: Exchange = serde_json::from_value(json!({
            "exchange_id": "ex1",
            "owner": { "name": "ops" },
            "priority": 3,
        }))
        .unwrap();
        assert_eq!(ex.extra["priority"], 3);
        let out = serde_json::to_value(&ex).unwrap();
        assert_eq!(out["owner"]["name"], "ops");
    }

    #[test]
    fn queues_of_another_shape_do_not_fail_the_record() {
        let ex: Exchange = serde_json::from_value(json!({
            "exchange_id": "ex1",
            "queues": ["mtn_cm", { "mcc": 624 }, { "queue": "orange_cm" }],
        }))
        .unwrap();
        assert_eq!(ex.queues.len(), 1);
        assert_eq!(ex.queues[0].id, "orange_cm");

        let odd: Exchange =
            serde_json::from_value(json!({ "exchange_id": "ex2", "queues": "none" })).unwrap();
        assert!(odd.queues.is_empty());
    }
}
