//! Records exchanged with the QueueDroid API and shown by the dashboard.

pub mod csv;
pub mod exchange;
pub mod message;
pub mod queue;

/// Field adapters for API payloads that send codes either as strings or numbers.
pub(crate) mod flexible {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(D::Error::custom(format!(
                "expected a string or a number, found {other}"
            ))),
        }
    }
}
