use serde::Deserialize;

use crate::model::exchange::Exchange;

/// Body of the exchange listing endpoint. Deployments answer either with a
/// bare array or with the array wrapped in an envelope.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum ExchangeListResponse {
    Bare(Vec<Exchange>),
    Exchanges { exchanges: Vec<Exchange> },
    Data { data: Vec<Exchange> },
}

impl ExchangeListResponse {
    pub fn into_exchanges(self) -> Vec<Exchange> {
        match self {
            ExchangeListResponse::Bare(list)
            | ExchangeListResponse::Exchanges { exchanges: list }
            | ExchangeListResponse::Data { data: list } => list,
        }
    }
}

/// Error body returned by the API on 4xx/5xx responses.
#[derive(Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default, alias = "error", alias = "detail")]
    pub message: Option<String>,
}
