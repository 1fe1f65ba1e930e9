//! Client for the QueueDroid REST API.
//!
//! Every request carries the bearer token kept under the `token` storage
//! key. Responses outside the 2xx range become [`ApiError::Status`] with the
//! server's message when it sent one.

use common::cache::KeyValueStorage;
use common::config::TOKEN_KEY;
use common::model::exchange::Exchange;
use common::model::message::SendRequest;
use common::model::queue::{NewQueue, Queue};
use common::requests::{ApiErrorBody, ExchangeListResponse};
use gloo_net::http::{Request, RequestBuilder, Response};

use crate::config::api_base_url;
use crate::storage::BrowserStorage;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Your session has expired, sign in again")]
    Unauthorized,

    #[error("Server answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            gloo_net::Error::JsError(e) => ApiError::Network(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(api_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_exchanges(&self) -> Result<Vec<Exchange>, ApiError> {
        let response = self
            .authorized(Request::get(&self.url("/exchanges")))
            .send()
            .await?;
        let body: ExchangeListResponse = checked(response).await?.json().await?;
        Ok(body.into_exchanges())
    }

    /// Creates a queue and returns it as it should be cached. When the
    /// server's answer does not describe the queue, the draft is used.
    pub async fn create_queue(&self, exchange_id: &str, draft: &NewQueue) -> Result<Queue, ApiError> {
        let url = self.url(&format!("/exchanges/{}/queues", segment(exchange_id)));
        let response = self
            .authorized(Request::post(&url))
            .json(draft)?
            .send()
            .await?;
        let text = checked(response).await?.text().await?;

        let mut queue = serde_json::from_str::<Queue>(&text)
            .unwrap_or_else(|_| draft.clone().into_queue(exchange_id));
        if queue.exchange.is_empty() {
            queue.exchange = exchange_id.to_string();
        }
        Ok(queue)
    }

    pub async fn delete_queue(&self, exchange_id: &str, queue_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!(
            "/exchanges/{}/queues/{}",
            segment(exchange_id),
            segment(queue_id)
        ));
        let response = self.authorized(Request::delete(&url)).send().await?;
        checked(response).await?;
        Ok(())
    }

    pub async fn send_messages(&self, request: &SendRequest) -> Result<(), ApiError> {
        let response = self
            .authorized(Request::post(&self.url("/messages/send")))
            .json(request)?
            .send()
            .await?;
        checked(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match BrowserStorage.get_item(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => {
                builder.header("Authorization", &format!("Bearer {token}"))
            }
            _ => builder,
        }
    }
}

fn segment(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            if text.trim().is_empty() {
                response.status_text()
            } else {
                text
            }
        });
    Err(ApiError::Status { status, message })
}
