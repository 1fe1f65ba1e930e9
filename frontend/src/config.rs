/// Used when the bundle is built without `QDROID_API_URL`.
pub const DEFAULT_API_URL: &str = "/api";

/// Base URL of the QueueDroid REST API, fixed at build time.
pub fn api_base_url() -> &'static str {
    option_env!("QDROID_API_URL").unwrap_or(DEFAULT_API_URL)
}
