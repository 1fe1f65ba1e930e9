use yew::prelude::*;

use crate::api::ApiClient;
use crate::storage::CacheHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct ExchangesProps {
    pub cache: CacheHandle,
    pub api: ApiClient,
}
