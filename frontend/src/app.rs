use crate::api::ApiClient;
use crate::components::exchanges::ExchangesComponent;
use crate::storage::CacheHandle;
use yew::{html, Component, Context, Html};

pub struct App {
    cache: CacheHandle,
    api: ApiClient,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            cache: CacheHandle::browser(),
            api: ApiClient::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <ExchangesComponent cache={self.cache.clone()} api={self.api.clone()} />
            </div>
        }
    }
}
