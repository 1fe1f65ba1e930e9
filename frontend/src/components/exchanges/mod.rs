//! Exchange queues page: root module wiring the Yew `Component` implementation
//! with submodules for state, messages, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export `Msg`, `DraftField`, `ExchangesProps` and `ExchangesComponent`.
//! - Request the exchange listing as soon as the page is created.
//! - Host the bulk compose dialog, which it opens for the selected exchange.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{DraftField, Msg};
pub use props::ExchangesProps;
pub use state::ExchangesComponent;

impl Component for ExchangesComponent {
    type Message = Msg;
    type Properties = ExchangesProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        ExchangesComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
