//! Bulk compose dialog: root module wiring the Yew `Component` implementation
//! with submodules for state, messages, update logic and view rendering.
//!
//! Responsibilities
//! - Re-export `Msg`, `BulkComposeProps`, `BulkComposeComponent` and
//!   `RecipientSource`.
//! - Delegate to `update::update` and `view::view`.
//! - Follow the parent's `open` prop: slide the sheet in and apply the
//!   preselected exchange when it turns on, slide it out and reset the form
//!   when it turns off.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::BulkComposeProps;
pub use state::{BulkComposeComponent, RecipientSource};

use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

impl Component for BulkComposeComponent {
    type Message = Msg;
    type Properties = BulkComposeProps;

    fn create(ctx: &Context<Self>) -> Self {
        BulkComposeComponent::new(ctx.props().selected_exchange.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.open != old_props.open {
            if props.open {
                if let Some(id) = &props.selected_exchange {
                    self.exchange_id = id.clone();
                }
                open_top_sheet(&self.sheet_ref);
            } else {
                // Pending reads and sends keep running; their results are
                // ignored or only toast once the form is reset.
                close_top_sheet(&self.sheet_ref);
                self.reset();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && ctx.props().open {
            open_top_sheet(&self.sheet_ref);
        }
    }
}
