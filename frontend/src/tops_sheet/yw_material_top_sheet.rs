//! Sheet that slides down from the top of the viewport, used for dialogs.
//!
//! The sheet is always mounted; visibility is the `show` CSS class, toggled
//! imperatively through the `NodeRef` handed to the component.

use gloo_timers::callback::Timeout;
use yew::{html, Component, Context, Html, NodeRef, Properties};

const SHOW_CLASS: &str = "show";

pub struct YwMaterialTopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

/// Shows the sheet after a short delay so the CSS transition runs even when
/// the sheet was rendered in the same frame.
pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(sheet) = top_sheet_ref.cast::<web_sys::Element>() {
        Timeout::new(50, move || {
            sheet.class_list().add_1(SHOW_CLASS).ok();
        })
        .forget();
    }
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(sheet) = top_sheet_ref.cast::<web_sys::Element>() {
        sheet.class_list().remove_1(SHOW_CLASS).ok();
    }
}
