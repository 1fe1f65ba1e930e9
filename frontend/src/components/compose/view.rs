//! View rendering for the bulk compose dialog.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::csv::parse_manual_recipients;

use super::messages::Msg;
use super::state::{BulkComposeComponent, RecipientSource};
use crate::components::data_sources::csv::CsvPreviewTable;
use crate::helpers::format_count;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn view(component: &BulkComposeComponent, ctx: &Context<BulkComposeComponent>) -> Html {
    let link = ctx.link();
    let busy = component.reading || component.sending;

    html! {
        <YwMaterialTopSheet node_ref={component.sheet_ref.clone()}>
            <div class="compose-dialog">
                <div class="dialog-header">
                    <h2>{"New bulk message"}</h2>
                    <button class="icon-btn" title="Close" onclick={link.callback(|_| Msg::Close)}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                </div>

                { exchange_selector(component, ctx) }
                { source_tabs(component, link) }

                {
                    match component.source {
                        RecipientSource::Manual => manual_recipients(component, link),
                        RecipientSource::Csv => csv_recipients(component, link),
                    }
                }

                { message_field(component, link) }

                {
                    if let Some(error) = &component.error {
                        html! { <div class="inline-error" role="alert">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }

                <div class="dialog-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::Close)}>{"Cancel"}</button>
                    <button class="btn primary" disabled={busy} onclick={link.callback(|_| Msg::Send)}>
                        { if component.sending { "Sending..." } else { "Send" } }
                    </button>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}

fn exchange_selector(
    component: &BulkComposeComponent,
    ctx: &Context<BulkComposeComponent>,
) -> Html {
    let onchange = ctx.link().callback(|e: Event| {
        Msg::SetExchange(e.target_unchecked_into::<HtmlSelectElement>().value())
    });

    html! {
        <label class="field">
            <span>{"Exchange"}</span>
            <select {onchange}>
                <option value="" selected={component.exchange_id.is_empty()}>{"Select an exchange"}</option>
                { for ctx.props().exchanges.iter().map(|exchange| html! {
                    <option
                        value={exchange.exchange_id.clone()}
                        selected={exchange.exchange_id == component.exchange_id}
                    >
                        { exchange.display_name().to_string() }
                    </option>
                }) }
            </select>
        </label>
    }
}

fn source_tabs(component: &BulkComposeComponent, link: &Scope<BulkComposeComponent>) -> Html {
    let tab = |source: RecipientSource, label: &'static str| {
        html! {
            <button
                class={classes!("tab-btn", (component.source == source).then_some("active"))}
                onclick={link.callback(move |_| Msg::SetSource(source))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="tab-bar">
            { tab(RecipientSource::Csv, "CSV file") }
            { tab(RecipientSource::Manual, "Enter numbers") }
        </div>
    }
}

fn manual_recipients(component: &BulkComposeComponent, link: &Scope<BulkComposeComponent>) -> Html {
    let count = parse_manual_recipients(&component.manual_numbers).len();

    html! {
        <label class="field">
            <span>{ format!("Recipients ({})", format_count(count)) }</span>
            <textarea
                rows="4"
                placeholder="+237600000000, +237611111111"
                value={component.manual_numbers.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateNumbers(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        </label>
    }
}

fn csv_recipients(component: &BulkComposeComponent, link: &Scope<BulkComposeComponent>) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(Msg::FileSelected)
    });

    html! {
        <div class="field">
            <input
                type="file"
                accept=".csv"
                style="display:none"
                ref={component.file_input_ref.clone()}
                {onchange}
            />
            <button class="btn" disabled={component.reading} onclick={link.callback(|_| Msg::OpenFileDialog)}>
                <i class="material-icons">{"upload_file"}</i>
                { component.file_name.clone().unwrap_or_else(|| "Choose a CSV file".to_string()) }
            </button>
            {
                if component.reading {
                    html! { <div class="spin" /> }
                } else if let Some(preview) = &component.preview {
                    html! { <CsvPreviewTable preview={preview.clone()} /> }
                } else {
                    html! {
                        <p class="hint">
                            {"Needs a phone, number or mobile column. Add a content or message column to send a different text per row."}
                        </p>
                    }
                }
            }
        </div>
    }
}

fn message_field(component: &BulkComposeComponent, link: &Scope<BulkComposeComponent>) -> Html {
    if component.per_row_content() {
        return html! {
            <p class="hint">{"Each recipient receives the text of the content column."}</p>
        };
    }

    html! {
        <label class="field">
            <span>{"Message"}</span>
            <textarea
                rows="5"
                value={component.message.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateMessage(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        </label>
    }
}
