use common::model::exchange::Exchange;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::{DraftField, Msg};
use super::state::ExchangesComponent;
use crate::components::compose::BulkComposeComponent;

const DRAFT_FIELDS: [(DraftField, &str); 6] = [
    (DraftField::Queue, "Queue name"),
    (DraftField::CountryCode, "Country code"),
    (DraftField::Mcc, "MCC"),
    (DraftField::Mnc, "MNC"),
    (DraftField::RoutingKey, "Routing key"),
    (DraftField::Vhost, "Vhost"),
];

pub fn view(component: &ExchangesComponent, ctx: &Context<ExchangesComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="exchanges-page">
            <div class="page-header">
                <h1>{"Exchanges"}</h1>
                <button class="icon-btn" title="Reload" onclick={link.callback(|_| Msg::Load)}>
                    <i class="material-icons">{"refresh"}</i>
                </button>
                <button class="btn primary" disabled={component.exchanges.is_empty()} onclick={link.callback(|_| Msg::OpenCompose)}>
                    <i class="material-icons">{"send"}</i>{" Bulk message"}
                </button>
            </div>

            {
                if component.loading {
                    html! { <div class="spin" /> }
                } else if let Some(error) = &component.error {
                    html! { <div class="inline-error" role="alert">{ error.clone() }</div> }
                } else {
                    html! {}
                }
            }

            { exchange_selector(component, link) }
            { local_removal_prompt(component, link) }

            {
                match component.selected_exchange() {
                    Some(exchange) => queue_table(component, exchange, link),
                    None => html! { <p class="hint">{"No exchange selected."}</p> },
                }
            }

            { queue_form(component, link) }

            <BulkComposeComponent
                exchanges={component.exchanges.clone()}
                api={ctx.props().api.clone()}
                open={component.compose_open}
                selected_exchange={component.selected.clone()}
                on_close={link.callback(|_| Msg::CloseCompose)}
                on_sent={link.callback(Msg::MessagesSent)}
            />
        </div>
    }
}

fn exchange_selector(component: &ExchangesComponent, link: &Scope<ExchangesComponent>) -> Html {
    let onchange = link.callback(|e: Event| {
        Msg::SelectExchange(e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    let selected = component.selected.as_deref().unwrap_or_default();

    html! {
        <select class="exchange-select" {onchange}>
            { for component.exchanges.iter().map(|exchange| html! {
                <option value={exchange.exchange_id.clone()} selected={exchange.exchange_id == selected}>
                    { format!("{} ({})", exchange.display_name(), exchange.queues.len()) }
                </option>
            }) }
        </select>
    }
}

fn queue_table(
    component: &ExchangesComponent,
    exchange: &Exchange,
    link: &Scope<ExchangesComponent>,
) -> Html {
    if exchange.queues.is_empty() {
        return html! { <p class="hint">{"This exchange has no queues yet."}</p> };
    }

    html! {
        <table class="queue-table">
            <thead>
                <tr>
                    <th>{"Queue"}</th>
                    <th>{"Country"}</th>
                    <th>{"MCC"}</th>
                    <th>{"MNC"}</th>
                    <th>{"Routing key"}</th>
                    <th>{"Vhost"}</th>
                    <th />
                </tr>
            </thead>
            <tbody>
                { for exchange.queues.iter().enumerate().map(|(idx, queue)| {
                    let exchange_id = exchange.exchange_id.clone();
                    let queue_id = queue.id.clone();
                    let busy = component.is_deleting(&exchange.exchange_id, &queue.id);
                    html! {
                        <tr key={row_key(idx, &queue.id)}>
                            <td>{ queue.id.clone() }</td>
                            <td>{ queue.country_code.clone() }</td>
                            <td>{ queue.mcc.clone() }</td>
                            <td>{ queue.mnc.clone() }</td>
                            <td>{ queue.routing_key.clone() }</td>
                            <td>{ queue.vhost.clone() }</td>
                            <td>
                                <button
                                    class="icon-btn"
                                    title="Delete queue"
                                    disabled={busy}
                                    onclick={link.callback(move |_| Msg::DeleteQueue {
                                        exchange_id: exchange_id.clone(),
                                        queue_id: queue_id.clone(),
                                    })}
                                >
                                    <i class="material-icons">{"delete"}</i>
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

// The cache keeps duplicates, so the id alone is not a unique key.
fn row_key(idx: usize, queue_id: &str) -> String {
    format!("{idx}:{queue_id}")
}

fn local_removal_prompt(component: &ExchangesComponent, link: &Scope<ExchangesComponent>) -> Html {
    let Some(pending) = &component.pending_removal else {
        return html! {};
    };

    html! {
        <div class="inline-error" role="alert">
            <p>{ format!("Could not delete {}: {}", pending.queue_id, pending.reason) }</p>
            <button class="btn" onclick={link.callback(|_| Msg::RemoveLocally)}>{"Remove from this browser"}</button>
            <button class="btn" onclick={link.callback(|_| Msg::DismissLocalRemoval)}>{"Keep"}</button>
        </div>
    }
}

fn queue_form(component: &ExchangesComponent, link: &Scope<ExchangesComponent>) -> Html {
    html! {
        <div class="queue-form">
            <h2>{"Add a queue"}</h2>
            { for DRAFT_FIELDS.iter().map(|&(field, label)| html! {
                <label class="field">
                    <span>{ label }</span>
                    <input
                        type="text"
                        value={component.draft_value(field).to_string()}
                        oninput={link.callback(move |e: InputEvent| {
                            Msg::EditDraft(field, e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
            }) }
            {
                if let Some(error) = &component.draft_error {
                    html! { <div class="inline-error">{ error.clone() }</div> }
                } else {
                    html! {}
                }
            }
            <button class="btn primary" disabled={component.creating} onclick={link.callback(|_| Msg::CreateQueue)}>
                { if component.creating { "Creating..." } else { "Create queue" } }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::row_key;

    #[test]
    fn duplicate_queues_get_distinct_row_keys() {
        assert_ne!(row_key(0, "mtn"), row_key(1, "mtn"));
    }
}
