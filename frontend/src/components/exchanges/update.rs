//! Update function for the exchange queues page.
//!
//! A single Elm-style `update` mutates the page state for each `Msg` and
//! returns whether to re-render. The server stays the source of truth for
//! exchanges; queues created or deleted here are mirrored into the local
//! cache so they survive a reload even when the listing omits them.
//!
//! Key behaviors
//! - Load fetches the exchanges and lays the cached queues over them; the
//!   selection falls back to the first exchange when it vanished.
//! - Create validates the draft (queue, country code, MCC, MNC), posts it,
//!   then appends the queue to the cache and to the in-memory list.
//! - Delete is tracked per `(exchange, queue)` so identical names on other
//!   exchanges stay usable. Success removes the queue from cache and list;
//!   failure offers to forget the queue in this browser only.
//! - Cache failures never surface here; the cache reports them itself.

use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ExchangesComponent, PendingRemoval};
use crate::helpers::{format_count, show_toast, ToastKind};

pub fn update(component: &mut ExchangesComponent, ctx: &Context<ExchangesComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            component.error = None;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api.list_exchanges().await));
            });
            true
        }
        Msg::Loaded(Ok(exchanges)) => {
            component.loading = false;
            component.exchanges = ctx.props().cache.merge_into_exchange_list(&exchanges);
            let still_listed = component
                .selected
                .as_deref()
                .is_some_and(|id| component.exchanges.iter().any(|e| e.exchange_id == id));
            if !still_listed {
                component.selected = component.exchanges.first().map(|e| e.exchange_id.clone());
            }
            true
        }
        Msg::Loaded(Err(err)) => {
            component.loading = false;
            component.error = Some(err.to_string());
            true
        }

        Msg::SelectExchange(id) => {
            component.selected = (!id.is_empty()).then_some(id);
            component.draft_error = None;
            true
        }
        Msg::EditDraft(field, value) => {
            component.set_draft_value(field, value);
            component.draft_error = None;
            true
        }
        Msg::CreateQueue => {
            if component.creating {
                return false;
            }
            let Some(exchange_id) = component.selected.clone() else {
                component.draft_error = Some("Select an exchange first".into());
                return true;
            };
            if let Some(field) = component.draft.first_missing_field() {
                component.draft_error = Some(format!("{field} is required"));
                return true;
            }

            component.creating = true;
            let draft = component.draft.clone();
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api.create_queue(&exchange_id, &draft).await {
                    Ok(queue) => link.send_message(Msg::QueueCreated { exchange_id, queue }),
                    Err(err) => link.send_message(Msg::CreateFailed(err)),
                }
            });
            true
        }
        Msg::QueueCreated { exchange_id, queue } => {
            component.creating = false;
            component.draft = Default::default();
            ctx.props().cache.add_queue(&exchange_id, queue.clone());
            let label = queue.id.clone();
            if let Some(exchange) = component
                .exchanges
                .iter_mut()
                .find(|e| e.exchange_id == exchange_id)
            {
                exchange.queues.push(queue);
            }
            show_toast(&format!("Queue {label} created"), ToastKind::Info);
            true
        }
        Msg::CreateFailed(err) => {
            component.creating = false;
            component.draft_error = Some(err.to_string());
            true
        }

        Msg::DeleteQueue { exchange_id, queue_id } => {
            if !component.start_delete(&exchange_id, &queue_id) {
                return false;
            }
            component.pending_removal = None;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let msg = match api.delete_queue(&exchange_id, &queue_id).await {
                    Ok(()) => Msg::QueueDeleted { exchange_id, queue_id },
                    Err(error) => Msg::DeleteFailed {
                        exchange_id,
                        queue_id,
                        error,
                    },
                };
                link.send_message(msg);
            });
            true
        }
        Msg::QueueDeleted { exchange_id, queue_id } => {
            component.finish_delete(&exchange_id, &queue_id);
            ctx.props().cache.remove_queue(&exchange_id, &queue_id);
            component.drop_queue(&exchange_id, &queue_id);
            show_toast(&format!("Queue {queue_id} deleted"), ToastKind::Info);
            true
        }
        Msg::DeleteFailed {
            exchange_id,
            queue_id,
            error,
        } => {
            component.finish_delete(&exchange_id, &queue_id);
            component.pending_removal = Some(PendingRemoval {
                exchange_id,
                queue_id,
                reason: error.to_string(),
            });
            true
        }
        Msg::RemoveLocally => {
            if let Some(pending) = component.pending_removal.take() {
                ctx.props()
                    .cache
                    .remove_queue(&pending.exchange_id, &pending.queue_id);
                component.drop_queue(&pending.exchange_id, &pending.queue_id);
            }
            true
        }
        Msg::DismissLocalRemoval => {
            component.pending_removal = None;
            true
        }

        Msg::OpenCompose => {
            component.compose_open = true;
            true
        }
        Msg::CloseCompose => {
            component.compose_open = false;
            true
        }
        Msg::MessagesSent(count) => {
            gloo_console::log!(format!("bulk send accepted {} messages", format_count(count)));
            false
        }
    }
}
