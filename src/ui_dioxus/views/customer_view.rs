use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;
use tracing::debug;

use crate::domain::customer::{Customer, CustomerId};
use crate::domain::navigation::{NavMailbox, Screen};
use crate::repository::Repository;
use crate::repository::customer_repository::CustomerSource;
use crate::services::timer::sleep_ms;
use crate::services::{FetchTicket, ListController};
use crate::ui_dioxus::components::{CustomerModal, CustomerRowView, Loader};
use crate::ui_dioxus::navigation::navigate_with;

const HEADER_STYLE: &str = "color: rgb(98, 92, 141); font-weight: 300; background: rgb(248, 251, 255); text-align: left; padding: 8px;";

/// Runs the fetch for `ticket` and hands the result back to the controller.
fn spawn_fetch(repository: CopyValue<Arc<Repository>>, mut list: Signal<ListController>, ticket: FetchTicket) {
    let repository = Arc::clone(&repository.read());
    spawn(async move {
        let quantity = list.peek().quantity();
        let result = repository.customers.fetch_batch(quantity).await;
        list.write().complete_fetch(ticket, result);
    });
}

/// Clears the status line after its ttl. Any earlier timer is cancelled so
/// only the newest message owns the window.
fn schedule_status_expiry(mut list: Signal<ListController>, mut timer: Signal<Option<Task>>, generation: u64) {
    if let Some(previous) = timer.write().take() {
        previous.cancel();
    }
    let ttl_ms = list.peek().status().ttl().num_milliseconds().max(0) as u64;
    let task = spawn(async move {
        sleep_ms(ttl_ms).await;
        list.write().expire_status(generation);
    });
    timer.set(Some(task));
}

#[component]
pub fn CustomerView() -> Element {
    let mut list = use_context::<Signal<ListController>>();
    let mut mailbox = use_context::<CopyValue<NavMailbox>>();
    let navigator = use_navigator();
    let repository = use_hook(|| CopyValue::new(consume_context::<Arc<Repository>>()));
    let status_timer = use_signal(|| None::<Task>);

    // Entry: consume a pending payload, then fetch if needed
    use_effect(move || {
        let payload = mailbox.write().take(Screen::CustomerList);
        let ticket = list.write().enter(payload);
        if let Some(ticket) = ticket {
            spawn_fetch(repository, list, ticket);
        }
    });

    // Spawned fetches and timers die with this scope. The controller outlives
    // it, so it must not keep waiting on them.
    use_drop(move || {
        debug!("Customer view torn down");
        let mut state = list.write();
        state.abandon_fetch();
        state.clear_status();
    });

    let refresh = move |_| {
        let ticket = list.write().refresh();
        spawn_fetch(repository, list, ticket);
    };

    let state = list.read();
    let loading = state.is_loading();
    let rows: Vec<Customer> = state.rows().to_vec();
    let status = state.status().text().map(str::to_string);
    let last_error = state.last_error().map(str::to_string);
    let page = state.page();
    let total_pages = state.total_pages();
    let can_prev = state.can_prev();
    let can_next = state.can_next();
    let dialog_visible = state.dialog().is_visible();
    let dialog_customer = state.dialog().selected().cloned();
    drop(state);

    let dialog_key = dialog_customer
        .as_ref()
        .map(|c| c.id.to_string())
        .unwrap_or_else(|| "none".to_string());

    rsx! {
        div {
            class: "customer-view",
            style: "padding: 20px; max-width: 1200px; margin: 0 auto;",

            // Header
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",

                h4 { style: "font-size: 1.4rem; font-weight: 600;", "Customer View" }

                div {
                    style: "display: flex; gap: 8px; align-items: center;",

                    // Search is not wired to anything yet
                    input {
                        r#type: "text",
                        style: "width: 320px; height: 30px; padding: 4px 8px; border: 1px solid #e5e7eb; border-radius: 6px; background: #f3f4f6;",
                        placeholder: "Search transactions",
                    }
                    button {
                        style: "width: 80px; padding: 6px; border: none; background: #3b82f6; color: white; border-radius: 4px; cursor: pointer;",
                        onclick: refresh,
                        "Refresh"
                    }
                    button {
                        style: "padding: 6px 10px; border: none; background: none; cursor: pointer;",
                        "View All"
                    }
                }
            }

            if let Some(message) = status {
                div {
                    style: "padding: 12px; background: #d1fae5; border: 1px solid #6ee7b7; border-radius: 6px; color: #065f46; margin-bottom: 12px;",
                    "{message}"
                }
            }

            if let Some(error) = last_error {
                div {
                    style: "padding: 12px; background: #fee2e2; border: 1px solid #fca5a5; border-radius: 6px; color: #991b1b; margin-bottom: 12px;",
                    "{error}"
                }
            }

            table {
                style: "width: 100%; border-collapse: collapse; border-bottom: 1px solid rgb(243, 240, 240);",
                thead {
                    tr {
                        th { style: HEADER_STYLE, "Customer Name" }
                        th { style: HEADER_STYLE, "Email" }
                        th { style: HEADER_STYLE, "Loan Type" }
                        th { style: HEADER_STYLE, "Outstanding Blc" }
                        th { style: HEADER_STYLE, "Status" }
                        th { style: HEADER_STYLE, "Action" }
                    }
                }
                tbody {
                    if loading {
                        tr {
                            td {
                                colspan: "6",
                                style: "text-align: center; padding: 24px;",
                                Loader {}
                            }
                        }
                    } else {
                        for customer in rows.iter().cloned() {
                            CustomerRowView {
                                key: "{customer.id}",
                                customer: customer.clone(),
                                on_open: move |customer: Customer| list.write().open_dialog(customer),
                                on_edit: move |customer: Customer| {
                                    let payload = list.peek().request_edit(customer);
                                    navigate_with(navigator, mailbox, payload);
                                },
                                on_delete: move |id: CustomerId| {
                                    let outcome = list.write().delete(&id, chrono::Utc::now());
                                    if let Some(generation) = outcome.status_generation {
                                        schedule_status_expiry(list, status_timer, generation);
                                    }
                                    if let Some(ticket) = outcome.refetch {
                                        spawn_fetch(repository, list, ticket);
                                    }
                                },
                            }
                        }
                    }
                }
            }

            if !loading && rows.is_empty() {
                div {
                    style: "text-align: center; padding: 24px; background: #e0f2fe; border-radius: 6px; margin-top: 12px;",
                    "No customers found. "
                    button {
                        style: "margin-left: 8px; padding: 4px 10px; border: none; background: #3b82f6; color: white; border-radius: 4px; cursor: pointer;",
                        onclick: refresh,
                        "Refresh"
                    }
                }
            }

            // Pager
            div {
                style: "text-align: center; margin-top: 12px; display: flex; justify-content: center; align-items: center; gap: 8px;",
                button {
                    r#type: "button",
                    disabled: !can_prev,
                    style: "padding: 6px 12px; border: none; background: #3b82f6; color: white; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| {
                        list.write().prev_page();
                    },
                    "← Previous"
                }
                span { style: "color: #6b7280;", "Page {page} of {total_pages}" }
                button {
                    r#type: "button",
                    disabled: !can_next,
                    style: "padding: 6px 12px; border: none; background: #3b82f6; color: white; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| {
                        list.write().next_page();
                    },
                    "Next →"
                }
            }

            CustomerModal {
                key: "{dialog_key}",
                customer: dialog_customer,
                visible: dialog_visible,
                on_close: move |_| list.write().close_dialog(),
            }
        }
    }
}
