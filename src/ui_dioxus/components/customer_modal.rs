use dioxus::prelude::*;
use crate::domain::customer::Customer;
use tracing::debug;

/// Read-only summary of one customer. Mount it with a `key` derived from the
/// record so a different record gets a fresh instance.
#[component]
pub fn CustomerModal(
    customer: Option<Customer>,
    visible: bool,
    on_close: EventHandler<()>,
) -> Element {
    // fade-in flag, flipped after the first paint
    let mut shown = use_signal(|| false);

    use_effect(move || {
        if visible {
            shown.set(true);
        }
    });

    use_drop(move || debug!("Customer dialog disposed"));

    if !visible {
        return None;
    }

    let opacity = if shown() { "1" } else { "0" };

    rsx! {
        // Modal backdrop
        div {
            id: "customerModal",
            class: "modal fade show",
            role: "dialog",
            "aria-modal": "true",
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 1000;
                   display: flex; align-items: center; justify-content: center;
                   transition: opacity 0.15s linear; opacity: {opacity};",

            // Modal content
            div {
                style: "background: white; border-radius: 12px; padding: 24px;
                       width: 90%; max-width: 480px;
                       box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                    h5 { style: "margin: 0; font-size: 20px; font-weight: 600;", "Customer Details" }
                    button {
                        style: "background: none; border: none; font-size: 24px; cursor: pointer;",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div {
                    if let Some(customer) = customer {
                        p { strong { "Name: " } "{customer.firstname} {customer.lastname}" }
                        p { strong { "Email: " } "{customer.email}" }
                        p { strong { "Phone: " } "{customer.phone}" }
                        p { strong { "Gender: " } "{customer.gender}" }
                        p { strong { "Birthday: " } "{customer.birthday}" }
                        p { strong { "Website: " } "{customer.website}" }
                        p { strong { "Address: " } {customer.address.summary()} }
                    } else {
                        p { "No customer selected." }
                    }
                }

                div {
                    style: "display: flex; justify-content: flex-end; margin-top: 16px;",
                    button {
                        style: "padding: 8px 20px; border: 1px solid #ddd; background: #6b7280;
                               color: white; border-radius: 4px; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
