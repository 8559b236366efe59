use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::customer::CustomerField;
use crate::domain::navigation::{NavMailbox, Screen};
use crate::services::{CustomerStore, ProfileController};
use crate::ui_dioxus::navigation::{navigate_to, navigate_with};

#[component]
pub fn ProfileView() -> Element {
    let store = use_context::<CustomerStore>();
    let mut mailbox = use_context::<CopyValue<NavMailbox>>();
    let navigator = use_navigator();

    // The payload is read exactly once, when this screen is created
    let payload = use_hook(move || mailbox.write().take(Screen::Profile));
    let mut profile = use_signal(move || ProfileController::from_payload(store, payload));

    let draft = profile.read().draft().cloned();

    let Some(draft) = draft else {
        return rsx! {
            div {
                style: "padding: 20px; max-width: 800px; margin: 0 auto;",
                "No customer data. "
                button {
                    style: "padding: 4px 10px; border: none; background: #3b82f6; color: white; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| navigate_to(navigator, mailbox, Screen::CustomerList),
                    "Back to list"
                }
            }
        };
    };

    rsx! {
        div {
            style: "padding: 20px; max-width: 800px; margin: 0 auto;",

            h4 { style: "font-size: 1.4rem; font-weight: 600; margin-bottom: 16px;", "Edit Profile" }

            for field in CustomerField::EDITABLE {
                div {
                    style: "margin-bottom: 16px;",
                    label {
                        style: "display: block; margin-bottom: 5px; font-weight: 500; text-transform: capitalize;",
                        {field.label()}
                    }
                    input {
                        r#type: "text",
                        name: field.label(),
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd;
                               border-radius: 4px; font-size: 14px;",
                        value: draft.field(field).to_string(),
                        oninput: move |e| profile.write().edit(field, e.value()),
                    }
                }
            }

            div {
                style: "display: flex; gap: 10px;",
                button {
                    style: "padding: 8px 20px; border: none; background: #3b82f6; color: white;
                           border-radius: 4px; cursor: pointer;",
                    onclick: move |_| {
                        let payload = profile.peek().save();
                        match payload {
                            Some(payload) => navigate_with(navigator, mailbox, payload),
                            None => navigate_to(navigator, mailbox, Screen::CustomerList),
                        }
                    },
                    "Save"
                }
                button {
                    style: "padding: 8px 20px; border: 1px solid #ddd; background: #6b7280; color: white;
                           border-radius: 4px; cursor: pointer;",
                    onclick: move |_| {
                        profile.peek().cancel();
                        navigate_to(navigator, mailbox, Screen::CustomerList);
                    },
                    "Cancel"
                }
            }
        }
    }
}
