use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "loader",
            style: "display: inline-block; width: 32px; height: 32px; border: 3px solid #e5e7eb;
                   border-top-color: #3b82f6; border-radius: 50%; animation: spin 0.8s linear infinite;",
            role: "status",
            span { style: "position: absolute; left: -9999px;", "Loading..." }
        }
    }
}
