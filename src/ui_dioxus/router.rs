use dioxus::prelude::*;
use crate::ui_dioxus::views::{CustomerView, ProfileView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    CustomerList {},

    #[route("/profile")]
    Profile {},
}

#[component]
fn CustomerList() -> Element {
    rsx! { CustomerView {} }
}

#[component]
fn Profile() -> Element {
    rsx! { ProfileView {} }
}
