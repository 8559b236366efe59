use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::navigation::NavMailbox;
use crate::repository::Repository;
use crate::services::{CustomerStore, ListController};
use crate::ui_dioxus::router::Route;

/// Root component. Expects an [`AppConfig`] in the root context and
/// provides the session state every screen shares.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();

    let repository = use_context_provider(|| Arc::new(Repository::for_platform(&config)));
    let store = use_context_provider(|| CustomerStore::load(repository.cache.clone()));
    use_context_provider(|| Signal::new(ListController::new(store.clone(), &config)));
    // one-shot payload slot, never rendered
    use_context_provider(|| CopyValue::new(NavMailbox::new()));

    rsx! {
        div {
            class: "app-container",
            style: "font-family: system-ui, sans-serif; background: #f8fbff; min-height: 100vh;",
            Router::<Route> {}
        }
    }
}
