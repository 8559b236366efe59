use dioxus::prelude::*;
use dioxus_router::prelude::*;
use crate::domain::navigation::{NavMailbox, NavPayload, Screen};
use crate::ui_dioxus::router::Route;
use tracing::debug;

pub fn route_for(screen: Screen) -> Route {
    match screen {
        Screen::CustomerList => Route::CustomerList {},
        Screen::Profile => Route::Profile {},
    }
}

/// Navigates to the payload's screen with the payload attached to this one
/// navigation.
pub fn navigate_with(navigator: Navigator, mut mailbox: CopyValue<NavMailbox>, payload: NavPayload) {
    let route = route_for(payload.target());
    debug!(?route, "Navigating with payload");
    mailbox.write().send(payload);
    navigator.push(route);
}

/// Plain navigation. Any payload still pending is dropped first so it
/// cannot be picked up by this visit.
pub fn navigate_to(navigator: Navigator, mut mailbox: CopyValue<NavMailbox>, screen: Screen) {
    mailbox.write().take(screen);
    navigator.push(route_for(screen));
}
