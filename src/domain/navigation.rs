use crate::domain::customer::Customer;
use tracing::debug;

/// Screens that can receive a navigation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    CustomerList,
    Profile,
}

/// Value attached to a single navigation event.
#[derive(Debug, Clone, PartialEq)]
pub enum NavPayload {
    /// list -> profile: the record to edit
    Edit(Customer),
    /// profile -> list: a save just happened, skip the fetch
    Saved,
}

impl NavPayload {
    pub fn target(&self) -> Screen {
        match self {
            NavPayload::Edit(_) => Screen::Profile,
            NavPayload::Saved => Screen::CustomerList,
        }
    }
}

/// Holds at most one pending payload between a navigation call and the
/// screen that receives it. Reading always clears the slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavMailbox {
    pending: Option<NavPayload>,
}

impl NavMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was pending.
    pub fn send(&mut self, payload: NavPayload) {
        self.pending = Some(payload);
    }

    /// Clears the slot and returns the payload only if it was addressed to
    /// `screen`. A payload meant for another screen is dropped.
    pub fn take(&mut self, screen: Screen) -> Option<NavPayload> {
        let payload = self.pending.take()?;
        if payload.target() == screen {
            Some(payload)
        } else {
            debug!(expected = ?screen, addressed = ?payload.target(), "Discarding misaddressed navigation payload");
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}
