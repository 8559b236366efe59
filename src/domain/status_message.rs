use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_STATUS_TTL_MS: i64 = 2000;

/// Transient banner text. At most one message is live; setting a new one
/// restarts the expiry window and bumps the generation so that an expiry
/// scheduled for the previous message no longer applies.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    text: Option<String>,
    generation: u64,
    expires_at: Option<DateTime<Utc>>,
    ttl: Duration,
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::new(Duration::milliseconds(DEFAULT_STATUS_TTL_MS))
    }
}

impl StatusMessage {
    pub fn new(ttl: Duration) -> Self {
        Self {
            text: None,
            generation: 0,
            expires_at: None,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Shows `text` from `now` and returns the generation the caller's
    /// timer must present to [`StatusMessage::expire`].
    pub fn set(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.generation += 1;
        self.text = Some(text.into());
        self.expires_at = Some(now + self.ttl);
        self.generation
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.text = None;
        self.expires_at = None;
    }

    /// Clears the message if `generation` is still the live one.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.text.is_none() {
            return false;
        }
        self.text = None;
        self.expires_at = None;
        true
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The message as it would appear at `now`, ignoring whether the timer
    /// has fired yet.
    pub fn visible_at(&self, now: DateTime<Utc>) -> Option<&str> {
        match self.expires_at {
            Some(deadline) if now < deadline => self.text.as_deref(),
            _ => None,
        }
    }
}
