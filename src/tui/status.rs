//! Temporary status bar messages.

use std::time::{Duration, Instant};

/// A status message that optionally clears itself after a delay.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    set_at: Option<Instant>,
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Drop the message if its auto-clear delay has elapsed.
    pub fn expire(&mut self) {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.clear();
            }
        }
    }

    /// Current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}
