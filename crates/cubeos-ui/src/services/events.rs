//! Window event bridge for session notifications.

use crate::core::platform::SessionEvents;
use gloo::console;
use gloo::utils::window;
use web_sys::CustomEvent;

/// [`SessionEvents`] that dispatches a `CustomEvent` on `window`.
#[derive(Clone, Debug)]
pub struct WindowSessionEvents {
    expired_event: String,
}

impl WindowSessionEvents {
    /// Dispatch `expired_event` when the session expires.
    pub fn new(expired_event: impl Into<String>) -> Self {
        Self {
            expired_event: expired_event.into(),
        }
    }
}

impl SessionEvents for WindowSessionEvents {
    fn session_expired(&self) {
        let event = match CustomEvent::new(&self.expired_event) {
            Ok(event) => event,
            Err(err) => {
                console::error!("session event creation failed", err);
                return;
            }
        };
        if let Err(err) = window().dispatch_event(&event) {
            console::error!("session event dispatch failed", err);
        }
    }
}
