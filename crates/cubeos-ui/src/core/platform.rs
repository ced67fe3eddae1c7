//! Browser-facing seams injected into the stores.
//!
//! # Design
//! - Stores never touch `window`, `document` or `localStorage` directly.
//! - Implementations report their own failures; the seams are infallible to callers.
//! - Browser implementations live in `crate::services` (wasm32 only).

use async_trait::async_trait;

/// String key/value persistence (local storage in the browser).
pub trait KeyValueStore {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Persist `value` under `key`.
    fn set(&self, key: &str, value: &str);
    /// Remove `key`.
    fn remove(&self, key: &str);
}

/// Presentation surface the theme is applied to (the document root).
pub trait ThemeSurface {
    /// Set attribute `name` to `value`.
    fn set_attribute(&self, name: &str, value: &str);
    /// Add or remove a class flag.
    fn set_class(&self, class: &str, enabled: bool);
}

/// Visual weight of a confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmVariant {
    /// Destructive action.
    Danger,
    /// Neutral confirmation.
    Info,
}

impl ConfirmVariant {
    /// Marker prefixed to plain-text prompts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

/// Content of a confirmation prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRequest {
    /// Dialog title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Label of the confirming button.
    pub confirm_text: String,
    /// Visual weight.
    pub variant: ConfirmVariant,
}

impl ConfirmRequest {
    /// Plain-text rendering for native dialogs, variant first.
    #[must_use]
    pub fn prompt_text(&self) -> String {
        format!(
            "[{}] {}\n\n{}\n\n{}?",
            self.variant.as_str().to_uppercase(),
            self.title,
            self.message,
            self.confirm_text
        )
    }
}

/// Asks the user to confirm an action.
#[async_trait(?Send)]
pub trait ConfirmDialog {
    /// Resolves to `true` when the user accepts.
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}

/// Outbound notifications about the session lifecycle.
pub trait SessionEvents {
    /// The access token expired and could not be refreshed.
    fn session_expired(&self);
}
