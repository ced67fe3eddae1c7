//! Client moderation actions.
//!
//! # Design
//! - Capture the per-action wording (prompt, failure text, path verb) in one place.
//! - Actions are data only; the clients store performs the side effects.

use crate::core::platform::{ConfirmRequest, ConfirmVariant};

/// Moderation action applied to a network client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientAction {
    /// Cut network access.
    Block,
    /// Restore network access.
    Unblock,
}

impl ClientAction {
    /// Path verb appended to `/clients/{mac}/`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Unblock => "unblock",
        }
    }

    /// Prompt shown before the action is sent; `target` names the client.
    #[must_use]
    pub fn confirm_request(self, target: &str) -> ConfirmRequest {
        match self {
            Self::Block => ConfirmRequest {
                title: "Block Client".to_string(),
                message: format!(
                    "Block {target}? The device will lose network access until it is unblocked."
                ),
                confirm_text: "Block".to_string(),
                variant: ConfirmVariant::Danger,
            },
            Self::Unblock => ConfirmRequest {
                title: "Unblock Client".to_string(),
                message: format!("Unblock {target}? The device will regain network access."),
                confirm_text: "Unblock".to_string(),
                variant: ConfirmVariant::Info,
            },
        }
    }

    /// Error text used when the backend gives none.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Block => "Failed to block client",
            Self::Unblock => "Failed to unblock client",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_differ_per_action() {
        let block = ClientAction::Block.confirm_request("AA:BB");
        let unblock = ClientAction::Unblock.confirm_request("AA:BB");
        assert_eq!(block.title, "Block Client");
        assert_eq!(block.confirm_text, "Block");
        assert_eq!(block.variant, ConfirmVariant::Danger);
        assert!(block.message.contains("AA:BB"));
        assert_eq!(unblock.title, "Unblock Client");
        assert_eq!(unblock.confirm_text, "Unblock");
        assert_eq!(unblock.variant, ConfirmVariant::Info);
        assert_ne!(block.message, unblock.message);
    }

    #[test]
    fn verbs_match_routes() {
        assert_eq!(ClientAction::Block.as_str(), "block");
        assert_eq!(ClientAction::Unblock.as_str(), "unblock");
        assert_eq!(ClientAction::Block.failure_message(), "Failed to block client");
    }
}
