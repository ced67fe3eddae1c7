//! Pure helpers for REST routes and record lookups.

use crate::core::actions::ClientAction;
use cubeos_api_models::ClientRecord;

/// `POST` credentials, returns a token.
pub const LOGIN_PATH: &str = "/auth/login";
/// `POST` to invalidate the current token.
pub const LOGOUT_PATH: &str = "/auth/logout";
/// `GET` the signed-in user.
pub const CURRENT_USER_PATH: &str = "/auth/me";
/// `POST` a password change.
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";
/// `POST` to trade the current token for a fresh one.
pub const REFRESH_PATH: &str = "/auth/refresh";
/// `GET` the connected clients.
pub const CLIENTS_PATH: &str = "/clients";
/// `GET` the connected-client count.
pub const CLIENTS_COUNT_PATH: &str = "/clients/count";

/// Route for a moderation action; the MAC is percent-encoded.
#[must_use]
pub fn client_action_path(mac: &str, action: ClientAction) -> String {
    format!(
        "{CLIENTS_PATH}/{}/{}",
        urlencoding::encode(mac),
        action.as_str()
    )
}

/// Whether `path` belongs to the token bootstrap flow, which must never
/// trigger a refresh-and-retry.
#[must_use]
pub fn is_auth_bootstrap(path: &str) -> bool {
    matches!(path, LOGIN_PATH | LOGOUT_PATH | REFRESH_PATH)
}

/// Case-insensitive MAC lookup.
#[must_use]
pub fn find_by_mac<'a>(clients: &'a [ClientRecord], mac: &str) -> Option<&'a ClientRecord> {
    clients
        .iter()
        .find(|client| client.mac.eq_ignore_ascii_case(mac.trim()))
}

/// How a client is named in prompts: its display name plus the MAC, or the
/// bare MAC when it has no name.
#[must_use]
pub fn prompt_target(client: &ClientRecord) -> String {
    let label = client.display_name();
    if label == client.mac {
        client.mac.clone()
    } else {
        format!("{label} ({})", client.mac)
    }
}

/// Clients split by their `blocked` flag, preserving order.
#[must_use]
pub fn partition_blocked(clients: &[ClientRecord]) -> (Vec<ClientRecord>, Vec<ClientRecord>) {
    clients.iter().cloned().partition(|client| !client.blocked)
}
