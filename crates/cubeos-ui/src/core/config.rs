//! Console configuration: API location, storage keys and event names.
//!
//! # Design
//! - Defaults match the router firmware's same-origin deployment.
//! - The browser shell derives the base URL at boot; tests build configs directly.

/// Default REST prefix when the console is served by the router itself.
pub const DEFAULT_API_BASE_URL: &str = "/api/v1";
/// Local storage key holding the access token.
pub const TOKEN_KEY: &str = "cubeos.access_token";
/// Local storage key holding the selected theme id.
pub const THEME_KEY: &str = "cubeos.theme";
/// Window event raised when the session can no longer be refreshed.
pub const AUTH_EXPIRED_EVENT: &str = "cubeos:auth-expired";

/// Runtime configuration shared by the stores and the HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Prefix prepended to every REST path.
    pub api_base_url: String,
    /// Storage key for the access token.
    pub token_key: String,
    /// Storage key for the selected theme id.
    pub theme_key: String,
    /// Name of the session-expired window event.
    pub expired_event: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_key: TOKEN_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
            expired_event: AUTH_EXPIRED_EVENT.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Default configuration pointed at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Absolute URL for an API `path` (leading slash expected).
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
