#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the CubeOS console API.
//!
//! These types mirror the JSON bodies exchanged with the router backend. Fields
//! the console does not interpret are preserved in flattened `extra` maps so a
//! record round-trips without losing server-defined data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message.
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Human-readable message.
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Short error label.
    pub error: Option<String>,
}

impl ErrorBody {
    /// Most specific non-empty message carried by the body.
    #[must_use]
    pub fn best_message(&self) -> Option<&str> {
        [&self.detail, &self.message, &self.error]
            .into_iter()
            .filter_map(Option::as_deref)
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}

/// Authenticated console user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Login name.
    pub username: String,
    #[serde(default)]
    /// Role label (e.g. `admin`).
    pub role: String,
    #[serde(flatten)]
    /// Server-defined profile fields.
    pub extra: Map<String, Value>,
}

impl User {
    /// Convenience constructor used by fixtures and tests.
    #[must_use]
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
            extra: Map::new(),
        }
    }
}

/// `/auth/me` payload, accepted either bare or wrapped in `{ "user": ... }`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UserEnvelope {
    /// `{ "user": { ... } }`
    Wrapped {
        /// Wrapped user record.
        user: User,
    },
    /// Bare user object.
    Bare(User),
}

impl UserEnvelope {
    /// Unwrap into the user record.
    #[must_use]
    pub fn into_user(self) -> User {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

/// Successful `/auth/login` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(alias = "token")]
    /// Opaque access token.
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Profile data, when the backend includes it.
    pub user: Option<User>,
}

/// Successful `/auth/refresh` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    #[serde(alias = "token")]
    /// Replacement access token.
    pub access_token: String,
}

/// Body posted to `/auth/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    /// Password currently in effect.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Network client connected to the router.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientRecord {
    /// Hardware address; unique key for the record.
    pub mac: String,
    #[serde(default)]
    /// Whether the router currently blocks this client.
    pub blocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Friendly device name.
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Leased IP address.
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// DHCP hostname.
    pub hostname: Option<String>,
    #[serde(flatten)]
    /// Server-defined fields not interpreted by the console.
    pub extra: Map<String, Value>,
}

impl ClientRecord {
    /// Minimal record keyed by MAC.
    #[must_use]
    pub fn new(mac: impl Into<String>, blocked: bool) -> Self {
        Self {
            mac: mac.into(),
            blocked,
            name: None,
            ip: None,
            hostname: None,
            extra: Map::new(),
        }
    }

    /// Best display label: name, then hostname, then MAC.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.hostname.as_deref())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(&self.mac)
    }
}

/// `GET /clients` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientListResponse {
    #[serde(default)]
    /// Connected clients in server order.
    pub clients: Vec<ClientRecord>,
}

/// `GET /clients/count` response.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientCountResponse {
    #[serde(alias = "total")]
    /// Number of connected clients.
    pub count: u64,
}
