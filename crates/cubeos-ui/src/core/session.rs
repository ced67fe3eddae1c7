//! Authenticated-session store.
//!
//! # Design
//! - The token decides "authenticated"; the user record is best-effort profile data.
//! - Actions never return errors: failures become `false` plus the `error` field.
//! - The token is mirrored into storage so a reload restores the session.

use crate::core::api::AuthApi;
use crate::core::config::ConsoleConfig;
use crate::core::platform::KeyValueStore;
use cubeos_api_models::{ChangePasswordRequest, LoginRequest, User};
use std::rc::Rc;
use tracing::{debug, warn};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Fallback error for a failed login.
pub const LOGIN_FAILED: &str = "Login failed";
/// Fallback error for a failed password change.
pub const PASSWORD_CHANGE_FAILED: &str = "Password change failed";

/// Role label granting full console access.
pub const ADMIN_ROLE: &str = "admin";

/// Session slice.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SessionState {
    /// Profile of the signed-in user.
    pub user: Option<User>,
    /// Access token; `None` means signed out.
    pub token: Option<String>,
    /// A login or password change is in flight.
    pub loading: bool,
    /// Last user-facing error.
    pub error: Option<String>,
}

impl SessionState {
    /// A usable token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    /// Signed in with the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_authenticated()
            && self
                .user
                .as_ref()
                .is_some_and(|user| user.role == ADMIN_ROLE)
    }

    /// Username of the signed-in user.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }
}

/// Session store: wires [`SessionState`] to the auth endpoints and token storage.
pub struct SessionStore {
    state: Dispatch<SessionState>,
    api: Rc<dyn AuthApi>,
    storage: Rc<dyn KeyValueStore>,
    token_key: String,
}

impl SessionStore {
    /// Build the store, restoring a previously persisted token.
    pub fn new(
        api: Rc<dyn AuthApi>,
        storage: Rc<dyn KeyValueStore>,
        config: &ConsoleConfig,
    ) -> Self {
        let token = storage
            .get(&config.token_key)
            .filter(|token| !token.trim().is_empty());
        let state = Dispatch::<SessionState>::new();
        state.set(SessionState {
            token,
            ..SessionState::default()
        });
        Self {
            state,
            api,
            storage,
            token_key: config.token_key.clone(),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> Rc<SessionState> {
        self.state.get()
    }

    /// Observe the session: called with the current state, then on every
    /// change until the returned dispatch is dropped.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn subscribe<F>(&self, on_change: F) -> Dispatch<SessionState>
    where
        F: Fn(Rc<SessionState>) + 'static,
    {
        Dispatch::subscribe(on_change)
    }

    /// See [`SessionState::is_authenticated`].
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    /// See [`SessionState::is_admin`].
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.state.get().is_admin()
    }

    /// Username of the signed-in user.
    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.state.get().username().map(str::to_string)
    }

    /// Access token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.get().token.clone()
    }

    /// Signed-in user.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.get().user.clone()
    }

    /// Whether a login or password change is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.get().loading
    }

    /// Last user-facing error.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.get().error.clone()
    }

    /// Clear the error field.
    pub fn clear_error(&self) {
        self.state.reduce_mut(|state| state.error = None);
    }

    /// Sign in. Returns `true` on success; failures land in `error`.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        self.begin();
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let succeeded = match self.api.login(&request).await {
            Ok(response) => {
                self.storage.set(&self.token_key, &response.access_token);
                let has_user = response.user.is_some();
                self.state.reduce_mut(|state| {
                    state.token = Some(response.access_token);
                    state.user = response.user;
                });
                if !has_user {
                    self.fetch_user().await;
                }
                debug!(username, "login succeeded");
                true
            }
            Err(err) => {
                warn!(username, error = %err, "login failed");
                let message = err.user_message(LOGIN_FAILED);
                self.state.reduce_mut(|state| state.error = Some(message));
                false
            }
        };
        self.finish();
        succeeded
    }

    /// Sign out locally, telling the backend on a best-effort basis.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            debug!(error = %err, "logout request failed; clearing local session anyway");
        }
        self.clear_session();
        self.state.reduce_mut(|state| state.error = None);
    }

    /// Refresh the user record. No-op without a token; failures clear the
    /// user without raising an error.
    pub async fn fetch_user(&self) {
        if !self.is_authenticated() {
            return;
        }
        match self.api.current_user().await {
            Ok(user) => self.state.reduce_mut(|state| state.user = Some(user)),
            Err(err) => {
                debug!(error = %err, "current user unavailable");
                self.state.reduce_mut(|state| state.user = None);
            }
        }
    }

    /// Change the signed-in user's password.
    pub async fn change_password(&self, current_password: &str, new_password: &str) -> bool {
        self.begin();
        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let succeeded = match self.api.change_password(&request).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "password change failed");
                let message = err.user_message(PASSWORD_CHANGE_FAILED);
                self.state.reduce_mut(|state| state.error = Some(message));
                false
            }
        };
        self.finish();
        succeeded
    }

    /// Startup hook: load the profile for a restored token.
    pub async fn init(&self) {
        if self.is_authenticated() {
            self.fetch_user().await;
        }
    }

    /// React to the HTTP layer giving up on the token.
    pub fn handle_session_expired(&self) {
        debug!("session expired event received");
        self.clear_session();
    }

    fn clear_session(&self) {
        self.storage.remove(&self.token_key);
        self.state.reduce_mut(|state| {
            state.token = None;
            state.user = None;
        });
    }

    fn begin(&self) {
        self.state.reduce_mut(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    fn finish(&self) {
        self.state.reduce_mut(|state| state.loading = false);
    }
}
