//! Connected network clients store.
//!
//! # Design
//! - The list is replaced wholesale on every fetch; there is no local merge.
//! - Block/unblock ask the user first, then re-fetch so the list reflects the router.
//! - Overlapping fetches are last-write-wins.

use crate::core::actions::ClientAction;
use crate::core::api::ClientsApi;
use crate::core::logic::{find_by_mac, partition_blocked, prompt_target};
use crate::core::platform::ConfirmDialog;
use cubeos_api_models::ClientRecord;
use std::rc::Rc;
use tracing::{debug, warn};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Fallback error when the client list cannot be loaded.
pub const FETCH_CLIENTS_FAILED: &str = "Failed to load clients";

/// Clients slice.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ClientsState {
    /// Clients in server order.
    pub clients: Vec<ClientRecord>,
    /// Connected-client count reported by `/clients/count`.
    pub count: u64,
    /// A list fetch is in flight.
    pub loading: bool,
    /// Last user-facing error.
    pub error: Option<String>,
}

impl ClientsState {
    /// Clients with network access.
    #[must_use]
    pub fn active_clients(&self) -> Vec<ClientRecord> {
        partition_blocked(&self.clients).0
    }

    /// Clients the router is blocking.
    #[must_use]
    pub fn blocked_clients(&self) -> Vec<ClientRecord> {
        partition_blocked(&self.clients).1
    }

    /// Number of clients with network access.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.clients.iter().filter(|client| !client.blocked).count()
    }

    /// Number of blocked clients.
    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.clients.iter().filter(|client| client.blocked).count()
    }
}

/// Clients store: wires [`ClientsState`] to the clients endpoints.
pub struct ClientsStore {
    state: Dispatch<ClientsState>,
    api: Rc<dyn ClientsApi>,
    confirm: Rc<dyn ConfirmDialog>,
}

impl ClientsStore {
    /// Build the store with an empty list.
    pub fn new(api: Rc<dyn ClientsApi>, confirm: Rc<dyn ConfirmDialog>) -> Self {
        let state = Dispatch::<ClientsState>::new();
        state.set(ClientsState::default());
        Self {
            state,
            api,
            confirm,
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> Rc<ClientsState> {
        self.state.get()
    }

    /// Observe the list: called with the current state, then on every change
    /// until the returned dispatch is dropped.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn subscribe<F>(&self, on_change: F) -> Dispatch<ClientsState>
    where
        F: Fn(Rc<ClientsState>) + 'static,
    {
        Dispatch::subscribe(on_change)
    }

    /// Clients in server order.
    #[must_use]
    pub fn clients(&self) -> Vec<ClientRecord> {
        self.state.get().clients.clone()
    }

    /// Last reported count.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.state.get().count
    }

    /// Whether a list fetch is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.get().loading
    }

    /// Last user-facing error.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.get().error.clone()
    }

    /// See [`ClientsState::active_clients`].
    #[must_use]
    pub fn active_clients(&self) -> Vec<ClientRecord> {
        self.state.get().active_clients()
    }

    /// See [`ClientsState::blocked_clients`].
    #[must_use]
    pub fn blocked_clients(&self) -> Vec<ClientRecord> {
        self.state.get().blocked_clients()
    }

    /// See [`ClientsState::active_count`].
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.state.get().active_count()
    }

    /// See [`ClientsState::blocked_count`].
    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.state.get().blocked_count()
    }

    /// Number of clients in the list.
    #[must_use]
    pub fn total(&self) -> usize {
        self.state.get().clients.len()
    }

    /// Case-insensitive lookup by MAC.
    #[must_use]
    pub fn find_client(&self, mac: &str) -> Option<ClientRecord> {
        find_by_mac(&self.state.get().clients, mac).cloned()
    }

    /// Clear the error field.
    pub fn clear_error(&self) {
        self.state.reduce_mut(|state| state.error = None);
    }

    /// Replace the list with the router's current view; empty on failure.
    pub async fn fetch_clients(&self) {
        self.state.reduce_mut(|state| {
            state.loading = true;
            state.error = None;
        });
        match self.api.list_clients().await {
            Ok(clients) => {
                debug!(count = clients.len(), "clients loaded");
                self.state.reduce_mut(|state| {
                    state.clients = clients;
                    state.loading = false;
                });
            }
            Err(err) => {
                warn!(error = %err, "failed to load clients");
                let message = err.user_message(FETCH_CLIENTS_FAILED);
                self.state.reduce_mut(|state| {
                    state.clients = Vec::new();
                    state.error = Some(message);
                    state.loading = false;
                });
            }
        }
    }

    /// Replace the count; zero on failure. Leaves `loading` and `error` alone.
    pub async fn fetch_count(&self) {
        let count = match self.api.client_count().await {
            Ok(count) => count,
            Err(err) => {
                debug!(error = %err, "client count unavailable");
                0
            }
        };
        self.state.reduce_mut(|state| state.count = count);
    }

    /// Block `mac` after confirmation. Returns whether the router accepted it.
    pub async fn block_client(&self, mac: &str) -> bool {
        self.moderate(mac, ClientAction::Block).await
    }

    /// Unblock `mac` after confirmation. Returns whether the router accepted it.
    pub async fn unblock_client(&self, mac: &str) -> bool {
        self.moderate(mac, ClientAction::Unblock).await
    }

    async fn moderate(&self, mac: &str, action: ClientAction) -> bool {
        let target = self
            .find_client(mac)
            .map_or_else(|| mac.to_string(), |client| prompt_target(&client));
        if !self.confirm.confirm(action.confirm_request(&target)).await {
            debug!(mac, action = action.as_str(), "action declined");
            return false;
        }
        let outcome = match action {
            ClientAction::Block => self.api.block_client(mac).await,
            ClientAction::Unblock => self.api.unblock_client(mac).await,
        };
        self.fetch_clients().await;
        match outcome {
            Ok(()) => true,
            Err(err) => {
                warn!(mac, action = action.as_str(), error = %err, "client action failed");
                let message = err.user_message(action.failure_message());
                self.state.reduce_mut(|state| state.error = Some(message));
                false
            }
        }
    }
}
