//! Scripted backends: API fakes for the stores and a transport for the HTTP client.

use crate::fixtures::{admin_user, empty_response, json_response};
use async_trait::async_trait;
use cubeos_api_models::{ChangePasswordRequest, ClientRecord, LoginRequest, LoginResponse, User};
use cubeos_ui::ApiError;
use cubeos_ui::core::api::{AuthApi, ClientsApi};
use cubeos_ui::core::http::{HttpRequest, HttpResponse, Transport};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

/// [`AuthApi`] answering from per-operation scripted results.
///
/// Defaults: every call succeeds, login returns token `token-1` and the
/// admin user.
#[derive(Debug)]
pub struct FakeAuthApi {
    login: RefCell<Result<LoginResponse, ApiError>>,
    logout: RefCell<Result<(), ApiError>>,
    current_user: RefCell<Result<User, ApiError>>,
    change_password: RefCell<Result<(), ApiError>>,
    calls: RefCell<Vec<String>>,
    last_login: RefCell<Option<LoginRequest>>,
    last_password_change: RefCell<Option<ChangePasswordRequest>>,
}

impl Default for FakeAuthApi {
    fn default() -> Self {
        Self {
            login: RefCell::new(Ok(LoginResponse {
                access_token: "token-1".to_string(),
                user: Some(admin_user()),
            })),
            logout: RefCell::new(Ok(())),
            current_user: RefCell::new(Ok(admin_user())),
            change_password: RefCell::new(Ok(())),
            calls: RefCell::new(Vec::new()),
            last_login: RefCell::new(None),
            last_password_change: RefCell::new(None),
        }
    }
}

impl FakeAuthApi {
    /// Script the login result.
    pub fn set_login(&self, result: Result<LoginResponse, ApiError>) {
        *self.login.borrow_mut() = result;
    }

    /// Script the logout result.
    pub fn set_logout(&self, result: Result<(), ApiError>) {
        *self.logout.borrow_mut() = result;
    }

    /// Script the current-user result.
    pub fn set_current_user(&self, result: Result<User, ApiError>) {
        *self.current_user.borrow_mut() = result;
    }

    /// Script the password-change result.
    pub fn set_change_password(&self, result: Result<(), ApiError>) {
        *self.change_password.borrow_mut() = result;
    }

    /// Operation names in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// How often `operation` was called.
    #[must_use]
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.as_str() == operation)
            .count()
    }

    /// Credentials of the last login.
    #[must_use]
    pub fn last_login(&self) -> Option<LoginRequest> {
        self.last_login.borrow().clone()
    }

    /// Payload of the last password change.
    #[must_use]
    pub fn last_password_change(&self) -> Option<ChangePasswordRequest> {
        self.last_password_change.borrow().clone()
    }

    fn record(&self, operation: &str) {
        self.calls.borrow_mut().push(operation.to_string());
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record("login");
        *self.last_login.borrow_mut() = Some(request.clone());
        self.login.borrow().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        self.logout.borrow().clone()
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.record("current_user");
        self.current_user.borrow().clone()
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.record("change_password");
        *self.last_password_change.borrow_mut() = Some(request.clone());
        self.change_password.borrow().clone()
    }
}

/// [`ClientsApi`] over an in-memory router table.
///
/// Successful block/unblock calls flip the flag in the table, so a follow-up
/// list reflects them.
#[derive(Debug, Default)]
pub struct FakeClientsApi {
    clients: RefCell<Vec<ClientRecord>>,
    list_error: RefCell<Option<ApiError>>,
    count: RefCell<Option<Result<u64, ApiError>>>,
    action_error: RefCell<Option<ApiError>>,
    calls: RefCell<Vec<String>>,
}

impl FakeClientsApi {
    /// Router table seeded with `clients`.
    #[must_use]
    pub fn with_clients(clients: Vec<ClientRecord>) -> Self {
        let api = Self::default();
        api.set_clients(clients);
        api
    }

    /// Replace the router table.
    pub fn set_clients(&self, clients: Vec<ClientRecord>) {
        *self.clients.borrow_mut() = clients;
    }

    /// Make list calls fail with `error` (or succeed again with `None`).
    pub fn fail_list(&self, error: Option<ApiError>) {
        *self.list_error.borrow_mut() = error;
    }

    /// Script the count result; unscripted counts report the table length.
    pub fn set_count(&self, result: Result<u64, ApiError>) {
        *self.count.borrow_mut() = Some(result);
    }

    /// Make block/unblock fail with `error` (or succeed again with `None`).
    pub fn fail_actions(&self, error: Option<ApiError>) {
        *self.action_error.borrow_mut() = error;
    }

    /// Current router table.
    #[must_use]
    pub fn table(&self) -> Vec<ClientRecord> {
        self.clients.borrow().clone()
    }

    /// Calls in order, e.g. `list`, `count`, `block:AA:BB`.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn apply(&self, verb: &str, mac: &str, blocked: bool) -> Result<(), ApiError> {
        self.record(format!("{verb}:{mac}"));
        if let Some(error) = self.action_error.borrow().clone() {
            return Err(error);
        }
        for client in self.clients.borrow_mut().iter_mut() {
            if client.mac.eq_ignore_ascii_case(mac) {
                client.blocked = blocked;
            }
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ClientsApi for FakeClientsApi {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
        self.record("list".to_string());
        match self.list_error.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(self.table()),
        }
    }

    async fn client_count(&self) -> Result<u64, ApiError> {
        self.record("count".to_string());
        match self.count.borrow().clone() {
            Some(result) => result,
            None => Ok(self.clients.borrow().len() as u64),
        }
    }

    async fn block_client(&self, mac: &str) -> Result<(), ApiError> {
        self.apply("block", mac, true)
    }

    async fn unblock_client(&self, mac: &str) -> Result<(), ApiError> {
        self.apply("unblock", mac, false)
    }
}

/// [`Transport`] replaying queued responses and recording every request.
///
/// An exhausted queue answers with a network error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    /// Queue a JSON response.
    pub fn respond_json(&self, status: u16, body: &Value) {
        self.push(Ok(json_response(status, body)));
    }

    /// Queue a response with an empty body.
    pub fn respond_empty(&self, status: u16) {
        self.push(Ok(empty_response(status)));
    }

    /// Queue an arbitrary outcome.
    pub fn push(&self, outcome: Result<HttpResponse, ApiError>) {
        self.responses.borrow_mut().push_back(outcome);
    }

    /// Requests sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// URLs requested so far.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }

    /// Responses still queued.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.responses.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}
