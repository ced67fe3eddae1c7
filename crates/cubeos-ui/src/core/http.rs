//! REST client shared by the stores.
//!
//! # Design
//! - The wire is abstracted behind [`Transport`] so the client runs natively in tests.
//! - The bearer token is read from storage on every request, never cached.
//! - A 401 on a regular call triggers one refresh attempt and one retry.
//! - A failed refresh drops the stored token and raises [`SessionEvents::session_expired`].
//! - A 401 on the retry is the request's own rejection and is returned as a status error.

use crate::core::actions::ClientAction;
use crate::core::api::{AuthApi, ClientsApi};
use crate::core::config::ConsoleConfig;
use crate::core::error::ApiError;
use crate::core::logic::{
    CHANGE_PASSWORD_PATH, CLIENTS_COUNT_PATH, CLIENTS_PATH, CURRENT_USER_PATH, LOGIN_PATH,
    LOGOUT_PATH, REFRESH_PATH, client_action_path, is_auth_bootstrap,
};
use crate::core::platform::{KeyValueStore, SessionEvents};
use async_trait::async_trait;
use cubeos_api_models::{
    ChangePasswordRequest, ClientCountResponse, ClientListResponse, ClientRecord, ErrorBody,
    LoginRequest, LoginResponse, TokenResponse, User, UserEnvelope,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;
use tracing::{debug, warn};

const UNAUTHORIZED: u16 = 401;

/// HTTP verbs used by the console API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

/// Fully-resolved outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// Verb.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Bearer token for the `Authorization` header.
    pub bearer: Option<String>,
    /// JSON body.
    pub body: Option<Value>,
}

/// Raw response as seen by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Reason phrase.
    pub status_text: String,
    /// Body text (may be empty).
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    fn into_api_error(self) -> ApiError {
        let message = serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.best_message().map(str::to_string))
            .or_else(|| {
                let reason = self.status_text.trim();
                (!reason.is_empty()).then(|| reason.to_string())
            })
            .unwrap_or_else(|| format!("HTTP {}", self.status));
        ApiError::Status {
            status: self.status,
            message,
        }
    }
}

/// Sends a request and returns whatever the server answered.
///
/// `Err` is reserved for requests that never produced a response.
#[async_trait(?Send)]
pub trait Transport {
    /// Perform `request`.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(request).await
    }
}

/// Console REST client over an injected [`Transport`].
pub struct ConsoleClient<T> {
    transport: T,
    config: ConsoleConfig,
    storage: Rc<dyn KeyValueStore>,
    events: Rc<dyn SessionEvents>,
}

impl<T: Transport> ConsoleClient<T> {
    /// Build a client that reads and refreshes the token in `storage`.
    pub fn new(
        transport: T,
        config: ConsoleConfig,
        storage: Rc<dyn KeyValueStore>,
        events: Rc<dyn SessionEvents>,
    ) -> Self {
        Self {
            transport,
            config,
            storage,
            events,
        }
    }

    fn stored_token(&self) -> Option<String> {
        self.storage
            .get(&self.config.token_key)
            .filter(|token| !token.trim().is_empty())
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, ApiError> {
        self.transport
            .send(HttpRequest {
                method,
                url: self.config.url(path),
                bearer: self.stored_token(),
                body: body.cloned(),
            })
            .await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let response = self.send_once(method, path, body.as_ref()).await?;
        if response.status != UNAUTHORIZED || is_auth_bootstrap(path) {
            return into_result(response);
        }
        if self.stored_token().is_none() || !self.refresh_token().await {
            self.expire_session();
            return Err(ApiError::Unauthorized);
        }
        debug!(path, "retrying request with refreshed token");
        into_result(self.send_once(method, path, body.as_ref()).await?)
    }

    async fn refresh_token(&self) -> bool {
        let response = match self.send_once(Method::Post, REFRESH_PATH, None).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                debug!(status = response.status, "token refresh rejected");
                return false;
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed");
                return false;
            }
        };
        match decode::<TokenResponse>(&response) {
            Ok(token) if !token.access_token.trim().is_empty() => {
                self.storage
                    .set(&self.config.token_key, &token.access_token);
                true
            }
            Ok(_) => false,
            Err(err) => {
                warn!(error = %err, "token refresh returned an unreadable body");
                false
            }
        }
    }

    fn expire_session(&self) {
        warn!("session expired; clearing stored token");
        self.storage.remove(&self.config.token_key);
        self.events.session_expired();
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.execute(Method::Get, path, None).await?;
        decode(&response)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.execute(Method::Post, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    async fn post_empty(&self, path: &str, body: Option<Value>) -> Result<(), ApiError> {
        self.execute(Method::Post, path, body).await.map(|_| ())
    }

    async fn client_action(&self, mac: &str, action: ClientAction) -> Result<(), ApiError> {
        self.post_empty(&client_action_path(mac, action), None)
            .await
    }
}

fn into_result(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(response.into_api_error())
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::Encode(err.to_string()))
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait(?Send)]
impl<T: Transport> AuthApi for ConsoleClient<T> {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty(LOGOUT_PATH, None).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json::<UserEnvelope>(CURRENT_USER_PATH)
            .await
            .map(UserEnvelope::into_user)
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.post_empty(CHANGE_PASSWORD_PATH, Some(encode(request)?))
            .await
    }
}

#[async_trait(?Send)]
impl<T: Transport> ClientsApi for ConsoleClient<T> {
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ApiError> {
        self.get_json::<ClientListResponse>(CLIENTS_PATH)
            .await
            .map(|list| list.clients)
    }

    async fn client_count(&self) -> Result<u64, ApiError> {
        self.get_json::<ClientCountResponse>(CLIENTS_COUNT_PATH)
            .await
            .map(|count| count.count)
    }

    async fn block_client(&self, mac: &str) -> Result<(), ApiError> {
        self.client_action(mac, ClientAction::Block).await
    }

    async fn unblock_client(&self, mac: &str) -> Result<(), ApiError> {
        self.client_action(mac, ClientAction::Unblock).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, status_text: &str, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn error_message_prefers_body() {
        let err = response(403, "Forbidden", r#"{"detail":"admin only"}"#).into_api_error();
        assert_eq!(
            err,
            ApiError::Status {
                status: 403,
                message: "admin only".into()
            }
        );
    }

    #[test]
    fn error_message_falls_back_to_reason_then_code() {
        let err = response(502, "Bad Gateway", "<html>").into_api_error();
        assert_eq!(err.to_string(), "Bad Gateway");
        let err = response(500, "", "").into_api_error();
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(response(204, "No Content", "").is_success());
        assert!(!response(304, "Not Modified", "").is_success());
    }
}
