//! Backend operations consumed by the stores.
//!
//! # Design
//! - One trait per store so fakes stay small.
//! - Implemented over HTTP by [`crate::core::http::ConsoleClient`].

use crate::core::error::ApiError;
use async_trait::async_trait;
use cubeos_api_models::{ChangePasswordRequest, ClientRecord, LoginRequest, LoginResponse, User};

/// Session endpoints.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for an access token.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    /// Invalidate the current token server-side.
    async fn logout(&self) -> Result<(), ApiError>;
    /// Profile of the token's owner.
    async fn current_user(&self) -> Result<User, ApiError>;
    /// Rotate the signed-in user's password.
    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError>;
}

/// Connected-client endpoints.
#[async_trait(?Send)]
pub trait ClientsApi {
    /// Every client the router currently knows about.
    async fn list_clients(&self) -> Result<Vec<ClientRecord>, ApiError>;
    /// Number of connected clients.
    async fn client_count(&self) -> Result<u64, ApiError>;
    /// Cut network access for `mac`.
    async fn block_client(&self, mac: &str) -> Result<(), ApiError>;
    /// Restore network access for `mac`.
    async fn unblock_client(&self, mac: &str) -> Result<(), ApiError>;
}
