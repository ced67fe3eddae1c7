//! gloo-net transport.

use crate::core::error::ApiError;
use crate::core::http::{HttpRequest, HttpResponse, Method, Transport};
use async_trait::async_trait;
use gloo_net::http::Request;

/// [`Transport`] over the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut req = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        req = req.header("Accept", "application/json");
        if let Some(token) = &request.bearer {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            req = req
                .json(body)
                .map_err(|err| ApiError::Encode(err.to_string()))?;
        }
        let response = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
