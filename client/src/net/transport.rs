//! Single-request HTTP seam used by the auth client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every request fails with [`ApiError::Network`] since
//! auth endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::error::ApiError;
use crate::config::ClientConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing request. `path` is the API path (`/api/auth/me`); the
/// transport prefixes its configured base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: &'static str,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Status and raw body of a completed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns once the full body has arrived.
///
/// Only transport failures are errors; non-2xx statuses come back as an
/// [`ApiResponse`] for the caller to classify.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Debug, Default)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    /// Absolute or origin-relative URL for an API path such as `/api/auth/me`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let outgoing = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = outgoing
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.url(request.path), request.method);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
