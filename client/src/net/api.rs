//! Auth REST client for the `/api/auth/*` endpoints.
//!
//! Every operation is one round-trip through a [`Transport`]. Successful
//! login/register/revalidation results are written to the [`TokenStore`]
//! before the call returns, so the store never lags the session.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses are classified per endpoint: login and `/me` failures
//! are [`ApiError::Auth`], register failures are [`ApiError::Validation`].
//! The backend's own error text is kept when it sends one.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::{ApiError, error_body_message};
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{AuthPayload, CurrentUserPayload, LoginCredentials, RegisterData, UserProfile};
use crate::util::storage::KeyValueStore;
use crate::util::token_store::TokenStore;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const CURRENT_USER_PATH: &str = "/api/auth/me";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Endpoint {
    Login,
    Register,
    CurrentUser,
}

impl Endpoint {
    fn default_message(self) -> &'static str {
        match self {
            Self::Login => "Invalid email or password.",
            Self::Register => "Registration was rejected.",
            Self::CurrentUser => "Session is no longer valid.",
        }
    }
}

fn classify_failure(endpoint: Endpoint, response: &ApiResponse) -> ApiError {
    let status = response.status;
    let message = error_body_message(&response.body).unwrap_or_else(|| endpoint.default_message().to_owned());
    match endpoint {
        Endpoint::Login | Endpoint::CurrentUser => ApiError::Auth { status, message },
        Endpoint::Register => ApiError::Validation { status, message },
    }
}

fn decode_success<T: DeserializeOwned>(endpoint: Endpoint, response: ApiResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(classify_failure(endpoint, &response));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn json_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Auth endpoint client bound to one token store.
#[derive(Clone, Debug)]
pub struct AuthClient<T, S> {
    transport: T,
    store: TokenStore<S>,
}

impl<T: Transport, S: KeyValueStore> AuthClient<T, S> {
    pub fn new(transport: T, store: TokenStore<S>) -> Self {
        Self { transport, store }
    }

    pub fn store(&self) -> &TokenStore<S> {
        &self.store
    }

    /// Exchange credentials for a token via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] on any non-2xx status; the store is left untouched.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthPayload, ApiError> {
        let request = ApiRequest {
            method: Method::Post,
            path: LOGIN_PATH,
            bearer: None,
            body: Some(json_body(credentials)?),
        };
        let response = self.transport.send(request).await?;
        let payload: AuthPayload = decode_success(Endpoint::Login, response)?;
        self.store.save_session(&payload.token, &payload.user);
        leptos::logging::log!("auth: signed in as {}", payload.user.username);
        Ok(payload)
    }

    /// Create an account via `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] on any non-2xx status; the store is left untouched.
    pub async fn register(&self, data: &RegisterData) -> Result<AuthPayload, ApiError> {
        let request = ApiRequest {
            method: Method::Post,
            path: REGISTER_PATH,
            bearer: None,
            body: Some(json_body(data)?),
        };
        let response = self.transport.send(request).await?;
        let payload: AuthPayload = decode_success(Endpoint::Register, response)?;
        self.store.save_session(&payload.token, &payload.user);
        leptos::logging::log!("auth: registered {}", payload.user.username);
        Ok(payload)
    }

    /// Revalidate the stored token via `GET /api/auth/me`.
    ///
    /// The refreshed profile is cached only if the stored token is still the
    /// one that was sent; a logout or re-login during the request wins.
    ///
    /// # Errors
    ///
    /// [`ApiError::Auth`] when no token is stored (no request is made) or the
    /// backend rejects it.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        let Some(token) = self.store.token() else {
            return Err(ApiError::Auth { status: 401, message: "No stored session.".to_owned() });
        };
        let request = ApiRequest {
            method: Method::Get,
            path: CURRENT_USER_PATH,
            bearer: Some(token.clone()),
            body: None,
        };
        let response = self.transport.send(request).await?;
        let payload: CurrentUserPayload = decode_success(Endpoint::CurrentUser, response)?;
        if self.store.token().as_deref() == Some(token.as_str()) {
            self.store.set_cached_profile(&payload.user);
        }
        Ok(payload.user)
    }

    /// Forget the session locally. No request is made; navigation is the
    /// caller's job.
    pub fn logout_local(&self) {
        self.store.clear();
    }
}
