//! Error taxonomy for auth API calls.
//!
//! ERROR HANDLING
//! ==============
//! Explicit login/register failures are shown inline by the form that made
//! the call. Failures during silent revalidation are absorbed by the session,
//! which decides from the variant whether the stored session is discarded.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Invalid credentials, or a missing/expired/revoked bearer token.
    #[error("unauthorized ({status}): {message}")]
    Auth { status: u16, message: String },
    /// The backend rejected a registration payload.
    #[error("rejected ({status}): {message}")]
    Validation { status: u16, message: String },
    /// No response was received.
    #[error("network error: {0}")]
    Network(String),
    /// A success response whose body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the backend reached a verdict about the credentials or token.
    ///
    /// `Decode` counts: a 2xx body we cannot read is not evidence the session
    /// is still usable.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Network(_))
    }

    /// Text suitable for an inline form error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { message, .. } | Self::Validation { message, .. } => message.clone(),
            Self::Network(_) => "Unable to reach the server. Check your connection and try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response. Please try again.".to_owned(),
        }
    }
}

/// Pull a human-readable message out of a backend error body.
pub(crate) fn error_body_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}
