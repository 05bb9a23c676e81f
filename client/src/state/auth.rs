//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context and read by route guards and
//! user-aware components. Only [`crate::state::session::AuthSession`]
//! writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Session phase plus the user known in that phase.
///
/// `is_admin ⇒ is_authenticated ⇒ user().is_some()` holds by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    /// Startup revalidation has not finished. `tentative` is the cached
    /// profile, shown for continuity but never trusted for access.
    Initializing { tentative: Option<UserProfile> },
    Unauthenticated,
    Authenticated(UserProfile),
}

impl Default for AuthState {
    fn default() -> Self {
        Self::Initializing { tentative: None }
    }
}

impl AuthState {
    /// User to display, including the tentative one while initializing.
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Initializing { tentative } => tentative.as_ref(),
            Self::Unauthenticated => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Authenticated(user) if user.is_admin())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing { .. })
    }
}
