//! Route-guard policy shared by every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes must apply identical loading/redirect behavior, so the
//! decision lives here as a pure function and `components::protected`
//! renders it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;
use crate::state::session::ROOT_PATH;

/// Outcome of guarding one route for one session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup revalidation pending; show a placeholder, mount nothing.
    Loading,
    /// Mount the target view.
    Render,
    /// Navigate away without mounting the target view.
    Redirect(&'static str),
}

/// Decide what a route requiring sign-in (and optionally admin) shows.
pub fn guard_decision(state: &AuthState, admin_required: bool) -> GuardDecision {
    match state {
        AuthState::Initializing { .. } => GuardDecision::Loading,
        AuthState::Unauthenticated => GuardDecision::Redirect(ROOT_PATH),
        AuthState::Authenticated(_) if admin_required && !state.is_admin() => GuardDecision::Redirect(ROOT_PATH),
        AuthState::Authenticated(_) => GuardDecision::Render,
    }
}
