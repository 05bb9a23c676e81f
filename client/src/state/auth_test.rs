use super::*;
use crate::test_support::user;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Derived flags
// =============================================================

#[test]
fn tentative_user_is_visible_but_not_authenticated() {
    let state = AuthState::Initializing { tentative: Some(user(1, "admin")) };
    assert_eq!(state.user().map(|u| u.id), Some(1));
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn unauthenticated_has_no_user_and_is_not_loading() {
    let state = AuthState::Unauthenticated;
    assert!(state.user().is_none());
    assert!(!state.is_loading());
    assert!(!state.is_admin());
}

#[test]
fn is_admin_only_for_authenticated_admin_role() {
    assert!(AuthState::Authenticated(user(1, "admin")).is_admin());
    for role in ["member", "editor", "ADMIN", ""] {
        let state = AuthState::Authenticated(user(2, role));
        assert!(state.is_authenticated());
        assert!(!state.is_admin(), "role {role:?}");
    }
}

#[test]
fn flag_invariant_holds_for_every_state() {
    let states = [
        AuthState::default(),
        AuthState::Initializing { tentative: Some(user(1, "admin")) },
        AuthState::Unauthenticated,
        AuthState::Authenticated(user(2, "member")),
        AuthState::Authenticated(user(3, "admin")),
    ];
    for state in states {
        if state.is_admin() {
            assert!(state.is_authenticated());
        }
        if state.is_authenticated() {
            assert!(state.user().is_some());
            assert!(!state.is_loading());
        }
    }
}
