use super::*;
use crate::test_support::user;

#[test]
fn initializing_shows_loading_even_with_tentative_admin() {
    let state = AuthState::Initializing { tentative: Some(user(1, "admin")) };
    assert_eq!(guard_decision(&state, false), GuardDecision::Loading);
    assert_eq!(guard_decision(&state, true), GuardDecision::Loading);
}

#[test]
fn unauthenticated_redirects_to_root() {
    let state = AuthState::Unauthenticated;
    assert_eq!(guard_decision(&state, false), GuardDecision::Redirect("/"));
    assert_eq!(guard_decision(&state, true), GuardDecision::Redirect("/"));
}

#[test]
fn authenticated_member_renders_member_routes() {
    let state = AuthState::Authenticated(user(2, "member"));
    assert_eq!(guard_decision(&state, false), GuardDecision::Render);
}

#[test]
fn admin_renders_admin_routes() {
    let state = AuthState::Authenticated(user(1, "admin"));
    assert_eq!(guard_decision(&state, true), GuardDecision::Render);
    assert_eq!(guard_decision(&state, false), GuardDecision::Render);
}

#[test]
fn non_admin_is_redirected_from_consecutive_admin_routes() {
    let state = AuthState::Authenticated(user(2, "member"));
    let first = guard_decision(&state, true);
    let second = guard_decision(&state, true);
    assert_eq!(first, GuardDecision::Redirect("/"));
    assert_eq!(second, GuardDecision::Redirect("/"));
}

#[test]
fn admin_routes_render_only_for_authenticated_admins() {
    let states = [
        AuthState::default(),
        AuthState::Initializing { tentative: Some(user(1, "admin")) },
        AuthState::Unauthenticated,
        AuthState::Authenticated(user(2, "member")),
        AuthState::Authenticated(user(3, "editor")),
        AuthState::Authenticated(user(4, "admin")),
    ];
    for state in &states {
        let rendered = guard_decision(state, true) == GuardDecision::Render;
        assert_eq!(rendered, state.is_authenticated() && state.is_admin(), "{state:?}");
    }
}
