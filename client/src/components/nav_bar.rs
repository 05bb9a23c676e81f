//! Site navigation with session-aware links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Visible on every route. Admin and account links follow the same flags the
//! route guard uses, so a link never leads straight into a redirect.
//! The cached name is held back until revalidation settles: the server
//! render cannot see browser storage, so showing it earlier would not match
//! the hydrated markup.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::components::auth_provider::use_session;
use crate::state::auth::AuthState;

fn nav_display_name(state: &AuthState) -> String {
    match state {
        AuthState::Authenticated(user) => user.display_name().to_owned(),
        AuthState::Initializing { .. } | AuthState::Unauthenticated => String::new(),
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = use_session();

    let display_name = move || auth.with(nav_display_name);
    let is_authenticated = move || auth.with(AuthState::is_authenticated);
    let is_admin = move || auth.with(AuthState::is_admin);
    let is_loading = move || auth.with(AuthState::is_loading);

    let on_logout = move |_| session.with_value(|s| s.logout());

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Grace Fellowship"</a>
            <span class="nav-bar__spacer"></span>

            <Show when=is_admin>
                <a href="/admin" class="nav-bar__link">"Admin"</a>
            </Show>
            <Show when=is_authenticated>
                <a href="/account" class="nav-bar__link">"Account"</a>
            </Show>

            <Show
                when=move || is_authenticated() || is_loading()
                fallback=|| {
                    view! {
                        <a href="/login" class="nav-bar__link">"Sign in"</a>
                        <a href="/register" class="nav-bar__link nav-bar__link--primary">"Register"</a>
                    }
                }
            >
                <span class="nav-bar__self">{display_name}</span>
                <Show when=is_authenticated>
                    <button class="btn nav-bar__logout" on:click=on_logout title="Sign out">
                        "Sign out"
                    </button>
                </Show>
            </Show>
        </nav>
    }
}
