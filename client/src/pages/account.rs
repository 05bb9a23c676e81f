//! Account page for any signed-in user.

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::state::auth::AuthState;

fn profile_field(auth: RwSignal<AuthState>, pick: fn(&UserProfile) -> String) -> impl Fn() -> String + Send + Sync + 'static {
    move || auth.with(|state| state.user().map(pick).unwrap_or_else(|| "—".to_owned()))
}

fn full_name(user: &UserProfile) -> String {
    let parts: Vec<&str> = [user.first_name.as_deref(), user.last_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() { "—".to_owned() } else { parts.join(" ") }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="account-page">
            <h1>"Your account"</h1>
            <dl class="account-page__details">
                <dt>"Username"</dt>
                <dd>{profile_field(auth, |u| u.username.clone())}</dd>
                <dt>"Name"</dt>
                <dd>{profile_field(auth, full_name)}</dd>
                <dt>"Email"</dt>
                <dd>{profile_field(auth, |u| u.email.clone())}</dd>
                <dt>"Role"</dt>
                <dd>{profile_field(auth, |u| u.role.clone())}</dd>
                <dt>"Member since"</dt>
                <dd>{profile_field(auth, |u| u.created_at.get(..10).unwrap_or(u.created_at.as_str()).to_owned())}</dd>
            </dl>
        </div>
    }
}
