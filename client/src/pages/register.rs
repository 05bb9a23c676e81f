//! Registration page. Password strength and uniqueness rules belong to the
//! backend; this form only checks presence and confirmation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_provider::use_session;
use crate::net::types::RegisterData;

/// Raw register form fields.
#[derive(Clone, Debug, Default)]
struct RegisterForm {
    username: String,
    email: String,
    password: String,
    confirm: String,
    first_name: String,
    last_name: String,
}

fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn validate_register_input(form: &RegisterForm) -> Result<RegisterData, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Username, email, and password are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterData {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        first_name: optional_field(&form.first_name),
        last_name: optional_field(&form.last_name),
    })
}

fn form_input(
    form: RwSignal<RegisterForm>,
    label: &'static str,
    kind: &'static str,
    get: fn(&RegisterForm) -> String,
    set: fn(&mut RegisterForm, String),
) -> impl IntoView {
    view! {
        <input
            class="auth-input"
            type=kind
            placeholder=label
            prop:value=move || form.with(get)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| set(f, value));
            }
        />
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let data = match form.with_untracked(validate_register_input) {
            Ok(data) => data,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.register(&data).await {
                    Ok(_) => {
                        form.set(RegisterForm::default());
                        navigate("/account", NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, &navigate, data);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {form_input(form, "Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                    {form_input(form, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {form_input(form, "First name (optional)", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {form_input(form, "Last name (optional)", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    {form_input(form, "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {form_input(form, "Confirm password", "password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
