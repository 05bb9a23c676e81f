//! The per-tab auth session: one explicit context object owning the
//! [`AuthState`] machine.
//!
//! ARCHITECTURE
//! ============
//! `AuthSession` is built once when the app mounts and injected through
//! Leptos context. It drives the [`AuthClient`], and pushes every state
//! transition to subscribers (the app mirrors it into `RwSignal<AuthState>`).
//! Navigation and banner notices go out through [`SessionEffects`] so the
//! session never touches the router or the DOM itself.
//!
//! TRADE-OFFS
//! ==========
//! `login`/`register` are not deduplicated. Two overlapping calls leave the
//! state reflecting whichever response resolves last; forms disable their
//! submit button while a request is pending instead.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::RevalidationPolicy;
use crate::net::api::AuthClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{LoginCredentials, RegisterData, UserProfile};
use crate::state::auth::AuthState;
use crate::state::notice::Notice;
use crate::util::storage::KeyValueStore;

/// Where the session sends users it has signed out.
pub const ROOT_PATH: &str = "/";

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";
pub const SERVER_UNREACHABLE_MESSAGE: &str =
    "Could not reach the server to restore your session. You are browsing signed out.";
pub const SIGNED_OUT_MESSAGE: &str = "You have signed out.";

/// Side effects the session asks the host UI to perform.
pub trait SessionEffects {
    /// Navigate within the app (router navigation, not a page reload).
    fn redirect(&self, path: &str);
    /// Show a banner notice to the user.
    fn notify(&self, notice: Notice);
}

type Listener = Rc<dyn Fn(&AuthState)>;

struct SessionInner<T, S, E> {
    client: AuthClient<T, S>,
    effects: E,
    policy: RevalidationPolicy,
    state: RefCell<AuthState>,
    revalidation_started: Cell<bool>,
    listeners: RefCell<Vec<Listener>>,
}

/// Shared handle to the tab's auth session. Clones refer to the same session.
pub struct AuthSession<T, S, E> {
    inner: Rc<SessionInner<T, S, E>>,
}

impl<T, S, E> Clone for AuthSession<T, S, E> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Transport, S: KeyValueStore, E: SessionEffects> AuthSession<T, S, E> {
    /// Create the session in `Initializing`, seeded with any cached profile.
    pub fn new(client: AuthClient<T, S>, effects: E, policy: RevalidationPolicy) -> Self {
        let tentative = client.store().cached_profile();
        Self {
            inner: Rc::new(SessionInner {
                client,
                effects,
                policy,
                state: RefCell::new(AuthState::Initializing { tentative }),
                revalidation_started: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    /// Register a listener. It is called immediately with the current state
    /// and then after every transition. Listeners may subscribe further
    /// listeners; those start receiving transitions from the next one.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) {
        listener(&self.state());
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn publish(&self, next: AuthState) {
        self.inner.state.replace(next.clone());
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        for listener in &listeners {
            listener(&next);
        }
    }

    /// Resolve the startup state. Runs at most once per session; repeated or
    /// concurrent calls return immediately.
    pub async fn init(&self) {
        if self.inner.revalidation_started.replace(true) {
            return;
        }
        if !self.state().is_loading() {
            return;
        }

        let store = self.inner.client.store();
        if store.token().is_none() {
            // A profile without its token is a half-written pair.
            store.remove_cached_profile();
            self.publish(AuthState::Unauthenticated);
            return;
        }

        let result = self.inner.client.current_user().await;
        if !self.state().is_loading() {
            leptos::logging::log!("auth: discarding revalidation result, session changed meanwhile");
            return;
        }

        match result {
            Ok(user) => self.publish(AuthState::Authenticated(user)),
            Err(err) if err.is_rejection() || self.inner.policy == RevalidationPolicy::ClearOnAnyError => {
                leptos::logging::warn!("auth: revalidation failed, signing out: {err}");
                self.expire();
            }
            Err(err) => {
                leptos::logging::warn!("auth: revalidation unreachable, keeping stored session: {err}");
                self.publish(AuthState::Unauthenticated);
                self.inner.effects.notify(Notice::warning(SERVER_UNREACHABLE_MESSAGE));
            }
        }
    }

    fn expire(&self) {
        self.inner.client.logout_local();
        self.publish(AuthState::Unauthenticated);
        self.inner.effects.redirect(ROOT_PATH);
        self.inner.effects.notify(Notice::warning(SESSION_EXPIRED_MESSAGE));
    }

    /// Sign in. On failure the state is left as it was.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the auth client for inline display.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<UserProfile, ApiError> {
        let payload = self.inner.client.login(credentials).await?;
        self.publish(AuthState::Authenticated(payload.user.clone()));
        Ok(payload.user)
    }

    /// Create an account and sign in. On failure the state is left as it was.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the auth client for inline display.
    pub async fn register(&self, data: &RegisterData) -> Result<UserProfile, ApiError> {
        let payload = self.inner.client.register(data).await?;
        self.publish(AuthState::Authenticated(payload.user.clone()));
        Ok(payload.user)
    }

    /// Sign out locally and return to the root route.
    pub fn logout(&self) {
        self.publish(AuthState::Unauthenticated);
        self.inner.client.logout_local();
        self.inner.effects.redirect(ROOT_PATH);
        self.inner.effects.notify(Notice::info(SIGNED_OUT_MESSAGE));
    }
}
