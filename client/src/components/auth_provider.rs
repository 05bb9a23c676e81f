//! Builds the tab's auth session and provides it to the route tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Must render inside `<Router>` so session redirects go through router
//! navigation. Children get three contexts: `RwSignal<AuthState>` (read by
//! guards and chrome), `RwSignal<NoticeState>` (the banner), and the
//! session handle itself for login/register/logout.

use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::AuthClient;
use crate::net::transport::GlooTransport;
use crate::state::auth::AuthState;
use crate::state::notice::{Notice, NoticeState};
use crate::state::session::{AuthSession, SessionEffects};
use crate::util::storage::BrowserStorage;
use crate::util::token_store::TokenStore;

pub type AppSession = AuthSession<GlooTransport, BrowserStorage, RouterEffects>;

/// Session handle as stored in context.
pub type SessionHandle = StoredValue<AppSession, LocalStorage>;

/// Session effects backed by the Leptos router and the notice banner.
#[derive(Clone)]
pub struct RouterEffects {
    navigate: Rc<dyn Fn(&str)>,
    notices: RwSignal<NoticeState>,
    dismiss_ms: u32,
}

impl SessionEffects for RouterEffects {
    fn redirect(&self, path: &str) {
        (self.navigate)(path);
    }

    fn notify(&self, notice: Notice) {
        show_notice(self.notices, notice, self.dismiss_ms);
    }
}

/// Show `notice` in the banner and schedule its dismissal.
pub fn show_notice(notices: RwSignal<NoticeState>, notice: Notice, dismiss_ms: u32) {
    let mut seq = 0;
    notices.update(|n| seq = n.show(notice));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(dismiss_ms))).await;
        notices.update(|n| {
            n.dismiss(seq);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (seq, dismiss_ms);
    }
}

/// Session handle from context. Panics outside `<AuthProvider>`.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

#[component]
pub fn AuthProvider(config: ClientConfig, children: Children) -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());
    let navigate = use_navigate();

    let effects = RouterEffects {
        navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        notices,
        dismiss_ms: config.notice_dismiss_ms,
    };
    let client = AuthClient::new(
        GlooTransport::from_config(&config),
        TokenStore::new(BrowserStorage, &config),
    );
    let session = AuthSession::new(client, effects, config.revalidation);
    session.subscribe(move |state| auth.set(state.clone()));

    provide_context(auth);
    provide_context(notices);
    provide_context::<SessionHandle>(StoredValue::new_local(session.clone()));

    // Revalidation only runs in the browser; SSR renders the loading state.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.init().await;
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    children()
}
