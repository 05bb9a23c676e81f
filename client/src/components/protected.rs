//! Route wrapper that applies the auth guard to its children.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_decision};

/// Mounts `children` only when the guard allows it.
///
/// The decision is memoized, so a profile refresh that does not change the
/// outcome does not remount the page.
#[component]
pub fn Protected(#[prop(optional)] admin_required: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| auth.with(|state| guard_decision(state, admin_required)));

    move || match decision.get() {
        GuardDecision::Loading => view! {
            <div class="route-loading" aria-busy="true">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
