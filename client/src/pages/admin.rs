//! Admin area shell: the section index and per-section pages.
//!
//! The content editors themselves live behind the backend's CRUD API and are
//! not part of this crate; each section page is a landing placeholder.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::state::auth::AuthState;

/// Content areas managed from the admin panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminSection {
    Events,
    Ministries,
    Sermons,
    Blog,
    Donations,
    Volunteers,
}

impl AdminSection {
    pub const ALL: [Self; 6] = [
        Self::Events,
        Self::Ministries,
        Self::Sermons,
        Self::Blog,
        Self::Donations,
        Self::Volunteers,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Ministries => "ministries",
            Self::Sermons => "sermons",
            Self::Blog => "blog",
            Self::Donations => "donations",
            Self::Volunteers => "volunteers",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Events => "Events",
            Self::Ministries => "Ministries",
            Self::Sermons => "Sermons",
            Self::Blog => "Blog posts",
            Self::Donations => "Donations",
            Self::Volunteers => "Volunteer sign-ups",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim().trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|section| section.slug().eq_ignore_ascii_case(slug))
    }

    pub fn path(self) -> String {
        format!("/admin/{}", self.slug())
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|state| {
            state
                .user()
                .map(|user| format!("Welcome, {}", user.display_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="admin-page">
            <h1>"Administration"</h1>
            <p class="admin-page__greeting">{greeting}</p>
            <ul class="admin-page__sections">
                {AdminSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a href=section.path()>{section.title()}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn AdminSectionPage() -> impl IntoView {
    let params = use_params_map();
    let section = move || params.read().get("section").and_then(|slug| AdminSection::from_slug(&slug));

    move || match section() {
        Some(section) => view! {
            <div class="admin-page">
                <a href="/admin" class="admin-page__back">"← Administration"</a>
                <h1>{section.title()}</h1>
                <p class="admin-page__placeholder">"Manage " {section.title().to_lowercase()} " here."</p>
            </div>
        }
        .into_any(),
        None => view! { <Redirect path="/admin"/> }.into_any(),
    }
}
