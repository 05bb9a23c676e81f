//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::nav_bar::NavBar;
use crate::components::notice_banner::NoticeBanner;
use crate::components::protected::Protected;
use crate::config::ClientConfig;
use crate::pages::{
    account::AccountPage,
    admin::{AdminPage, AdminSectionPage},
    home::HomePage,
    login::LoginPage,
    register::RegisterPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `AuthProvider` sits inside `Router` so session redirects use router
/// navigation; everything below it can read the session contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = ClientConfig::load();

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Grace Fellowship"/>

        <Router>
            <AuthProvider config=config>
                <NavBar/>
                <NoticeBanner/>
                <main class="page">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route
                            path=StaticSegment("account")
                            view=|| view! { <Protected><AccountPage/></Protected> }
                        />
                        <Route
                            path=StaticSegment("admin")
                            view=|| view! { <Protected admin_required=true><AdminPage/></Protected> }
                        />
                        <Route
                            path=(StaticSegment("admin"), ParamSegment("section"))
                            view=|| view! { <Protected admin_required=true><AdminSectionPage/></Protected> }
                        />
                    </Routes>
                </main>
            </AuthProvider>
        </Router>
    }
}
