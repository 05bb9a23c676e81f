//! Public landing page.

use leptos::prelude::*;

const SECTIONS: [(&str, &str); 6] = [
    ("Events", "Services, gatherings, and what's coming up this month."),
    ("Ministries", "Find a ministry to serve in or be served by."),
    ("Sermons", "Listen to recent messages."),
    ("Blog", "News and reflections from our community."),
    ("Give", "Support the church's mission."),
    ("Volunteer", "Sign up to help on Sundays and at events."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__hero">
                <h1>"Welcome home"</h1>
                <p>"Everyone is welcome. Join us this Sunday."</p>
            </header>
            <div class="home-page__sections">
                {SECTIONS
                    .into_iter()
                    .map(|(title, blurb)| {
                        view! {
                            <section class="home-page__card">
                                <h2>{title}</h2>
                                <p>{blurb}</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
