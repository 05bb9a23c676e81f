//! Dismissible banner for session notices.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_dismiss = move |_| {
        let seq = notices.get_untracked().seq;
        notices.update(|n| {
            n.dismiss(seq);
        });
    };

    move || {
        notices.get().current.map(|notice| {
            let class = format!("notice {}", notice.kind.css_modifier());
            view! {
                <div class=class role="status">
                    <span class="notice__message">{notice.message}</span>
                    <button class="notice__dismiss" title="Dismiss" on:click=on_dismiss>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
