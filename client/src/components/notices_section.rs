//! Notice list with a priority badge.

use leptos::prelude::*;

use super::loader::Loader;
use super::section_title::SectionTitle;
use crate::net::types::Notice;
use crate::state::page::PageState;
use crate::util::display::{present, priority_class};
use crate::util::placeholders;

#[component]
pub fn NoticesSection(page: ReadSignal<PageState>) -> impl IntoView {
    let loading = move || page.with(|s| s.loading);
    let shown = move || page.with(|s| placeholders::or_placeholder(&s.notices, placeholders::notices));

    view! {
        <section id="notices" class="section">
            <div class="section__inner">
                <SectionTitle title="Notices & Announcements" subtitle="Latest updates for parents and students."/>
                <Show when=move || !loading() fallback=|| view! { <Loader/> }>
                    <div class="notice-list">
                        {move || {
                            shown()
                                .into_iter()
                                .map(|notice| view! { <NoticeCard notice=notice/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn NoticeCard(notice: Notice) -> impl IntoView {
    let badge = present(notice.priority.as_deref()).map(|priority| (priority_class(priority), priority.to_owned()));
    let content = present(notice.content.as_deref()).map(str::to_owned);

    view! {
        <article class="card notice-card">
            <div class="card__header">
                <h4 class="card__title">{notice.title}</h4>
                {badge.map(|(class, label)| view! { <span class=class>{label}</span> })}
            </div>
            {content.map(|text| view! { <p class="card__body">{text}</p> })}
        </article>
    }
}
