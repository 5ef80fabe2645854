//! Upcoming event cards.

use leptos::prelude::*;

use super::loader::Loader;
use super::section_title::SectionTitle;
use crate::net::types::Event;
use crate::state::page::PageState;
use crate::util::display::{format_event_date, present};
use crate::util::placeholders;

#[component]
pub fn EventsSection(page: ReadSignal<PageState>) -> impl IntoView {
    let loading = move || page.with(|s| s.loading);
    let shown = move || page.with(|s| placeholders::or_placeholder(&s.events, placeholders::events));

    view! {
        <section id="events" class="section section--muted">
            <div class="section__inner">
                <SectionTitle title="Upcoming Events" subtitle="Join our latest activities and programs."/>
                <Show when=move || !loading() fallback=|| view! { <Loader/> }>
                    <div class="card-grid">
                        {move || {
                            shown()
                                .into_iter()
                                .map(|event| view! { <EventCard event=event/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn EventCard(event: Event) -> impl IntoView {
    let when = present(event.date.as_deref()).map(format_event_date);
    let location = present(event.location.as_deref()).map(str::to_owned);
    let description = present(event.description.as_deref()).map(str::to_owned);

    view! {
        <article class="card event-card">
            <h4 class="card__title">{event.title}</h4>
            {when.map(|text| view! { <p class="card__meta">{text}</p> })}
            {location.map(|text| view! { <p class="card__meta">{text}</p> })}
            {description.map(|text| view! { <p class="card__body">{text}</p> })}
        </article>
    }
}
