//! Centered heading used at the top of every page section.

use leptos::prelude::*;

#[component]
pub fn SectionTitle(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="section-title">
            <h2 class="section-title__heading">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-title__subtitle">{text}</p> })}
        </div>
    }
}
