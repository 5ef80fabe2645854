//! Department cards, or placeholders when the slot is empty.

use leptos::prelude::*;

use super::loader::Loader;
use super::section_title::SectionTitle;
use crate::net::types::Department;
use crate::state::page::PageState;
use crate::util::display::present;
use crate::util::placeholders;

#[component]
pub fn DepartmentsSection(page: ReadSignal<PageState>) -> impl IntoView {
    let loading = move || page.with(|s| s.loading);
    let shown = move || page.with(|s| placeholders::or_placeholder(&s.departments, placeholders::departments));

    view! {
        <section id="departments" class="section section--muted">
            <div class="section__inner">
                <SectionTitle title="Departments" subtitle="Academic units and areas of study."/>
                <Show when=move || !loading() fallback=|| view! { <Loader/> }>
                    <div class="card-grid">
                        {move || {
                            shown()
                                .into_iter()
                                .map(|department| view! { <DepartmentCard department=department/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn DepartmentCard(department: Department) -> impl IntoView {
    let head = present(department.head.as_deref()).map(|head| format!("Head: {head}"));
    let description = present(department.description.as_deref()).map(str::to_owned);

    view! {
        <article class="card">
            <div class="card__header">
                <h3 class="card__title">{department.name}</h3>
                {head.map(|text| view! { <span class="card__meta">{text}</span> })}
            </div>
            {description.map(|text| view! { <p class="card__body">{text}</p> })}
        </article>
    }
}
