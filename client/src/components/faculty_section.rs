//! Faculty cards with an initials avatar.

use leptos::prelude::*;

use super::loader::Loader;
use super::section_title::SectionTitle;
use crate::net::types::FacultyMember;
use crate::state::page::PageState;
use crate::util::display::{designation_label, initials, present};
use crate::util::placeholders;

#[component]
pub fn FacultySection(page: ReadSignal<PageState>) -> impl IntoView {
    let loading = move || page.with(|s| s.loading);
    let shown = move || page.with(|s| placeholders::or_placeholder(&s.faculty, placeholders::faculty));

    view! {
        <section id="faculty" class="section">
            <div class="section__inner">
                <SectionTitle title="Faculty" subtitle="Educators dedicated to student success."/>
                <Show when=move || !loading() fallback=|| view! { <Loader/> }>
                    <div class="card-grid">
                        {move || {
                            shown()
                                .into_iter()
                                .map(|member| view! { <FacultyCard member=member/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn FacultyCard(member: FacultyMember) -> impl IntoView {
    let avatar = initials(member.name.as_deref());
    let designation = designation_label(member.designation.as_deref()).to_owned();
    let department = present(member.department.as_deref()).map(str::to_owned);

    view! {
        <article class="card faculty-card">
            <div class="faculty-card__avatar">{avatar}</div>
            <h4 class="faculty-card__name">{member.name}</h4>
            <p class="faculty-card__designation">{designation}</p>
            {department.map(|text| view! { <p class="faculty-card__department">{text}</p> })}
        </article>
    }
}
