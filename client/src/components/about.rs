//! Static mission / vision / values block.

use leptos::prelude::*;

use super::section_title::SectionTitle;

const PILLARS: [(&str, &str); 3] = [
    ("Mission", "To deliver holistic education that nurtures critical thinking, creativity, and compassion."),
    ("Vision", "To be a beacon of excellence, empowering students to shape a better future."),
    ("Values", "Integrity, Respect, Inclusion, and Lifelong Learning."),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="section__inner">
                <SectionTitle title="About Our School" subtitle="Overview of our mission, vision, and values."/>
                <div class="card-grid">
                    {PILLARS
                        .into_iter()
                        .map(|(heading, body)| {
                            view! {
                                <article class="card">
                                    <h3 class="card__title">{heading}</h3>
                                    <p class="card__body">{body}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
