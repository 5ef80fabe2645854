//! Landing banner with the headline, calls to action, and headline numbers.

use leptos::prelude::*;

const STATS: [(&str, &str); 3] = [("1200+", "Students"), ("85", "Faculty"), ("40", "Classrooms")];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <div class="hero__copy">
                    <h1 class="hero__headline">"Inspiring Excellence, Empowering Students"</h1>
                    <p class="hero__lead">
                        "A vibrant learning community fostering academic achievement, creativity, and character."
                    </p>
                    <div class="hero__actions">
                        <a href="#about" class="btn btn--primary">"Explore"</a>
                        <a href="#contact" class="btn btn--ghost">"Get in Touch"</a>
                    </div>
                </div>
                <div class="hero__stats">
                    {STATS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="hero__stat">
                                    <div class="hero__stat-value">{value}</div>
                                    <div class="hero__stat-label">{label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
