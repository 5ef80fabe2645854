use leptos::prelude::*;

/// Shown in place of a list section until the initial load settles.
#[component]
pub fn Loader() -> impl IntoView {
    view! { <div class="loader">"Loading..."</div> }
}
