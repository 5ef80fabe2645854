use leptos::prelude::*;

use crate::util::display::current_year;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                "© " {current_year()} " Springfield Public School. All rights reserved."
            </div>
        </footer>
    }
}
