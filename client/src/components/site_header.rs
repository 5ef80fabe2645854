//! Sticky top bar with the school brand, in-page anchors, and the system test link.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 6] = [
    ("#about", "About"),
    ("#departments", "Departments"),
    ("#faculty", "Faculty"),
    ("#events", "Events"),
    ("#notices", "Notices"),
    ("#contact", "Contact"),
];

/// Right-aligned link to the backend connectivity check page.
const TEST_PAGE_LINK: (&str, &str) = ("/test", "System Test");

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="#home" class="site-header__brand">
                    <span class="site-header__logo">"S"</span>
                    <span class="site-header__name">"Springfield Public School"</span>
                </a>
                <nav class="site-header__nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href class="site-header__link">{label}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <a href=TEST_PAGE_LINK.0 class="site-header__test-link">{TEST_PAGE_LINK.1}</a>
            </div>
        </header>
    }
}
