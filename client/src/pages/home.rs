//! The single school landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount (in the browser) the page kicks off one concurrent load of all
//! four collections and settles `PageState` once every request has finished.
//! During SSR the load never runs, so the server renders the loading state
//! and hydration takes over from there.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact_section::ContactSection;
use crate::components::departments_section::DepartmentsSection;
use crate::components::events_section::EventsSection;
use crate::components::faculty_section::FacultySection;
use crate::components::hero::Hero;
use crate::components::notices_section::NoticesSection;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::state::contact::ContactState;
use crate::state::page::PageState;

#[component]
pub fn HomePage() -> impl IntoView {
    let page = RwSignal::new(PageState::default());
    let contact = RwSignal::new(ContactState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let backend = crate::net::api::HttpBackend::from_config();
        log::debug!("loading page collections from {}", backend.base_url());
        let outcome = crate::controller::load_collections(&backend).await;
        page.update(|state| state.settle_load(outcome));
    });

    let page = page.read_only();

    view! {
        <div class="home-page" id="home">
            <SiteHeader/>
            <Hero/>
            <About/>
            <DepartmentsSection page=page/>
            <FacultySection page=page/>
            <EventsSection page=page/>
            <NoticesSection page=page/>
            <ContactSection contact=contact/>
            <SiteFooter/>
        </div>
    }
}
