//! Contact form and its status line.
//!
//! DESIGN
//! ======
//! Submission is fire-and-forget: every valid submit spawns its own POST and
//! whichever settles last decides the status line. Nothing disables the
//! button while a request is in flight.

use leptos::prelude::*;

use super::section_title::SectionTitle;
use crate::state::contact::{ContactField, ContactState};

#[component]
pub fn ContactSection(contact: RwSignal<ContactState>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut snapshot = None;
        contact.update(|state| snapshot = state.begin_submit());
        let Some(form) = snapshot else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let backend = crate::net::api::HttpBackend::from_config();
            let outcome = crate::controller::submit_contact(&backend, &form).await;
            contact.update(|state| state.settle_submit(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    let status = move || contact.with(ContactState::status_message);

    view! {
        <section id="contact" class="section section--accent">
            <div class="section__inner section__inner--narrow">
                <SectionTitle title="Contact Us" subtitle="We would love to hear from you."/>
                <form class="contact-form" on:submit=on_submit>
                    <ContactInput contact=contact field=ContactField::Name label="Name"/>
                    <ContactInput contact=contact field=ContactField::Email label="Email" input_type="email"/>
                    <ContactInput contact=contact field=ContactField::Subject label="Subject" wide=true/>
                    <ContactInput contact=contact field=ContactField::Message label="Message" wide=true multiline=true/>
                    <div class="contact-form__actions">
                        <button type="submit" class="btn btn--primary">"Send Message"</button>
                        <Show when=move || status().is_some()>
                            <span class="contact-form__status">{move || status().unwrap_or_default()}</span>
                        </Show>
                    </div>
                </form>
            </div>
        </section>
    }
}

/// One labelled, required form control bound to a single contact field.
#[component]
fn ContactInput(
    contact: RwSignal<ContactState>,
    field: ContactField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] wide: bool,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || contact.with(|state| state.field(field).to_owned());
    let on_input = move |ev: leptos::ev::Event| {
        contact.update(|state| state.set_field(field, event_target_value(&ev)));
    };

    let control = if multiline {
        view! {
            <textarea class="contact-form__input" rows="4" required=true prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        view! {
            <input class="contact-form__input" type=input_type required=true prop:value=value on:input=on_input/>
        }
        .into_any()
    };

    view! {
        <div class="contact-form__field" class:contact-form__field--wide=wide>
            <label class="contact-form__label">{label}</label>
            {control}
        </div>
    }
}
