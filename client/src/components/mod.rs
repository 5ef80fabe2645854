//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Static sections (`site_header`, `hero`, `about`, `site_footer`) take no
//! state. List sections read `PageState`; the contact section owns the only
//! writable state on the page.

pub mod about;
pub mod contact_section;
pub mod departments_section;
pub mod events_section;
pub mod faculty_section;
pub mod hero;
pub mod loader;
pub mod notices_section;
pub mod section_title;
pub mod site_footer;
pub mod site_header;
