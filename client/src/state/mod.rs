//! Page state owned by the home page.
//!
//! DESIGN
//! ======
//! Collections and the contact form are split so the list sections and the
//! form each depend on one small model.

pub mod contact;
pub mod page;
