//! Utility helpers shared across page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure display logic lives here so components stay declarative and the
//! presentation rules can be tested without a browser.

pub mod display;
pub mod placeholders;
