//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The home page owns the page state and the initial load; rendering is
//! delegated to `components`.

pub mod home;
