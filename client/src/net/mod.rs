//! Networking modules for the school backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the transport seam, `api` implements it over HTTP, and
//! `types` defines the wire schema.

pub mod api;
pub mod backend;
pub mod types;
