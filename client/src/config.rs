//! Build-time configuration for the page.
//!
//! The backend base URL is baked in at compile time from `BACKEND_URL`, the
//! same way a bundler inlines its env vars into a static site.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Backend base URL from the build environment, or the local default.
pub fn backend_url() -> String {
    resolve_backend_url(option_env!("BACKEND_URL"))
}

fn resolve_backend_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BACKEND_URL)
        .trim_end_matches('/')
        .to_owned()
}
