use super::*;

#[test]
fn resolve_backend_url_defaults_when_unset() {
    assert_eq!(resolve_backend_url(None), DEFAULT_BACKEND_URL);
}

#[test]
fn resolve_backend_url_defaults_when_blank() {
    assert_eq!(resolve_backend_url(Some("   ")), DEFAULT_BACKEND_URL);
}

#[test]
fn resolve_backend_url_trims_trailing_slash() {
    assert_eq!(resolve_backend_url(Some("https://api.springfield.edu/")), "https://api.springfield.edu");
}

#[test]
fn backend_url_is_never_empty() {
    assert!(!backend_url().is_empty());
}
