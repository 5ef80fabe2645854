//! Transport seam between the page controller and the school backend.
//!
//! DESIGN
//! ======
//! The controller only ever needs "GET a path" and "POST JSON to a path" and
//! a status + body back. Keeping that behind a trait lets the browser build
//! use `gloo-net` while tests drive the controller with scripted replies.

use async_trait::async_trait;

/// Errors raised before a response is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never completed (DNS, connection, CORS, body read).
    #[error("{0}")]
    Network(String),

    /// HTTP calls are not available in this build (server-side render).
    #[error("backend requests are only available in the browser")]
    Unavailable,
}

/// A settled HTTP response with its body read as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP surface consumed by the page.
#[async_trait(?Send)]
pub trait SchoolBackend {
    /// Issue `GET {base}{path}`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response could be obtained.
    async fn get(&self, path: &str) -> Result<HttpReply, TransportError>;

    /// Issue `POST {base}{path}` with a JSON body and
    /// `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no response could be obtained.
    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError>;
}
