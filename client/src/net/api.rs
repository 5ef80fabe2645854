//! REST client for the school backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`TransportError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Only transport failures surface as errors. Non-2xx statuses come back as
//! ordinary [`HttpReply`] values so the controller decides what they mean.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::backend::{HttpReply, SchoolBackend, TransportError};

pub const DEPARTMENTS_PATH: &str = "/departments";
pub const FACULTY_PATH: &str = "/faculty";
pub const EVENTS_PATH: &str = "/events";
pub const NOTICES_PATH: &str = "/notices";
pub const CONTACT_PATH: &str = "/contact";

/// Join a base URL and an absolute endpoint path without doubling slashes.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `SchoolBackend` backed by the browser `fetch` API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Backend pointed at the build-time configured URL.
    pub fn from_config() -> Self {
        Self::new(crate::config::backend_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

#[cfg(feature = "hydrate")]
async fn read_reply(resp: gloo_net::http::Response) -> Result<HttpReply, TransportError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
    Ok(HttpReply { status, body })
}

#[async_trait(?Send)]
impl SchoolBackend for HttpBackend {
    async fn get(&self, path: &str) -> Result<HttpReply, TransportError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            read_reply(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(TransportError::Unavailable)
        }
    }

    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError> {
        let url = self.url(path);
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| TransportError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            read_reply(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(TransportError::Unavailable)
        }
    }
}
