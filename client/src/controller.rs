//! Page controller: the initial collection load and contact submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! `HomePage` calls [`load_collections`] once on mount and
//! [`submit_contact`] on every form submit, then hands the outcome to
//! `PageState::settle_load` / `ContactState::settle_submit`. Nothing here
//! touches signals, so the whole flow runs against a scripted backend in tests.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx list responses and non-array bodies collapse to empty collections.
//! Only transport failures (and unparseable 2xx bodies) fail the whole batch,
//! in which case the caller keeps its previous collections.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use serde::de::DeserializeOwned;

use crate::net::api::{CONTACT_PATH, DEPARTMENTS_PATH, EVENTS_PATH, FACULTY_PATH, NOTICES_PATH};
use crate::net::backend::{SchoolBackend, TransportError};
use crate::net::types::{ContactForm, Department, Event, FacultyMember, Notice, decode_collection};

/// Why a collection batch could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// A request never produced a response.
    #[error("GET {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: TransportError,
    },

    /// A 2xx response body was not valid JSON.
    #[error("GET {path} returned invalid JSON: {message}")]
    Decode { path: &'static str, message: String },
}

/// The four collections fetched together on mount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionBatch {
    pub departments: Vec<Department>,
    pub faculty: Vec<FacultyMember>,
    pub events: Vec<Event>,
    pub notices: Vec<Notice>,
}

/// Result of a single contact submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The backend accepted the message (any 2xx).
    Sent,
    /// The backend answered with a non-2xx status; carries the response text.
    Rejected(String),
    /// No response was obtained; carries the error message.
    Failed(String),
}

/// Fetch all four collections concurrently and wait for every request to
/// settle before deciding the outcome.
///
/// # Errors
///
/// Returns [`LoadError`] if any request failed at the transport level or a
/// successful response carried a body that is not JSON.
pub async fn load_collections<B>(backend: &B) -> Result<CollectionBatch, LoadError>
where
    B: SchoolBackend + ?Sized,
{
    let (departments, faculty, events, notices) = futures::join!(
        fetch_collection::<B, Department>(backend, DEPARTMENTS_PATH),
        fetch_collection::<B, FacultyMember>(backend, FACULTY_PATH),
        fetch_collection::<B, Event>(backend, EVENTS_PATH),
        fetch_collection::<B, Notice>(backend, NOTICES_PATH),
    );

    Ok(CollectionBatch { departments: departments?, faculty: faculty?, events: events?, notices: notices? })
}

async fn fetch_collection<B, T>(backend: &B, path: &'static str) -> Result<Vec<T>, LoadError>
where
    B: SchoolBackend + ?Sized,
    T: DeserializeOwned + Default,
{
    let reply = backend
        .get(path)
        .await
        .map_err(|source| LoadError::Transport { path, source })?;
    if !reply.is_success() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value =
        serde_json::from_str(&reply.body).map_err(|e| LoadError::Decode { path, message: e.to_string() })?;
    Ok(decode_collection(value))
}

/// POST the form to `/contact` and classify the response.
pub async fn submit_contact<B>(backend: &B, form: &ContactForm) -> ContactOutcome
where
    B: SchoolBackend + ?Sized,
{
    let body = match serde_json::to_string(form) {
        Ok(body) => body,
        Err(e) => return ContactOutcome::Failed(e.to_string()),
    };
    match backend.post_json(CONTACT_PATH, body).await {
        Ok(reply) if reply.is_success() => ContactOutcome::Sent,
        Ok(reply) => ContactOutcome::Rejected(reply.body),
        Err(e) => ContactOutcome::Failed(e.to_string()),
    }
}
