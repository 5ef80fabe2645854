use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::backend::HttpReply;
use crate::state::contact::{ContactState, ContactStatus, SENT_MESSAGE};
use crate::state::page::PageState;

// =============================================================
// Scripted backend
// =============================================================

/// Replies keyed by path; unscripted paths answer `200 []`.
#[derive(Default)]
struct ScriptedBackend {
    replies: HashMap<&'static str, Result<HttpReply, TransportError>>,
    gets: RefCell<Vec<String>>,
    posts: RefCell<Vec<(String, String)>>,
}

impl ScriptedBackend {
    fn with(mut self, path: &'static str, reply: Result<HttpReply, TransportError>) -> Self {
        self.replies.insert(path, reply);
        self
    }

    fn reply_for(&self, path: &str) -> Result<HttpReply, TransportError> {
        self.replies
            .get(path)
            .cloned()
            .unwrap_or_else(|| Ok(HttpReply::new(200, "[]")))
    }
}

#[async_trait(?Send)]
impl SchoolBackend for ScriptedBackend {
    async fn get(&self, path: &str) -> Result<HttpReply, TransportError> {
        self.gets.borrow_mut().push(path.to_owned());
        self.reply_for(path)
    }

    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError> {
        self.posts.borrow_mut().push((path.to_owned(), body));
        self.reply_for(path)
    }
}

fn ok(body: serde_json::Value) -> Result<HttpReply, TransportError> {
    Ok(HttpReply::new(200, body.to_string()))
}

fn status(code: u16, body: &str) -> Result<HttpReply, TransportError> {
    Ok(HttpReply::new(code, body))
}

fn filled_contact() -> ContactState {
    ContactState {
        form: ContactForm {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Admissions".to_owned(),
            message: "When do applications open?".to_owned(),
        },
        status: ContactStatus::Idle,
    }
}

fn load_into(state: &mut PageState, backend: &ScriptedBackend) {
    let outcome = block_on(load_collections(backend));
    state.settle_load(outcome);
}

// =============================================================
// load_collections
// =============================================================

#[test]
fn load_requests_all_four_endpoints() {
    let backend = ScriptedBackend::default();
    block_on(load_collections(&backend)).unwrap();
    let mut gets = backend.gets.borrow().clone();
    gets.sort();
    assert_eq!(gets, vec!["/departments", "/events", "/faculty", "/notices"]);
}

#[test]
fn load_success_array_becomes_slot() {
    let backend = ScriptedBackend::default().with(
        "/notices",
        ok(serde_json::json!([{ "title": "PTM", "content": "Next Friday", "priority": "high" }])),
    );
    let batch = block_on(load_collections(&backend)).unwrap();
    assert_eq!(
        batch.notices,
        vec![Notice {
            title: Some("PTM".to_owned()),
            content: Some("Next Friday".to_owned()),
            priority: Some("high".to_owned()),
        }]
    );
}

#[test]
fn load_success_array_with_loosely_typed_field_keeps_record() {
    let backend = ScriptedBackend::default().with(
        "/notices",
        ok(serde_json::json!([{ "title": "Exam schedule", "content": "Posted", "priority": 1 }])),
    );
    let mut state = PageState::default();
    load_into(&mut state, &backend);
    assert_eq!(
        state.notices,
        vec![Notice {
            title: Some("Exam schedule".to_owned()),
            content: Some("Posted".to_owned()),
            priority: Some("1".to_owned()),
        }]
    );
}

#[test]
fn load_non_success_status_becomes_empty() {
    let backend = ScriptedBackend::default().with("/faculty", status(503, "[{\"name\":\"ignored\"}]"));
    let batch = block_on(load_collections(&backend)).unwrap();
    assert!(batch.faculty.is_empty());
}

#[test]
fn load_non_array_body_becomes_empty() {
    let backend = ScriptedBackend::default().with("/events", ok(serde_json::json!({ "events": [] })));
    let batch = block_on(load_collections(&backend)).unwrap();
    assert!(batch.events.is_empty());
}

#[test]
fn load_all_empty_arrays_yield_empty_slots() {
    let backend = ScriptedBackend::default();
    let mut state = PageState::default();
    load_into(&mut state, &backend);
    assert!(!state.loading);
    assert!(state.departments.is_empty());
    assert!(state.faculty.is_empty());
    assert!(state.events.is_empty());
    assert!(state.notices.is_empty());
}

#[test]
fn load_partial_failure_only_empties_failed_slot() {
    let backend = ScriptedBackend::default()
        .with("/departments", status(500, "Internal Server Error"))
        .with("/faculty", ok(serde_json::json!([{ "name": "Jane Doe" }])))
        .with("/events", ok(serde_json::json!([{ "title": "Science Fair" }])))
        .with("/notices", ok(serde_json::json!([{ "title": "Holiday" }])));
    let mut state = PageState::default();
    load_into(&mut state, &backend);

    assert!(state.departments.is_empty());
    assert_eq!(state.faculty, vec![FacultyMember { name: Some("Jane Doe".to_owned()), ..FacultyMember::default() }]);
    assert_eq!(state.events, vec![Event { title: Some("Science Fair".to_owned()), ..Event::default() }]);
    assert_eq!(state.notices, vec![Notice { title: Some("Holiday".to_owned()), ..Notice::default() }]);
}

#[test]
fn load_transport_failure_fails_batch_after_all_requests() {
    let backend = ScriptedBackend::default().with("/events", Err(TransportError::Network("offline".to_owned())));
    let err = block_on(load_collections(&backend)).unwrap_err();
    assert_eq!(
        err,
        LoadError::Transport { path: "/events", source: TransportError::Network("offline".to_owned()) }
    );
    assert_eq!(backend.gets.borrow().len(), 4);
}

#[test]
fn load_transport_failure_keeps_prior_state_and_clears_loading() {
    let good = ScriptedBackend::default().with("/departments", ok(serde_json::json!([{ "name": "Arts" }])));
    let mut state = PageState::default();
    load_into(&mut state, &good);

    let broken = ScriptedBackend::default().with("/notices", Err(TransportError::Network("offline".to_owned())));
    state.loading = true;
    load_into(&mut state, &broken);

    assert!(!state.loading);
    assert_eq!(state.departments.len(), 1);
    assert_eq!(state.departments[0].name.as_deref(), Some("Arts"));
}

#[test]
fn load_invalid_json_on_success_fails_batch() {
    let backend = ScriptedBackend::default().with("/departments", status(200, "<html>oops</html>"));
    let err = block_on(load_collections(&backend)).unwrap_err();
    assert!(matches!(err, LoadError::Decode { path: "/departments", .. }));
}

#[test]
fn load_twice_with_same_responses_is_idempotent() {
    let backend = ScriptedBackend::default()
        .with("/departments", ok(serde_json::json!([{ "name": "Science" }, { "name": "Arts" }])))
        .with("/notices", ok(serde_json::json!([{ "title": "Holiday" }])));
    let mut state = PageState::default();
    load_into(&mut state, &backend);
    let first = state.clone();
    load_into(&mut state, &backend);
    assert_eq!(state, first);
    assert_eq!(state.departments.len(), 2);
}

// =============================================================
// submit_contact
// =============================================================

#[test]
fn submit_posts_form_json_to_contact() {
    let backend = ScriptedBackend::default().with("/contact", status(200, "{}"));
    let form = filled_contact().form;
    block_on(submit_contact(&backend, &form));

    let posts = backend.posts.borrow();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].0, "/contact");
    let body: serde_json::Value = serde_json::from_str(&posts[0].1).unwrap();
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["subject"], "Admissions");
}

#[test]
fn submit_success_resets_form() {
    let backend = ScriptedBackend::default().with("/contact", status(200, "{\"ok\":true}"));
    let mut contact = filled_contact();
    let form = contact.begin_submit().unwrap();
    assert_eq!(contact.status_message().as_deref(), Some("Sending..."));

    contact.settle_submit(block_on(submit_contact(&backend, &form)));
    assert_eq!(contact.status_message().as_deref(), Some(SENT_MESSAGE));
    assert_eq!(contact.form, ContactForm::default());
}

#[test]
fn submit_any_2xx_counts_as_sent() {
    let backend = ScriptedBackend::default().with("/contact", status(204, ""));
    let outcome = block_on(submit_contact(&backend, &filled_contact().form));
    assert_eq!(outcome, ContactOutcome::Sent);
}

#[test]
fn submit_rejected_shows_body_and_keeps_form() {
    let backend = ScriptedBackend::default().with("/contact", status(422, "invalid email"));
    let mut contact = filled_contact();
    let form = contact.begin_submit().unwrap();

    contact.settle_submit(block_on(submit_contact(&backend, &form)));
    assert!(contact.status_message().unwrap().contains("invalid email"));
    assert_eq!(contact.form, filled_contact().form);
}

#[test]
fn submit_network_error_shows_message_and_keeps_form() {
    let backend = ScriptedBackend::default().with("/contact", Err(TransportError::Network("timeout".to_owned())));
    let mut contact = filled_contact();
    let form = contact.begin_submit().unwrap();

    contact.settle_submit(block_on(submit_contact(&backend, &form)));
    assert_eq!(contact.status_message().as_deref(), Some("Error: timeout"));
    assert_eq!(contact.form, filled_contact().form);
}

#[test]
fn submit_twice_issues_two_posts() {
    let backend = ScriptedBackend::default().with("/contact", status(200, ""));
    let form = filled_contact().form;
    block_on(submit_contact(&backend, &form));
    block_on(submit_contact(&backend, &form));
    assert_eq!(backend.posts.borrow().len(), 2);
}
