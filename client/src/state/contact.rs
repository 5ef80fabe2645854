//! Contact form edit state and its submission status.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::controller::ContactOutcome;
use crate::net::types::ContactForm;

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Message sent successfully!";

/// Editable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// Submission status. `Sent`, `Rejected` and `Failed` are not terminal; the
/// next submit moves back to `Sending`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Rejected(String),
    Failed(String),
}

impl ContactStatus {
    /// Status line shown next to the submit button, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(SENDING_MESSAGE.to_owned()),
            Self::Sent => Some(SENT_MESSAGE.to_owned()),
            Self::Rejected(text) => Some(format!("Failed to send: {text}")),
            Self::Failed(err) => Some(format!("Error: {err}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: ContactStatus,
}

impl ContactState {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.form.name,
            ContactField::Email => &self.form.email,
            ContactField::Subject => &self.form.subject,
            ContactField::Message => &self.form.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Subject => self.form.subject = value,
            ContactField::Message => self.form.message = value,
        }
    }

    /// Enter `Sending` and return the form to post.
    ///
    /// Returns `None` (and leaves the status alone) when a required field is
    /// empty. A submission already in flight does not block another one.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if !self.form.is_complete() {
            return None;
        }
        self.status = ContactStatus::Sending;
        Some(self.form.clone())
    }

    /// Record the result of a submission. Only a successful send clears the form.
    pub fn settle_submit(&mut self, outcome: ContactOutcome) {
        self.status = match outcome {
            ContactOutcome::Sent => {
                self.form = ContactForm::default();
                ContactStatus::Sent
            }
            ContactOutcome::Rejected(text) => ContactStatus::Rejected(text),
            ContactOutcome::Failed(err) => ContactStatus::Failed(err),
        };
    }

    pub fn status_message(&self) -> Option<String> {
        self.status.message()
    }
}
