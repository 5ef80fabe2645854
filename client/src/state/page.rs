//! Collection slots and the loading flag.
//!
//! DESIGN
//! ======
//! Each slot holds exactly what the last successful batch decoded, possibly
//! empty. Placeholder records are a rendering concern and never land here.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::controller::{CollectionBatch, LoadError};
use crate::net::types::{Department, Event, FacultyMember, Notice};

/// State of the four collection slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    pub departments: Vec<Department>,
    pub faculty: Vec<FacultyMember>,
    pub events: Vec<Event>,
    pub notices: Vec<Notice>,
    /// True from mount until the initial batch settles.
    pub loading: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            departments: Vec::new(),
            faculty: Vec::new(),
            events: Vec::new(),
            notices: Vec::new(),
            loading: true,
        }
    }
}

impl PageState {
    /// Apply a settled load: replace every slot on success, keep the prior
    /// slots on failure, and clear `loading` either way.
    pub fn settle_load(&mut self, outcome: Result<CollectionBatch, LoadError>) {
        match outcome {
            Ok(batch) => {
                self.departments = batch.departments;
                self.faculty = batch.faculty;
                self.events = batch.events;
                self.notices = batch.notices;
            }
            Err(err) => log::error!("failed to load page collections: {err}"),
        }
        self.loading = false;
    }
}
