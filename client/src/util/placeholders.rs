//! Fixed records shown when a collection slot is empty.
//!
//! An empty slot means the backend returned nothing, failed, or sent
//! something unusable; the page shows the same stand-ins in every case.
//! These are display-only and are never written back into `PageState`.

#[cfg(test)]
#[path = "placeholders_test.rs"]
mod placeholders_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::net::types::{Department, Event, FacultyMember, Notice};

fn text(value: &str) -> Option<String> {
    Some(value.to_owned())
}

fn now_rfc3339() -> Option<String> {
    OffsetDateTime::now_utc().format(&Rfc3339).ok()
}

pub fn departments() -> Vec<Department> {
    vec![
        Department { name: text("Science"), head: text("Dr. Allen"), description: text("Physics, Chemistry, Biology") },
        Department { name: text("Mathematics"), head: text("Ms. Carter"), description: text("Algebra to Calculus") },
        Department { name: text("Arts"), head: text("Mr. Smith"), description: text("Fine arts, music, drama") },
    ]
}

pub fn faculty() -> Vec<FacultyMember> {
    vec![
        FacultyMember {
            name: text("Jane Doe"),
            designation: text("Mathematics Teacher"),
            department: text("Mathematics"),
        },
        FacultyMember { name: text("John Smith"), designation: text("Science Teacher"), department: text("Science") },
        FacultyMember { name: text("Emily Johnson"), designation: text("Art Teacher"), department: text("Arts") },
    ]
}

/// Placeholder events are all dated "now".
pub fn events() -> Vec<Event> {
    let now = now_rfc3339();
    vec![
        Event {
            title: text("Science Fair"),
            date: now.clone(),
            location: text("Auditorium"),
            description: text("Student science projects showcase."),
        },
        Event {
            title: text("Annual Sports Day"),
            date: now.clone(),
            location: text("Playground"),
            description: text("Track and field events."),
        },
        Event {
            title: text("Art Exhibition"),
            date: now,
            location: text("Hall A"),
            description: text("Artwork by students."),
        },
    ]
}

pub fn notices() -> Vec<Notice> {
    vec![
        Notice {
            title: text("Parent-Teacher Meeting"),
            content: text("PTM scheduled for next Friday."),
            priority: text("high"),
        },
        Notice {
            title: text("Holiday Notice"),
            content: text("School will remain closed on Monday."),
            priority: text("normal"),
        },
    ]
}

/// The slot itself when it has records, otherwise `fallback()`.
pub fn or_placeholder<T: Clone>(slot: &[T], fallback: fn() -> Vec<T>) -> Vec<T> {
    if slot.is_empty() { fallback() } else { slot.to_vec() }
}
