//! Presentation rules for loosely-typed records.
//!
//! A field is only rendered when it is present and non-empty; everything else
//! is skipped or replaced with a label.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

pub const DEFAULT_DESIGNATION: &str = "Faculty Member";

/// The field value if it is present and non-empty.
pub fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}

/// Up to two initials from the first letter of each space-separated word.
pub fn initials(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

pub fn designation_label(designation: Option<&str>) -> &str {
    present(designation).unwrap_or(DEFAULT_DESIGNATION)
}

pub fn is_high_priority(priority: &str) -> bool {
    priority == "high"
}

/// BEM modifier class for a notice priority badge.
pub fn priority_class(priority: &str) -> &'static str {
    if is_high_priority(priority) {
        "notice-card__priority notice-card__priority--high"
    } else {
        "notice-card__priority"
    }
}

/// Human-readable event timestamp, e.g. `Mar 4, 2026, 9:30 AM`.
///
/// Accepts RFC 3339 timestamps, offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`
/// timestamps, and bare `YYYY-MM-DD` dates; anything else is returned unchanged.
pub fn format_event_date(raw: &str) -> String {
    let timestamp = format_description!(
        "[month repr:short] [day padding:none], [year], [hour repr:12 padding:none]:[minute] [period]"
    );
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return parsed.format(timestamp).unwrap_or_else(|_| raw.to_owned());
    }
    let local_formats = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    ];
    for local in local_formats {
        if let Ok(parsed) = PrimitiveDateTime::parse(raw, local) {
            return parsed.format(timestamp).unwrap_or_else(|_| raw.to_owned());
        }
    }
    let date_only = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(raw, date_only) {
        return date.midnight().format(timestamp).unwrap_or_else(|_| raw.to_owned());
    }
    raw.to_owned()
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
