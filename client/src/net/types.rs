//! Wire DTOs for the school backend.
//!
//! DESIGN
//! ======
//! The backend is schema-loose: any field of a list record may be missing or
//! null, so every record field is an `Option<String>` and presence is checked
//! at render time. The contact form is the only outbound payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// An academic department.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub head: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub description: Option<String>,
}

/// A faculty member listed on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyMember {
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub department: Option<String>,
}

/// An upcoming school event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub title: Option<String>,
    /// ISO-8601 timestamp as sent by the backend.
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub description: Option<String>,
}

/// A notice or announcement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub content: Option<String>,
    /// Free-form priority label; only `"high"` is rendered differently.
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub priority: Option<String>,
}

/// Contact form body posted to `/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// All four fields are required before the form may be submitted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.is_empty())
    }
}

/// Accept any JSON scalar for a text field: strings as-is, numbers and
/// booleans in their JSON spelling, everything else as absent.
fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    })
}

/// Coerce a decoded JSON body into a collection.
///
/// Non-array bodies become an empty collection. Every array element yields
/// one record; elements that are not objects become an all-absent record.
pub fn decode_collection<T: DeserializeOwned + Default>(value: serde_json::Value) -> Vec<T> {
    let serde_json::Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect()
}
