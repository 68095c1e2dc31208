//! Room and entry records.
//!
//! # Responsibility
//! - Deserialize the top-level room list leniently.
//! - Provide copy-then-overwrite helpers for entry titles.
//!
//! # Invariants
//! - A room without `entries` (or with `entries: null`) reads as empty.
//! - Entries are never mutated in place; title rewrites produce new values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name carrying the organization title on an entry.
pub const TITLE_FIELD: &str = "title";

/// One room record from a reserve export.
///
/// Output rooms always carry exactly `room` and `entries`; other room-level
/// keys in the input are not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Opaque room identifier. Missing identifiers read as `null`.
    #[serde(default)]
    pub room: Value,
    /// Reservation entries in source order.
    #[serde(default)]
    pub entries: Option<Vec<Entry>>,
}

impl Room {
    /// Creates a room with the given identifier and entries.
    pub fn new(room: impl Into<Value>, entries: Vec<Entry>) -> Self {
        Self {
            room: room.into(),
            entries: Some(entries),
        }
    }

    /// Returns entries, treating an absent list as empty.
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_deref().unwrap_or(&[])
    }
}

/// One reservation entry.
///
/// Wraps the raw JSON value so that fields other than `title` are kept
/// exactly as read. Non-object entries are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Value);

impl Entry {
    /// Wraps a raw JSON value as an entry.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the `title` field when the entry is an object and the title
    /// is a string.
    pub fn title(&self) -> Option<&str> {
        self.0.as_object()?.get(TITLE_FIELD)?.as_str()
    }

    /// Returns whether the entry carries a `title` key of any type.
    pub fn has_title_field(&self) -> bool {
        self.0
            .as_object()
            .is_some_and(|fields| fields.contains_key(TITLE_FIELD))
    }

    /// Copies this entry and overwrites its `title` with `title`.
    ///
    /// Non-object entries are returned as plain copies.
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        let mut copy = self.0.clone();
        if let Some(fields) = copy.as_object_mut() {
            fields.insert(TITLE_FIELD.to_string(), Value::String(title.into()));
        }
        Self(copy)
    }

    /// Borrows the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
