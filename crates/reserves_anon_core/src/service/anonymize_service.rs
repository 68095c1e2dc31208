//! Room rewriting with mapped labels.
//!
//! # Responsibility
//! - Produce new rooms with titles replaced by their labels.
//!
//! # Invariants
//! - Room order, room identifiers, entry order and entry counts are kept.
//! - Fields other than `title` are copied verbatim.
//! - Entries whose title is absent from the mapping are plain copies.

use crate::model::room::{Entry, Room};
use crate::service::mapping_service::TitleMapping;

/// Rewrites `rooms` using `mapping`, returning new rooms.
pub fn anonymize(rooms: &[Room], mapping: &TitleMapping) -> Vec<Room> {
    rooms
        .iter()
        .map(|room| Room {
            room: room.room.clone(),
            entries: Some(
                room.entries()
                    .iter()
                    .map(|entry| anonymize_entry(entry, mapping))
                    .collect(),
            ),
        })
        .collect()
}

/// Builds the mapping for `rooms` and applies it in one step.
pub fn anonymize_rooms(rooms: &[Room]) -> (Vec<Room>, TitleMapping) {
    let mapping = TitleMapping::build(rooms);
    let anonymized = anonymize(rooms, &mapping);
    (anonymized, mapping)
}

fn anonymize_entry(entry: &Entry, mapping: &TitleMapping) -> Entry {
    match entry.title().and_then(|title| mapping.label_for(title)) {
        Some(label) => entry.with_title(label),
        None => entry.clone(),
    }
}
