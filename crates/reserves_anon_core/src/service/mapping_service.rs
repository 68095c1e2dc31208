//! Title-to-label mapping builder.
//!
//! # Responsibility
//! - Extract every string title across all rooms.
//! - Assign labels to unique titles in sorted order.
//!
//! # Invariants
//! - Titles are compared exactly (case-sensitive, no normalization).
//! - Sorted order is plain `str` ordering, i.e. Unicode codepoint order.
//! - The first sorted title receives `A`, the second `B`, and so on.

use crate::label::bijective::generate_labels;
use crate::model::room::Room;
use std::collections::{BTreeMap, BTreeSet};

/// Returns every string title in room/entry order, duplicates included.
pub fn collect_titles(rooms: &[Room]) -> Vec<&str> {
    rooms
        .iter()
        .flat_map(|room| room.entries())
        .filter_map(|entry| entry.title())
        .collect()
}

/// Bijection from unique titles to short labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMapping {
    labels: BTreeMap<String, String>,
}

impl TitleMapping {
    /// Builds the mapping from all titles found in `rooms`.
    pub fn build(rooms: &[Room]) -> Self {
        Self::from_titles(collect_titles(rooms))
    }

    /// Builds the mapping from an arbitrary title sequence.
    ///
    /// Duplicates are allowed and collapse onto one label.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = titles.into_iter().map(Into::into).collect();
        let labels = generate_labels(unique.len());
        Self {
            labels: unique.into_iter().zip(labels).collect(),
        }
    }

    /// Returns the label assigned to `title`, if any.
    pub fn label_for(&self, title: &str) -> Option<&str> {
        self.labels.get(title).map(String::as_str)
    }

    /// Number of unique titles.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(title, label)` pairs in sorted title order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .map(|(title, label)| (title.as_str(), label.as_str()))
    }
}
