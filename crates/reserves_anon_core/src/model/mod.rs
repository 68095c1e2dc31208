//! Reserve export data model.
//!
//! # Responsibility
//! - Define the room/entry shapes read from and written to reserve exports.
//! - Keep unknown entry fields as opaque JSON so they round-trip verbatim.
//!
//! # Invariants
//! - `title` is the only entry field interpreted by this crate.
//! - Missing optional fields are handled through default-valued accessors.

pub mod room;
