//! Anonymization use-cases.
//!
//! # Responsibility
//! - Build the title-to-label mapping for a whole export.
//! - Rewrite rooms with mapped labels without touching the input.
//!
//! # Invariants
//! - The mapping is rebuilt from scratch for every run.
//! - Identical titles always receive identical labels within one run.

pub mod anonymize_service;
pub mod mapping_service;
