//! Short replacement labels for anonymized titles.

pub mod bijective;
