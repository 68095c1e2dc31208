//! Core logic for anonymizing room reserve exports.
//! Organization titles are replaced with short alphabetic labels; every
//! other field passes through untouched.

pub mod config;
pub mod label;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod service;
pub mod store;

pub use config::{Cli, RunConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use label::bijective::{generate_labels, label_for_index, Labels};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::room::{Entry, Room};
pub use pipeline::{run, RunError, RunReport, Stage};
pub use service::anonymize_service::{anonymize, anonymize_rooms};
pub use service::mapping_service::{collect_titles, TitleMapping};
pub use store::{load_rooms, save_rooms, StoreError, StoreResult};
