//! Configuration and loan-document loading.

pub mod config;
pub mod context;
pub mod error;

pub use config::RuleSetConfig;
pub use context::{OPTIONAL_SECTIONS, context_from_combined, load_combined, load_section_dir};
pub use error::IngestError;
