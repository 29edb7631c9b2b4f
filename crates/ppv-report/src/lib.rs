//! Disclosure report assembly.
//!
//! Folds a verdict map into the payload consumed by downstream disclosure
//! tooling: loan identity and key dates pulled through the field table,
//! plus the alert and condition messages with counts.

pub mod payload;
pub mod writer;

pub use payload::{
    ActionSummary, BorrowerSection, DisclosurePayload, Finding, LoanDetails, build_disclosure,
};
pub use writer::{ReportError, write_disclosure_json};
