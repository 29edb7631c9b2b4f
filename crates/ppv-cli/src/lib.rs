//! CLI library components for the loan compliance validator.

pub mod logging;
