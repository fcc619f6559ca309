//! Stable DTOs and IDs used across the kanadia workspace.
//!
//! This crate is intentionally boring:
//! - the four verdicts and their wire spelling
//! - stable string IDs for rules and reason codes
//! - the decision report envelope
//! - explain registry for rule and code guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{Explanation, lookup_explanation};
pub use receipt::{
    DecisionEntry, DecisionReport, SCHEMA_DECISIONS_V1, ToolMeta, Verdict, VerdictCounts,
};
