//! Use case orchestration for kanadia.
//!
//! This crate provides the application layer: use cases that coordinate the settings, load,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to the
//! appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod decide;
mod explain;
mod render;
mod report;

pub use decide::{DecideInput, DecideOutput, run_decide};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::render_report_markdown;
pub use report::{parse_report_json, serialize_report, serialize_verdicts, to_renderable};
