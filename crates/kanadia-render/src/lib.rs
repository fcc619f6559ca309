//! Rendering utilities for officer-facing summaries.

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{RenderableCounts, RenderableDecision, RenderableReport};
