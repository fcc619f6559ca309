//! Render use case: Markdown from an in-memory report.

use crate::report::to_renderable;
use kanadia_types::DecisionReport;

pub fn render_report_markdown(report: &DecisionReport) -> String {
    kanadia_render::render_markdown(&to_renderable(report))
}
