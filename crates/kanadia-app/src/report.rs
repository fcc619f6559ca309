use anyhow::Context;
use kanadia_render::{RenderableCounts, RenderableDecision, RenderableReport};
use kanadia_types::{DecisionReport, SCHEMA_DECISIONS_V1, Verdict};

/// Pretty JSON for the report artifact, with a trailing newline.
pub fn serialize_report(report: &DecisionReport) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(report).context("serialize report")?;
    text.push('\n');
    Ok(text)
}

/// The core output: a JSON array of verdict strings, in input order.
pub fn serialize_verdicts(verdicts: &[Verdict]) -> anyhow::Result<String> {
    serde_json::to_string(verdicts).context("serialize verdicts")
}

pub fn parse_report_json(text: &str) -> anyhow::Result<DecisionReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_DECISIONS_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_DECISIONS_V1})");
    }

    serde_json::from_value(value).context("parse kanadia decisions report")
}

pub fn to_renderable(report: &DecisionReport) -> RenderableReport {
    RenderableReport {
        as_of: report.as_of.to_string(),
        decisions: report
            .decisions
            .iter()
            .map(|d| RenderableDecision {
                index: d.index,
                verdict: d.verdict.to_string(),
                code: d.code.clone(),
                message: d.message.clone(),
            })
            .collect(),
        counts: RenderableCounts {
            quarantine: report.counts.quarantine,
            reject: report.counts.reject,
            secondary: report.counts.secondary,
            accept: report.counts.accept,
        },
    }
}
