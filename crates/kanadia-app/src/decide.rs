//! The `decide` use case: load inputs, evaluate every record, produce a report.

use anyhow::Context;
use kanadia_domain::report::Decision;
use kanadia_domain::{Clock, FixedClock, SystemClock};
use kanadia_load::InputPaths;
use kanadia_settings::{KanadiaConfigV1, Overrides, ResolvedConfig};
use kanadia_types::{DecisionEntry, DecisionReport, SCHEMA_DECISIONS_V1, ToolMeta};
use time::OffsetDateTime;

/// Input for the decide use case.
#[derive(Clone, Debug)]
pub struct DecideInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the decide use case.
#[derive(Clone, Debug)]
pub struct DecideOutput {
    pub report: DecisionReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the decide use case: parse config, load the three resources, evaluate, build a report.
///
/// A missing resource fails the whole run. Malformed individual records never do; they are
/// rejected by the engine.
pub fn run_decide(input: DecideInput<'_>) -> anyhow::Result<DecideOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        KanadiaConfigV1::default()
    } else {
        kanadia_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        kanadia_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let paths = InputPaths {
        countries: resolved.countries.clone(),
        watchlist: resolved.watchlist.clone(),
        entries: resolved.entries.clone(),
    };
    let inputs = kanadia_load::load_inputs(&paths).context("load inputs")?;

    let clock: Box<dyn Clock> = match resolved.as_of {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    let domain_report = kanadia_domain::evaluate(
        &inputs.entries,
        &inputs.countries,
        &inputs.watchlist,
        clock.as_ref(),
        resolved.batch_mode,
    );

    for d in &domain_report.decisions {
        tracing::debug!(
            index = d.index,
            verdict = %d.verdict,
            rule = d.rule_id,
            code = d.code,
            "decision"
        );
    }
    let counts = domain_report.counts.clone();
    tracing::info!(
        as_of = %domain_report.as_of,
        travellers = domain_report.decisions.len(),
        accept = counts.accept,
        secondary = counts.secondary,
        reject = counts.reject,
        quarantine = counts.quarantine,
        "decisions complete"
    );

    let verdicts = domain_report.verdicts();
    let decisions = domain_report
        .decisions
        .into_iter()
        .map(decision_entry)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let finished_at = OffsetDateTime::now_utc();

    let report = DecisionReport {
        schema: SCHEMA_DECISIONS_V1.to_string(),
        tool: ToolMeta {
            name: "kanadia".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        as_of: domain_report.as_of,
        verdicts,
        decisions,
        counts,
    };

    Ok(DecideOutput {
        report,
        resolved_config: resolved,
    })
}

fn decision_entry(d: Decision) -> anyhow::Result<DecisionEntry> {
    let index = u32::try_from(d.index)
        .with_context(|| format!("record index {} does not fit the report", d.index))?;
    Ok(DecisionEntry {
        index,
        verdict: d.verdict,
        rule_id: d.rule_id.to_string(),
        code: d.code.to_string(),
        message: d.message,
    })
}
