use crate::clock::Clock;
use crate::model::TravellerRecord;
use crate::reference::{CountryTable, Watchlist};
use crate::report::{Decision, DomainReport};
use crate::rules::{self, RuleContext};
use kanadia_types::{Verdict, VerdictCounts, ids};
use rayon::prelude::*;

/// How a batch is evaluated. Output order is the input order either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BatchMode {
    #[default]
    Sequential,
    Parallel,
}

/// Decide one record.
pub fn decide(
    record: &TravellerRecord,
    countries: &CountryTable,
    watchlist: &Watchlist,
    clock: &dyn Clock,
) -> Verdict {
    let ctx = RuleContext {
        countries,
        watchlist,
        today: clock.today(),
    };
    evaluate_record(0, record, &ctx).verdict
}

/// Run the rule table against one record and keep the reason.
pub fn evaluate_record(index: usize, record: &TravellerRecord, ctx: &RuleContext<'_>) -> Decision {
    match rules::first_match(record, ctx) {
        Some((rule, reason)) => Decision {
            index,
            verdict: rule.verdict,
            rule_id: rule.id,
            code: reason.code,
            message: reason.message,
        },
        None => Decision {
            index,
            verdict: Verdict::Accept,
            rule_id: ids::RULE_ACCEPT,
            code: ids::CODE_CLEARED,
            message: "no rule applied".to_string(),
        },
    }
}

/// One verdict per record, in input order.
pub fn decide_all(
    records: &[TravellerRecord],
    countries: &CountryTable,
    watchlist: &Watchlist,
    clock: &dyn Clock,
) -> Vec<Verdict> {
    evaluate(records, countries, watchlist, clock, BatchMode::Sequential).verdicts()
}

/// Same as [`decide_all`], fanned out over the rayon pool.
pub fn decide_all_par(
    records: &[TravellerRecord],
    countries: &CountryTable,
    watchlist: &Watchlist,
    clock: &dyn Clock,
) -> Vec<Verdict> {
    evaluate(records, countries, watchlist, clock, BatchMode::Parallel).verdicts()
}

/// Evaluate a batch.
///
/// The clock is read once so every record in the batch shares the same "today".
pub fn evaluate(
    records: &[TravellerRecord],
    countries: &CountryTable,
    watchlist: &Watchlist,
    clock: &dyn Clock,
    mode: BatchMode,
) -> DomainReport {
    let ctx = RuleContext {
        countries,
        watchlist,
        today: clock.today(),
    };

    let decisions: Vec<Decision> = match mode {
        BatchMode::Sequential => records
            .iter()
            .enumerate()
            .map(|(i, r)| evaluate_record(i, r, &ctx))
            .collect(),
        BatchMode::Parallel => records
            .par_iter()
            .enumerate()
            .map(|(i, r)| evaluate_record(i, r, &ctx))
            .collect(),
    };

    let counts = VerdictCounts::from_verdicts(decisions.iter().map(|d| &d.verdict));

    DomainReport {
        as_of: ctx.today,
        decisions,
        counts,
    }
}
