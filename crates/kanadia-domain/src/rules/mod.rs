//! The ordered rule table.
//!
//! Rules run top to bottom; the first one that fires decides the verdict. When none fires the
//! record is accepted.

use crate::model::TravellerRecord;
use crate::reference::{CountryTable, Watchlist};
use kanadia_types::{Verdict, ids};
use time::Date;

mod quarantine;
mod reject;
mod secondary;


pub use quarantine::is_quarantine;
pub use reject::{is_reject, is_valid_visa, reject_reason};
pub use secondary::{WatchlistMatch, is_secondary, watchlist_match};

/// Everything a rule may consult besides the record itself.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub countries: &'a CountryTable,
    pub watchlist: &'a Watchlist,
    pub today: Date,
}

/// Why a rule fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reason {
    pub code: &'static str,
    pub message: String,
}

pub struct Rule {
    pub id: &'static str,
    pub verdict: Verdict,
    check: fn(&TravellerRecord, &RuleContext<'_>) -> Option<Reason>,
}

impl Rule {
    pub fn check(&self, record: &TravellerRecord, ctx: &RuleContext<'_>) -> Option<Reason> {
        (self.check)(record, ctx)
    }
}

/// Evaluation order is part of the contract: quarantine beats reject beats secondary.
pub const RULES: &[Rule] = &[
    Rule {
        id: ids::RULE_QUARANTINE,
        verdict: Verdict::Quarantine,
        check: quarantine::check,
    },
    Rule {
        id: ids::RULE_REJECT,
        verdict: Verdict::Reject,
        check: reject::check,
    },
    Rule {
        id: ids::RULE_SECONDARY,
        verdict: Verdict::Secondary,
        check: secondary::check,
    },
];

/// The first rule that fires for `record`, with its reason.
pub fn first_match(
    record: &TravellerRecord,
    ctx: &RuleContext<'_>,
) -> Option<(&'static Rule, Reason)> {
    RULES
        .iter()
        .find_map(|rule| rule.check(record, ctx).map(|reason| (rule, reason)))
}
