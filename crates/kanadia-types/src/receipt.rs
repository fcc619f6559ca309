use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::{Date, OffsetDateTime};

/// Stable schema identifier for decision reports.
pub const SCHEMA_DECISIONS_V1: &str = "kanadia.decisions.v1";

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Disposition for a single traveller record.
///
/// The serialized spelling is part of the output contract: `"Quarantine"`, `"Reject"`,
/// `"Secondary"`, `"Accept"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Verdict {
    Quarantine,
    Reject,
    Secondary,
    Accept,
}

impl Verdict {
    pub const ALL: [Verdict; 4] = [
        Verdict::Quarantine,
        Verdict::Reject,
        Verdict::Secondary,
        Verdict::Accept,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Quarantine => "Quarantine",
            Verdict::Reject => "Reject",
            Verdict::Secondary => "Secondary",
            Verdict::Accept => "Accept",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictCounts {
    pub quarantine: u32,
    pub reject: u32,
    pub secondary: u32,
    pub accept: u32,
}

impl VerdictCounts {
    pub fn from_verdicts<'a>(verdicts: impl IntoIterator<Item = &'a Verdict>) -> Self {
        let mut counts = VerdictCounts::default();
        for v in verdicts {
            match v {
                Verdict::Quarantine => counts.quarantine += 1,
                Verdict::Reject => counts.reject += 1,
                Verdict::Secondary => counts.secondary += 1,
                Verdict::Accept => counts.accept += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.quarantine + self.reject + self.secondary + self.accept
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Why a particular record received its verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionEntry {
    /// Position of the record in the input sequence.
    pub index: u32,
    pub verdict: Verdict,
    pub rule_id: String,
    pub code: String,
    pub message: String,
}

/// Report envelope emitted by `kanadia decide --report-out`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    /// The calendar date the visa and birth-date windows were computed against.
    #[schemars(with = "String")]
    #[serde(with = "iso_date")]
    pub as_of: Date,

    /// Ordered verdicts, one per input record.
    pub verdicts: Vec<Verdict>,
    pub decisions: Vec<DecisionEntry>,
    pub counts: VerdictCounts,
}
