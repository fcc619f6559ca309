use kanadia_types::{Verdict, VerdictCounts};
use time::Date;

/// The verdict for one record and the rule that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Position of the record in the input sequence.
    pub index: usize,
    pub verdict: Verdict,
    pub rule_id: &'static str,
    pub code: &'static str,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    /// The date every window in this batch was computed against.
    pub as_of: Date,
    /// One decision per input record, in input order.
    pub decisions: Vec<Decision>,
    pub counts: VerdictCounts,
}

impl DomainReport {
    pub fn verdicts(&self) -> Vec<Verdict> {
        self.decisions.iter().map(|d| d.verdict).collect()
    }
}
