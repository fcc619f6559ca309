//! Pure border-crossing evaluation (no IO).
//!
//! Input: traveller records, a country table and a watchlist constructed elsewhere.
//! Output: one verdict per record, in input order, plus the reason each rule fired.

#![forbid(unsafe_code)]

pub mod clock;
pub mod format;
pub mod model;
pub mod reference;
pub mod report;
pub mod rules;
pub mod validate;

mod engine;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{BatchMode, decide, decide_all, decide_all_par, evaluate, evaluate_record};
pub use format::{is_valid_date, is_valid_passport};
pub use model::{EntryReason, Place, TravellerRecord, Visa};
pub use reference::{CountryAttributes, CountryTable, HOME_COUNTRY, Watchlist, WatchlistEntry};
pub use rules::{is_quarantine, is_reject, is_secondary, is_valid_visa};
pub use validate::{RecordDefect, is_valid, validate};
