//! Stable identifiers for rules and reason codes.
//!
//! `rule_id` is a dotted namespace naming the verdict a rule produces. `code` is a short
//! snake_case discriminator for why the rule fired.

// Rules
pub const RULE_QUARANTINE: &str = "entry.quarantine";
pub const RULE_REJECT: &str = "entry.reject";
pub const RULE_SECONDARY: &str = "entry.secondary";
pub const RULE_ACCEPT: &str = "entry.accept";

// Codes: entry.quarantine
pub const CODE_MEDICAL_ADVISORY_FROM: &str = "medical_advisory_from";
pub const CODE_MEDICAL_ADVISORY_VIA: &str = "medical_advisory_via";

// Codes: entry.reject
pub const CODE_INCOMPLETE_RECORD: &str = "incomplete_record";
pub const CODE_INVALID_BIRTH_DATE: &str = "invalid_birth_date";
pub const CODE_INVALID_PASSPORT: &str = "invalid_passport";
pub const CODE_INVALID_VISA_DATE: &str = "invalid_visa_date";
pub const CODE_UNKNOWN_ORIGIN: &str = "unknown_origin";
pub const CODE_TRANSIT_VISA_INVALID: &str = "transit_visa_invalid";
pub const CODE_VISITOR_VISA_INVALID: &str = "visitor_visa_invalid";

// Codes: entry.secondary
pub const CODE_WATCHLIST_NAME: &str = "watchlist_name";
pub const CODE_WATCHLIST_PASSPORT: &str = "watchlist_passport";

// Codes: entry.accept
pub const CODE_CLEARED: &str = "cleared";
