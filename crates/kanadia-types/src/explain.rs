//! Explain registry for rules and codes.
//!
//! Maps rule IDs and reason codes to human-readable explanations with guidance for the
//! officer handling the traveller.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks.
    pub description: &'static str,
    /// What the traveller (or officer) can do about it.
    pub remediation: &'static str,
    /// A record fragment that triggers the rule.
    pub example: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_QUARANTINE => Some(explain_quarantine()),
        ids::RULE_REJECT => Some(explain_reject()),
        ids::RULE_SECONDARY => Some(explain_secondary()),
        ids::RULE_ACCEPT => Some(explain_accept()),

        // Codes
        ids::CODE_MEDICAL_ADVISORY_FROM => Some(explain_medical_advisory_from()),
        ids::CODE_MEDICAL_ADVISORY_VIA => Some(explain_medical_advisory_via()),
        ids::CODE_INCOMPLETE_RECORD => Some(explain_incomplete_record()),
        ids::CODE_INVALID_BIRTH_DATE => Some(explain_invalid_birth_date()),
        ids::CODE_INVALID_PASSPORT => Some(explain_invalid_passport()),
        ids::CODE_INVALID_VISA_DATE => Some(explain_invalid_visa_date()),
        ids::CODE_UNKNOWN_ORIGIN => Some(explain_unknown_origin()),
        ids::CODE_TRANSIT_VISA_INVALID => Some(explain_transit_visa_invalid()),
        ids::CODE_VISITOR_VISA_INVALID => Some(explain_visitor_visa_invalid()),
        ids::CODE_WATCHLIST_NAME => Some(explain_watchlist_name()),
        ids::CODE_WATCHLIST_PASSPORT => Some(explain_watchlist_passport()),
        ids::CODE_CLEARED => Some(explain_cleared()),

        _ => None,
    }
}

/// List all known rule IDs, in evaluation order.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_QUARANTINE,
        ids::RULE_REJECT,
        ids::RULE_SECONDARY,
        ids::RULE_ACCEPT,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MEDICAL_ADVISORY_FROM,
        ids::CODE_MEDICAL_ADVISORY_VIA,
        ids::CODE_INCOMPLETE_RECORD,
        ids::CODE_INVALID_BIRTH_DATE,
        ids::CODE_INVALID_PASSPORT,
        ids::CODE_INVALID_VISA_DATE,
        ids::CODE_UNKNOWN_ORIGIN,
        ids::CODE_TRANSIT_VISA_INVALID,
        ids::CODE_VISITOR_VISA_INVALID,
        ids::CODE_WATCHLIST_NAME,
        ids::CODE_WATCHLIST_PASSPORT,
        ids::CODE_CLEARED,
    ]
}

// --- Rule-level explanations ---

fn explain_quarantine() -> Explanation {
    Explanation {
        title: "Quarantine",
        description: "\
Travellers arriving from, or passing through, a country with an active medical advisory are
sent to quarantine. This rule is evaluated before every other rule, so it applies even to
returning citizens, incomplete records, and watchlisted travellers.",
        remediation: "\
Route the traveller to the health screening area. No other processing takes place until
the advisory is cleared.",
        example: r#"{ "from": { "country": "LUG", "city": "...", "region": "..." } }
// countries.json: "LUG": { "medical_advisory": "CHOLERA", ... }"#,
    }
}

fn explain_reject() -> Explanation {
    Explanation {
        title: "Reject",
        description: "\
The record is incomplete or malformed, the origin country is unknown, or a required visa is
missing or older than two years.",
        remediation: "\
Ask the traveller to correct the record or obtain a current visa before attempting entry.",
        example: r#"{ "first_name": "Ann", "last_name": "Lee", "entry_reason": "visit" }"#,
    }
}

fn explain_secondary() -> Explanation {
    Explanation {
        title: "Secondary screening",
        description: "\
The traveller's name or passport number matches an entry on the watchlist. Names match
case-insensitively (first and last name together); passport numbers match exactly.",
        remediation: "Refer the traveller to a secondary screening officer.",
        example: r#"{ "passport": "6P294-42HR2-95PSF-93NFF-2TEWF", ... }"#,
    }
}

fn explain_accept() -> Explanation {
    Explanation {
        title: "Accept",
        description: "No quarantine, reject, or secondary rule applied.",
        remediation: "Admit the traveller.",
        example: r#"{ "home": { "country": "KAN", ... }, "entry_reason": "returning", ... }"#,
    }
}

// --- Code-level explanations ---

fn explain_medical_advisory_from() -> Explanation {
    Explanation {
        title: "Medical advisory in origin country",
        ..explain_quarantine()
    }
}

fn explain_medical_advisory_via() -> Explanation {
    Explanation {
        title: "Medical advisory in transit country",
        ..explain_quarantine()
    }
}

fn explain_incomplete_record() -> Explanation {
    Explanation {
        title: "Incomplete record",
        description: "\
A required field is missing or empty. Required: home, from (each with country, city and
region), first_name, last_name, passport, entry_reason, birth_date. When via or visa is
present, all of its sub-fields are required too. A missing key and an empty string are
treated the same way.",
        remediation: "Fill in every required field.",
        example: r#"{ "home": { "country": "KAN", "city": "", "region": "ON" }, ... }"#,
    }
}

fn explain_invalid_birth_date() -> Explanation {
    Explanation {
        title: "Invalid birth date",
        description: "\
birth_date must be written as YYYY-MM-DD, must not be in the future, and must not be more
than 150 years in the past.",
        remediation: "Correct the birth date.",
        example: r#"{ "birth_date": "1952/12/25" }"#,
    }
}

fn explain_invalid_passport() -> Explanation {
    Explanation {
        title: "Invalid passport number",
        description: "\
Passport numbers are five groups of exactly five characters joined by hyphens
(XXXXX-XXXXX-XXXXX-XXXXX-XXXXX, 29 characters in total).",
        remediation: "Correct the passport number.",
        example: r#"{ "passport": "ABCDE-1234-FGHIJ-67890-KLMNO" }"#,
    }
}

fn explain_invalid_visa_date() -> Explanation {
    Explanation {
        title: "Invalid visa date",
        description: "\
visa.date follows the same format and range rules as birth_date: YYYY-MM-DD, not in the
future, not more than 150 years in the past.",
        remediation: "Correct the visa issue date.",
        example: r#"{ "visa": { "date": "14-01-2013", "code": "CFR6X-XSMVA" } }"#,
    }
}

fn explain_unknown_origin() -> Explanation {
    Explanation {
        title: "Unknown origin country",
        description: "\
The from.country code is not listed in the country table and is not the home jurisdiction
KAN.",
        remediation: "Check the country code, or add the country to the country table.",
        example: r#"{ "from": { "country": "XYZ", "city": "...", "region": "..." } }"#,
    }
}

fn explain_transit_visa_invalid() -> Explanation {
    Explanation {
        title: "Transit visa missing or expired",
        description: "\
The traveller is in transit, the origin country requires a transit visa, and the record has
no visa or the visa was issued two or more years ago.",
        remediation: "Obtain a transit visa issued within the last two years.",
        example: r#"{ "entry_reason": "transit", "visa": { "date": "2010-01-01", "code": "..." } }"#,
    }
}

fn explain_visitor_visa_invalid() -> Explanation {
    Explanation {
        title: "Visitor visa missing or expired",
        description: "\
The traveller is visiting, the origin country requires a visitor visa, and the record has
no visa or the visa was issued two or more years ago.",
        remediation: "Obtain a visitor visa issued within the last two years.",
        example: r#"{ "entry_reason": "visit" }"#,
    }
}

fn explain_watchlist_name() -> Explanation {
    Explanation {
        title: "Watchlist match on name",
        ..explain_secondary()
    }
}

fn explain_watchlist_passport() -> Explanation {
    Explanation {
        title: "Watchlist match on passport number",
        ..explain_secondary()
    }
}

fn explain_cleared() -> Explanation {
    Explanation {
        title: "Cleared",
        ..explain_accept()
    }
}
