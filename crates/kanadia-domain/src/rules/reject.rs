use super::{Reason, RuleContext};
use crate::format::{is_valid_date, parse_date, years_before};
use crate::model::{EntryReason, TravellerRecord};
use crate::reference::{CountryTable, HOME_COUNTRY};
use crate::validate::validate;
use kanadia_types::ids;
use time::Date;

/// Visas are issue-dated; they are accepted for this many years after issue.
pub const VISA_VALIDITY_YEARS: i32 = 2;

pub fn is_reject(record: &TravellerRecord, countries: &CountryTable, today: Date) -> bool {
    reject_reason(record, countries, today).is_some()
}

/// The reason a record is rejected, if any.
///
/// In order: validation failure, unknown origin country (KAN exempt), missing or stale visa
/// for a transit traveller whose origin requires a transit visa, and the same for a visitor
/// whose origin requires a visitor visa. Returning travellers never reach the visa checks.
pub fn reject_reason(
    record: &TravellerRecord,
    countries: &CountryTable,
    today: Date,
) -> Option<Reason> {
    if let Err(defect) = validate(record, today) {
        return Some(Reason {
            code: defect.code(),
            message: defect.to_string(),
        });
    }

    let from_country = record.from_country().unwrap_or_default();
    let attrs = countries.get(&from_country);
    if attrs.is_none() && from_country != HOME_COUNTRY {
        return Some(Reason {
            code: ids::CODE_UNKNOWN_ORIGIN,
            message: format!("origin country {from_country} is not in the country table"),
        });
    }

    let visa_ok = || is_valid_visa(record, today);
    match (record.entry_reason(), attrs) {
        (Some(EntryReason::Transit), Some(a)) if a.transit_visa_required && !visa_ok() => {
            Some(Reason {
                code: ids::CODE_TRANSIT_VISA_INVALID,
                message: format!(
                    "{from_country} requires a transit visa issued within the last {VISA_VALIDITY_YEARS} years"
                ),
            })
        }
        (Some(EntryReason::Visit), Some(a)) if a.visitor_visa_required && !visa_ok() => {
            Some(Reason {
                code: ids::CODE_VISITOR_VISA_INVALID,
                message: format!(
                    "{from_country} requires a visitor visa issued within the last {VISA_VALIDITY_YEARS} years"
                ),
            })
        }
        _ => None,
    }
}

/// A visa is valid when present, well-formed, and issued strictly after the date exactly two
/// years before `today`.
pub fn is_valid_visa(record: &TravellerRecord, today: Date) -> bool {
    let Some(date) = record.visa.as_ref().and_then(|v| v.date.as_deref()) else {
        return false;
    };
    if !is_valid_date(date, today) {
        return false;
    }
    let Some(issued) = parse_date(date) else {
        return false;
    };
    issued > years_before(today, VISA_VALIDITY_YEARS)
}

pub(super) fn check(record: &TravellerRecord, ctx: &RuleContext<'_>) -> Option<Reason> {
    reject_reason(record, ctx.countries, ctx.today)
}
