use super::{Reason, RuleContext};
use crate::model::TravellerRecord;
use crate::reference::CountryTable;
use kanadia_types::ids;

/// True when the origin or transit country has an active medical advisory.
///
/// Runs before validation, so any field may be missing. Unknown countries count as "no
/// advisory".
pub fn is_quarantine(record: &TravellerRecord, countries: &CountryTable) -> bool {
    advisory(record, countries).is_some()
}

pub(super) fn check(record: &TravellerRecord, ctx: &RuleContext<'_>) -> Option<Reason> {
    advisory(record, ctx.countries)
}

fn advisory(record: &TravellerRecord, countries: &CountryTable) -> Option<Reason> {
    if let Some(reason) = record
        .from_country()
        .and_then(|code| advisory_for(countries, &code, ids::CODE_MEDICAL_ADVISORY_FROM, "origin"))
    {
        return Some(reason);
    }
    record
        .via_country()
        .and_then(|code| advisory_for(countries, &code, ids::CODE_MEDICAL_ADVISORY_VIA, "transit"))
}

fn advisory_for(
    countries: &CountryTable,
    code: &str,
    reason_code: &'static str,
    role: &str,
) -> Option<Reason> {
    let attrs = countries.get(code)?;
    if !attrs.has_medical_advisory() {
        return None;
    }
    Some(Reason {
        code: reason_code,
        message: format!(
            "{role} country {code} has an active medical advisory: {}",
            attrs.medical_advisory.as_deref().unwrap_or_default()
        ),
    })
}
