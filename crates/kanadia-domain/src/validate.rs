//! Structural completeness and field-format gate for a traveller record.

use crate::format::{is_valid_date, is_valid_passport};
use crate::model::{Place, TravellerRecord};
use kanadia_types::ids;
use std::fmt;
use time::Date;

/// The first reason a record failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordDefect {
    /// A required field is absent or empty. Holds the dotted field name.
    Missing(&'static str),
    InvalidBirthDate,
    InvalidPassport,
    InvalidVisaDate,
}

impl RecordDefect {
    pub fn code(self) -> &'static str {
        match self {
            RecordDefect::Missing(_) => ids::CODE_INCOMPLETE_RECORD,
            RecordDefect::InvalidBirthDate => ids::CODE_INVALID_BIRTH_DATE,
            RecordDefect::InvalidPassport => ids::CODE_INVALID_PASSPORT,
            RecordDefect::InvalidVisaDate => ids::CODE_INVALID_VISA_DATE,
        }
    }
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDefect::Missing(field) => {
                write!(f, "required field '{field}' is missing or empty")
            }
            RecordDefect::InvalidBirthDate => {
                f.write_str("birth_date is not a valid YYYY-MM-DD date within the last 150 years")
            }
            RecordDefect::InvalidPassport => {
                f.write_str("passport is not five groups of five characters separated by hyphens")
            }
            RecordDefect::InvalidVisaDate => {
                f.write_str("visa.date is not a valid YYYY-MM-DD date within the last 150 years")
            }
        }
    }
}

pub fn is_valid(record: &TravellerRecord, today: Date) -> bool {
    validate(record, today).is_ok()
}

/// Check a record in a fixed order and report the first defect.
///
/// Order: top-level required fields, `home`/`from` blocks, `via` block (if present), `visa`
/// block (if present), birth date, passport format, visa date (if present).
pub fn validate(record: &TravellerRecord, today: Date) -> Result<(), RecordDefect> {
    let home = record.home.as_ref().ok_or(RecordDefect::Missing("home"))?;
    require("first_name", record.first_name.as_deref())?;
    require("last_name", record.last_name.as_deref())?;
    let passport = require("passport", record.passport.as_deref())?;
    require("entry_reason", record.entry_reason.as_deref())?;
    let from = record.from.as_ref().ok_or(RecordDefect::Missing("from"))?;
    let birth_date = require("birth_date", record.birth_date.as_deref())?;

    require_place(home, ["home.country", "home.city", "home.region"])?;
    require_place(from, ["from.country", "from.city", "from.region"])?;
    if let Some(via) = &record.via {
        require_place(via, ["via.country", "via.city", "via.region"])?;
    }
    let visa_date = match &record.visa {
        Some(visa) => {
            let date = require("visa.date", visa.date.as_deref())?;
            require("visa.code", visa.code.as_deref())?;
            Some(date)
        }
        None => None,
    };

    if !is_valid_date(birth_date, today) {
        return Err(RecordDefect::InvalidBirthDate);
    }
    if !is_valid_passport(passport) {
        return Err(RecordDefect::InvalidPassport);
    }
    if let Some(date) = visa_date
        && !is_valid_date(date, today)
    {
        return Err(RecordDefect::InvalidVisaDate);
    }

    Ok(())
}

fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, RecordDefect> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RecordDefect::Missing(field)),
    }
}

fn require_place(place: &Place, fields: [&'static str; 3]) -> Result<(), RecordDefect> {
    let [country, city, region] = fields;
    require(country, place.country.as_deref())?;
    require(city, place.city.as_deref())?;
    require(region, place.region.as_deref())?;
    Ok(())
}
