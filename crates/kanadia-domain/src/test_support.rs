use crate::model::{Place, TravellerRecord, Visa};
use crate::reference::{CountryAttributes, CountryTable, Watchlist, WatchlistEntry};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024 - 06 - 15);

pub const CLEAN_PASSPORT: &str = "JMZ0S-89IA9-OTCLY-MQILJ-P7CTY";
pub const WATCHED_PASSPORT: &str = "6P294-42HR2-95PSF-93NFF-2TEWF";

pub fn place(country: &str) -> Place {
    Place {
        country: Some(country.to_string()),
        city: Some("City".to_string()),
        region: Some("Region".to_string()),
    }
}

pub fn visa(date: &str) -> Visa {
    Visa {
        date: Some(date.to_string()),
        code: Some("CFR6X-XSMVA".to_string()),
    }
}

/// A complete KAN citizen returning home from a country without an advisory.
pub fn returning_citizen() -> TravellerRecord {
    TravellerRecord {
        home: Some(place("KAN")),
        from: Some(place("ITD")),
        via: None,
        first_name: Some("Ann".to_string()),
        last_name: Some("Lee".to_string()),
        passport: Some(CLEAN_PASSPORT.to_string()),
        entry_reason: Some("returning".to_string()),
        birth_date: Some("1952-12-25".to_string()),
        visa: None,
    }
}

/// A foreign national entering for `reason` from `from`.
pub fn traveller(reason: &str, from: &str, visa_date: Option<&str>) -> TravellerRecord {
    TravellerRecord {
        home: Some(place(from)),
        from: Some(place(from)),
        entry_reason: Some(reason.to_string()),
        first_name: Some("Kim".to_string()),
        last_name: Some("Ro".to_string()),
        visa: visa_date.map(visa),
        ..returning_citizen()
    }
}

fn attrs(advisory: &str, visitor: bool, transit: bool) -> CountryAttributes {
    CountryAttributes {
        medical_advisory: Some(advisory.to_string()),
        visitor_visa_required: visitor,
        transit_visa_required: transit,
    }
}

/// ITD: open. VVR: visitor visa. TVR: transit visa. LUG: medical advisory. BOTH: both visas.
pub fn countries() -> CountryTable {
    [
        ("ITD".to_string(), attrs("", false, false)),
        ("VVR".to_string(), attrs("", true, false)),
        ("TVR".to_string(), attrs("", false, true)),
        ("BOTH".to_string(), attrs("", true, true)),
        ("LUG".to_string(), attrs("CHOLERA", false, false)),
    ]
    .into_iter()
    .collect()
}

pub fn watchlist() -> Watchlist {
    Watchlist::new(vec![
        WatchlistEntry {
            first_name: "Frank".to_string(),
            last_name: "Stone".to_string(),
            passport: "AAAAA-BBBBB-CCCCC-DDDDD-EEEEE".to_string(),
        },
        WatchlistEntry {
            first_name: "Someone".to_string(),
            last_name: "Else".to_string(),
            passport: WATCHED_PASSPORT.to_string(),
        },
    ])
}
