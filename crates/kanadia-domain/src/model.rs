use serde_json::Value;

/// A location block (`home`, `from`, `via`).
///
/// Each field distinguishes "absent" (`None`) from "present but empty" (`Some("")`); the
/// validator treats both as missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Place {
    pub country: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visa {
    pub date: Option<String>,
    pub code: Option<String>,
}

/// Why the traveller is crossing. Matched case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryReason {
    Visit,
    Transit,
    Returning,
    Other(String),
}

impl EntryReason {
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "VISIT" => EntryReason::Visit,
            "TRANSIT" => EntryReason::Transit,
            "RETURNING" => EntryReason::Returning,
            _ => EntryReason::Other(s.to_string()),
        }
    }
}

/// One border-crossing record as supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TravellerRecord {
    pub home: Option<Place>,
    pub from: Option<Place>,
    pub via: Option<Place>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub passport: Option<String>,
    pub entry_reason: Option<String>,
    pub birth_date: Option<String>,
    pub visa: Option<Visa>,
}

impl TravellerRecord {
    /// Build a record from loosely-typed JSON.
    ///
    /// Never fails. A leaf that is not a string is treated as absent. A `home`/`from`/`via`/
    /// `visa` value that is not an object is kept as a present block with every field absent,
    /// so it fails validation instead of being skipped. A non-object record yields an empty
    /// record.
    pub fn from_json(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return TravellerRecord::default();
        };

        TravellerRecord {
            home: obj.get("home").map(place_from_json),
            from: obj.get("from").map(place_from_json),
            via: obj.get("via").map(place_from_json),
            first_name: text(obj.get("first_name")),
            last_name: text(obj.get("last_name")),
            passport: text(obj.get("passport")),
            entry_reason: text(obj.get("entry_reason")),
            birth_date: text(obj.get("birth_date")),
            visa: obj.get("visa").map(|v| Visa {
                date: text(v.get("date")),
                code: text(v.get("code")),
            }),
        }
    }

    pub fn entry_reason(&self) -> Option<EntryReason> {
        self.entry_reason.as_deref().map(EntryReason::parse)
    }

    /// Upper-cased `from.country`, if present.
    pub fn from_country(&self) -> Option<String> {
        country_code(self.from.as_ref())
    }

    /// Upper-cased `via.country`, if present.
    pub fn via_country(&self) -> Option<String> {
        country_code(self.via.as_ref())
    }
}

fn country_code(place: Option<&Place>) -> Option<String> {
    place
        .and_then(|p| p.country.as_deref())
        .map(|c| c.to_uppercase())
}

fn place_from_json(value: &Value) -> Place {
    Place {
        country: text(value.get("country")),
        city: text(value.get("city")),
        region: text(value.get("region")),
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}
