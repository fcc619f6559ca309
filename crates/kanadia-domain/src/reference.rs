//! Read-only reference data: the country table and the watchlist.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// The home jurisdiction. Travellers arriving from it need no country-table entry.
pub const HOME_COUNTRY: &str = "KAN";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CountryAttributes {
    /// Free text; anything non-empty is an active advisory.
    #[serde(default)]
    pub medical_advisory: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub visitor_visa_required: bool,
    #[serde(default, deserialize_with = "flag")]
    pub transit_visa_required: bool,
}

impl CountryAttributes {
    pub fn has_medical_advisory(&self) -> bool {
        self.medical_advisory
            .as_deref()
            .is_some_and(|a| !a.is_empty())
    }
}

/// Country code -> attributes. Codes are upper-cased on insert and on lookup.
///
/// Codes that collide after upper-casing keep the entry inserted last. When built from a
/// map that is the key sorting last (`"lug"` beats `"LUG"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, CountryAttributes>")]
pub struct CountryTable {
    countries: BTreeMap<String, CountryAttributes>,
}

impl CountryTable {
    pub fn get(&self, code: &str) -> Option<&CountryAttributes> {
        self.countries.get(&code.to_uppercase())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl From<BTreeMap<String, CountryAttributes>> for CountryTable {
    fn from(value: BTreeMap<String, CountryAttributes>) -> Self {
        value.into_iter().collect()
    }
}

impl FromIterator<(String, CountryAttributes)> for CountryTable {
    fn from_iter<I: IntoIterator<Item = (String, CountryAttributes)>>(iter: I) -> Self {
        CountryTable {
            countries: iter
                .into_iter()
                .map(|(code, attrs)| (code.to_uppercase(), attrs))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WatchlistEntry {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub passport: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    pub fn new(entries: Vec<WatchlistEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Visa flags arrive as "0"/"1" strings; booleans and integers are accepted too.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Bool(bool),
        Int(i64),
        Text(String),
        Null(()),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Bool(b) => b,
        Repr::Int(n) => n != 0,
        Repr::Text(s) => matches!(s.trim(), "1") || s.trim().eq_ignore_ascii_case("true"),
        Repr::Null(()) => false,
    })
}
