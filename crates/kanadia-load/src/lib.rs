//! Resource adapters: locate, read and deserialize the three JSON inputs.
//!
//! This crate is allowed to do filesystem IO. It hands fully-built domain values to the
//! engine and never evaluates rules itself.

#![forbid(unsafe_code)]

mod error;

use camino::{Utf8Path, Utf8PathBuf};
use kanadia_domain::{CountryAttributes, CountryTable, TravellerRecord, Watchlist};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

pub use error::LoadError;

/// Locations of the three resources.
#[derive(Clone, Debug)]
pub struct InputPaths {
    pub countries: Utf8PathBuf,
    pub watchlist: Utf8PathBuf,
    pub entries: Utf8PathBuf,
}

/// Everything the engine needs for one batch.
#[derive(Clone, Debug, Default)]
pub struct Inputs {
    pub countries: CountryTable,
    pub watchlist: Watchlist,
    pub entries: Vec<TravellerRecord>,
}

/// Load all three resources. The first missing or malformed one fails the whole batch.
pub fn load_inputs(paths: &InputPaths) -> Result<Inputs, LoadError> {
    let countries = load_countries(&paths.countries)?;
    let watchlist = load_watchlist(&paths.watchlist)?;
    let entries = load_entries(&paths.entries)?;

    tracing::debug!(
        countries = countries.len(),
        watchlist = watchlist.len(),
        entries = entries.len(),
        "loaded inputs"
    );

    Ok(Inputs {
        countries,
        watchlist,
        entries,
    })
}

/// Load the country table.
///
/// Codes that differ only in case collapse into one entry; each collision is logged.
pub fn load_countries(path: &Utf8Path) -> Result<CountryTable, LoadError> {
    let raw: BTreeMap<String, CountryAttributes> = read_json(path)?;

    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for code in raw.keys() {
        if let Some(previous) = seen.insert(code.to_uppercase(), code) {
            tracing::warn!(
                %path,
                previous,
                code = code.as_str(),
                "country codes differ only in case; keeping the later one"
            );
        }
    }

    Ok(raw.into_iter().collect())
}

pub fn load_watchlist(path: &Utf8Path) -> Result<Watchlist, LoadError> {
    read_json(path)
}

/// Load traveller records.
///
/// The file must hold a JSON array. Individual elements are never rejected here: a malformed
/// record still becomes a `TravellerRecord` and is left for the engine to reject.
pub fn load_entries(path: &Utf8Path) -> Result<Vec<TravellerRecord>, LoadError> {
    let raw: Vec<Value> = read_json(path)?;
    Ok(raw.iter().map(TravellerRecord::from_json).collect())
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, LoadError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn read_text(path: &Utf8Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            tracing::warn!(%path, "resource not found");
            LoadError::NotFound {
                path: path.to_owned(),
            }
        } else {
            LoadError::Read {
                path: path.to_owned(),
                source,
            }
        }
    })
}
