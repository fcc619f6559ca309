use crate::model::KanadiaConfigV1;
use anyhow::Context;
use camino::Utf8PathBuf;
use kanadia_domain::BatchMode;
use kanadia_domain::format::parse_date;
use time::Date;

pub const DEFAULT_COUNTRIES_FILE: &str = "countries.json";
pub const DEFAULT_WATCHLIST_FILE: &str = "watchlist.json";
pub const DEFAULT_ENTRIES_FILE: &str = "entries.json";

/// Values supplied on the command line; they win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub countries: Option<Utf8PathBuf>,
    pub watchlist: Option<Utf8PathBuf>,
    pub entries: Option<Utf8PathBuf>,
    pub as_of: Option<String>,
    pub parallel: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub countries: Utf8PathBuf,
    pub watchlist: Utf8PathBuf,
    pub entries: Utf8PathBuf,
    /// `None` means "use the wall clock".
    pub as_of: Option<Date>,
    pub batch_mode: BatchMode,
}

pub fn resolve_config(
    cfg: KanadiaConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let pick = |over: Option<Utf8PathBuf>, file: Option<String>, default: &str| {
        over.or(file.map(Utf8PathBuf::from))
            .unwrap_or_else(|| Utf8PathBuf::from(default))
    };

    let as_of = match overrides.as_of.or(cfg.as_of) {
        Some(s) => Some(parse_as_of(&s).with_context(|| format!("invalid as_of: {s}"))?),
        None => None,
    };

    let parallel = overrides.parallel || cfg.parallel.unwrap_or(false);

    Ok(ResolvedConfig {
        countries: pick(overrides.countries, cfg.countries, DEFAULT_COUNTRIES_FILE),
        watchlist: pick(overrides.watchlist, cfg.watchlist, DEFAULT_WATCHLIST_FILE),
        entries: pick(overrides.entries, cfg.entries, DEFAULT_ENTRIES_FILE),
        as_of,
        batch_mode: if parallel {
            BatchMode::Parallel
        } else {
            BatchMode::Sequential
        },
    })
}

fn parse_as_of(v: &str) -> anyhow::Result<Date> {
    match parse_date(v) {
        Some(d) => Ok(d),
        None => anyhow::bail!("expected YYYY-MM-DD, got '{v}'"),
    }
}
