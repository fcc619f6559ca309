//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::KanadiaConfigV1;
pub use resolve::{
    DEFAULT_COUNTRIES_FILE, DEFAULT_ENTRIES_FILE, DEFAULT_WATCHLIST_FILE, Overrides,
    ResolvedConfig,
};

/// Parse `kanadia.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<KanadiaConfigV1> {
    let cfg: KanadiaConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (file values + CLI overrides + defaults).
pub fn resolve_config(
    cfg: KanadiaConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
