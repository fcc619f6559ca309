use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `kanadia.toml` schema v1.
///
/// Every key is optional. Rule thresholds (visa window, maximum age) are fixed and have no
/// keys here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct KanadiaConfigV1 {
    /// Optional schema string for tooling (`kanadia.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Path to the country table JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<String>,

    /// Path to the watchlist JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<String>,

    /// Path to the traveller entries JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<String>,

    /// Evaluate as of this `YYYY-MM-DD` date instead of today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,

    /// Evaluate records on the rayon pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
}
