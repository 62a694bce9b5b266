//! Style engine configuration

use serde::{Deserialize, Serialize};

use crate::CssError;

/// Style engine configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Compare element selectors to tag names exactly
    pub case_sensitive_tags: bool,

    /// Nodes without their own style object id use their nearest ancestor's
    pub inherit_style_scope: bool,

    /// Resolve `animationName` / `fontFamily` against the sheet's
    /// `@KEYFRAMES` and `@FONT-FACE` tables
    pub resolve_at_rules: bool,
}

impl Config {
    /// Load a configuration from JSON text; missing fields keep defaults
    pub fn from_json(text: &str) -> Result<Self, CssError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_sensitive_tags: true,
            inherit_style_scope: true,
            resolve_at_rules: true,
        }
    }
}
