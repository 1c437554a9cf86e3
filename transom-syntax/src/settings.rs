//! Conversion settings shared by both walkers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a settings document.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings")]
    Parse(#[from] toml::de::Error),
}

/// How property accessors are rendered in the declaration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStyle {
    /// Plain `GetX()` / `SetX(value)` method pairs.
    #[default]
    GettersAndSetters,
    /// A `__declspec(property(...))` declaration plus the accessor methods.
    DeclspecProperty,
}

/// Immutable configuration, read once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Prefix for synthesized getter names.
    pub getter_prefix: String,
    /// Prefix for synthesized setter names.
    pub setter_prefix: String,
    pub property_style: PropertyStyle,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            getter_prefix: "Get".to_string(),
            setter_prefix: "Set".to_string(),
            property_style: PropertyStyle::default(),
        }
    }
}

impl FromStr for ConversionSettings {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
