//! Provider configuration, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HOST_NAME, DEFAULT_MIX_WEIGHT};
use crate::error::{ColorError, Result};

/// Settings for a [`ColorFunctionProvider`](crate::ColorFunctionProvider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Host named in deprecation warnings.
    pub host_name: String,
    /// Register the legacy `*-percent` functions.
    pub deprecated_aliases: bool,
    /// Weight of the first color when `mix` gets no amount, in percent.
    pub default_mix_weight: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            host_name: DEFAULT_HOST_NAME.to_string(),
            deprecated_aliases: true,
            default_mix_weight: DEFAULT_MIX_WEIGHT,
        }
    }
}

impl ProviderConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| ColorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host_name.trim().is_empty() {
            return Err(ColorError::Config("host_name must not be empty".into()));
        }
        let w = self.default_mix_weight;
        if !w.is_finite() || !(0.0..=100.0).contains(&w) {
            return Err(ColorError::Config(format!(
                "default_mix_weight must be within 0-100, got {w}"
            )));
        }
        Ok(())
    }
}
