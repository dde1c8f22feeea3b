use crate::Result;
use crate::perf::Scale;
use crate::range::RangeMode;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How ranges without a start bound are read
    #[serde(default)]
    pub range_mode: RangeMode,

    /// Whether every measurement needs a warning range at its slot
    #[serde(default)]
    pub warning_required: bool,

    /// Whether every measurement needs a critical range at its slot
    #[serde(default)]
    pub critical_required: bool,

    /// Scale, bounds and slot for measurements by name
    #[serde(default)]
    pub metrics: Vec<MetricDecl>,
}

/// What the configuration says about one named measurement.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricDecl {
    pub name: String,

    #[serde(default)]
    pub scale: Option<Scale>,

    #[serde(default)]
    pub min: Option<f64>,

    #[serde(default)]
    pub max: Option<f64>,

    #[serde(default = "default_slot")]
    pub slot: usize,
}

const fn default_slot() -> usize {
    1
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading nagrange configuration file '{path}'"))?;
        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// The declaration for `name`, if any.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&MetricDecl> {
        self.metrics.iter().find(|m| m.name == name)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a metric declaration is empty, duplicated or inconsistent
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for decl in &self.metrics {
            if decl.name.is_empty() {
                return Err(app_err!("metric declarations must have a non-empty name"));
            }

            if !seen.insert(decl.name.as_str()) {
                return Err(app_err!("metric '{}' is declared more than once", decl.name));
            }

            if decl.slot == 0 {
                return Err(app_err!("slot for metric '{}' must be at least 1", decl.name));
            }

            if let (Some(min), Some(max)) = (decl.min, decl.max)
                && min > max
            {
                return Err(app_err!("min ({min}) for metric '{}' must not exceed max ({max})", decl.name));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
