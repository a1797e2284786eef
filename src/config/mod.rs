//! Synthesis configuration.
//!
//! Every knob has a default, so a config file only lists the values it
//! changes. Example file:
//!
//! ```yaml
//! jitter_band: 0.2
//! date_shift_days: 30
//! seed: 7
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use synth_generator::DuplicateRefresh;
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A band or probability outside its allowed range
    #[error("Invalid value for '{name}': {value} (expected {expected})")]
    InvalidBand {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Largest accepted day shift, about a century.
pub const MAX_SHIFT_DAYS: i64 = 36_500;

/// Tunables for one synthesis run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Default multiplicative jitter band for numeric fields.
    pub jitter_band: f64,

    /// Default maximum day shift for date fields.
    pub date_shift_days: i64,

    /// Resample band for arrays reached by the generic synthesizer.
    pub array_band: f64,

    /// Jitter band for `current_value` on accounts.
    pub account_value_band: f64,

    /// Jitter band for numeric fields of chart series entries.
    pub chart_jitter_band: f64,

    /// Maximum day shift for `update_date` on chart series entries.
    pub chart_date_shift_days: i64,

    /// Probability that a synthesized account name gets the managed marker.
    pub managed_marker_probability: f64,

    /// Upper bound on the length of regenerated reference numbers.
    pub reference_number_max_len: usize,

    /// Seed for reproducible output. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            jitter_band: 0.3,
            date_shift_days: 14,
            array_band: 0.2,
            account_value_band: 0.25,
            chart_jitter_band: 0.15,
            chart_date_shift_days: 7,
            managed_marker_probability: 0.25,
            reference_number_max_len: 12,
            seed: None,
        }
    }
}

impl SynthesisConfig {
    /// Parse and validate a YAML config document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Replace the seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Check that every band lies in `[0, 1)`, the probability in `[0, 1]`
    /// and day shifts in `[0, MAX_SHIFT_DAYS]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bands = [
            ("jitter_band", self.jitter_band),
            ("array_band", self.array_band),
            ("account_value_band", self.account_value_band),
            ("chart_jitter_band", self.chart_jitter_band),
        ];
        for (name, value) in bands {
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(ConfigError::InvalidBand {
                    name,
                    value,
                    expected: "a finite band in [0, 1)",
                });
            }
        }

        let p = self.managed_marker_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidBand {
                name: "managed_marker_probability",
                value: p,
                expected: "a probability in [0, 1]",
            });
        }

        let day_bands = [
            ("date_shift_days", self.date_shift_days),
            ("chart_date_shift_days", self.chart_date_shift_days),
        ];
        for (name, value) in day_bands {
            if !(0..=MAX_SHIFT_DAYS).contains(&value) {
                return Err(ConfigError::InvalidBand {
                    name,
                    value: value as f64,
                    expected: "a number of days in [0, 36500]",
                });
            }
        }

        Ok(())
    }

    /// How duplicated records are refreshed during array resampling.
    pub fn duplicate_refresh(&self) -> DuplicateRefresh {
        DuplicateRefresh {
            jitter_band: self.jitter_band,
            date_shift_days: self.date_shift_days,
        }
    }
}
