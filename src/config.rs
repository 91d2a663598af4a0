//! Matcher settings, loadable from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tolerance for number comparisons involving a float. Zero means
/// numbers must be equal in value, so `1` still matches `1.0`. A positive
/// epsilon is applied both as an absolute and as a relative tolerance.
pub const DEFAULT_FLOAT_EPSILON: f64 = 0.0;

/// How actual sequences longer than the expected sequence are treated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceMode {
    /// Extra trailing elements in the actual sequence are ignored.
    #[default]
    Prefix,
    /// The first extra trailing element is reported as unexpected.
    Exact,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct MatchConfig {
    pub float_epsilon: f64,
    pub sequence_mode: SequenceMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            float_epsilon: DEFAULT_FLOAT_EPSILON,
            sequence_mode: SequenceMode::Prefix,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid matcher config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("float-epsilon must be a finite, non-negative number (got {0})")]
    InvalidEpsilon(f64),
}

impl MatchConfig {
    pub fn exact_sequences(mut self) -> Self {
        self.sequence_mode = SequenceMode::Exact;
        self
    }

    pub fn with_float_epsilon(mut self, epsilon: f64) -> Self {
        self.float_epsilon = epsilon;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs_err::read_to_string(path)?;
        log::debug!("Loading matcher config from {}", path.display());
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.float_epsilon.is_finite() || self.float_epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.float_epsilon));
        }
        Ok(())
    }
}
