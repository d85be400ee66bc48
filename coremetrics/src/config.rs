//! Evaluation configuration.
//!
//! [`RocConfig`] selects the curve mode, the bucket count used by binned
//! mode, and whether scores are clamped to the unit interval. Defaults are
//! exact mode, 100 buckets, clamping on.
//!
//! Configs can be loaded from JSON:
//!
//! ```json
//! { "mode": "binned", "buckets": 50, "clamp_to_unit_interval": false }
//! ```
//!
//! Missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default bucket count for binned mode.
pub const DEFAULT_BUCKETS: i32 = 100;

/// Which curve computer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RocMode {
    /// One point per distinct score.
    #[default]
    Exact,
    /// `buckets + 1` evenly spaced thresholds.
    Binned,
}

/// Configuration for [`crate::evaluate_roc`].
///
/// # Example
///
/// ```rust
/// use coremetrics::{RocConfig, RocMode};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = RocConfig::binned(20)?;
/// assert_eq!(config.mode, RocMode::Binned);
/// assert!(config.clamp_to_unit_interval);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocConfig {
    /// Curve mode.
    pub mode: RocMode,

    /// Bucket count for binned mode. Ignored in exact mode.
    pub buckets: i32,

    /// Clamp scores into `[0, 1]`.
    ///
    /// Exact mode records clamped thresholds and merges scores that clamp to
    /// the same value into one step; binned mode also spreads its levels over
    /// the unit interval and compares clamped scores.
    pub clamp_to_unit_interval: bool,
}

impl Default for RocConfig {
    fn default() -> Self {
        Self {
            mode: RocMode::Exact,
            buckets: DEFAULT_BUCKETS,
            clamp_to_unit_interval: true,
        }
    }
}

impl RocConfig {
    /// Exact-mode configuration with clamping on.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Binned-mode configuration with clamping on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBuckets`] if `buckets <= 0`.
    pub fn binned(buckets: i32) -> Result<Self> {
        let config = Self {
            mode: RocMode::Binned,
            buckets,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the clamp flag.
    #[must_use]
    pub fn with_clamp(mut self, clamp_to_unit_interval: bool) -> Self {
        self.clamp_to_unit_interval = clamp_to_unit_interval;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBuckets`] if binned mode is selected
    /// with a non-positive bucket count.
    pub fn validate(&self) -> Result<()> {
        if self.mode == RocMode::Binned && self.buckets <= 0 {
            return Err(ConfigError::InvalidBuckets {
                buckets: self.buckets,
            }
            .into());
        }
        Ok(())
    }

    /// Loads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not a valid config, or
    /// [`ConfigError::InvalidBuckets`] if validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| ConfigError::Load {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), ?config, "loaded ROC config");
        Ok(config)
    }
}
