//! Origin configuration loaded from JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::origin::OriginFix;

/// Errors raised while loading an origin configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid origin config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("origin {field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Fully specified reference origin.
///
/// ```json
/// { "latitude": 29.45, "longitude": -98.61, "heading": 90.0, "frame": "map" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginConfig {
    /// Reference latitude in degrees.
    pub latitude: f64,
    /// Reference longitude in degrees.
    pub longitude: f64,
    /// Reference heading in degrees.
    #[serde(default)]
    pub heading: f64,
    /// Reference altitude in meters.
    #[serde(default)]
    pub altitude: f64,
    /// Coordinate frame identifier.
    #[serde(default)]
    pub frame: String,
}

impl OriginConfig {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: OriginConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject NaN and infinite values. Range is not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("latitude", self.latitude),
            ("longitude", self.longitude),
            ("heading", self.heading),
            ("altitude", self.altitude),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    /// The position part of this config as an origin fix.
    pub fn to_fix(&self) -> OriginFix {
        OriginFix::new(self.latitude, self.longitude, self.altitude, self.frame.clone())
    }
}
