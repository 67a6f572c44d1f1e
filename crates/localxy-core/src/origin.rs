//! Origin fixes: the configuration event that establishes a LocalXY origin.

use serde::{Deserialize, Serialize};

/// A reference position supplied from outside the converter.
///
/// Heading is not part of the fix. It is fixed when the converter is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginFix {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude in meters.
    #[serde(default)]
    pub altitude: f64,
    /// Coordinate frame the origin belongs to.
    #[serde(default)]
    pub frame: String,
}

/// Message types an origin can be extracted from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OriginMessage {
    /// Full GPS fix.
    GpsFix {
        #[serde(default)]
        frame_id: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        altitude: f64,
    },
    /// Satellite navigation fix.
    NavSatFix {
        #[serde(default)]
        frame_id: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        altitude: f64,
    },
    /// Stamped pose carrying geodetic values in its position:
    /// x = longitude, y = latitude, z = altitude.
    PoseStamped {
        #[serde(default)]
        frame_id: String,
        x: f64,
        y: f64,
        #[serde(default)]
        z: f64,
    },
}

impl OriginFix {
    pub fn new(latitude: f64, longitude: f64, altitude: f64, frame: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            frame: frame.into(),
        }
    }
}

impl OriginMessage {
    /// Normalize any supported message into an origin fix.
    pub fn to_fix(&self) -> OriginFix {
        match self {
            OriginMessage::GpsFix {
                frame_id,
                latitude,
                longitude,
                altitude,
            }
            | OriginMessage::NavSatFix {
                frame_id,
                latitude,
                longitude,
                altitude,
            } => OriginFix::new(*latitude, *longitude, *altitude, frame_id.clone()),
            OriginMessage::PoseStamped { frame_id, x, y, z } => {
                OriginFix::new(*y, *x, *z, frame_id.clone())
            }
        }
    }

    /// Short name of the message type, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            OriginMessage::GpsFix { .. } => "GpsFix",
            OriginMessage::NavSatFix { .. } => "NavSatFix",
            OriginMessage::PoseStamped { .. } => "PoseStamped",
        }
    }
}

impl From<&OriginMessage> for OriginFix {
    fn from(msg: &OriginMessage) -> Self {
        msg.to_fix()
    }
}
