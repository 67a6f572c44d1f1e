//! Fundamental point types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geodetic position on the WGS84 ellipsoid, in degrees.
///
/// Ranges are not enforced. Out-of-range values are carried through the
/// projection arithmetically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Planar position in meters relative to a LocalXY origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalPoint {
    pub x: f64,
    pub y: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl LocalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance from the origin in meters.
    pub fn range(&self) -> f64 {
        self.as_dvec2().length()
    }

    /// Distance to another local point in meters.
    pub fn distance_to(&self, other: &LocalPoint) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for LocalPoint {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<LocalPoint> for DVec2 {
    fn from(p: LocalPoint) -> Self {
        p.as_dvec2()
    }
}
