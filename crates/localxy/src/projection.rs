//! Ortho-rectified LocalXY projection: converts between WGS84 lat/lon and
//! local planar meters around a reference point.
//!
//! The ellipsoid is approximated at the reference latitude by its two
//! principal radii of curvature, giving an equirectangular projection that is
//! accurate to tens of kilometers from the reference. Longitude resolution
//! degrades toward the poles as the transverse radius shrinks with
//! cos(latitude); the poles themselves are not guarded.

use glam::DVec2;
use localxy_core::constants::{WGS84_ECCENTRICITY_SQUARED, WGS84_SEMI_MAJOR_AXIS};
use localxy_core::types::{GeoPoint, LocalPoint};

/// Radii of curvature of the WGS84 ellipsoid at a reference latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureRadii {
    /// Meridional radius (meters per radian of latitude).
    pub rho_lat: f64,
    /// Transverse radius scaled by cos(latitude) (meters per radian of longitude).
    pub rho_lon: f64,
}

impl CurvatureRadii {
    /// Radii at the given latitude (degrees).
    pub fn at_latitude(reference_latitude: f64) -> Self {
        let lat = reference_latitude.to_radians();
        let sin_lat = lat.sin();
        let w2 = 1.0 - WGS84_ECCENTRICITY_SQUARED * sin_lat * sin_lat;
        let w = w2.sqrt();

        Self {
            rho_lat: WGS84_SEMI_MAJOR_AXIS * (1.0 - WGS84_ECCENTRICITY_SQUARED) / (w2 * w),
            rho_lon: WGS84_SEMI_MAJOR_AXIS / w * lat.cos(),
        }
    }

    /// Unrotated east/north offset in meters for an angular offset in degrees.
    pub fn offset(&self, delta_latitude: f64, delta_longitude: f64) -> DVec2 {
        DVec2::new(
            delta_longitude.to_radians() * self.rho_lon,
            delta_latitude.to_radians() * self.rho_lat,
        )
    }

    /// Angular offset in degrees as (latitude, longitude) for an east/north offset in meters.
    pub fn angles(&self, offset: DVec2) -> (f64, f64) {
        (
            (offset.y / self.rho_lat).to_degrees(),
            (offset.x / self.rho_lon).to_degrees(),
        )
    }

    /// Meters per degree of latitude.
    pub fn lat_scale(&self) -> f64 {
        self.rho_lat.to_radians()
    }

    /// Meters per degree of longitude.
    pub fn lon_scale(&self) -> f64 {
        self.rho_lon.to_radians()
    }
}

/// Transform WGS84 lat/lon (degrees) into LocalXY meters relative to the
/// reference point. No heading is applied: x = East, y = North.
pub fn local_xy_from_wgs84(
    latitude: f64,
    longitude: f64,
    reference_latitude: f64,
    reference_longitude: f64,
) -> LocalPoint {
    CurvatureRadii::at_latitude(reference_latitude)
        .offset(latitude - reference_latitude, longitude - reference_longitude)
        .into()
}

/// Transform LocalXY meters back into WGS84 lat/lon (degrees).
///
/// Exact inverse of [`local_xy_from_wgs84`] for the same reference point.
pub fn wgs84_from_local_xy(
    x: f64,
    y: f64,
    reference_latitude: f64,
    reference_longitude: f64,
) -> GeoPoint {
    let (dlat, dlon) = CurvatureRadii::at_latitude(reference_latitude).angles(DVec2::new(x, y));
    GeoPoint::new(reference_latitude + dlat, reference_longitude + dlon)
}
