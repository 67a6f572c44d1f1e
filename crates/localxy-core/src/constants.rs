//! WGS84 ellipsoid parameters and unit conversions.

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS84 flattening.
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// WGS84 first eccentricity squared, e² = f(2 - f).
pub const WGS84_ECCENTRICITY_SQUARED: f64 = WGS84_FLATTENING * (2.0 - WGS84_FLATTENING);

/// Arc-seconds per degree.
pub const ARCSECONDS_PER_DEGREE: f64 = 3600.0;
