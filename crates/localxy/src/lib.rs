//! LocalXY coordinate conversion.
//!
//! Stateless WGS84 <-> LocalXY projection functions and an origin-bound
//! converter that caches the projection terms for one reference point.

pub mod projection;
pub mod util;

// Re-export key types for convenience.
pub use localxy_core::{GeoPoint, LocalPoint, OriginConfig, OriginFix, OriginMessage};
pub use projection::{local_xy_from_wgs84, wgs84_from_local_xy, CurvatureRadii};
pub use util::{LocalXyWgs84Util, OriginError, SharedLocalXyUtil};
