//! Origin-bound LocalXY converter.
//!
//! [`LocalXyWgs84Util`] holds a single reference origin and converts between
//! WGS84 and a LocalXY frame that is optionally rotated by a reference heading.
//!
//! Heading convention: a positive heading rotates the LocalXY axes
//! counter-clockwise (from east toward north) relative to the east/north
//! tangent plane at the origin. The LocalXY +x axis points along the
//! east/north direction `(cos h, sin h)`.
//!
//! The origin is either supplied at construction or arrives later through
//! [`LocalXyWgs84Util::set_origin`]. It is written at most once and is then
//! immutable, so a converter can be shared across threads behind an [`Arc`].

use std::sync::Arc;

use glam::DVec2;
use localxy_core::config::OriginConfig;
use localxy_core::origin::{OriginFix, OriginMessage};
use localxy_core::types::{GeoPoint, LocalPoint};
use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::{debug, info};

use crate::projection::CurvatureRadii;

/// Shared handle to a converter.
pub type SharedLocalXyUtil = Arc<LocalXyWgs84Util>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OriginError {
    #[error("origin already initialized at ({latitude}, {longitude}); fix ignored")]
    AlreadyInitialized { latitude: f64, longitude: f64 },
}

/// Reference origin with the terms derived from it.
#[derive(Debug, Clone)]
struct ReferenceOrigin {
    latitude: f64,
    longitude: f64,
    altitude: f64,
    frame: String,
    radii: CurvatureRadii,
}

impl ReferenceOrigin {
    fn new(latitude: f64, longitude: f64, altitude: f64, frame: String) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            frame,
            radii: CurvatureRadii::at_latitude(latitude),
        }
    }
}

/// Reference heading in degrees with its cached rotation terms.
#[derive(Debug, Clone, Copy)]
struct Heading {
    degrees: f64,
    cos: f64,
    sin: f64,
}

impl Heading {
    fn new(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { degrees, cos, sin }
    }

    /// East/north offset into heading-aligned LocalXY.
    fn rotate_into_local(&self, d: DVec2) -> DVec2 {
        DVec2::new(
            d.x * self.cos + d.y * self.sin,
            -d.x * self.sin + d.y * self.cos,
        )
    }

    /// Heading-aligned LocalXY into an east/north offset.
    fn rotate_into_tangent(&self, p: DVec2) -> DVec2 {
        DVec2::new(
            p.x * self.cos - p.y * self.sin,
            p.x * self.sin + p.y * self.cos,
        )
    }
}

/// Converts between WGS84 lat/lon and a LocalXY frame anchored at one origin.
#[derive(Debug)]
pub struct LocalXyWgs84Util {
    heading: Heading,
    origin: OnceCell<ReferenceOrigin>,
}

impl LocalXyWgs84Util {
    /// Create an initialized converter.
    ///
    /// Latitude, longitude and heading are in degrees, altitude in meters.
    pub fn new(
        reference_latitude: f64,
        reference_longitude: f64,
        reference_heading: f64,
        reference_altitude: f64,
    ) -> Self {
        Self {
            heading: Heading::new(reference_heading),
            origin: OnceCell::with_value(ReferenceOrigin::new(
                reference_latitude,
                reference_longitude,
                reference_altitude,
                String::new(),
            )),
        }
    }

    /// Create an initialized converter from a loaded config, including its frame.
    pub fn from_config(config: &OriginConfig) -> Self {
        Self {
            heading: Heading::new(config.heading),
            origin: OnceCell::with_value(ReferenceOrigin::new(
                config.latitude,
                config.longitude,
                config.altitude,
                config.frame.clone(),
            )),
        }
    }

    /// Create a converter that waits for an origin fix. Heading is 0.
    pub fn pending() -> Self {
        Self::pending_with_heading(0.0)
    }

    /// Create a converter that waits for an origin fix, with the heading fixed now.
    pub fn pending_with_heading(reference_heading: f64) -> Self {
        Self {
            heading: Heading::new(reference_heading),
            origin: OnceCell::new(),
        }
    }

    /// Wrap this converter in a shared handle.
    pub fn shared(self) -> SharedLocalXyUtil {
        Arc::new(self)
    }

    /// Establish the origin. Only the first fix is accepted; later fixes leave
    /// the origin untouched and return [`OriginError::AlreadyInitialized`].
    pub fn set_origin(&self, fix: OriginFix) -> Result<(), OriginError> {
        let OriginFix {
            latitude,
            longitude,
            altitude,
            frame,
        } = fix;

        let mut accepted = false;
        let origin = self.origin.get_or_init(|| {
            accepted = true;
            ReferenceOrigin::new(latitude, longitude, altitude, frame)
        });

        if accepted {
            info!(
                latitude = origin.latitude,
                longitude = origin.longitude,
                altitude = origin.altitude,
                frame = %origin.frame,
                "LocalXY origin initialized"
            );
            Ok(())
        } else {
            debug!(latitude, longitude, "LocalXY origin already set, ignoring fix");
            Err(OriginError::AlreadyInitialized {
                latitude: origin.latitude,
                longitude: origin.longitude,
            })
        }
    }

    /// Establish the origin from any supported origin message.
    pub fn handle_origin(&self, msg: &OriginMessage) -> Result<(), OriginError> {
        debug!(kind = msg.kind(), "received origin message");
        self.set_origin(msg.to_fix())
    }

    pub fn initialized(&self) -> bool {
        self.origin.get().is_some()
    }

    /// Reference latitude in degrees, 0 until initialized.
    pub fn reference_latitude(&self) -> f64 {
        self.origin.get().map_or(0.0, |o| o.latitude)
    }

    /// Reference longitude in degrees, 0 until initialized.
    pub fn reference_longitude(&self) -> f64 {
        self.origin.get().map_or(0.0, |o| o.longitude)
    }

    /// Reference heading in degrees, 0 until initialized.
    pub fn reference_heading(&self) -> f64 {
        if self.initialized() {
            self.heading.degrees
        } else {
            0.0
        }
    }

    /// Reference altitude in meters, 0 until initialized.
    pub fn reference_altitude(&self) -> f64 {
        self.origin.get().map_or(0.0, |o| o.altitude)
    }

    /// Frame the origin belongs to, empty until supplied.
    pub fn frame(&self) -> &str {
        self.origin.get().map_or("", |o| o.frame.as_str())
    }

    /// Convert WGS84 lat/lon (degrees) to LocalXY meters.
    ///
    /// Returns `None` if no origin has been established yet.
    pub fn to_local_xy(&self, latitude: f64, longitude: f64) -> Option<LocalPoint> {
        let Some(origin) = self.origin.get() else {
            debug!("to_local_xy called before LocalXY origin was initialized");
            return None;
        };

        let d = origin
            .radii
            .offset(latitude - origin.latitude, longitude - origin.longitude);
        Some(self.heading.rotate_into_local(d).into())
    }

    /// Convert LocalXY meters to WGS84 lat/lon (degrees).
    ///
    /// Returns `None` if no origin has been established yet.
    pub fn to_wgs84(&self, x: f64, y: f64) -> Option<GeoPoint> {
        let Some(origin) = self.origin.get() else {
            debug!("to_wgs84 called before LocalXY origin was initialized");
            return None;
        };

        let (dlat, dlon) = origin
            .radii
            .angles(self.heading.rotate_into_tangent(DVec2::new(x, y)));
        Some(GeoPoint::new(
            origin.latitude + dlat,
            origin.longitude + dlon,
        ))
    }

    /// [`to_local_xy`](Self::to_local_xy) for a [`GeoPoint`].
    pub fn point_to_local_xy(&self, point: GeoPoint) -> Option<LocalPoint> {
        self.to_local_xy(point.latitude, point.longitude)
    }

    /// [`to_wgs84`](Self::to_wgs84) for a [`LocalPoint`].
    pub fn point_to_wgs84(&self, point: LocalPoint) -> Option<GeoPoint> {
        self.to_wgs84(point.x, point.y)
    }
}

impl Default for LocalXyWgs84Util {
    fn default() -> Self {
        Self::pending()
    }
}
