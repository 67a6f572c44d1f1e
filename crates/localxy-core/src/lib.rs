//! Core types for LocalXY coordinate conversion.
//!
//! This crate defines the vocabulary shared by the projection crate and the
//! command-line tool: geodetic and local points, WGS84 constants, origin
//! fixes and messages, and origin configuration.
//! It has no dependency on any transport or runtime framework.

pub mod config;
pub mod constants;
pub mod origin;
pub mod types;

pub use config::{ConfigError, OriginConfig};
pub use origin::{OriginFix, OriginMessage};
pub use types::{GeoPoint, LocalPoint};
