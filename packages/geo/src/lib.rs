#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spherical geometry and spatial clustering for hazard reports.
//!
//! Stateless pure functions over validated coordinates: Haversine
//! distance and bearing, spherical centroid averaging, bounding boxes,
//! nearest-point search, and the greedy radius clustering that powers
//! hotspot detection. No I/O, no shared state; independent report
//! batches can be processed in parallel.

pub mod centroid;
pub mod cluster;
pub mod distance;
pub mod validate;

use thiserror::Error;

/// Mean Earth radius in meters, per the spherical approximation used by
/// every distance in this crate. Adequate at report scales (<1000 km);
/// not survey-grade.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Errors from geometry operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    /// Latitude/longitude out of range or non-finite.
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// The offending latitude.
        latitude: f64,
        /// The offending longitude.
        longitude: f64,
    },
}
