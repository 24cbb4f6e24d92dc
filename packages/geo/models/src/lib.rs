#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geospatial value types for hazard report intelligence.
//!
//! These types describe coordinates, pairwise proximity, and spatial
//! clusters ("hotspots") of nearby hazard reports. They are pure data:
//! all geometry lives in `shorewatch_geo`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A validated WGS84 coordinate.
///
/// Construct through the `shorewatch_geo` validation helpers so both
/// components are guaranteed finite and in range; the fields stay public
/// because downstream consumers deserialize these from ingestion payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees, `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in decimal degrees, `[-180, 180]`.
    pub longitude: f64,
}

/// Estimated GPS precision tier for a reported coordinate.
///
/// Derived from the number of meaningful decimal places — a proxy for
/// the reporting device's precision, not a measurement of true error.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GpsAccuracy {
    /// Coarse coordinate (roughly whole-degree precision).
    Low,
    /// Intermediate precision.
    Medium,
    /// Fine-grained coordinate (sub-kilometer precision).
    High,
}

impl GpsAccuracy {
    /// Returns the worse (less precise) of two accuracy tiers.
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        self.min(other)
    }
}

/// Pairwise spatial relation between two coordinates.
///
/// Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityResult {
    /// Great-circle distance in meters.
    pub distance_m: f64,
    /// Initial compass bearing from the first to the second coordinate,
    /// `[0, 360)`.
    pub bearing_deg: f64,
    /// Whether the distance falls within the queried radius.
    pub within_radius: bool,
    /// Worse of the two coordinates' precision tiers.
    pub accuracy: GpsAccuracy,
}

/// Axis-aligned bounding box over a coordinate set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Maximum latitude.
    pub north: f64,
    /// Minimum latitude.
    pub south: f64,
    /// Maximum longitude.
    pub east: f64,
    /// Minimum longitude.
    pub west: f64,
}

impl BoundingBox {
    /// Center of the box by naive midpoint (adequate for report-scale
    /// extents; not antimeridian-aware).
    #[must_use]
    pub fn center(&self) -> GeoCoordinate {
        GeoCoordinate {
            latitude: f64::midpoint(self.north, self.south),
            longitude: f64::midpoint(self.east, self.west),
        }
    }

    /// Latitude span in degrees.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude span in degrees.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }
}

/// A member of a spatial cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterPoint {
    /// The member coordinate.
    pub coordinate: GeoCoordinate,
    /// Index of this point in the caller's input batch.
    pub source_index: usize,
    /// Distance from the cluster's recomputed centroid, in meters.
    pub distance_from_centroid_m: f64,
}

/// A spatial cluster of nearby hazard reports.
///
/// Built fresh per clustering call; owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoCluster {
    /// Spherical centroid of the member coordinates.
    pub centroid: GeoCoordinate,
    /// Maximum member distance from the centroid, in meters. Membership
    /// is decided relative to the seed point, so this can exceed the
    /// clustering radius.
    pub radius_m: f64,
    /// Members sorted ascending by distance from the centroid.
    pub points: Vec<ClusterPoint>,
    /// Members per square kilometer of cluster area; falls back to the
    /// member count for zero-radius (single point or co-located) clusters.
    pub density: f64,
}

impl GeoCluster {
    /// Number of member points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cluster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
