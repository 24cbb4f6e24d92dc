//! Coordinate bounds and finiteness checks.
//!
//! Every geometry entry point in this crate validates its inputs here.
//! Batch operations skip invalid points instead of aborting; single-pair
//! operations return [`GeoError::InvalidCoordinate`].

use shorewatch_geo_models::GeoCoordinate;

use crate::GeoError;

/// Returns `true` if both components are finite and in WGS84 range.
#[must_use]
pub fn is_valid(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// Validates a latitude/longitude pair.
///
/// # Errors
///
/// Returns [`GeoError::InvalidCoordinate`] if either component is NaN,
/// infinite, or out of range.
pub fn validate(latitude: f64, longitude: f64) -> Result<(), GeoError> {
    if is_valid(latitude, longitude) {
        Ok(())
    } else {
        Err(GeoError::InvalidCoordinate {
            latitude,
            longitude,
        })
    }
}

/// Builds a validated [`GeoCoordinate`].
///
/// # Errors
///
/// Returns [`GeoError::InvalidCoordinate`] for out-of-range or
/// non-finite input.
pub fn coordinate(latitude: f64, longitude: f64) -> Result<GeoCoordinate, GeoError> {
    validate(latitude, longitude)?;
    Ok(GeoCoordinate {
        latitude,
        longitude,
    })
}

/// Returns `true` if the coordinate passes validation.
#[must_use]
pub fn is_valid_coordinate(coord: GeoCoordinate) -> bool {
    is_valid(coord.latitude, coord.longitude)
}
