//! Haversine distance, initial bearing, and GPS precision heuristics.

use shorewatch_geo_models::{GeoCoordinate, GpsAccuracy, ProximityResult};

use crate::{EARTH_RADIUS_M, GeoError, validate};

/// Great-circle distance between two coordinates in meters.
///
/// Spherical Haversine with mean Earth radius [`EARTH_RADIUS_M`].
/// Identical coordinates short-circuit to `0.0` before any trigonometry,
/// avoiding inverse-trig domain errors from floating-point drift.
///
/// # Errors
///
/// Returns [`GeoError::InvalidCoordinate`] if either input fails
/// validation.
pub fn distance_m(a: GeoCoordinate, b: GeoCoordinate) -> Result<f64, GeoError> {
    validate::validate(a.latitude, a.longitude)?;
    validate::validate(b.latitude, b.longitude)?;

    Ok(haversine_m(a, b))
}

/// Raw Haversine over coordinates already known to be valid.
///
/// Used by batch operations (clustering, nearest search) that validate
/// up front and must not re-pay the `Result` plumbing per pair.
pub(crate) fn haversine_m(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    if (a.latitude - b.latitude).abs() < f64::EPSILON
        && (a.longitude - b.longitude).abs() < f64::EPSILON
    {
        return 0.0;
    }

    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Initial compass bearing from `a` to `b` along the great circle,
/// normalized into `[0, 360)` degrees.
///
/// # Errors
///
/// Returns [`GeoError::InvalidCoordinate`] if either input fails
/// validation.
pub fn bearing_deg(a: GeoCoordinate, b: GeoCoordinate) -> Result<f64, GeoError> {
    validate::validate(a.latitude, a.longitude)?;
    validate::validate(b.latitude, b.longitude)?;

    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    Ok(y.atan2(x).to_degrees().rem_euclid(360.0))
}

/// Precision tier of a single coordinate.
///
/// Classifies by how many decimal places the components carry: finer
/// than three decimals reads as high, finer than one as medium,
/// whole-ish degrees as low. A proxy for the reporting device's GPS
/// precision, not a measurement of true positional error. The
/// coordinate's tier is the worse of its two components.
#[must_use]
pub fn coordinate_accuracy(coord: GeoCoordinate) -> GpsAccuracy {
    component_accuracy(coord.latitude).worst(component_accuracy(coord.longitude))
}

fn component_accuracy(value: f64) -> GpsAccuracy {
    // Tolerance absorbs binary representation noise on decimal inputs.
    const EPS: f64 = 1e-6;

    let milli = value * 1_000.0;
    if (milli - milli.round()).abs() > EPS {
        return GpsAccuracy::High;
    }
    let deci = value * 10.0;
    if (deci - deci.round()).abs() > EPS {
        return GpsAccuracy::Medium;
    }
    GpsAccuracy::Low
}

/// Full pairwise relation: distance, bearing, radius membership, and the
/// worse of the two coordinates' precision tiers.
///
/// # Errors
///
/// Returns [`GeoError::InvalidCoordinate`] if either input fails
/// validation.
pub fn proximity(
    a: GeoCoordinate,
    b: GeoCoordinate,
    radius_m: f64,
) -> Result<ProximityResult, GeoError> {
    let distance = distance_m(a, b)?;
    let bearing = bearing_deg(a, b)?;

    Ok(ProximityResult {
        distance_m: distance,
        bearing_deg: bearing,
        within_radius: distance <= radius_m,
        accuracy: coordinate_accuracy(a).worst(coordinate_accuracy(b)),
    })
}

/// Index and distance of the candidate nearest to `origin` within
/// `max_distance_m`, or `None` if no valid candidate is close enough.
///
/// Invalid candidates are skipped rather than failing the scan.
///
/// # Errors
///
/// Returns [`GeoError::InvalidCoordinate`] if `origin` itself fails
/// validation.
pub fn nearest(
    origin: GeoCoordinate,
    candidates: &[GeoCoordinate],
    max_distance_m: f64,
) -> Result<Option<(usize, f64)>, GeoError> {
    validate::validate(origin.latitude, origin.longitude)?;

    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        if !validate::is_valid_coordinate(*candidate) {
            log::debug!(
                "Skipping invalid candidate at index {index}: ({}, {})",
                candidate.latitude,
                candidate.longitude
            );
            continue;
        }
        let dist = haversine_m(origin, *candidate);
        if dist <= max_distance_m && best.is_none_or(|(_, d)| dist < d) {
            best = Some((index, dist));
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let mumbai = coord(19.076, 72.8777);
        assert!((distance_m(mumbai, mumbai).unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let mumbai = coord(19.076, 72.8777);
        let chennai = coord(13.0827, 80.2707);
        let there = distance_m(mumbai, chennai).unwrap();
        let back = distance_m(chennai, mumbai).unwrap();
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn mumbai_to_chennai_distance_is_about_1030_km() {
        let mumbai = coord(19.076, 72.8777);
        let chennai = coord(13.0827, 80.2707);
        let dist = distance_m(mumbai, chennai).unwrap();
        assert!((1_020_000.0..1_045_000.0).contains(&dist), "got {dist}");
    }

    #[test]
    fn distance_rejects_invalid_input() {
        let valid = coord(10.0, 20.0);
        let invalid = coord(f64::NAN, 20.0);
        assert!(distance_m(valid, invalid).is_err());
        assert!(distance_m(invalid, valid).is_err());
    }

    #[test]
    fn bearing_is_in_range_for_distinct_points() {
        let points = [
            coord(19.076, 72.8777),
            coord(13.0827, 80.2707),
            coord(-33.8688, 151.2093),
            coord(51.5074, -0.1278),
            coord(0.0, 179.9),
            coord(0.0, -179.9),
        ];
        for a in points {
            for b in points {
                if (a.latitude - b.latitude).abs() < f64::EPSILON
                    && (a.longitude - b.longitude).abs() < f64::EPSILON
                {
                    continue;
                }
                let bearing = bearing_deg(a, b).unwrap();
                assert!((0.0..360.0).contains(&bearing), "bearing {bearing}");
            }
        }
    }

    #[test]
    fn due_north_bearing_is_zero() {
        let bearing = bearing_deg(coord(10.0, 20.0), coord(11.0, 20.0)).unwrap();
        assert!(bearing.abs() < 1e-9 || (360.0 - bearing) < 1e-9);
    }

    #[test]
    fn due_east_bearing_is_ninety_at_equator() {
        let bearing = bearing_deg(coord(0.0, 20.0), coord(0.0, 21.0)).unwrap();
        assert!((bearing - 90.0).abs() < 1e-9);
    }

    #[test]
    fn accuracy_classifies_by_decimal_precision() {
        assert_eq!(coordinate_accuracy(coord(19.0761, 72.8777)), GpsAccuracy::High);
        assert_eq!(coordinate_accuracy(coord(19.07, 72.87)), GpsAccuracy::Medium);
        assert_eq!(coordinate_accuracy(coord(19.0, 72.5)), GpsAccuracy::Low);
    }

    #[test]
    fn pair_accuracy_is_worse_component() {
        // One fine coordinate, one whole-degree coordinate: pair reads low.
        let result = proximity(coord(19.0761, 72.8777), coord(19.0, 73.0), 1_000.0).unwrap();
        assert_eq!(result.accuracy, GpsAccuracy::Low);
    }

    #[test]
    fn proximity_flags_radius_membership() {
        let a = coord(19.0, 72.8);
        let b = coord(19.001, 72.801);
        let near = proximity(a, b, 500.0).unwrap();
        assert!(near.within_radius);
        let far = proximity(a, b, 50.0).unwrap();
        assert!(!far.within_radius);
    }

    #[test]
    fn nearest_picks_closest_valid_candidate() {
        let origin = coord(19.0, 72.8);
        let candidates = [
            coord(25.0, 80.0),
            coord(f64::NAN, 72.8),
            coord(19.002, 72.802),
            coord(19.01, 72.81),
        ];
        let (index, dist) = nearest(origin, &candidates, 10_000.0).unwrap().unwrap();
        assert_eq!(index, 2);
        assert!(dist < 500.0);
    }

    #[test]
    fn nearest_returns_none_when_all_out_of_range() {
        let origin = coord(19.0, 72.8);
        let candidates = [coord(25.0, 80.0)];
        assert!(nearest(origin, &candidates, 1_000.0).unwrap().is_none());
    }
}
