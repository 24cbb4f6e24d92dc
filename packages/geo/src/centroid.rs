//! Spherical centroid and bounding-box computation.

use shorewatch_geo_models::{BoundingBox, GeoCoordinate};

use crate::validate;

/// Spherical centroid of a coordinate set.
///
/// Returns `None` on empty input; a single point returns itself. For
/// larger sets, each coordinate becomes a unit Cartesian vector, the
/// vectors are averaged componentwise, and the mean is converted back to
/// latitude/longitude. Unlike naive lat/lng averaging, this handles
/// point sets straddling the antimeridian.
///
/// Invalid coordinates are skipped; all-invalid input yields `None`.
#[must_use]
pub fn centroid(coords: &[GeoCoordinate]) -> Option<GeoCoordinate> {
    let valid: Vec<GeoCoordinate> = coords
        .iter()
        .copied()
        .filter(|c| validate::is_valid_coordinate(*c))
        .collect();

    match valid.as_slice() {
        [] => None,
        [only] => Some(*only),
        many => {
            let (mut x, mut y, mut z) = (0.0_f64, 0.0_f64, 0.0_f64);
            for coord in many {
                let phi = coord.latitude.to_radians();
                let lambda = coord.longitude.to_radians();
                x += phi.cos() * lambda.cos();
                y += phi.cos() * lambda.sin();
                z += phi.sin();
            }

            #[allow(clippy::cast_precision_loss)]
            let n = many.len() as f64;
            let (x, y, z) = (x / n, y / n, z / n);

            let longitude = y.atan2(x).to_degrees();
            let latitude = z.atan2(x.hypot(y)).to_degrees();

            Some(GeoCoordinate {
                latitude,
                longitude,
            })
        }
    }
}

/// Axis-aligned bounding box over a coordinate set.
///
/// Returns `None` on empty or all-invalid input. The box is computed in
/// plain degree space (east = max longitude), so a set straddling the
/// antimeridian produces a box spanning most of the globe; report
/// batches are regional, which keeps this out of play in practice.
#[must_use]
pub fn bounding_box(coords: &[GeoCoordinate]) -> Option<BoundingBox> {
    let mut valid = coords
        .iter()
        .copied()
        .filter(|c| validate::is_valid_coordinate(*c));

    let first = valid.next()?;
    let mut bbox = BoundingBox {
        north: first.latitude,
        south: first.latitude,
        east: first.longitude,
        west: first.longitude,
    };

    for coord in valid {
        bbox.north = bbox.north.max(coord.latitude);
        bbox.south = bbox.south.min(coord.latitude);
        bbox.east = bbox.east.max(coord.longitude);
        bbox.west = bbox.west.min(coord.longitude);
    }

    Some(bbox)
}
