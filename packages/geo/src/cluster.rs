//! Greedy radius clustering for hotspot detection.
//!
//! Groups report coordinates that fall within a fixed radius of a seed
//! point. This is NOT DBSCAN: there is no core-point or
//! density-reachability notion, and the result depends on the iteration
//! order of the input slice — two permutations of the same point set can
//! draw different cluster boundaries. The simplification is intentional
//! and kept for parity with the shipped hotspot behavior; see DESIGN.md.

use shorewatch_geo_models::{ClusterPoint, GeoCluster, GeoCoordinate};

use crate::{centroid, distance, validate};

/// Clusters coordinates by greedy radius absorption around seed points.
///
/// Iterates indices in input order. Each unprocessed point becomes a
/// seed and absorbs every other unprocessed point within `max_radius_m`
/// of the seed (not of the evolving centroid). After absorption the true
/// spherical centroid is computed over the members and each member's
/// distance is recomputed against it, so the reported `radius_m` (the
/// maximum member distance) can exceed `max_radius_m`.
///
/// Invalid coordinates are skipped and logged at debug; empty or
/// all-invalid input yields an empty vec. Results are sorted by
/// descending member count.
#[must_use]
pub fn cluster(coords: &[GeoCoordinate], max_radius_m: f64) -> Vec<GeoCluster> {
    let valid: Vec<bool> = coords
        .iter()
        .map(|c| {
            let ok = validate::is_valid_coordinate(*c);
            if !ok {
                log::debug!(
                    "Skipping invalid report coordinate ({}, {})",
                    c.latitude,
                    c.longitude
                );
            }
            ok
        })
        .collect();

    let mut processed = vec![false; coords.len()];
    let mut clusters = Vec::new();

    for seed_index in 0..coords.len() {
        if processed[seed_index] || !valid[seed_index] {
            continue;
        }
        processed[seed_index] = true;

        let seed = coords[seed_index];
        let mut member_indices = vec![seed_index];

        for other_index in 0..coords.len() {
            if processed[other_index] || !valid[other_index] {
                continue;
            }
            if distance::haversine_m(seed, coords[other_index]) <= max_radius_m {
                processed[other_index] = true;
                member_indices.push(other_index);
            }
        }

        if let Some(built) = build_cluster(coords, &member_indices) {
            clusters.push(built);
        }
    }

    clusters.sort_by(|a, b| b.points.len().cmp(&a.points.len()));

    log::debug!(
        "Clustered {} coordinates into {} hotspots (radius {max_radius_m} m)",
        coords.len(),
        clusters.len()
    );

    clusters
}

/// Assembles one cluster: true centroid, per-member centroid distances
/// sorted ascending, max-distance radius, and area density.
fn build_cluster(coords: &[GeoCoordinate], member_indices: &[usize]) -> Option<GeoCluster> {
    let members: Vec<GeoCoordinate> = member_indices.iter().map(|&i| coords[i]).collect();
    let center = centroid::centroid(&members)?;

    let mut points: Vec<ClusterPoint> = member_indices
        .iter()
        .map(|&source_index| ClusterPoint {
            coordinate: coords[source_index],
            source_index,
            distance_from_centroid_m: distance::haversine_m(center, coords[source_index]),
        })
        .collect();

    points.sort_by(|a, b| {
        a.distance_from_centroid_m
            .total_cmp(&b.distance_from_centroid_m)
    });

    let radius_m = points
        .last()
        .map_or(0.0, |p| p.distance_from_centroid_m);

    #[allow(clippy::cast_precision_loss)]
    let count = points.len() as f64;
    let radius_km = radius_m / 1_000.0;
    let density = if radius_km > 0.0 {
        count / (std::f64::consts::PI * radius_km * radius_km)
    } else {
        count
    };

    Some(GeoCluster {
        centroid: center,
        radius_m,
        points,
        density,
    })
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
    fn clusters_nearby_reports_and_isolates_outlier() {
        let reports = [
            coord(19.0, 72.8),
            coord(19.001, 72.801),
            coord(30.0, 80.0),
        ];
        let clusters = cluster(&reports, 200.0);

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].points.len(), 2);
        assert_eq!(clusters[1].points.len(), 1);
        assert!((clusters[1].points[0].coordinate.latitude - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn every_input_point_lands_in_exactly_one_cluster() {
        let reports = [
            coord(19.0, 72.8),
            coord(19.001, 72.801),
            coord(19.002, 72.799),
            coord(30.0, 80.0),
            coord(13.08, 80.27),
            coord(13.081, 80.272),
        ];
        let clusters = cluster(&reports, 500.0);

        let mut seen: Vec<usize> = clusters
            .iter()
            .flat_map(|c| c.points.iter().map(|p| p.source_index))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_input_yields_no_clusters() {
        assert!(cluster(&[], 500.0).is_empty());
    }

    #[test]
    fn all_invalid_input_yields_no_clusters() {
        let reports = [coord(f64::NAN, 72.8), coord(95.0, 0.0)];
        assert!(cluster(&reports, 500.0).is_empty());
    }

    #[test]
    fn invalid_points_are_skipped_not_fatal() {
        let reports = [coord(19.0, 72.8), coord(f64::NAN, 72.8), coord(19.001, 72.801)];
        let clusters = cluster(&reports, 500.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].points.len(), 2);
        let indices: Vec<usize> = clusters[0].points.iter().map(|p| p.source_index).collect();
        assert!(!indices.contains(&1));
    }

    #[test]
    fn singleton_cluster_has_zero_radius_and_count_density() {
        let clusters = cluster(&[coord(30.0, 80.0)], 200.0);
        assert_eq!(clusters.len(), 1);
        assert!(clusters[0].radius_m.abs() < f64::EPSILON);
        assert!((clusters[0].density - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn member_distances_are_sorted_ascending() {
        let reports = [
            coord(19.0, 72.8),
            coord(19.003, 72.803),
            coord(19.001, 72.801),
        ];
        let clusters = cluster(&reports, 1_000.0);
        assert_eq!(clusters.len(), 1);
        let distances: Vec<f64> = clusters[0]
            .points
            .iter()
            .map(|p| p.distance_from_centroid_m)
            .collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn clusters_sort_by_descending_member_count() {
        let reports = [
            coord(30.0, 80.0),
            coord(19.0, 72.8),
            coord(19.001, 72.801),
            coord(19.002, 72.802),
        ];
        let clusters = cluster(&reports, 500.0);
        assert_eq!(clusters[0].points.len(), 3);
        assert_eq!(clusters[1].points.len(), 1);
    }

    #[test]
    fn identical_input_order_is_deterministic() {
        let reports = [
            coord(19.0, 72.8),
            coord(19.001, 72.801),
            coord(19.0025, 72.8025),
            coord(30.0, 80.0),
        ];
        let first = cluster(&reports, 250.0);
        let second = cluster(&reports, 250.0);
        assert_eq!(first, second);
    }

    #[test]
    fn permuted_input_order_may_change_membership() {
        // Chain of points where each neighbor is within radius of the
        // next but the ends are not within radius of each other. Seeding
        // from the middle absorbs both ends; seeding from an end splits
        // the chain. Pins the documented order sensitivity.
        let forward = [
            coord(19.0, 72.8),
            coord(19.0016, 72.8),
            coord(19.0032, 72.8),
        ];
        let reordered = [
            coord(19.0016, 72.8),
            coord(19.0, 72.8),
            coord(19.0032, 72.8),
        ];
        let radius = 200.0;

        let from_end = cluster(&forward, radius);
        let from_middle = cluster(&reordered, radius);

        assert_eq!(from_end.len(), 2);
        assert_eq!(from_middle.len(), 1);
        assert_eq!(from_middle[0].points.len(), 3);
    }
}
