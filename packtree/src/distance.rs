//! Distance calculators for nearest-neighbor queries.
//!
//! A calculator measures the minimum distance from a query point to a
//! bounding box. The same calculator is applied to branch boxes for pruning
//! and to entry boxes for the final answer, so an implementation must never
//! overestimate the true minimum distance or the search would discard valid
//! candidates.

use crate::bounding_box::BoundingBox;

/// Mean earth radius in kilometers (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Computes the minimum distance from a query point to a bounding box.
///
/// Implementations return 0 when the point lies inside the box, edges
/// inclusive. Arithmetic is carried out in f64 even though coordinates are
/// stored as f32.
pub trait DistanceCalculator {
    /// Minimum distance from `(x, y)` to any point of `bbox`.
    fn distance(&self, x: f32, y: f32, bbox: &BoundingBox) -> f64;
}

/// Straight-line distance on the Euclidean plane, in coordinate units.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanPlane;

impl DistanceCalculator for EuclideanPlane {
    fn distance(&self, x: f32, y: f32, bbox: &BoundingBox) -> f64 {
        let cx = (bbox.min_x as f64 + bbox.max_x as f64) / 2.0;
        let cy = (bbox.min_y as f64 + bbox.max_y as f64) / 2.0;
        let half_width = (bbox.max_x as f64 - bbox.min_x as f64) / 2.0;
        let half_height = (bbox.max_y as f64 - bbox.min_y as f64) / 2.0;

        let dx = ((cx - x as f64).abs() - half_width).max(0.0);
        let dy = ((cy - y as f64).abs() - half_height).max(0.0);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Great-circle distance in kilometers on a spherical earth.
///
/// The x axis is interpreted as latitude in degrees (-90 to 90) and the y
/// axis as longitude in degrees (-180 to 180). Longitudinal separation is
/// measured the short way around the sphere, so boxes touching the
/// antimeridian resolve to their nearer edge instead of the long way round.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalEarth;

impl DistanceCalculator for SphericalEarth {
    fn distance(&self, x: f32, y: f32, bbox: &BoundingBox) -> f64 {
        let lat = x as f64;
        let lon = y as f64;
        let min_lat = bbox.min_x as f64;
        let max_lat = bbox.max_x as f64;
        let min_lon = bbox.min_y as f64;
        let max_lon = bbox.max_y as f64;

        let in_lat_band = lat >= min_lat && lat <= max_lat;
        let in_lon_band = lon >= min_lon && lon <= max_lon;

        if in_lat_band && in_lon_band {
            return 0.0;
        }

        if in_lat_band {
            // Outside in longitude only: fixed-latitude arc to the nearer
            // east/west edge, picked by wrapped longitudinal separation.
            let edge = if wrapped_delta(lon, min_lon) <= wrapped_delta(lon, max_lon) {
                min_lon
            } else {
                max_lon
            };
            return great_circle_km(lat, lon, lat, edge);
        }

        if in_lon_band {
            // Outside in latitude only: meridian arc to the nearer edge.
            let edge = if lat < min_lat { min_lat } else { max_lat };
            return EARTH_RADIUS_KM * (lat - edge).abs().to_radians();
        }

        let corners = [
            (min_lat, min_lon),
            (min_lat, max_lon),
            (max_lat, min_lon),
            (max_lat, max_lon),
        ];
        corners
            .iter()
            .map(|&(corner_lat, corner_lon)| great_circle_km(lat, lon, corner_lat, corner_lon))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Longitudinal separation in degrees, wrapped across the antimeridian.
fn wrapped_delta(lon_a: f64, lon_b: f64) -> f64 {
    let delta = (lon_a - lon_b).abs() % 360.0;
    if delta > 180.0 {
        360.0 - delta
    } else {
        delta
    }
}

/// Great-circle distance in kilometers between two coordinates, using the
/// haversine formula.
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_inside_is_zero() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(EuclideanPlane.distance(5.0, 5.0, &bbox), 0.0);
        assert_eq!(EuclideanPlane.distance(0.0, 0.0, &bbox), 0.0);
        assert_eq!(EuclideanPlane.distance(10.0, 5.0, &bbox), 0.0);
    }

    #[test]
    fn test_euclidean_axis_distance() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!((EuclideanPlane.distance(15.0, 5.0, &bbox) - 5.0).abs() < 1e-9);
        assert!((EuclideanPlane.distance(5.0, -3.0, &bbox) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_euclidean_corner_distance() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let dist = EuclideanPlane.distance(13.0, 14.0, &bbox);
        assert!((dist - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_great_circle_known_distance() {
        // New York to Los Angeles is roughly 3940 km.
        let dist = great_circle_km(40.7128, -74.0060, 34.0522, -118.2437);
        assert!(dist > 3_700.0 && dist < 4_200.0);
    }

    #[test]
    fn test_great_circle_same_point() {
        let dist = great_circle_km(45.0, -93.265, 45.0, -93.265);
        assert!(dist < 1e-9);
    }

    #[test]
    fn test_spherical_inside_is_zero() {
        let bbox = BoundingBox::new(0.0, 179.0, 1.0, 180.0);
        assert_eq!(SphericalEarth.distance(0.5, 179.5, &bbox), 0.0);
        assert_eq!(SphericalEarth.distance(0.0, 179.0, &bbox), 0.0);
        assert_eq!(SphericalEarth.distance(1.0, 180.0, &bbox), 0.0);
    }

    #[test]
    fn test_spherical_latitude_band() {
        // Same latitude band, one degree east of the box.
        let bbox = BoundingBox::new(0.0, 10.0, 10.0, 20.0);
        let dist = SphericalEarth.distance(5.0, 21.0, &bbox);
        let expected = great_circle_km(5.0, 21.0, 5.0, 20.0);
        assert!((dist - expected).abs() < 1e-9);
    }

    #[test]
    fn test_spherical_longitude_band() {
        // Same longitude band, two degrees north of the box.
        let bbox = BoundingBox::new(0.0, 10.0, 10.0, 20.0);
        let dist = SphericalEarth.distance(12.0, 15.0, &bbox);
        let expected = great_circle_km(12.0, 15.0, 10.0, 15.0);
        assert!((dist - expected).abs() < 0.1);
    }

    #[test]
    fn test_spherical_corner_case() {
        let bbox = BoundingBox::new(0.0, 10.0, 10.0, 20.0);
        let dist = SphericalEarth.distance(12.0, 22.0, &bbox);
        let expected = great_circle_km(12.0, 22.0, 10.0, 20.0);
        assert!((dist - expected).abs() < 1e-9);
    }

    #[test]
    fn test_spherical_antimeridian_wrap() {
        // A box hugging the antimeridian from the east, queried from just
        // across it to the west. The short way is about half a degree of
        // longitude, not nearly the full circumference.
        let bbox = BoundingBox::new(0.0, 179.0, 1.0, 180.0);
        let dist = SphericalEarth.distance(0.5, -179.5, &bbox);
        let expected = great_circle_km(0.5, -179.5, 0.5, 180.0);
        assert!((dist - expected).abs() < 0.1);
        assert!(dist < 60.0);
    }

    #[test]
    fn test_spherical_never_exceeds_corner_minimum() {
        let bbox = BoundingBox::new(-10.0, 30.0, 20.0, 60.0);
        let probes = [
            (25.0_f32, 45.0_f32),
            (-15.0, 45.0),
            (5.0, 70.0),
            (5.0, -170.0),
            (40.0, 80.0),
            (-40.0, -120.0),
        ];
        for (lat, lon) in probes {
            let dist = SphericalEarth.distance(lat, lon, &bbox);
            let corner_min = [
                (bbox.min_x as f64, bbox.min_y as f64),
                (bbox.min_x as f64, bbox.max_y as f64),
                (bbox.max_x as f64, bbox.min_y as f64),
                (bbox.max_x as f64, bbox.max_y as f64),
            ]
            .iter()
            .map(|&(clat, clon)| great_circle_km(lat as f64, lon as f64, clat, clon))
            .fold(f64::INFINITY, f64::min);
            assert!(
                dist <= corner_min + 0.1,
                "distance {} exceeds corner minimum {} at ({}, {})",
                dist,
                corner_min,
                lat,
                lon
            );
        }
    }
}
