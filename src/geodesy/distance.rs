use crate::domain::{EdgeMeasurement, GeoPoint, Ring};

/// Mean Earth radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (haversine)
///
/// Spherical rather than ellipsoidal on purpose: edge lengths feed live
/// labels during interactive drawing, and the discrepancy versus the
/// ellipsoid is sub-meter at parcel scale.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Ground distance of every ring edge, wraparound edge included
///
/// Edge `i` connects vertex `i` to vertex `(i + 1) mod n`, in input order.
/// Rings with fewer than 2 vertices have no edges.
pub fn edge_lengths(ring: &Ring) -> Vec<EdgeMeasurement> {
    let vertices = ring.vertices();
    if vertices.len() < 2 {
        return Vec::new();
    }

    (0..vertices.len())
        .map(|i| {
            let j = (i + 1) % vertices.len();
            EdgeMeasurement {
                from: i,
                to: j,
                meters: haversine_distance(vertices[i], vertices[j]),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_distance() {
        let p = GeoPoint::new(12.9716, 77.5946);
        assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        // 1 degree of latitude ~111.19km on the mean sphere
        let a = GeoPoint::new(12.0, 77.0);
        let b = GeoPoint::new(13.0, 77.0);
        let d = haversine_distance(a, b);
        assert!((d - 111_195.0).abs() < 100.0, "got {}", d);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = GeoPoint::new(12.9716, 77.5946);
        let b = GeoPoint::new(12.9726, 77.5956);
        assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
    }

    #[test]
    fn test_edge_lengths_square() {
        let ring = Ring::from(vec![
            (12.9716, 77.5946),
            (12.9716, 77.5956),
            (12.9726, 77.5956),
            (12.9726, 77.5946),
        ]);
        let edges = edge_lengths(&ring);

        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].from, 3);
        assert_eq!(edges[3].to, 0);
        for edge in &edges {
            // ~0.001 degree per side, about 111m
            assert!(edge.meters > 100.0 && edge.meters < 120.0, "got {}", edge.meters);
        }
    }

    #[test]
    fn test_two_point_path_has_forward_and_wrap_edges() {
        let ring = Ring::from(vec![(12.97, 77.59), (12.98, 77.60)]);
        let edges = edge_lengths(&ring);

        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].from, edges[0].to), (0, 1));
        assert_eq!((edges[1].from, edges[1].to), (1, 0));
        assert!(edges[0].meters > 0.0);
        assert_eq!(edges[0].meters, edges[1].meters);
    }

    #[test]
    fn test_degenerate_rings_have_no_edges() {
        assert!(edge_lengths(&Ring::default()).is_empty());
        assert!(edge_lengths(&Ring::from(vec![(12.97, 77.59)])).is_empty());
    }
}
