use std::f64::consts::PI;

use crate::domain::{AreaMeasurement, Ring};

/// WGS84 semi-major axis in meters
const WGS84_A: f64 = 6378137.0;
/// WGS84 first eccentricity squared
const WGS84_E2: f64 = 0.00669437999014;

/// Degree-to-meter scale factors at a reference latitude
///
/// Derived from the ellipsoid's radii of curvature: the prime-vertical
/// radius scales longitude degrees, the meridian radius scales latitude
/// degrees. Returns (meters per degree latitude, meters per degree
/// longitude).
fn meters_per_degree(lat_deg: f64) -> (f64, f64) {
    let lat = lat_deg.to_radians();
    let sin_lat = lat.sin();
    let w2 = 1.0 - WGS84_E2 * sin_lat * sin_lat;

    let per_deg_lon = (PI / 180.0) * WGS84_A * lat.cos() / w2.sqrt();
    let per_deg_lat = (PI / 180.0) * WGS84_A * (1.0 - WGS84_E2) / w2.powf(1.5);

    (per_deg_lat, per_deg_lon)
}

/// Compute the enclosed area of a ring in square meters
///
/// # Algorithm
/// 1. Trim a trailing closing duplicate so the shoelace wrap is the only
///    closing edge
/// 2. Take the mean latitude as the reference for a local flat projection
///    (parcel-scale rings span a negligible latitude range)
/// 3. Project every vertex to planar meters using the WGS84 scale factors
///    at the reference latitude
/// 4. Shoelace over the projected vertices, wrapping last to first
///
/// Winding direction is discarded; the result is non-negative. Rings with
/// fewer than 3 open vertices have area 0 and are not an error.
pub fn ring_area(ring: &Ring) -> AreaMeasurement {
    let vertices = ring.open_vertices();
    if vertices.len() < 3 {
        return AreaMeasurement::ZERO;
    }

    let mean_lat = vertices.iter().map(|p| p.lat).sum::<f64>() / vertices.len() as f64;
    let (per_deg_lat, per_deg_lon) = meters_per_degree(mean_lat);

    let mut doubled = 0.0;
    for i in 0..vertices.len() {
        let j = (i + 1) % vertices.len();
        let x1 = vertices[i].lon * per_deg_lon;
        let y1 = vertices[i].lat * per_deg_lat;
        let x2 = vertices[j].lon * per_deg_lon;
        let y2 = vertices[j].lat * per_deg_lat;
        doubled += x1 * y2 - x2 * y1;
    }

    AreaMeasurement::new((doubled / 2.0).abs())
}
