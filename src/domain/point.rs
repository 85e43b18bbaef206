use serde::{Deserialize, Serialize};

/// A geographic vertex in WGS84 degrees
///
/// Latitude in [-90, 90], longitude in [-180, 180]. The measurement engine
/// assumes coordinates are finite and in range; validation happens at the
/// input boundary (see `crate::input`), not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Arithmetic midpoint in degrees, where a UI places an edge label
    pub fn midpoint(&self, other: &GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: (self.lat + other.lat) / 2.0,
            lon: (self.lon + other.lon) / 2.0,
        }
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// (lat, lon) tuple order, matching the rest of the crate
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let a = GeoPoint::new(12.0, 77.0);
        let b = GeoPoint::new(14.0, 78.0);
        let mid = a.midpoint(&b);
        assert_eq!(mid.lat, 13.0);
        assert_eq!(mid.lon, 77.5);
    }

    #[test]
    fn test_deserialize_lng_alias() {
        let p: GeoPoint = serde_json::from_str(r#"{"lat": 12.97, "lng": 77.59}"#).unwrap();
        assert_eq!(p.lon, 77.59);
    }
}
