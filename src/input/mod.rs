pub mod geojson;

pub use geojson::parse_ring;

use std::path::Path;

use thiserror::Error;

use crate::domain::{GeoPoint, Ring};

/// Errors from normalizing outside geometry into a `Ring`
///
/// The measurement engine itself never errors on valid geometry; range and
/// finiteness checks live here, on the caller side of that contract.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse polygon JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read polygon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported GeoJSON type: {0} (expected Polygon, Feature, or FeatureCollection)")]
    UnsupportedGeometry(String),

    #[error("polygon has no outer ring")]
    EmptyPolygon,

    #[error("vertex {index} out of range: lat {lat}, lng {lon}")]
    CoordinateOutOfRange { index: usize, lat: f64, lon: f64 },

    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// Check every vertex is finite and within WGS84 bounds
pub fn validate_ring(ring: &Ring) -> Result<(), InputError> {
    for (index, p) in ring.vertices().iter().enumerate() {
        if !p.lat.is_finite() || !p.lon.is_finite() {
            return Err(InputError::NonFiniteCoordinate { index });
        }
        if !(-90.0..=90.0).contains(&p.lat) || !(-180.0..=180.0).contains(&p.lon) {
            return Err(InputError::CoordinateOutOfRange {
                index,
                lat: p.lat,
                lon: p.lon,
            });
        }
    }
    Ok(())
}

/// Read and validate a ring from a polygon file
pub fn load_ring(path: &Path) -> Result<Ring, InputError> {
    let contents = std::fs::read_to_string(path)?;
    let ring = parse_ring(&contents)?;
    validate_ring(&ring)?;
    Ok(ring)
}

/// Normalize a mapping-library exterior into the crate's strict ring type
///
/// geo stores coordinates as x=longitude, y=latitude.
pub fn ring_from_line_string(line: &geo::LineString<f64>) -> Ring {
    line.coords().map(|c| GeoPoint::new(c.y, c.x)).collect()
}

pub fn ring_from_polygon(polygon: &geo::Polygon<f64>) -> Ring {
    ring_from_line_string(polygon.exterior())
}
