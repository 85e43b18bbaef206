use serde::Deserialize;

use super::InputError;
use crate::domain::{GeoPoint, Ring};

/// Minimal GeoJSON reader for the shapes the persistence layer emits
///
/// Accepted inputs:
/// - a GeoJSON `Polygon` geometry (outer ring only, holes ignored)
/// - a `Feature` or `FeatureCollection` wrapping one
/// - a bare JSON array of `{"lat": .., "lng": ..}` vertices, the shape
///   parcel records are stored in
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PolygonDocument {
    Vertices(Vec<GeoPoint>),
    GeoJson(GeoJsonNode),
}

#[derive(Debug, Deserialize)]
struct GeoJsonNode {
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    coordinates: Option<serde_json::Value>,
    #[serde(default)]
    geometry: Option<Box<GeoJsonNode>>,
    #[serde(default)]
    features: Option<Vec<GeoJsonNode>>,
}

/// Parse a ring from JSON text
pub fn parse_ring(contents: &str) -> Result<Ring, InputError> {
    match serde_json::from_str::<PolygonDocument>(contents)? {
        PolygonDocument::Vertices(points) => Ok(Ring::new(points)),
        PolygonDocument::GeoJson(node) => ring_from_geojson(node),
    }
}

fn ring_from_geojson(node: GeoJsonNode) -> Result<Ring, InputError> {
    match node.type_.as_str() {
        "Polygon" => {
            // Rings of [lon, lat] positions, outer ring first
            let rings: Vec<Vec<[f64; 2]>> = node
                .coordinates
                .map(serde_json::from_value)
                .transpose()?
                .ok_or(InputError::EmptyPolygon)?;
            let outer = rings.into_iter().next().ok_or(InputError::EmptyPolygon)?;
            Ok(outer
                .into_iter()
                .map(|[lon, lat]| GeoPoint::new(lat, lon))
                .collect())
        }
        "Feature" => {
            let geometry = node.geometry.ok_or(InputError::EmptyPolygon)?;
            ring_from_geojson(*geometry)
        }
        "FeatureCollection" => {
            let first = node
                .features
                .and_then(|f| f.into_iter().next())
                .ok_or(InputError::EmptyPolygon)?;
            ring_from_geojson(first)
        }
        other => Err(InputError::UnsupportedGeometry(other.to_string())),
    }
}
