use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// An ordered, implicitly closed sequence of vertices
///
/// The last vertex connects back to the first; no closing duplicate is
/// required. Callers may still pass an explicitly closed ring (first vertex
/// repeated at the end) and measurements will agree with the open form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring(Vec<GeoPoint>);

impl Ring {
    pub fn new(vertices: Vec<GeoPoint>) -> Self {
        Self(vertices)
    }

    /// Vertices exactly as supplied, closing duplicate included if present
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the last vertex repeats the first
    pub fn is_explicitly_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) if self.0.len() > 1 => {
                (first.lat - last.lat).abs() < 1e-9 && (first.lon - last.lon).abs() < 1e-9
            }
            _ => false,
        }
    }

    /// Vertices with a trailing closing duplicate trimmed off
    ///
    /// Canonical form for area computation: the shoelace wrap supplies the
    /// closing edge, so a repeated first vertex would otherwise be
    /// double-counted.
    pub fn open_vertices(&self) -> &[GeoPoint] {
        if self.is_explicitly_closed() {
            &self.0[..self.0.len() - 1]
        } else {
            &self.0
        }
    }

    /// A ring needs at least 3 open vertices to enclose area
    pub fn is_measurable(&self) -> bool {
        self.open_vertices().len() >= 3
    }
}

impl From<Vec<(f64, f64)>> for Ring {
    /// (lat, lon) tuple order
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self(points.into_iter().map(GeoPoint::from).collect())
    }
}

impl FromIterator<GeoPoint> for Ring {
    fn from_iter<T: IntoIterator<Item = GeoPoint>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ring_not_closed() {
        let ring = Ring::from(vec![(12.0, 77.0), (12.0, 77.1), (12.1, 77.1)]);
        assert!(!ring.is_explicitly_closed());
        assert_eq!(ring.open_vertices().len(), 3);
        assert!(ring.is_measurable());
    }

    #[test]
    fn test_closed_ring_trims_duplicate() {
        let ring = Ring::from(vec![(12.0, 77.0), (12.0, 77.1), (12.1, 77.1), (12.0, 77.0)]);
        assert!(ring.is_explicitly_closed());
        assert_eq!(ring.open_vertices().len(), 3);
    }

    #[test]
    fn test_degenerate_rings_not_measurable() {
        assert!(!Ring::default().is_measurable());
        assert!(!Ring::from(vec![(12.0, 77.0)]).is_measurable());
        assert!(!Ring::from(vec![(12.0, 77.0), (12.1, 77.1)]).is_measurable());
    }

    #[test]
    fn test_single_vertex_is_not_closed() {
        let ring = Ring::from(vec![(12.0, 77.0)]);
        assert!(!ring.is_explicitly_closed());
        assert_eq!(ring.open_vertices().len(), 1);
    }

    #[test]
    fn test_serde_transparent() {
        let ring = Ring::from(vec![(12.0, 77.0), (12.0, 77.1), (12.1, 77.1)]);
        let json = serde_json::to_string(&ring).unwrap();
        let back: Ring = serde_json::from_str(&json).unwrap();
        assert_eq!(ring, back);
    }
}
