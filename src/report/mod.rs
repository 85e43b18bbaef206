use serde::Serialize;

use crate::domain::{AreaMeasurement, EdgeMeasurement, GeoPoint, Ring};
use crate::geodesy::{edge_lengths, ring_area};
use crate::units::{AreaUnit, UnitQuantity, convert_area, format_distance};

/// One ring edge, measured and ready for display
#[derive(Debug, Clone, Serialize)]
pub struct EdgeReport {
    pub from: usize,
    pub to: usize,
    pub meters: f64,
    /// Formatted label (km above 1000m, meters below)
    pub label: String,
    /// Where a map UI anchors the label
    pub midpoint: GeoPoint,
}

/// Full measurement of a parcel ring
///
/// Area is carried canonically in square meters; converted units are a
/// display convenience and always re-derivable.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementReport {
    pub vertex_count: usize,
    pub area_square_meters: f64,
    pub area: Vec<UnitQuantity>,
    pub edges: Vec<EdgeReport>,
}

/// Measure a ring: area plus every edge, with display labels
pub fn measure(ring: &Ring) -> MeasurementReport {
    let area = ring_area(ring);
    let edges = edge_lengths(ring);
    MeasurementReport {
        vertex_count: ring.len(),
        area_square_meters: area.square_meters,
        area: AreaUnit::ALL
            .into_iter()
            .map(|unit| convert_area(area, unit))
            .collect(),
        edges: edges.iter().map(|e| edge_report(ring, e)).collect(),
    }
}

fn edge_report(ring: &Ring, edge: &EdgeMeasurement) -> EdgeReport {
    let vertices = ring.vertices();
    EdgeReport {
        from: edge.from,
        to: edge.to,
        meters: edge.meters,
        label: format_distance(edge.meters),
        midpoint: vertices[edge.from].midpoint(&vertices[edge.to]),
    }
}

impl MeasurementReport {
    pub fn area_in(&self, unit: AreaUnit) -> UnitQuantity {
        convert_area(AreaMeasurement::new(self.area_square_meters), unit)
    }
}
