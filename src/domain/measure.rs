use serde::{Deserialize, Serialize};

/// Area derived from a ring, canonical square meters
///
/// Always recomputed from the ring it came from; persisted copies are a
/// display cache, never a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaMeasurement {
    pub square_meters: f64,
}

impl AreaMeasurement {
    pub const ZERO: AreaMeasurement = AreaMeasurement { square_meters: 0.0 };

    pub fn new(square_meters: f64) -> Self {
        Self { square_meters }
    }
}

/// Ground distance of one ring edge
///
/// `from` and `to` are vertex indices into the ring as supplied; the last
/// edge wraps back to index 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeMeasurement {
    pub from: usize,
    pub to: usize,
    pub meters: f64,
}
