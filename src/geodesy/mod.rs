pub mod area;
pub mod distance;

pub use area::ring_area;
pub use distance::{edge_lengths, haversine_distance};
