pub mod measure;
pub mod point;
pub mod ring;

pub use measure::{AreaMeasurement, EdgeMeasurement};
pub use point::GeoPoint;
pub use ring::Ring;
