use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::AreaMeasurement;

/// Display units for parcel area
///
/// Ground and Cent are customary Indian land units (Tamil Nadu and Kerala
/// respectively). Square meters is the canonical unit everything converts
/// from; no other unit is ever stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum AreaUnit {
    #[value(name = "m2")]
    #[serde(rename = "m2")]
    SquareMeter,
    #[value(name = "ha")]
    #[serde(rename = "ha")]
    Hectare,
    #[value(name = "sqft")]
    #[serde(rename = "sqft")]
    SquareFoot,
    #[value(name = "acre")]
    #[serde(rename = "acre")]
    Acre,
    #[value(name = "ground")]
    #[serde(rename = "ground")]
    Ground,
    #[value(name = "cent")]
    #[serde(rename = "cent")]
    Cent,
}

impl AreaUnit {
    pub fn label(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::Hectare => "HA",
            AreaUnit::SquareFoot => "FT²",
            AreaUnit::Acre => "Acre",
            AreaUnit::Ground => "Ground",
            AreaUnit::Cent => "Cent",
        }
    }

    pub const ALL: [AreaUnit; 6] = [
        AreaUnit::SquareMeter,
        AreaUnit::Hectare,
        AreaUnit::SquareFoot,
        AreaUnit::Acre,
        AreaUnit::Ground,
        AreaUnit::Cent,
    ];
}

/// An area expressed in a display unit
///
/// Pure scalar conversion of the canonical square-meter value; carries no
/// independent state and no rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitQuantity {
    pub value: f64,
    pub unit: AreaUnit,
}

/// Convert a canonical square-meter area into a display unit
pub fn convert_area(area: AreaMeasurement, unit: AreaUnit) -> UnitQuantity {
    let value = match unit {
        AreaUnit::SquareMeter => area.square_meters,
        AreaUnit::Hectare => area.square_meters / 10_000.0,
        AreaUnit::SquareFoot => area.square_meters * 10.7639,
        AreaUnit::Acre => area.square_meters / 4_046.86,
        AreaUnit::Ground => area.square_meters / 222.97,
        AreaUnit::Cent => area.square_meters / 40.47,
    };
    UnitQuantity { value, unit }
}

impl fmt::Display for UnitQuantity {
    /// Display-time rounding conventions, per unit
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            AreaUnit::SquareMeter => write!(f, "{:.1} {}", self.value, self.unit.label()),
            AreaUnit::Hectare => write!(f, "{:.4} {}", self.value, self.unit.label()),
            AreaUnit::SquareFoot => {
                write!(f, "{} {}", group_thousands(self.value.round() as i64), self.unit.label())
            }
            AreaUnit::Acre => write!(f, "{:.3} {}", self.value, self.unit.label()),
            AreaUnit::Ground => write!(f, "{:.2} {}", self.value, self.unit.label()),
            AreaUnit::Cent => write!(f, "{:.1} {}", self.value, self.unit.label()),
        }
    }
}

/// Format an edge length for display: km with 2 decimals from 1000m up,
/// meters with 1 decimal below
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.2} km", meters / 1000.0)
    } else {
        format!("{:.1} m", meters)
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hectare_round_trip() {
        let area = AreaMeasurement::new(20234.3);
        let ha = convert_area(area, AreaUnit::Hectare);
        assert!((ha.value * 10_000.0 - area.square_meters).abs() < 1e-9);
    }

    #[test]
    fn test_all_units_round_trip() {
        let area = AreaMeasurement::new(12_345.6);
        for unit in AreaUnit::ALL {
            let q = convert_area(area, unit);
            let back = match unit {
                AreaUnit::SquareMeter => q.value,
                AreaUnit::Hectare => q.value * 10_000.0,
                AreaUnit::SquareFoot => q.value / 10.7639,
                AreaUnit::Acre => q.value * 4_046.86,
                AreaUnit::Ground => q.value * 222.97,
                AreaUnit::Cent => q.value * 40.47,
            };
            assert!(
                (back - area.square_meters).abs() < 1e-6,
                "{:?} round trip gave {}",
                unit,
                back
            );
        }
    }

    #[test]
    fn test_known_conversions() {
        let area = AreaMeasurement::new(20234.3);
        assert!((convert_area(area, AreaUnit::Hectare).value - 2.02343).abs() < 1e-9);
        assert!((convert_area(area, AreaUnit::Acre).value - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_conventions() {
        let area = AreaMeasurement::new(20234.3);
        assert_eq!(convert_area(area, AreaUnit::Hectare).to_string(), "2.0234 HA");
        assert_eq!(convert_area(area, AreaUnit::Acre).to_string(), "5.000 Acre");
        assert_eq!(convert_area(area, AreaUnit::Ground).to_string(), "90.75 Ground");
    }

    #[test]
    fn test_square_foot_display_groups_thousands() {
        let area = AreaMeasurement::new(10_000.0);
        // 10000 * 10.7639 = 107639
        assert_eq!(convert_area(area, AreaUnit::SquareFoot).to_string(), "107,639 FT²");
    }

    #[test]
    fn test_format_distance_meters() {
        assert_eq!(format_distance(111.32), "111.3 m");
        assert_eq!(format_distance(999.94), "999.9 m");
    }

    #[test]
    fn test_format_distance_kilometers() {
        assert_eq!(format_distance(1000.0), "1.00 km");
        assert_eq!(format_distance(1234.5), "1.23 km");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
