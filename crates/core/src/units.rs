//! Measurement-to-device-unit conversion.
//!
//! ZPL command parameters are integer print-head dots. Callers compose in
//! whichever unit suits them; fragment builders convert through the
//! document's measurement context at render time.

use serde::{Deserialize, Serialize};

/// Print-head resolution.
///
/// Zebra heads come in a small fixed set of densities; the dpi values are
/// the nominal ones the printers report (203 dpi is 8 dots/mm, not 8 × 25.4).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// 6 dots/mm (152 dpi).
    Dpmm6,
    /// 8 dots/mm (203 dpi) — the most common density.
    #[default]
    Dpmm8,
    /// 12 dots/mm (300 dpi).
    Dpmm12,
    /// 24 dots/mm (600 dpi).
    Dpmm24,
}

impl Resolution {
    /// Dots per millimeter.
    pub fn dpmm(self) -> f64 {
        match self {
            Resolution::Dpmm6 => 6.0,
            Resolution::Dpmm8 => 8.0,
            Resolution::Dpmm12 => 12.0,
            Resolution::Dpmm24 => 24.0,
        }
    }

    /// Nominal dots per inch.
    pub fn dpi(self) -> f64 {
        match self {
            Resolution::Dpmm6 => 152.0,
            Resolution::Dpmm8 => 203.0,
            Resolution::Dpmm12 => 300.0,
            Resolution::Dpmm24 => 600.0,
        }
    }
}

/// Unit in which caller-supplied positions and sizes are expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Device dots — passed through unscaled.
    #[default]
    Dots,
    /// Millimeters.
    Millimeters,
    /// Inches.
    Inches,
}

/// Convert a measurement to integer device dots, rounding to nearest.
pub fn to_dots(value: f64, resolution: Resolution, unit: Unit) -> i32 {
    let dots = match unit {
        Unit::Dots => value,
        Unit::Millimeters => value * resolution.dpmm(),
        Unit::Inches => value * resolution.dpi(),
    };
    dots.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_pass_through() {
        assert_eq!(to_dots(100.0, Resolution::Dpmm8, Unit::Dots), 100);
        assert_eq!(to_dots(100.4, Resolution::Dpmm24, Unit::Dots), 100);
    }

    #[test]
    fn millimeters_scale_by_density() {
        assert_eq!(to_dots(10.0, Resolution::Dpmm8, Unit::Millimeters), 80);
        assert_eq!(to_dots(10.0, Resolution::Dpmm12, Unit::Millimeters), 120);
        assert_eq!(to_dots(2.5, Resolution::Dpmm6, Unit::Millimeters), 15);
    }

    #[test]
    fn inches_use_nominal_dpi() {
        assert_eq!(to_dots(1.0, Resolution::Dpmm8, Unit::Inches), 203);
        assert_eq!(to_dots(0.5, Resolution::Dpmm24, Unit::Inches), 300);
    }

    #[test]
    fn rounds_to_nearest_dot() {
        // 0.3 mm at 8 dpmm is 2.4 dots.
        assert_eq!(to_dots(0.3, Resolution::Dpmm8, Unit::Millimeters), 2);
        // 0.33 mm at 8 dpmm is 2.64 dots.
        assert_eq!(to_dots(0.33, Resolution::Dpmm8, Unit::Millimeters), 3);
    }
}
