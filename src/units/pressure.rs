//! Atmospheric pressure
use strum_macros::EnumString;

use crate::{
    constants::PressureFactor,
    units::{convert, Linear},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pressure units
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureUnit {
    #[default]
    #[strum(serialize = "HPA")]
    Hectopascal,
    #[strum(serialize = "INHG")]
    InchesHg,
    #[strum(serialize = "MMHG")]
    MillimetersHg,
}

impl Linear for PressureUnit {
    fn factor(&self) -> f64 {
        match self {
            Self::Hectopascal => PressureFactor::HPA,
            Self::InchesHg => PressureFactor::INHG,
            Self::MillimetersHg => PressureFactor::MMHG,
        }
    }
}

/// Pressure value
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pressure {
    /// Pressure, if reported
    pub value: Option<f32>,
    /// Unit of `value`
    pub unit: PressureUnit,
}

impl Pressure {
    /// Builds a reported [Pressure]
    pub fn new(value: f32, unit: PressureUnit) -> Self {
        Self {
            value: Some(value),
            unit,
        }
    }
    /// Builds a [Pressure] in hPa
    pub fn hpa(value: f32) -> Self {
        Self::new(value, PressureUnit::Hectopascal)
    }
    /// Builds a [Pressure] in inHg
    pub fn inhg(value: f32) -> Self {
        Self::new(value, PressureUnit::InchesHg)
    }
    /// Returns this pressure expressed in given unit
    pub fn to_unit(&self, unit: PressureUnit) -> Option<f32> {
        let value = self.value?;
        Some(convert(value as f64, self.unit, unit) as f32)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn conversions() {
        let p = Pressure::inhg(29.92);
        let hpa = p.to_unit(PressureUnit::Hectopascal).unwrap();
        assert!((hpa - 1013.21).abs() < 1.0E-2);
        let p = Pressure::hpa(1013.25);
        let mmhg = p.to_unit(PressureUnit::MillimetersHg).unwrap();
        assert!((mmhg - 760.0).abs() < 1.0E-2);
        assert_eq!(Pressure::default().to_unit(PressureUnit::InchesHg), None);
    }
    #[test]
    fn round_trip() {
        let units = [
            PressureUnit::Hectopascal,
            PressureUnit::InchesHg,
            PressureUnit::MillimetersHg,
        ];
        for from in units {
            for to in units {
                let p = Pressure::new(1000.0, from);
                let there = p.to_unit(to).unwrap();
                let back = Pressure::new(there, to).to_unit(from).unwrap();
                assert!((back - 1000.0).abs() < 1.0E-2);
            }
        }
    }
}
