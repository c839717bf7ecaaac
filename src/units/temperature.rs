//! Temperature
use strum_macros::EnumString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Temperature units
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    #[default]
    #[strum(serialize = "C")]
    Celsius,
    #[strum(serialize = "F")]
    Fahrenheit,
}

/// Temperature value
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    /// Temperature, if reported
    pub value: Option<f32>,
    /// Unit of `value`
    pub unit: TemperatureUnit,
}

impl Temperature {
    /// Builds a reported [Temperature] in °C
    pub fn celsius(value: f32) -> Self {
        Self {
            value: Some(value),
            unit: TemperatureUnit::Celsius,
        }
    }
    /// Builds a reported [Temperature] in °F
    pub fn fahrenheit(value: f32) -> Self {
        Self {
            value: Some(value),
            unit: TemperatureUnit::Fahrenheit,
        }
    }
    /// Returns this temperature expressed in given unit
    pub fn to_unit(&self, unit: TemperatureUnit) -> Option<f32> {
        let value = self.value? as f64;
        let celsius = match self.unit {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        };
        let converted = match unit {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        };
        Some(converted as f32)
    }
    /// Returns true if this is the "M00" (slightly below zero) reading
    pub fn is_minus_zero(&self) -> bool {
        matches!(self.value, Some(v) if v == 0.0 && v.is_sign_negative())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn conversions() {
        let t = Temperature::celsius(100.0);
        assert_eq!(t.to_unit(TemperatureUnit::Fahrenheit), Some(212.0));
        let t = Temperature::fahrenheit(32.0);
        assert_eq!(t.to_unit(TemperatureUnit::Celsius), Some(0.0));
        let t = Temperature::celsius(-40.0);
        assert_eq!(t.to_unit(TemperatureUnit::Fahrenheit), Some(-40.0));
        assert_eq!(Temperature::default().to_unit(TemperatureUnit::Celsius), None);
    }
    #[test]
    fn round_trip() {
        for value in [-57, -12, 0, 7, 23, 45] {
            let t = Temperature::celsius(value as f32);
            let f = t.to_unit(TemperatureUnit::Fahrenheit).unwrap();
            let back = Temperature::fahrenheit(f.round())
                .to_unit(TemperatureUnit::Celsius)
                .unwrap();
            assert!((back - value as f32).abs() <= 1.0);
        }
    }
    #[test]
    fn minus_zero() {
        assert!(Temperature::celsius(-0.0).is_minus_zero());
        assert!(!Temperature::celsius(0.0).is_minus_zero());
        assert!(!Temperature::default().is_minus_zero());
    }
}
