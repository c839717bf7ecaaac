//! Wind speed
use strum_macros::EnumString;

use crate::{
    constants::SpeedFactor,
    units::{convert, Linear},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Speed units
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedUnit {
    #[default]
    #[strum(serialize = "KT")]
    Knots,
    #[strum(serialize = "MPS")]
    MetersPerSecond,
    #[strum(serialize = "KMH")]
    KilometersPerHour,
    #[strum(serialize = "MPH")]
    MilesPerHour,
}

impl Linear for SpeedUnit {
    fn factor(&self) -> f64 {
        match self {
            Self::Knots => SpeedFactor::KNOT,
            Self::MetersPerSecond => SpeedFactor::MPS,
            Self::KilometersPerHour => SpeedFactor::KMH,
            Self::MilesPerHour => SpeedFactor::MPH,
        }
    }
}

/// Speed value
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Speed {
    /// Speed, if reported
    pub value: Option<u32>,
    /// Unit of `value`
    pub unit: SpeedUnit,
}

impl Speed {
    /// Builds a reported [Speed]
    pub fn new(value: u32, unit: SpeedUnit) -> Self {
        Self {
            value: Some(value),
            unit,
        }
    }
    /// Builds a [Speed] in knots
    pub fn knots(value: u32) -> Self {
        Self::new(value, SpeedUnit::Knots)
    }
    /// Returns this speed expressed in given unit
    pub fn to_unit(&self, unit: SpeedUnit) -> Option<f32> {
        let value = self.value?;
        Some(convert(value as f64, self.unit, unit) as f32)
    }
}
