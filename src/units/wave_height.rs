//! Wave height and state of sea surface
use strum_macros::EnumString;

use crate::{
    constants::WaveHeightFactor,
    units::{convert, Linear},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wave height units
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaveHeightUnit {
    #[default]
    #[strum(serialize = "M")]
    Meters,
    #[strum(serialize = "FT")]
    Feet,
}

impl Linear for WaveHeightUnit {
    fn factor(&self) -> f64 {
        match self {
            Self::Meters => WaveHeightFactor::METER,
            Self::Feet => WaveHeightFactor::FOOT,
        }
    }
}

/// Descriptive state of the sea surface (WMO code table 3700)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StateOfSurface {
    #[default]
    NotSpecified,
    CalmGlassy,
    CalmRippled,
    Smooth,
    Slight,
    Moderate,
    Rough,
    VeryRough,
    High,
    VeryHigh,
    Phenomenal,
}

/// Wave height value
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaveHeight {
    /// Wave height, if reported
    pub value: Option<f32>,
    /// Unit of `value`
    pub unit: WaveHeightUnit,
}

impl WaveHeight {
    /// Builds a [WaveHeight] in meters
    pub fn meters(value: f32) -> Self {
        Self {
            value: Some(value),
            unit: WaveHeightUnit::Meters,
        }
    }
    /// Returns this wave height expressed in given unit
    pub fn to_unit(&self, unit: WaveHeightUnit) -> Option<f32> {
        let value = self.value?;
        Some(convert(value as f64, self.unit, unit) as f32)
    }
    /// Wave height in whole decimeters
    fn decimeters(&self) -> Option<i32> {
        let value = self.value? as f64;
        Some((value * self.unit.factor()).round() as i32)
    }
    /// Returns the [StateOfSurface] matching this wave height
    pub fn state_of_surface(&self) -> StateOfSurface {
        let dm = match self.decimeters() {
            Some(dm) => dm,
            None => return StateOfSurface::NotSpecified,
        };
        match dm {
            dm if dm < 0 => StateOfSurface::NotSpecified,
            0 => StateOfSurface::CalmGlassy,
            1 => StateOfSurface::CalmRippled,
            2..=5 => StateOfSurface::Smooth,
            6..=12 => StateOfSurface::Slight,
            13..=25 => StateOfSurface::Moderate,
            26..=40 => StateOfSurface::Rough,
            41..=60 => StateOfSurface::VeryRough,
            61..=90 => StateOfSurface::High,
            91..=140 => StateOfSurface::VeryHigh,
            _ => StateOfSurface::Phenomenal,
        }
    }
}
