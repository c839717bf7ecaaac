//! Heights and ceilings
use strum_macros::EnumString;

use crate::{
    constants::LengthFactor,
    units::{convert, Linear},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Height units
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeightUnit {
    #[strum(serialize = "M")]
    Meters,
    #[default]
    #[strum(serialize = "FT")]
    Feet,
}

impl Linear for HeightUnit {
    fn factor(&self) -> f64 {
        match self {
            Self::Meters => LengthFactor::METER,
            Self::Feet => LengthFactor::FOOT,
        }
    }
}

/// Height value, above ground level
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Height {
    /// Height, if reported
    pub value: Option<u32>,
    /// Unit of `value`
    pub unit: HeightUnit,
}

impl Height {
    /// Builds a reported [Height]
    pub fn new(value: u32, unit: HeightUnit) -> Self {
        Self {
            value: Some(value),
            unit,
        }
    }
    /// Builds a [Height] in feet
    pub fn feet(value: u32) -> Self {
        Self::new(value, HeightUnit::Feet)
    }
    /// Returns this height expressed in given unit
    pub fn to_unit(&self, unit: HeightUnit) -> Option<f32> {
        let value = self.value?;
        Some(convert(value as f64, self.unit, unit) as f32)
    }
}

/// Cloud ceiling, either exact or variable
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ceiling {
    /// Exact ceiling height
    pub exact: Height,
    /// Lowest height of a variable ceiling
    pub minimum: Height,
    /// Highest height of a variable ceiling
    pub maximum: Height,
}

impl Ceiling {
    /// Returns true if no height is reported
    pub fn is_empty(&self) -> bool {
        self.exact.value.is_none() && self.minimum.value.is_none() && self.maximum.value.is_none()
    }
}
