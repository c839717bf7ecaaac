//! Precipitation amounts and deposit depths
use strum_macros::EnumString;

use crate::{
    constants::PrecipitationFactor,
    units::{convert, Linear},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precipitation units
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecipitationUnit {
    #[default]
    #[strum(serialize = "MM")]
    Millimeters,
    #[strum(serialize = "IN")]
    Inches,
}

impl Linear for PrecipitationUnit {
    fn factor(&self) -> f64 {
        match self {
            Self::Millimeters => PrecipitationFactor::MM,
            Self::Inches => PrecipitationFactor::INCH,
        }
    }
}

/// Precipitation amount, or depth of a deposit
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Precipitation {
    /// Amount, if reported
    pub value: Option<f32>,
    /// Unit of `value`
    pub unit: PrecipitationUnit,
}

impl Precipitation {
    /// Builds a reported [Precipitation]
    pub fn new(value: f32, unit: PrecipitationUnit) -> Self {
        Self {
            value: Some(value),
            unit,
        }
    }
    /// Builds a [Precipitation] in mm
    pub fn mm(value: f32) -> Self {
        Self::new(value, PrecipitationUnit::Millimeters)
    }
    /// Builds a [Precipitation] in inches
    pub fn inches(value: f32) -> Self {
        Self::new(value, PrecipitationUnit::Inches)
    }
    /// Returns this amount expressed in given unit
    pub fn to_unit(&self, unit: PrecipitationUnit) -> Option<f32> {
        let value = self.value?;
        Some(convert(value as f64, self.unit, unit) as f32)
    }
}
