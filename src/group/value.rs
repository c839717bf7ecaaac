//! Values as produced by the report parser.
//!
//! These differ from [crate::units] in that they may describe qualitative
//! values ("in the vicinity", "overhead", sea state codes) that the
//! conversion adapter resolves into unit-typed quantities.
use crate::units::{Cardinal, DistanceModifier, DistanceUnit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reported distance
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Distance {
    #[default]
    NotReported,
    /// Integer part and fraction (numerator, denominator) e.g. "1 1/2SM"
    Value {
        integer: Option<u32>,
        fraction: Option<(u32, u32)>,
        unit: DistanceUnit,
        modifier: DistanceModifier,
    },
    /// VC: 5 to 10 nautical miles
    Vicinity,
    /// DSNT: 10 to 30 nautical miles
    Distant,
}

impl Distance {
    /// Builds a distance in meters
    pub fn meters(value: u32) -> Self {
        Self::Value {
            integer: Some(value),
            fraction: None,
            unit: DistanceUnit::Meters,
            modifier: DistanceModifier::None,
        }
    }
    /// Builds a distance in statute miles, with optional fraction
    pub fn miles(integer: Option<u32>, fraction: Option<(u32, u32)>) -> Self {
        Self::Value {
            integer,
            fraction,
            unit: DistanceUnit::StatuteMiles,
            modifier: DistanceModifier::None,
        }
    }
    /// Copies and returns [Distance] with given modifier.
    /// Has no effect on qualitative distances.
    pub fn with_modifier(&self, modifier: DistanceModifier) -> Self {
        let mut s = *self;
        if let Self::Value { modifier: m, .. } = &mut s {
            *m = modifier;
        }
        s
    }
}

/// Reported direction
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    #[default]
    NotReported,
    /// Degrees, true north
    Degrees(u32),
    Cardinal(Cardinal),
    /// VRB
    Variable,
    /// OHD
    Overhead,
    /// ALQDS
    AllQuadrants,
}

/// Reported temperature
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    /// °C. "M00" is reported as -0.0
    pub value: Option<f32>,
    /// Reported to a tenth of degree (remark T group)
    pub precise: bool,
}

impl Temperature {
    /// Whole degree reading
    pub fn new(value: i32) -> Self {
        Self {
            value: Some(value as f32),
            precise: false,
        }
    }
    /// "M00": below zero, rounds to zero
    pub fn minus_zero() -> Self {
        Self {
            value: Some(-0.0),
            precise: false,
        }
    }
    /// Tenth of degree reading
    pub fn precise(value: f32) -> Self {
        Self {
            value: Some(value),
            precise: true,
        }
    }
}

/// Reported wave height
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaveHeight {
    #[default]
    NotReported,
    /// Hxxx: exact height, in decimeters
    Decimeters(u32),
    /// Sx: state of sea surface, WMO code table 3700
    StateCode(u8),
}
