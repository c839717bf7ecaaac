//! Distances and distance ranges
use strum_macros::EnumString;

use crate::{
    constants::LengthFactor,
    units::{convert, Linear},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance units
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceUnit {
    #[default]
    #[strum(serialize = "M")]
    Meters,
    #[strum(serialize = "SM")]
    StatuteMiles,
    #[strum(serialize = "NM")]
    NauticalMiles,
    #[strum(serialize = "FT")]
    Feet,
}

impl Linear for DistanceUnit {
    fn factor(&self) -> f64 {
        match self {
            Self::Meters => LengthFactor::METER,
            Self::StatuteMiles => LengthFactor::STATUTE_MILE,
            Self::NauticalMiles => LengthFactor::NAUTICAL_MILE,
            Self::Feet => LengthFactor::FOOT,
        }
    }
}

/// Distance modifier
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceModifier {
    /// Exact value
    #[default]
    None,
    /// Actual distance is below the value ("M" / "P" prefix)
    LessThan,
    /// Actual distance exceeds the value
    MoreThan,
}

/// Distance value
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    /// Distance, if reported
    pub value: Option<f32>,
    /// Unit of `value`
    pub unit: DistanceUnit,
    /// Possible modifier
    pub modifier: DistanceModifier,
}

impl Distance {
    /// Builds a reported, exact [Distance]
    pub fn new(value: f32, unit: DistanceUnit) -> Self {
        Self {
            value: Some(value),
            unit,
            modifier: DistanceModifier::None,
        }
    }
    /// Builds an exact [Distance] in meters
    pub fn meters(value: f32) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }
    /// Builds an exact [Distance] in statute miles
    pub fn miles(value: f32) -> Self {
        Self::new(value, DistanceUnit::StatuteMiles)
    }
    /// Copies and returns [Distance] with given modifier
    pub fn with_modifier(&self, modifier: DistanceModifier) -> Self {
        let mut s = *self;
        s.modifier = modifier;
        s
    }
    /// Returns this distance expressed in given unit
    pub fn to_unit(&self, unit: DistanceUnit) -> Option<f32> {
        let value = self.value?;
        Some(convert(value as f64, self.unit, unit) as f32)
    }
    /// Decomposes this distance into whole statute miles and sixteenths
    /// of a mile, rounded to the closest sixteenth.
    pub fn statute_miles(&self) -> Option<(u32, u32)> {
        let miles = self.to_unit(DistanceUnit::StatuteMiles)?;
        if miles < 0.0 {
            return None;
        }
        let sixteenths = (miles * 16.0).round() as u32;
        Some((sixteenths / 16, sixteenths % 16))
    }
}

/// Distance, either single valued or ranged
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceRange {
    /// Single valued distance
    pub prevailing: Distance,
    /// Lower bound of a ranged or variable distance
    pub minimum: Distance,
    /// Upper bound of a ranged or variable distance
    pub maximum: Distance,
}

impl DistanceRange {
    /// Builds a single valued [DistanceRange]
    pub fn prevailing(distance: Distance) -> Self {
        Self {
            prevailing: distance,
            ..Default::default()
        }
    }
    /// Builds a ranged [DistanceRange]
    pub fn ranged(minimum: Distance, maximum: Distance) -> Self {
        Self {
            minimum,
            maximum,
            ..Default::default()
        }
    }
    /// Returns true if no bound is reported
    pub fn is_empty(&self) -> bool {
        self.prevailing.value.is_none()
            && self.minimum.value.is_none()
            && self.maximum.value.is_none()
    }
}
