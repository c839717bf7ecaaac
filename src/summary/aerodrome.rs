//! Aerodrome: runways, directions, ceiling and colour code
use strum_macros::EnumString;

use crate::units::{Cardinal, Ceiling, DistanceRange, Precipitation, Runway};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Military colour code
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColourCode {
    #[default]
    #[strum(disabled)]
    NotSpecified,
    #[strum(serialize = "BLU")]
    Blue,
    #[strum(serialize = "WHT")]
    White,
    #[strum(serialize = "GRN")]
    Green,
    #[strum(serialize = "YLO1")]
    Yellow1,
    #[strum(serialize = "YLO2")]
    Yellow2,
    #[strum(serialize = "AMB")]
    Amber,
    #[strum(serialize = "RED")]
    Red,
}

/// Runway visual range tendency
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RvrTrend {
    /// No RVR reported for this runway
    #[default]
    Unset,
    /// RVR reported without tendency
    NotReported,
    Upward,
    Neutral,
    Downward,
}

/// Runway deposits, WMO code table 0919
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Deposits {
    ClearAndDry = 0,
    Damp = 1,
    WetAndWaterPatches = 2,
    RimeAndFrostCovered = 3,
    DrySnow = 4,
    WetSnow = 5,
    Slush = 6,
    Ice = 7,
    CompactedOrRolledSnow = 8,
    FrozenRutsOrRidges = 9,
    #[default]
    NotReported = 10,
}

/// Extent of runway contamination, WMO code table 0519
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContaminationExtent {
    /// 0: no contamination
    None,
    /// 1: 10% or less
    LessThan11Percent,
    /// 2: 11% to 25%
    From11To25Percent,
    /// 5: 26% to 50%
    From26To50Percent,
    /// 9: 51% to 100%
    MoreThan50Percent,
    /// Code not listed in the table
    Reserved,
    #[default]
    NotReported,
}

/// Braking action, WMO code table 0366 (codes 91 to 95)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BrakingAction {
    #[default]
    None,
    Poor,
    MediumPoor,
    Medium,
    MediumGood,
    Good,
}

/// Data reported for a single runway
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayData {
    pub runway: Runway,
    /// Runway visual range
    pub visual_range: DistanceRange,
    /// RVR tendency: `Unset` until an RVR is reported
    pub visual_range_trend: RvrTrend,
    pub deposits: Deposits,
    pub contamination_extent: ContaminationExtent,
    pub deposit_depth: Precipitation,
    /// Friction coefficient (0.0 to 1.0)
    pub friction_coefficient: Option<f32>,
    pub braking_action: BrakingAction,
    /// Friction measurement unreliable or impossible
    pub friction_unreliable: bool,
    /// Runway closed due to snow
    pub snoclo: bool,
    /// Runway not operational
    pub not_operational: bool,
    /// Ceiling measured at this runway
    pub ceiling: Ceiling,
    /// Visibility measured at this runway
    pub visibility: DistanceRange,
    /// Wind shear in lower layers at this runway
    pub wind_shear_lower_layers: bool,
}

impl RunwayData {
    pub fn new(runway: Runway) -> Self {
        Self {
            runway,
            ..Default::default()
        }
    }
    /// Returns true if any surface state field was reported
    pub fn has_state(&self) -> bool {
        self.deposits != Deposits::NotReported
            || self.contamination_extent != ContaminationExtent::NotReported
            || self.deposit_depth.value.is_some()
            || self.friction_coefficient.is_some()
            || self.braking_action != BrakingAction::None
            || self.friction_unreliable
    }
}

/// Data reported toward a single direction
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectionData {
    pub direction: Cardinal,
    pub ceiling: Ceiling,
    pub visibility: DistanceRange,
}

impl DirectionData {
    pub fn new(direction: Cardinal) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }
}

/// Aerodrome wide data
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aerodrome {
    /// Runways, in order of first mention
    pub runways: Vec<RunwayData>,
    /// Directions, in order of first mention
    pub directions: Vec<DirectionData>,
    /// Aerodrome ceiling
    pub ceiling: Ceiling,
    pub colour_code: ColourCode,
    /// BLACK: aerodrome closed for reasons other than cloud or visibility
    pub colour_code_black: bool,
    /// Aerodrome closed due to snow
    pub snoclo: bool,
    /// WS ALL RWY
    pub wind_shear_all_runways: bool,
}

impl Aerodrome {
    /// Returns data for given runway, if it was mentioned
    pub fn runway(&self, runway: Runway) -> Option<&RunwayData> {
        self.runways.iter().find(|r| r.runway == runway)
    }
    /// Returns data for given direction, if it was mentioned
    pub fn direction(&self, direction: Cardinal) -> Option<&DirectionData> {
        self.directions.iter().find(|d| d.direction == direction)
    }
    /// Looks up given runway, creating it if needed
    pub(crate) fn runway_mut(&mut self, runway: Runway) -> &mut RunwayData {
        let index = match self.runways.iter().position(|r| r.runway == runway) {
            Some(index) => index,
            None => {
                self.runways.push(RunwayData::new(runway));
                self.runways.len() - 1
            },
        };
        &mut self.runways[index]
    }
    /// Looks up given direction, creating it if needed
    pub(crate) fn direction_mut(&mut self, direction: Cardinal) -> &mut DirectionData {
        let index = match self.directions.iter().position(|d| d.direction == direction) {
            Some(index) => index,
            None => {
                self.directions.push(DirectionData::new(direction));
                self.directions.len() - 1
            },
        };
        &mut self.directions[index]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::units::Designator;
    use num_traits::FromPrimitive;
    use std::str::FromStr;
    #[test]
    fn lookup_or_create() {
        let mut aerodrome = Aerodrome::default();
        let r27 = Runway::new(27, Designator::Left);
        aerodrome.runway_mut(r27).snoclo = true;
        aerodrome.runway_mut(Runway::new(9, Designator::None));
        aerodrome.runway_mut(r27).not_operational = true;
        assert_eq!(aerodrome.runways.len(), 2);
        let data = aerodrome.runway(r27).unwrap();
        assert!(data.snoclo && data.not_operational);

        aerodrome.direction_mut(Cardinal::NE);
        aerodrome.direction_mut(Cardinal::NE);
        assert_eq!(aerodrome.directions.len(), 1);
        assert!(aerodrome.direction(Cardinal::S).is_none());
    }
    #[test]
    fn codes() {
        assert_eq!(ColourCode::from_str("AMB"), Ok(ColourCode::Amber));
        assert_eq!(ColourCode::from_str("YLO2"), Ok(ColourCode::Yellow2));
        assert!(ColourCode::from_str("BLACK").is_err());
        assert_eq!(Deposits::from_u8(5), Some(Deposits::WetSnow));
        assert_eq!(Deposits::from_u8(11), None);
    }
    #[test]
    fn runway_state() {
        let mut data = RunwayData::new(Runway::new(27, Designator::None));
        assert!(!data.has_state());
        data.friction_unreliable = true;
        assert!(data.has_state());
    }
}
