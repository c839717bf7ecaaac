//! Wind, visibility, sky and weather: the snapshot shared by current
//! observations, prevailing forecast and every trend.
use crate::units::{DistanceRange, Height, Pressure, Speed};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overall sky condition
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SkyCondition {
    /// Not set
    #[default]
    Unknown,
    /// Cloud layers are described in [Essentials::cloud_layers]
    Clouds,
    /// NSC: no significant clouds
    NoSignificantClouds,
    /// NCD: no clouds detected by automated station
    NoCloudsDetected,
    /// CLR: no clouds below 12000 ft, automated station
    ClearAutomated,
    /// SKC: sky clear, manual station
    ClearManual,
    /// Sky obscured, see [Essentials::vertical_visibility]
    Obscured,
    /// CAVOK
    Cavok,
}

/// Cloud cover
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudAmount {
    #[default]
    NotReported,
    /// FEW: 1 to 2 oktas
    Few,
    /// SCT: 3 to 4 oktas
    Scattered,
    /// BKN: 5 to 7 oktas
    Broken,
    /// OVC: 8 oktas
    Overcast,
}

/// Convective type of a cloud layer
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudDetails {
    /// "///" suffix
    #[default]
    NotReported,
    /// No convective type
    None,
    Cumulonimbus,
    ToweringCumulus,
}

/// One cloud layer
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudLayer {
    pub amount: CloudAmount,
    /// Height of cloud base
    pub height: Height,
    pub details: CloudDetails,
}

/// Type of precipitation
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecipitationKind {
    Drizzle,
    Rain,
    Snow,
    SnowGrains,
    IceCrystals,
    IcePellets,
    Hail,
    SmallHail,
    Undetermined,
}

/// Classified weather phenomena
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phenomena {
    NotReported,
    Mist,
    Fog,
    FogShallow,
    FogPartial,
    FogPatches,
    FogFreezing,
    Smoke,
    VolcanicAsh,
    Dust,
    DustDrifting,
    DustBlowing,
    Sand,
    SandDrifting,
    SandBlowing,
    SnowDrifting,
    SnowBlowing,
    SprayBlowing,
    Haze,
    DustWhirls,
    Squalls,
    FunnelCloud,
    Tornado,
    Duststorm,
    DuststormHeavy,
    Sandstorm,
    SandstormHeavy,
    DuststormSandstorm,
    DuststormSandstormHeavy,
    Thunderstorm,
    PrecipitationLight,
    Precipitation,
    PrecipitationHeavy,
    PrecipitationFreezingLight,
    PrecipitationFreezing,
    PrecipitationFreezingHeavy,
    PrecipitationShowersLight,
    PrecipitationShowers,
    PrecipitationShowersHeavy,
    ThunderstormPrecipitationLight,
    ThunderstormPrecipitation,
    ThunderstormPrecipitationHeavy,
}

impl Phenomena {
    /// Returns true if this entry describes precipitation, in which case
    /// [Weather::precipitation] lists the precipitation types
    pub fn is_precipitation(&self) -> bool {
        matches!(
            self,
            Self::PrecipitationLight
                | Self::Precipitation
                | Self::PrecipitationHeavy
                | Self::PrecipitationFreezingLight
                | Self::PrecipitationFreezing
                | Self::PrecipitationFreezingHeavy
                | Self::PrecipitationShowersLight
                | Self::PrecipitationShowers
                | Self::PrecipitationShowersHeavy
                | Self::ThunderstormPrecipitationLight
                | Self::ThunderstormPrecipitation
                | Self::ThunderstormPrecipitationHeavy
        )
    }
}

/// One weather entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weather {
    pub phenomena: Phenomena,
    /// Precipitation types, in order of appearance
    pub precipitation: Vec<PrecipitationKind>,
}

impl Weather {
    /// Builds a [Weather] entry without precipitation
    pub fn new(phenomena: Phenomena) -> Self {
        Self {
            phenomena,
            precipitation: Vec::new(),
        }
    }
    /// Builds a [Weather] entry with given precipitation
    pub fn with_precipitation(phenomena: Phenomena, precipitation: &[PrecipitationKind]) -> Self {
        Self {
            phenomena,
            precipitation: precipitation.to_vec(),
        }
    }
}

/// Wind shear at given height (WS020/27045KT)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindShear {
    pub height: Height,
    pub direction_degrees: Option<u32>,
    pub speed: Speed,
}

/// Wind, visibility, sky condition and weather
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Essentials {
    /// Mean wind direction, from where the wind blows
    pub wind_direction_degrees: Option<u32>,
    /// VRB wind
    pub wind_direction_variable: bool,
    /// Variable sector, clockwise from
    pub wind_direction_var_from_degrees: Option<u32>,
    /// Variable sector, clockwise to
    pub wind_direction_var_to_degrees: Option<u32>,
    pub wind_speed: Speed,
    pub gust_speed: Speed,
    /// 00000KT
    pub wind_calm: bool,
    /// Prevailing visibility
    pub visibility: DistanceRange,
    pub cavok: bool,
    pub sky_condition: SkyCondition,
    /// Cloud layers, in order of appearance
    pub cloud_layers: Vec<CloudLayer>,
    /// Vertical visibility in an obscured sky
    pub vertical_visibility: Height,
    /// Weather phenomena, in order of appearance
    pub weather: Vec<Weather>,
    /// NSW: no significant weather
    pub no_significant_weather: bool,
    /// QNH
    pub sea_level_pressure: Pressure,
    pub wind_shear: Vec<WindShear>,
}

impl Essentials {
    /// Returns true if nothing was ever set in this block
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn empty() {
        let mut essentials = Essentials::default();
        assert!(essentials.is_empty());
        essentials.wind_calm = true;
        assert!(!essentials.is_empty());
    }
    #[test]
    fn precipitation_phenomena() {
        assert!(Phenomena::ThunderstormPrecipitation.is_precipitation());
        assert!(!Phenomena::Thunderstorm.is_precipitation());
        assert!(!Phenomena::FogFreezing.is_precipitation());
    }
}
