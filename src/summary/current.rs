//! Current observations, specific to METAR / SPECI
use strum_macros::EnumString;

use crate::{
    summary::Essentials,
    units::{Cardinal, DistanceRange, Height, Precipitation, Pressure, Temperature, WaveHeight},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cloud genus, as reported in cloud type remarks (CB1TCU2SC3)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudGenus {
    #[strum(serialize = "CB")]
    Cumulonimbus,
    #[strum(serialize = "TCU")]
    ToweringCumulus,
    #[strum(serialize = "CU")]
    Cumulus,
    #[strum(serialize = "CF")]
    Cumulofractus,
    #[strum(serialize = "SC")]
    Stratocumulus,
    #[strum(serialize = "NS")]
    Nimbostratus,
    #[strum(serialize = "ST")]
    Stratus,
    #[strum(serialize = "SF")]
    Stratofractus,
    #[strum(serialize = "AS")]
    Altostratus,
    #[strum(serialize = "AC")]
    Altocumulus,
    #[strum(serialize = "ACC")]
    AltocumulusCastellanus,
    #[strum(serialize = "CI")]
    Cirrus,
    #[strum(serialize = "CS")]
    Cirrostratus,
    #[strum(serialize = "CC")]
    Cirrocumulus,
}

/// One cloud type entry
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudType {
    pub genus: CloudGenus,
    /// Sky coverage, in oktas
    pub okta: u32,
    /// Cloud base, if reported
    pub height: Height,
}

/// Low cloud layer, WMO code table 0513 (CL)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LowCloudLayer {
    NoClouds = 0,
    CuHumilisFractus = 1,
    CuMediocrisCongestus = 2,
    CbCalvus = 3,
    ScCumulogenitus = 4,
    ScNonCumulogenitus = 5,
    StNebulosusFractus = 6,
    StFractusCuFractusPannus = 7,
    CuScNonCumulogenitus = 8,
    CbCapillatus = 9,
    /// Layer not observable
    NotObservable = 10,
    #[default]
    Unknown = 11,
}

/// Mid cloud layer, WMO code table 0515 (CM)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MidCloudLayer {
    NoClouds = 0,
    AsTranslucidus = 1,
    AsOpacusOrNs = 2,
    AcTranslucidus = 3,
    AcTranslucidusPatches = 4,
    AcTranslucidusBands = 5,
    AcCumulogenitus = 6,
    AcTranslucidusOpacus = 7,
    AcCastellanusFloccus = 8,
    AcChaoticSky = 9,
    NotObservable = 10,
    #[default]
    Unknown = 11,
}

/// High cloud layer, WMO code table 0509 (CH)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HighCloudLayer {
    NoClouds = 0,
    CiFibratusUncinus = 1,
    CiSpissatus = 2,
    CiSpissatusCumulonimbogenitus = 3,
    CiUncinusSpreading = 4,
    CiCsBelow45Degrees = 5,
    CiCsAbove45Degrees = 6,
    CsEntireSky = 7,
    CsPartialSky = 8,
    Cc = 9,
    NotObservable = 10,
    #[default]
    Unknown = 11,
}

/// Lightning frequency
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LightningFrequency {
    #[default]
    None,
    /// OCNL: less than 1 flash per minute
    Occasional,
    /// FRQ: 1 to 6 flashes per minute
    Frequent,
    /// CONS: more than 6 flashes per minute
    Constant,
}

/// Lightning type
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LightningKind {
    /// IC
    InCloud,
    /// CC
    CloudToCloud,
    /// CG
    CloudToGround,
    /// CA
    CloudToAir,
    /// Type not recognised
    Unknown,
}

/// Lightning observation
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lightning {
    pub frequency: LightningFrequency,
    /// Lightning types, in order of appearance
    pub kinds: Vec<LightningKind>,
    pub distance: DistanceRange,
    /// Directions, in order of appearance
    pub directions: Vec<Cardinal>,
}

/// Phenomena observed in the vicinity of the aerodrome
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObservedPhenomena {
    Thunderstorm,
    Cumulonimbus,
    CumulonimbusMammatus,
    ToweringCumulus,
    AltocumulusCastellanus,
    StratocumulusStandingLenticular,
    AltocumulusStandingLenticular,
    CirrocumulusStandingLenticular,
    Rotor,
    Virga,
    PrecipitationInVicinity,
    Fog,
    FogShallow,
    FogPatches,
    Haze,
    Smoke,
    VolcanicAsh,
    BlowingSnow,
    BlowingSand,
    BlowingDust,
    Duststorm,
    Sandstorm,
    DustWhirls,
    FunnelCloud,
}

/// One phenomena in vicinity
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vicinity {
    pub phenomena: ObservedPhenomena,
    pub distance: DistanceRange,
    /// Directions, in order of appearance
    pub directions: Vec<Cardinal>,
    /// Movement direction
    pub moving: Cardinal,
}

/// Current observations
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Current {
    pub weather_data: Essentials,
    /// Cloud types, in order of appearance
    pub cloud_types: Vec<CloudType>,
    pub low_cloud_layer: LowCloudLayer,
    pub mid_cloud_layer: MidCloudLayer,
    pub high_cloud_layer: HighCloudLayer,
    pub air_temperature: Temperature,
    /// [Current::air_temperature] reported to a tenth of degree
    pub air_temperature_precise: bool,
    pub dew_point: Temperature,
    /// [Current::dew_point] reported to a tenth of degree
    pub dew_point_precise: bool,
    /// Derived from air temperature and dew point, in percent
    pub relative_humidity: Option<u32>,
    /// QFE
    pub pressure_ground_level: Pressure,
    /// SLP remark
    pub mean_sea_level_pressure: Pressure,
    pub sea_surface_temperature: Temperature,
    pub wave_height: WaveHeight,
    pub snow_depth_on_ground: Precipitation,
    pub lightning: Vec<Lightning>,
    pub phenomena_in_vicinity: Vec<Vicinity>,
}
