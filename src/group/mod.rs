//! Classified groups, as produced by the report parser.
//!
//! A report is consumed as one [Metadata] block plus the ordered list of
//! [Group]s found in its body. Each group keeps its raw text, used to
//! tag warnings and as plain text fallback.
mod metadata;
mod weather;

pub mod value;

pub use metadata::{Attributes, Metadata, ParseError, ParsedType};
pub use weather::{
    Descriptor, EventCode, Qualifier, WeatherCode, WeatherEventCode, WeatherPhenomena,
};

use crate::{
    summary::{ColourCode, LightningFrequency, LightningKind, ObservedPhenomena},
    units::{Height, Precipitation, Pressure, Runway, Speed, Time},
};

use value::{Direction, Distance, Temperature, WaveHeight};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trend introducing group type
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrendKind {
    Becmg,
    Tempo,
    Inter,
    /// FMxxxx
    From,
    /// TLxxxx
    Until,
    /// ATxxxx
    At,
    /// DDHH/DDHH
    TimeSpan,
    /// PROB30 / PROB40 alone
    Prob,
    Nosig,
}

/// Trend introducing group, with its probability and times
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrendGroup {
    pub kind: TrendKind,
    pub probability: Option<u8>,
    pub from: Option<Time>,
    pub until: Option<Time>,
    pub at: Option<Time>,
}

impl TrendGroup {
    pub fn new(kind: TrendKind) -> Self {
        Self {
            kind,
            probability: None,
            from: None,
            until: None,
            at: None,
        }
    }
    /// Time span trend "DDHH/DDHH"
    pub fn time_span(from: Time, until: Time) -> Self {
        Self::new(TrendKind::TimeSpan).with_time_span(from, until)
    }
    /// Copies and returns [TrendGroup] with given time span
    pub fn with_time_span(&self, from: Time, until: Time) -> Self {
        let mut s = *self;
        s.from = Some(from);
        s.until = Some(until);
        s
    }
    /// Copies and returns [TrendGroup] with given probability
    pub fn with_probability(&self, probability: u8) -> Self {
        let mut s = *self;
        s.probability = Some(probability);
        s
    }
    /// Copies and returns [TrendGroup] with given "AT" time
    pub fn with_at(&self, at: Time) -> Self {
        let mut s = *self;
        s.at = Some(at);
        s
    }
}

/// Standalone keywords
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Keyword {
    Cavok,
    /// No significant weather
    Nsw,
    /// Aerodrome closed due to snow
    Snoclo,
    /// RMK: start of remarks
    Remark,
}

/// Sensor status indicators
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorKind {
    Pwino,
    Pno,
    Fzrano,
    Tsno,
    Rvrno,
    Slpno,
    /// VISNO, possibly with runway or direction
    Visno,
    /// CHINO, possibly with runway or direction
    Chino,
    WindMissing,
    VisibilityMissing,
    WeatherMissing,
    CloudsMissing,
    TemperatureMissing,
    DewPointMissing,
    PressureMissing,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorStatusGroup {
    pub kind: SensorKind,
    pub runway: Option<Runway>,
    pub direction: Option<Direction>,
}

impl SensorStatusGroup {
    pub fn new(kind: SensorKind) -> Self {
        Self {
            kind,
            runway: None,
            direction: None,
        }
    }
}

/// Wind related groups
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindGroup {
    /// dddffGggKT
    Surface {
        direction: Direction,
        speed: Speed,
        gust: Speed,
    },
    /// dddVddd
    VariableSector { from: Direction, to: Direction },
    /// WShhh/dddffKT
    WindShear {
        height: Height,
        direction: Direction,
        speed: Speed,
    },
    /// WS Rxx, or WS ALL RWY when runway is None
    WindShearLowerLayers { runway: Option<Runway> },
    /// PK WND dddff/hhmm
    PeakWind {
        direction: Direction,
        speed: Speed,
        time: Option<Time>,
    },
    /// WSHFT hhmm [FROPA]
    WindShift {
        frontal_passage: bool,
        time: Option<Time>,
    },
    /// WSCONDS
    WindShearConditions,
}

/// Visibility groups
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisibilityGroup {
    Prevailing(Distance),
    /// xxxxNDV
    PrevailingNdv(Distance),
    /// VIS xVy
    VariablePrevailing { minimum: Distance, maximum: Distance },
    /// xxxxDD
    Directional {
        distance: Distance,
        direction: Direction,
    },
    /// VIS xVy DD
    VariableDirectional {
        minimum: Distance,
        maximum: Distance,
        direction: Direction,
    },
    /// VIS x DD-DD
    Sector {
        distance: Distance,
        directions: Vec<Direction>,
    },
    /// VIS x RWYxx
    Runway { distance: Distance, runway: Runway },
    /// VIS xVy RWYxx
    VariableRunway {
        minimum: Distance,
        maximum: Distance,
        runway: Runway,
    },
}

/// Cloud amount code
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AmountCode {
    #[strum(serialize = "FEW")]
    Few,
    #[strum(serialize = "SCT")]
    Scattered,
    #[strum(serialize = "BKN")]
    Broken,
    #[strum(serialize = "OVC")]
    Overcast,
    #[strum(serialize = "///")]
    NotReported,
}

/// Convective type code
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConvectiveCode {
    #[default]
    #[strum(serialize = "")]
    None,
    #[strum(serialize = "CB")]
    Cumulonimbus,
    #[strum(serialize = "TCU")]
    ToweringCumulus,
    #[strum(serialize = "///")]
    NotReported,
}

/// Sky condition groups
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudGroup {
    /// e.g. BKN020CB
    Layer {
        amount: AmountCode,
        height: Height,
        convective: ConvectiveCode,
    },
    Nsc,
    Ncd,
    Clr,
    Skc,
    /// VVhhh
    VerticalVisibility(Height),
    /// CIG hhh [RWYxx|DD]
    Ceiling {
        height: Height,
        runway: Option<Runway>,
        direction: Option<Direction>,
    },
    /// CIG hhhVhhh [RWYxx|DD]
    VariableCeiling {
        minimum: Height,
        maximum: Height,
        runway: Option<Runway>,
        direction: Option<Direction>,
    },
}

/// Weather groups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeatherGroup {
    Current(WeatherPhenomena),
    /// REww
    Recent(WeatherPhenomena),
    /// Begin / end times remark
    Events(Vec<WeatherEventCode>),
}

/// Air temperature and dew point (TT/TdTd or Tsnttt...)
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureGroup {
    pub air: Temperature,
    pub dew_point: Temperature,
}

/// Pressure groups
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureGroup {
    /// Qxxxx, Axxxx
    ObservedQnh(Pressure),
    /// QNHxxxxINS
    ForecastLowestQnh(Pressure),
    /// QFExxx
    ObservedQfe(Pressure),
    /// SLPxxx
    SeaLevelRemark(Pressure),
}

/// RVR tendency code
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RvrTendency {
    #[default]
    NotReported,
    /// U
    Upward,
    /// N
    Neutral,
    /// D
    Downward,
}

/// Runway visual range (Rxx/xxxxVxxxxU)
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RvrGroup {
    pub runway: Runway,
    pub visual_range: Distance,
    /// Upper bound of a variable RVR, `visual_range` then being the lower bound
    pub variable_to: Option<Distance>,
    pub tendency: RvrTendency,
}

/// Runway state
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunwayState {
    /// WMO codes for deposits, extent, depth and friction; None for "/"
    Normal {
        deposits: Option<u8>,
        extent: Option<u8>,
        depth: Option<u8>,
        friction: Option<u8>,
    },
    /// CLRDff: contamination ceased to exist
    Cleared { friction: Option<u8> },
    /// Runway closed due to snow
    Snoclo,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayStateGroup {
    pub runway: Runway,
    pub state: RunwayState,
}

/// Sea surface temperature and wave height (Wxx/Sx, Wxx/Hxxx)
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeaSurfaceGroup {
    pub temperature: Temperature,
    pub wave_height: WaveHeight,
}

/// Temperature extremes
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MinMaxTemperatureGroup {
    /// 1snTTT / 2snTTT: one of both is reported
    SixHourly {
        minimum: Temperature,
        maximum: Temperature,
    },
    /// 4snTxTxTxsnTnTnTn
    Daily {
        minimum: Temperature,
        maximum: Temperature,
    },
    /// TXTT/DDHHZ, TNTT/DDHHZ
    Forecast {
        maximum: bool,
        temperature: Temperature,
        time: Option<Time>,
    },
}

/// Accumulation period or quantity
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecipitationKindCode {
    /// Prrrr
    Total1Hour,
    /// 6RRRR
    Total3or6Hour,
    /// 7RRRR
    Total24Hour,
    /// 931RRR
    Snow6Hour,
    /// 4/sss
    SnowDepth,
    /// 933RRR
    WaterEquivalentOfSnow,
    /// I1nnn
    IceAccretion1Hour,
    /// I3nnn
    IceAccretion3Hour,
    /// I6nnn
    IceAccretion6Hour,
    /// PPxxx
    SinceLastReport,
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrecipitationGroup {
    pub kind: PrecipitationKindCode,
    pub amount: Precipitation,
}

/// Layer forecast type and WMO code
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayerKind {
    /// 6IchihihitL, Ic digit
    Icing(u8),
    /// 5BhBhBhBtL, B code: '0' to '9' or 'X'
    Turbulence(char),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerForecastGroup {
    pub kind: LayerKind,
    pub base: Height,
    pub top: Height,
}

/// Pressure tendency groups
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureTendencyGroup {
    /// 5appp, tendency None for "/"
    Coded {
        tendency: Option<u8>,
        change: Pressure,
    },
    /// PRESRR
    RisingRapidly,
    /// PRESFR
    FallingRapidly,
}

/// One entry of a cloud types remark (e.g. "SC3" or "CB1/025")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudTypeEntry {
    /// Genus abbreviation
    pub code: String,
    pub okta: u32,
    pub height: Height,
}

/// 8/CLCMCH, None for "/"
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LowMidHighCloudGroup {
    pub low: Option<u8>,
    pub mid: Option<u8>,
    pub high: Option<u8>,
}

/// Lightning remark
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LightningGroup {
    pub frequency: LightningFrequency,
    pub kinds: Vec<LightningKind>,
    pub distance: Distance,
    pub directions: Vec<Direction>,
}

/// Phenomena in vicinity remark (e.g. "CB DSNT NE MOV E")
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VicinityGroup {
    pub phenomena: ObservedPhenomena,
    pub distance: Distance,
    pub directions: Vec<Direction>,
    pub moving: Direction,
}

/// Other groups
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MiscGroup {
    /// 98mmm
    SunshineDuration(Option<u32>),
    /// BLU, WHT... optionally preceded by BLACK
    ColourCode { code: ColourCode, black: bool },
}

/// Group kind, with its content
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupKind {
    Trend(TrendGroup),
    Keyword(Keyword),
    SensorStatus(SensorStatusGroup),
    Wind(WindGroup),
    Visibility(VisibilityGroup),
    Cloud(CloudGroup),
    Weather(WeatherGroup),
    Temperature(TemperatureGroup),
    Pressure(PressureGroup),
    Rvr(RvrGroup),
    RunwayState(RunwayStateGroup),
    SeaSurface(SeaSurfaceGroup),
    MinMaxTemperature(MinMaxTemperatureGroup),
    Precipitation(PrecipitationGroup),
    LayerForecast(LayerForecastGroup),
    PressureTendency(PressureTendencyGroup),
    CloudTypes(Vec<CloudTypeEntry>),
    LowMidHighCloud(LowMidHighCloudGroup),
    Lightning(LightningGroup),
    Vicinity(VicinityGroup),
    Misc(MiscGroup),
    /// Not recognised by the parser
    Unknown,
}

/// One classified group, with its raw text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    pub kind: GroupKind,
    pub raw: String,
}

impl Group {
    pub fn new(kind: GroupKind, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_string(),
        }
    }
}
