//! Past observations: peak wind, wind shift, extremes, accumulations,
//! pressure tendency and recent weather.
use crate::{
    summary::Weather,
    units::{Precipitation, Pressure, Speed, Temperature, Time},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pressure tendency, WMO code table 0200 (a)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureTendency {
    IncreasingThenDecreasing = 0,
    IncreasingMoreSlowly = 1,
    IncreasingSteadily = 2,
    IncreasingMoreRapidly = 3,
    Steady = 4,
    DecreasingThenIncreasing = 5,
    DecreasingMoreSlowly = 6,
    DecreasingSteadily = 7,
    DecreasingMoreRapidly = 8,
    #[default]
    NotReported = 9,
    /// PRESRR remark
    RisingRapidly = 10,
    /// PRESFR remark
    FallingRapidly = 11,
}

/// Pressure trend over the last 3 hours
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureTrend {
    #[default]
    NotReported,
    /// Higher than 3 hours ago
    Higher,
    /// Higher or same as 3 hours ago
    HigherOrSame,
    NotChanged,
    /// Lower or same as 3 hours ago
    LowerOrSame,
    /// Lower than 3 hours ago
    Lower,
    RisingRapidly,
    FallingRapidly,
}

impl From<PressureTendency> for PressureTrend {
    fn from(tendency: PressureTendency) -> Self {
        match tendency {
            PressureTendency::IncreasingThenDecreasing => Self::HigherOrSame,
            PressureTendency::IncreasingMoreSlowly
            | PressureTendency::IncreasingSteadily
            | PressureTendency::IncreasingMoreRapidly => Self::Higher,
            PressureTendency::Steady => Self::NotChanged,
            PressureTendency::DecreasingThenIncreasing => Self::LowerOrSame,
            PressureTendency::DecreasingMoreSlowly
            | PressureTendency::DecreasingSteadily
            | PressureTendency::DecreasingMoreRapidly => Self::Lower,
            PressureTendency::NotReported => Self::NotReported,
            PressureTendency::RisingRapidly => Self::RisingRapidly,
            PressureTendency::FallingRapidly => Self::FallingRapidly,
        }
    }
}

/// Begin or end of a weather phenomena
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    Began,
    Ended,
}

/// Weather begin / end event (RAB15E30)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherEvent {
    pub kind: EventKind,
    pub time: Time,
    pub weather: Weather,
}

/// Past observations
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Historical {
    pub peak_wind_direction_degrees: Option<u32>,
    pub peak_wind_speed: Speed,
    pub peak_wind_time: Option<Time>,

    pub wind_shift: bool,
    /// Wind shift associated with a frontal passage
    pub wind_shift_frontal_passage: bool,
    pub wind_shift_time: Option<Time>,

    pub temperature_min_6h: Temperature,
    pub temperature_max_6h: Temperature,
    pub temperature_min_24h: Temperature,
    pub temperature_max_24h: Temperature,

    pub precipitation_total_1h: Precipitation,
    /// 3 or 6 hour period, depending on report time
    pub precipitation_total_3or6h: Precipitation,
    pub precipitation_total_24h: Precipitation,
    pub snow_6h: Precipitation,
    pub snow_water_equivalent: Precipitation,
    pub ice_accretion_1h: Precipitation,
    pub ice_accretion_3h: Precipitation,
    pub ice_accretion_6h: Precipitation,
    pub precipitation_since_last_report: Precipitation,

    pub pressure_tendency: PressureTendency,
    pub pressure_trend: PressureTrend,
    pub pressure_change_3h: Pressure,

    pub sunshine_duration_minutes: Option<u32>,

    /// Recent weather, in order of appearance
    pub recent_weather: Vec<Weather>,
    /// Weather events, in order of appearance
    pub weather_events: Vec<WeatherEvent>,
}

#[cfg(test)]
mod test {
    use super::*;
    use num_traits::FromPrimitive;
    #[test]
    fn tendency_to_trend() {
        for (code, trend) in [
            (0, PressureTrend::HigherOrSame),
            (1, PressureTrend::Higher),
            (2, PressureTrend::Higher),
            (3, PressureTrend::Higher),
            (4, PressureTrend::NotChanged),
            (5, PressureTrend::LowerOrSame),
            (6, PressureTrend::Lower),
            (7, PressureTrend::Lower),
            (8, PressureTrend::Lower),
        ] {
            let tendency = PressureTendency::from_u8(code).unwrap();
            assert_eq!(PressureTrend::from(tendency), trend, "code {}", code);
        }
        assert_eq!(
            PressureTrend::from(PressureTendency::FallingRapidly),
            PressureTrend::FallingRapidly
        );
    }
}
