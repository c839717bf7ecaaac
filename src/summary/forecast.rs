//! Forecast: prevailing conditions, trends and layer forecasts
use crate::{
    summary::{Essentials, Vicinity},
    units::{Height, Pressure, Temperature, Time},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Icing intensity
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IcingSeverity {
    #[default]
    NoneOrTrace,
    Light,
    Moderate,
    Severe,
}

/// Icing type
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IcingKind {
    #[default]
    NotSpecified,
    RimeInCloud,
    ClearInPrecipitation,
}

/// Icing layer forecast (6IchihihitL)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Icing {
    pub severity: IcingSeverity,
    pub kind: IcingKind,
    pub base: Height,
    pub top: Height,
}

/// Turbulence intensity
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurbulenceSeverity {
    #[default]
    None,
    Light,
    Moderate,
    Severe,
    Extreme,
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurbulenceLocation {
    #[default]
    NotSpecified,
    InCloud,
    InClearAir,
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurbulenceFrequency {
    #[default]
    NotSpecified,
    Occasional,
    Frequent,
}

/// Turbulence layer forecast (5BhBhBhBtL)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Turbulence {
    pub severity: TurbulenceSeverity,
    pub location: TurbulenceLocation,
    pub frequency: TurbulenceFrequency,
    pub base: Height,
    pub top: Height,
}

/// Forecast temperature extreme, with its expected time
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureForecast {
    pub temperature: Temperature,
    pub time: Option<Time>,
}

/// Type of trend
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrendType {
    /// BECMG
    Becoming,
    /// TEMPO
    Temporary,
    /// INTER
    Intermittent,
    /// FM, TL, AT, time span or PROB alone
    Timed,
}

/// Forecast change block
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trend {
    pub trend_type: TrendType,
    /// PROB30 / PROB40
    pub probability: Option<u8>,
    pub time_from: Option<Time>,
    pub time_until: Option<Time>,
    pub time_at: Option<Time>,
    pub forecast: Essentials,
    pub icing: Vec<Icing>,
    pub turbulence: Vec<Turbulence>,
    /// Forecast lowest QNH
    pub lowest_pressure: Pressure,
    /// WSCONDS
    pub wind_shear_conditions: bool,
    pub vicinity: Vec<Vicinity>,
}

impl Trend {
    /// Builds an empty [Trend] of given type
    pub fn new(trend_type: TrendType) -> Self {
        Self {
            trend_type,
            probability: None,
            time_from: None,
            time_until: None,
            time_at: None,
            forecast: Essentials::default(),
            icing: Vec::new(),
            turbulence: Vec::new(),
            lowest_pressure: Pressure::default(),
            wind_shear_conditions: false,
            vicinity: Vec::new(),
        }
    }
}

/// Forecast section
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Forecast {
    /// Prevailing conditions, over the whole forecast validity
    pub prevailing: Essentials,
    pub prevailing_icing: Vec<Icing>,
    pub prevailing_turbulence: Vec<Turbulence>,
    pub prevailing_lowest_pressure: Pressure,
    pub prevailing_wind_shear_conditions: bool,
    pub prevailing_vicinity: Vec<Vicinity>,
    /// Trends, in order of appearance
    pub trends: Vec<Trend>,
    /// NOSIG
    pub no_significant_changes: bool,
    pub max_temperature: Vec<TemperatureForecast>,
    pub min_temperature: Vec<TemperatureForecast>,
}

impl Forecast {
    /// Returns true if nothing was set in the prevailing block
    pub fn prevailing_is_empty(&self) -> bool {
        self.prevailing.is_empty()
            && self.prevailing_icing.is_empty()
            && self.prevailing_turbulence.is_empty()
            && self.prevailing_lowest_pressure.value.is_none()
            && !self.prevailing_wind_shear_conditions
            && self.prevailing_vicinity.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn prevailing_emptiness() {
        let mut forecast = Forecast::default();
        assert!(forecast.prevailing_is_empty());
        forecast.trends.push(Trend::new(TrendType::Becoming));
        assert!(forecast.prevailing_is_empty());
        forecast.prevailing_wind_shear_conditions = true;
        assert!(!forecast.prevailing_is_empty());
    }
}
