//! Collated report: a denormalized, typed view of one METAR, SPECI or TAF.
//!
//! Every section is built empty and only filled in by collation.
//! Absent values are never zero: see [crate::units].
mod aerodrome;
mod current;
mod essentials;
mod forecast;
mod historical;
mod report;
mod station;

pub use aerodrome::{
    Aerodrome, BrakingAction, ColourCode, ContaminationExtent, Deposits, DirectionData,
    RunwayData, RvrTrend,
};
pub use current::{
    CloudGenus, CloudType, Current, HighCloudLayer, Lightning, LightningFrequency, LightningKind,
    LowCloudLayer, MidCloudLayer, ObservedPhenomena, Vicinity,
};
pub use essentials::{
    CloudAmount, CloudDetails, CloudLayer, Essentials, Phenomena, PrecipitationKind,
    SkyCondition, Weather, WindShear,
};
pub use forecast::{
    Forecast, Icing, IcingKind, IcingSeverity, TemperatureForecast, Trend, TrendType, Turbulence,
    TurbulenceFrequency, TurbulenceLocation, TurbulenceSeverity,
};
pub use historical::{EventKind, Historical, PressureTendency, PressureTrend, WeatherEvent};
pub use report::{Report, ReportError, ReportType, Warning, WarningMessage};
pub use station::{AutoType, MissingData, Station};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Collated report
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    pub report: Report,
    pub station: Station,
    pub aerodrome: Aerodrome,
    pub current: Current,
    pub historical: Historical,
    pub forecast: Forecast,
}

impl Summary {
    /// Returns true if collation produced no warning
    pub fn is_clean(&self) -> bool {
        self.report.warnings.is_empty()
    }
    /// Returns an iterator over warnings raised by given group text
    pub fn warnings_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Warning> + 'a {
        self.report.warnings.iter().filter(move |w| w.id == id)
    }
}
