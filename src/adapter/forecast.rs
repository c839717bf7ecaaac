use crate::{
    adapter::{
        basic,
        merge::{merge, Warnings},
    },
    group::{LayerKind, TrendGroup, TrendKind, VicinityGroup},
    summary::{
        Forecast, Icing, TemperatureForecast, Trend, TrendType, Turbulence, WarningMessage,
    },
    units::{Height, Pressure, Temperature, Time},
};

#[cfg(feature = "log")]
use log::debug;

/// Writes [Forecast]: trends, NOSIG, and everything attached either
/// to the latest trend or to the prevailing conditions.
pub(crate) struct ForecastAdapter<'a> {
    forecast: &'a mut Forecast,
    warnings: Warnings<'a>,
}

impl<'a> ForecastAdapter<'a> {
    pub fn new(forecast: &'a mut Forecast, warnings: Warnings<'a>) -> Self {
        Self { forecast, warnings }
    }

    /// Opens a new trend. Refused once NOSIG was reported.
    pub fn open_trend(&mut self, group: &TrendGroup) -> bool {
        let trend_type = match group.kind {
            TrendKind::Becmg => TrendType::Becoming,
            TrendKind::Tempo => TrendType::Temporary,
            TrendKind::Inter => TrendType::Intermittent,
            TrendKind::From
            | TrendKind::Until
            | TrendKind::At
            | TrendKind::TimeSpan
            | TrendKind::Prob => TrendType::Timed,
            TrendKind::Nosig => return self.set_nosig(),
        };
        if self.forecast.no_significant_changes {
            self.warnings.push(WarningMessage::InvalidGroup);
            return false;
        }
        let mut trend = Trend::new(trend_type);
        trend.probability = group.probability;
        trend.time_from = group.from;
        trend.time_until = group.until;
        trend.time_at = group.at;

        #[cfg(feature = "log")]
        debug!("{}: trend #{} ({:?})", self.warnings.id(), self.forecast.trends.len(), trend_type);

        self.forecast.trends.push(trend);
        true
    }

    /// NOSIG: no trend may precede it
    pub fn set_nosig(&mut self) -> bool {
        if !self.forecast.trends.is_empty() {
            self.warnings.push(WarningMessage::InconsistentData);
            return false;
        }
        self.forecast.no_significant_changes = true;
        true
    }

    /// Icing or turbulence layer
    pub fn add_layer(&mut self, kind: LayerKind, base: Height, top: Height) -> bool {
        match kind {
            LayerKind::Icing(code) => {
                let Some((severity, kind)) = basic::icing(code) else {
                    self.warnings.push(WarningMessage::InvalidGroup);
                    return false;
                };
                let icing = Icing {
                    severity,
                    kind,
                    base,
                    top,
                };
                match self.forecast.trends.last_mut() {
                    Some(trend) => trend.icing.push(icing),
                    None => self.forecast.prevailing_icing.push(icing),
                }
            },
            LayerKind::Turbulence(code) => {
                let Some((severity, location, frequency)) = basic::turbulence(code) else {
                    self.warnings.push(WarningMessage::InvalidGroup);
                    return false;
                };
                let turbulence = Turbulence {
                    severity,
                    location,
                    frequency,
                    base,
                    top,
                };
                match self.forecast.trends.last_mut() {
                    Some(trend) => trend.turbulence.push(turbulence),
                    None => self.forecast.prevailing_turbulence.push(turbulence),
                }
            },
        }
        true
    }

    /// QNHxxxx: forecast lowest sea level pressure
    pub fn set_lowest_pressure(&mut self, pressure: Pressure) -> bool {
        let field = match self.forecast.trends.last_mut() {
            Some(trend) => &mut trend.lowest_pressure,
            None => &mut self.forecast.prevailing_lowest_pressure,
        };
        merge(field, pressure, &mut self.warnings)
    }

    /// WSCONDS
    pub fn set_wind_shear_conditions(&mut self) {
        match self.forecast.trends.last_mut() {
            Some(trend) => trend.wind_shear_conditions = true,
            None => self.forecast.prevailing_wind_shear_conditions = true,
        }
    }

    pub fn add_vicinity(&mut self, group: &VicinityGroup) {
        let vicinity = basic::vicinity(group);
        match self.forecast.trends.last_mut() {
            Some(trend) => trend.vicinity.push(vicinity),
            None => self.forecast.prevailing_vicinity.push(vicinity),
        }
    }

    /// TX / TN: forecast extremes, in order of appearance
    pub fn add_temperature_forecast(
        &mut self,
        maximum: bool,
        temperature: Temperature,
        time: Option<Time>,
    ) {
        let forecast = TemperatureForecast { temperature, time };
        if maximum {
            self.forecast.max_temperature.push(forecast);
        } else {
            self.forecast.min_temperature.push(forecast);
        }
    }
}
