//! Collation: walks the group sequence of one report and builds its [Summary].
//!
//! Groups are dispatched to section adapters. Groups describing wind,
//! visibility, sky and weather are written to the current target, which
//! is, by priority:
//! 1. the latest trend, if any trend was opened,
//! 2. the prevailing forecast, once a TAF opened its validity window,
//! 3. the current observation.
//!
//! When a trend is refused, its content goes to plain text up to the remarks.
use crate::{
    adapter::{
        basic, collate_metadata, AerodromeAdapter, CurrentAdapter, EssentialsAdapter,
        ForecastAdapter, HistoricalAdapter, StationAdapter, Warnings,
    },
    group::{
        value, CloudGroup, Group, GroupKind, Keyword, Metadata, MinMaxTemperatureGroup, MiscGroup,
        PrecipitationKindCode, PressureGroup, PressureTendencyGroup, TrendGroup, TrendKind,
        VicinityGroup, VisibilityGroup, WeatherGroup, WindGroup,
    },
    summary::{ReportType, SkyCondition, Summary},
    units::{Ceiling, DistanceRange},
};

#[cfg(feature = "log")]
use log::debug;

/// Stateful visitor, building one [Summary] out of one report
#[derive(Debug, Clone)]
pub struct Collator {
    summary: Summary,
    /// Inside the TAF validity window, and before any trend
    prevailing_window: bool,
    /// Latest trend was refused: its content is not collated
    rejected_trend: bool,
}

impl Collator {
    /// Starts collation of a report, from its header
    pub fn new(metadata: &Metadata) -> Self {
        let mut summary = Summary::default();
        collate_metadata(metadata, &mut summary.report, &mut summary.station);
        Self {
            summary,
            prevailing_window: false,
            rejected_trend: false,
        }
    }

    /// Collates one group. Groups are expected in order of appearance.
    /// Has no effect once the report was identified as erroneous.
    pub fn visit(&mut self, group: &Group) {
        if self.summary.report.report_type == ReportType::Error {
            return;
        }
        let raw = group.raw.as_str();
        if self.rejected_trend && is_trend_content(&group.kind) {
            self.plain_text(raw);
            return;
        }
        match &group.kind {
            GroupKind::Trend(trend) => self.visit_trend(trend, raw),
            GroupKind::Keyword(keyword) => match keyword {
                Keyword::Cavok => {
                    self.essentials(raw).set_cavok();
                },
                Keyword::Nsw => self.essentials(raw).set_no_significant_weather(),
                Keyword::Snoclo => self.aerodrome(raw).set_snoclo(),
                Keyword::Remark => self.rejected_trend = false,
            },
            GroupKind::SensorStatus(sensor) => {
                self.station()
                    .set_sensor_status(sensor.kind, sensor.runway, sensor.direction.as_ref());
            },
            GroupKind::Wind(wind) => self.visit_wind(wind, raw),
            GroupKind::Visibility(visibility) => self.visit_visibility(visibility, raw),
            GroupKind::Cloud(cloud) => self.visit_cloud(cloud, raw),
            GroupKind::Weather(weather) => self.visit_weather(weather, raw),
            GroupKind::Temperature(temperature) => {
                self.current(raw)
                    .set_temperature(&temperature.air, &temperature.dew_point);
            },
            GroupKind::Pressure(pressure) => match *pressure {
                PressureGroup::ObservedQnh(qnh) => {
                    self.essentials(raw).set_sea_level_pressure(qnh);
                },
                PressureGroup::ForecastLowestQnh(qnh) => {
                    self.forecast(raw).set_lowest_pressure(qnh);
                },
                PressureGroup::ObservedQfe(qfe) => {
                    self.current(raw).set_ground_pressure(qfe);
                },
                PressureGroup::SeaLevelRemark(slp) => {
                    self.current(raw).set_mean_sea_level_pressure(slp);
                },
            },
            GroupKind::Rvr(rvr) => {
                self.aerodrome(raw).set_rvr(
                    rvr.runway,
                    &rvr.visual_range,
                    rvr.variable_to.as_ref(),
                    rvr.tendency,
                );
            },
            GroupKind::RunwayState(state) => {
                self.aerodrome(raw).set_runway_state(state.runway, &state.state);
            },
            GroupKind::SeaSurface(sea) => {
                self.current(raw)
                    .set_sea_surface(&sea.temperature, &sea.wave_height);
            },
            GroupKind::MinMaxTemperature(extremes) => match extremes {
                MinMaxTemperatureGroup::SixHourly { minimum, maximum } => {
                    self.historical(raw).set_six_hourly_extremes(minimum, maximum);
                },
                MinMaxTemperatureGroup::Daily { minimum, maximum } => {
                    self.historical(raw).set_daily_extremes(minimum, maximum);
                },
                MinMaxTemperatureGroup::Forecast {
                    maximum,
                    temperature,
                    time,
                } => {
                    self.forecast(raw).add_temperature_forecast(
                        *maximum,
                        basic::temperature(temperature),
                        *time,
                    );
                },
            },
            GroupKind::Precipitation(precipitation) => match precipitation.kind {
                PrecipitationKindCode::SnowDepth => {
                    self.current(raw).set_snow_depth(precipitation.amount);
                },
                kind => {
                    self.historical(raw).set_precipitation(kind, precipitation.amount);
                },
            },
            GroupKind::LayerForecast(layer) => {
                self.forecast(raw).add_layer(layer.kind, layer.base, layer.top);
            },
            GroupKind::PressureTendency(tendency) => match *tendency {
                PressureTendencyGroup::Coded { tendency, change } => {
                    self.historical(raw).set_pressure_tendency(tendency, change);
                },
                PressureTendencyGroup::RisingRapidly => {
                    self.historical(raw).set_rapid_pressure_change(true);
                },
                PressureTendencyGroup::FallingRapidly => {
                    self.historical(raw).set_rapid_pressure_change(false);
                },
            },
            GroupKind::CloudTypes(entries) => {
                self.current(raw).add_cloud_types(entries);
            },
            GroupKind::LowMidHighCloud(layers) => {
                self.current(raw)
                    .set_low_mid_high_clouds(layers.low, layers.mid, layers.high);
            },
            GroupKind::Lightning(lightning) => self.current(raw).add_lightning(lightning),
            GroupKind::Vicinity(vicinity) => self.visit_vicinity(vicinity, raw),
            GroupKind::Misc(misc) => match *misc {
                MiscGroup::SunshineDuration(minutes) => {
                    self.historical(raw).set_sunshine_duration(minutes);
                },
                MiscGroup::ColourCode { code, black } => {
                    self.aerodrome(raw).set_colour_code(code, black);
                },
            },
            GroupKind::Unknown => self.plain_text(raw),
        }
    }

    /// Ends collation
    pub fn finish(self) -> Summary {
        self.summary
    }

    fn visit_trend(&mut self, trend: &TrendGroup, raw: &str) {
        if self.opens_prevailing_window(trend) {
            #[cfg(feature = "log")]
            debug!("{}: prevailing forecast window", raw);
            self.prevailing_window = true;
            return;
        }
        let accepted = self.forecast(raw).open_trend(trend);
        if trend.kind != TrendKind::Nosig {
            self.rejected_trend = !accepted;
            if accepted {
                self.prevailing_window = false;
            }
        }
    }

    /// A TAF time span covering the whole validity, before anything was
    /// forecast, introduces the prevailing conditions rather than a trend.
    fn opens_prevailing_window(&self, trend: &TrendGroup) -> bool {
        let report = &self.summary.report;
        let forecast = &self.summary.forecast;
        report.report_type == ReportType::Taf
            && trend.kind == TrendKind::TimeSpan
            && trend.probability.is_none()
            && trend.at.is_none()
            && trend.from.is_some()
            && trend.from == report.applicable_from
            && trend.until == report.applicable_until
            && forecast.trends.is_empty()
            && forecast.prevailing_is_empty()
    }

    fn visit_wind(&mut self, wind: &WindGroup, raw: &str) {
        match wind {
            WindGroup::Surface {
                direction,
                speed,
                gust,
            } => {
                self.essentials(raw).set_wind(direction, *speed, *gust);
            },
            WindGroup::VariableSector { from, to } => {
                self.essentials(raw).set_variable_sector(from, to);
            },
            WindGroup::WindShear {
                height,
                direction,
                speed,
            } => self.essentials(raw).add_wind_shear(*height, direction, *speed),
            WindGroup::WindShearLowerLayers { runway } => {
                self.aerodrome(raw).set_wind_shear_lower_layers(*runway)
            },
            WindGroup::PeakWind {
                direction,
                speed,
                time,
            } => {
                self.historical(raw).set_peak_wind(direction, *speed, *time);
            },
            WindGroup::WindShift {
                frontal_passage,
                time,
            } => {
                self.historical(raw).set_wind_shift(*frontal_passage, *time);
            },
            WindGroup::WindShearConditions => self.forecast(raw).set_wind_shear_conditions(),
        }
    }

    fn visit_visibility(&mut self, visibility: &VisibilityGroup, raw: &str) {
        let ranged = |minimum: &value::Distance, maximum: &value::Distance| {
            DistanceRange::ranged(basic::distance(minimum), basic::distance(maximum))
        };
        match visibility {
            VisibilityGroup::Prevailing(distance) => {
                self.essentials(raw).set_visibility(distance);
            },
            VisibilityGroup::PrevailingNdv(distance) => {
                self.essentials(raw).set_visibility(distance);
                self.station().set_no_directional_variation();
            },
            VisibilityGroup::VariablePrevailing { minimum, maximum } => {
                self.essentials(raw).set_variable_visibility(minimum, maximum);
            },
            VisibilityGroup::Directional {
                distance,
                direction,
            } => {
                self.aerodrome(raw)
                    .set_direction_visibility(direction, basic::distance_range(distance));
            },
            VisibilityGroup::VariableDirectional {
                minimum,
                maximum,
                direction,
            } => {
                self.aerodrome(raw)
                    .set_direction_visibility(direction, ranged(minimum, maximum));
            },
            VisibilityGroup::Sector {
                distance,
                directions,
            } => {
                let range = basic::distance_range(distance);
                let mut aerodrome = self.aerodrome(raw);
                for direction in directions {
                    aerodrome.set_direction_visibility(direction, range);
                }
            },
            VisibilityGroup::Runway { distance, runway } => {
                self.aerodrome(raw)
                    .set_runway_visibility(*runway, basic::distance_range(distance));
            },
            VisibilityGroup::VariableRunway {
                minimum,
                maximum,
                runway,
            } => {
                self.aerodrome(raw)
                    .set_runway_visibility(*runway, ranged(minimum, maximum));
            },
        }
    }

    fn visit_cloud(&mut self, cloud: &CloudGroup, raw: &str) {
        let sky = match *cloud {
            CloudGroup::Layer {
                amount,
                height,
                convective,
            } => {
                self.essentials(raw).add_cloud_layer(amount, height, convective);
                return;
            },
            CloudGroup::VerticalVisibility(height) => {
                self.essentials(raw).set_vertical_visibility(height);
                return;
            },
            CloudGroup::Ceiling {
                height,
                runway,
                direction,
            } => {
                let ceiling = Ceiling {
                    exact: height,
                    ..Default::default()
                };
                self.aerodrome(raw).set_ceiling(ceiling, runway, direction.as_ref());
                return;
            },
            CloudGroup::VariableCeiling {
                minimum,
                maximum,
                runway,
                direction,
            } => {
                let ceiling = Ceiling {
                    minimum,
                    maximum,
                    ..Default::default()
                };
                self.aerodrome(raw).set_ceiling(ceiling, runway, direction.as_ref());
                return;
            },
            CloudGroup::Nsc => SkyCondition::NoSignificantClouds,
            CloudGroup::Ncd => SkyCondition::NoCloudsDetected,
            CloudGroup::Clr => SkyCondition::ClearAutomated,
            CloudGroup::Skc => SkyCondition::ClearManual,
        };
        self.essentials(raw).set_sky_condition(sky);
    }

    /// Current weather falls back to phenomena in vicinity (VCSH, VCTS...),
    /// then to plain text.
    fn visit_weather(&mut self, weather: &WeatherGroup, raw: &str) {
        match weather {
            WeatherGroup::Current(phenomena) => {
                if let Some(weather) = basic::weather(phenomena) {
                    self.essentials(raw).add_weather(weather);
                } else if let Some(phenomena) = basic::vicinity_phenomena(phenomena) {
                    let vicinity = VicinityGroup {
                        phenomena,
                        distance: value::Distance::Vicinity,
                        directions: Vec::new(),
                        moving: value::Direction::NotReported,
                    };
                    self.visit_vicinity(&vicinity, raw);
                } else {
                    self.plain_text(raw);
                }
            },
            WeatherGroup::Recent(phenomena) => {
                self.historical(raw).add_recent_weather(phenomena);
            },
            WeatherGroup::Events(events) => {
                self.historical(raw).add_weather_events(events);
            },
        }
    }

    /// Observed phenomena in vicinity belong to the METAR body,
    /// otherwise to the prevailing forecast or latest trend.
    fn visit_vicinity(&mut self, vicinity: &VicinityGroup, raw: &str) {
        let observed = matches!(
            self.summary.report.report_type,
            ReportType::Metar | ReportType::Speci
        );
        if observed && self.summary.forecast.trends.is_empty() {
            self.current(raw).add_vicinity(vicinity);
        } else {
            self.forecast(raw).add_vicinity(vicinity);
        }
    }

    fn plain_text(&mut self, raw: &str) {
        #[cfg(feature = "log")]
        debug!("{}: plain text", raw);
        self.summary.report.plain_text.push(raw.to_string());
    }

    fn essentials<'s>(&'s mut self, raw: &'s str) -> EssentialsAdapter<'s> {
        let Summary {
            report,
            current,
            forecast,
            ..
        } = &mut self.summary;
        let target = match forecast.trends.last_mut() {
            Some(trend) => &mut trend.forecast,
            None if self.prevailing_window => &mut forecast.prevailing,
            None => &mut current.weather_data,
        };
        EssentialsAdapter::new(target, Warnings::new(&mut report.warnings, raw))
    }

    fn aerodrome<'s>(&'s mut self, raw: &'s str) -> AerodromeAdapter<'s> {
        let Summary {
            report, aerodrome, ..
        } = &mut self.summary;
        AerodromeAdapter::new(aerodrome, Warnings::new(&mut report.warnings, raw))
    }

    fn current<'s>(&'s mut self, raw: &'s str) -> CurrentAdapter<'s> {
        let Summary {
            report, current, ..
        } = &mut self.summary;
        CurrentAdapter::new(current, Warnings::new(&mut report.warnings, raw))
    }

    fn historical<'s>(&'s mut self, raw: &'s str) -> HistoricalAdapter<'s> {
        let Summary {
            report, historical, ..
        } = &mut self.summary;
        HistoricalAdapter::new(historical, Warnings::new(&mut report.warnings, raw))
    }

    fn forecast<'s>(&'s mut self, raw: &'s str) -> ForecastAdapter<'s> {
        let Summary {
            report, forecast, ..
        } = &mut self.summary;
        ForecastAdapter::new(forecast, Warnings::new(&mut report.warnings, raw))
    }

    fn station(&mut self) -> StationAdapter<'_> {
        StationAdapter::new(&mut self.summary.station)
    }
}

/// Groups that describe the content of a trend, once one is opened
fn is_trend_content(kind: &GroupKind) -> bool {
    match kind {
        GroupKind::Wind(wind) => matches!(
            wind,
            WindGroup::Surface { .. }
                | WindGroup::VariableSector { .. }
                | WindGroup::WindShear { .. }
                | WindGroup::WindShearConditions
        ),
        GroupKind::Visibility(visibility) => matches!(
            visibility,
            VisibilityGroup::Prevailing(_)
                | VisibilityGroup::PrevailingNdv(_)
                | VisibilityGroup::VariablePrevailing { .. }
        ),
        GroupKind::Cloud(cloud) => matches!(
            cloud,
            CloudGroup::Layer { .. }
                | CloudGroup::VerticalVisibility(_)
                | CloudGroup::Nsc
                | CloudGroup::Ncd
                | CloudGroup::Clr
                | CloudGroup::Skc
        ),
        GroupKind::Weather(weather) => matches!(weather, WeatherGroup::Current(_)),
        GroupKind::Keyword(keyword) => matches!(keyword, Keyword::Cavok | Keyword::Nsw),
        GroupKind::Pressure(pressure) => matches!(
            pressure,
            PressureGroup::ObservedQnh(_) | PressureGroup::ForecastLowestQnh(_)
        ),
        GroupKind::LayerForecast(_) => true,
        _ => false,
    }
}

/// Collates one report: its header, then its groups in order of appearance
pub fn collate(metadata: &Metadata, groups: &[Group]) -> Summary {
    let mut collator = Collator::new(metadata);
    for group in groups {
        collator.visit(group);
    }
    collator.finish()
}
