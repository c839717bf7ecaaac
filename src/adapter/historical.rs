use crate::{
    adapter::{
        basic,
        merge::{conflicts, merge, Warnings},
    },
    group::{value, EventCode, PrecipitationKindCode, WeatherEventCode, WeatherPhenomena},
    summary::{EventKind, Historical, PressureTendency, PressureTrend, WarningMessage, WeatherEvent},
    units::{Precipitation, Pressure, Speed, Time},
};

/// Writes [Historical]: remarks describing past conditions
pub(crate) struct HistoricalAdapter<'a> {
    historical: &'a mut Historical,
    warnings: Warnings<'a>,
}

impl<'a> HistoricalAdapter<'a> {
    pub fn new(historical: &'a mut Historical, warnings: Warnings<'a>) -> Self {
        Self {
            historical,
            warnings,
        }
    }

    /// PK WND dddff/hhmm
    pub fn set_peak_wind(
        &mut self,
        direction: &value::Direction,
        speed: Speed,
        time: Option<Time>,
    ) -> bool {
        let direction = basic::direction_degrees(direction);
        let h = &mut *self.historical;
        merge_atomic!(
            self.warnings,
            h.peak_wind_direction_degrees => direction,
            h.peak_wind_speed => speed,
            h.peak_wind_time => time,
        )
    }

    /// WSHFT hhmm, possibly with FROPA. The shift flag is the negation of
    /// the frontal passage flag, so both flags are compared as one value
    /// once a wind shift was recorded.
    pub fn set_wind_shift(&mut self, frontal_passage: bool, time: Option<Time>) -> bool {
        let h = &mut *self.historical;
        let recorded =
            h.wind_shift || h.wind_shift_frontal_passage || h.wind_shift_time.is_some();
        if recorded
            && (h.wind_shift_frontal_passage != frontal_passage
                || conflicts(&h.wind_shift_time, &time))
        {
            h.wind_shift = false;
            h.wind_shift_frontal_passage = false;
            h.wind_shift_time = None;
            self.warnings.push(WarningMessage::DuplicatedData);
            return false;
        }
        h.wind_shift = !frontal_passage;
        h.wind_shift_frontal_passage = frontal_passage;
        if time.is_some() {
            h.wind_shift_time = time;
        }
        true
    }

    /// 1snTTT / 2snTTT: fields merge independently
    pub fn set_six_hourly_extremes(
        &mut self,
        minimum: &value::Temperature,
        maximum: &value::Temperature,
    ) -> bool {
        let h = &mut *self.historical;
        let min = merge(
            &mut h.temperature_min_6h,
            basic::temperature(minimum),
            &mut self.warnings,
        );
        let max = merge(
            &mut h.temperature_max_6h,
            basic::temperature(maximum),
            &mut self.warnings,
        );
        min && max
    }

    /// 4snTxTxTxsnTnTnTn
    pub fn set_daily_extremes(
        &mut self,
        minimum: &value::Temperature,
        maximum: &value::Temperature,
    ) -> bool {
        let (minimum, maximum) = (basic::temperature(minimum), basic::temperature(maximum));
        let h = &mut *self.historical;
        merge_atomic!(
            self.warnings,
            h.temperature_min_24h => minimum,
            h.temperature_max_24h => maximum,
        )
    }

    /// Accumulations. Snow depth on ground is a current observation,
    /// and is not handled here.
    pub fn set_precipitation(&mut self, kind: PrecipitationKindCode, amount: Precipitation) -> bool {
        let h = &mut *self.historical;
        let field = match kind {
            PrecipitationKindCode::Total1Hour => &mut h.precipitation_total_1h,
            PrecipitationKindCode::Total3or6Hour => &mut h.precipitation_total_3or6h,
            PrecipitationKindCode::Total24Hour => &mut h.precipitation_total_24h,
            PrecipitationKindCode::Snow6Hour => &mut h.snow_6h,
            PrecipitationKindCode::WaterEquivalentOfSnow => &mut h.snow_water_equivalent,
            PrecipitationKindCode::IceAccretion1Hour => &mut h.ice_accretion_1h,
            PrecipitationKindCode::IceAccretion3Hour => &mut h.ice_accretion_3h,
            PrecipitationKindCode::IceAccretion6Hour => &mut h.ice_accretion_6h,
            PrecipitationKindCode::SinceLastReport => &mut h.precipitation_since_last_report,
            PrecipitationKindCode::SnowDepth => return false,
        };
        merge(field, amount, &mut self.warnings)
    }

    /// 5appp: tendency code and 3 hour change
    pub fn set_pressure_tendency(&mut self, tendency: Option<u8>, change: Pressure) -> bool {
        self.set_tendency(basic::pressure_tendency(tendency), change)
    }

    /// PRESRR / PRESFR
    pub fn set_rapid_pressure_change(&mut self, rising: bool) -> bool {
        let tendency = if rising {
            PressureTendency::RisingRapidly
        } else {
            PressureTendency::FallingRapidly
        };
        self.set_tendency(tendency, Pressure::default())
    }

    fn set_tendency(&mut self, tendency: PressureTendency, change: Pressure) -> bool {
        let trend = PressureTrend::from(tendency);
        let h = &mut *self.historical;
        merge_atomic!(
            self.warnings,
            h.pressure_tendency => tendency,
            h.pressure_trend => trend,
            h.pressure_change_3h => change,
        )
    }

    /// 98mmm
    pub fn set_sunshine_duration(&mut self, minutes: Option<u32>) -> bool {
        merge(
            &mut self.historical.sunshine_duration_minutes,
            minutes,
            &mut self.warnings,
        )
    }

    /// REnn
    pub fn add_recent_weather(&mut self, phenomena: &WeatherPhenomena) -> bool {
        match basic::weather(phenomena) {
            Some(weather) => {
                self.historical.recent_weather.push(weather);
                true
            },
            None => {
                self.warnings.push(WarningMessage::InvalidGroup);
                false
            },
        }
    }

    /// Weather began / ended remark. Unknown phenomena are skipped.
    pub fn add_weather_events(&mut self, events: &[WeatherEventCode]) -> bool {
        let mut valid = true;
        for event in events {
            let Some(weather) = basic::weather(&event.phenomena) else {
                self.warnings.push(WarningMessage::InvalidGroup);
                valid = false;
                continue;
            };
            let kind = match event.event {
                EventCode::Began => EventKind::Began,
                EventCode::Ended => EventKind::Ended,
            };
            self.historical.weather_events.push(WeatherEvent {
                kind,
                time: event.time,
                weather,
            });
        }
        valid
    }
}
