use crate::{
    adapter::basic,
    group::{value::Direction, SensorKind},
    summary::{MissingData, Station},
    units::{Cardinal, Runway},
};

/// Station data availability. Availability sets never conflict.
pub(crate) struct StationAdapter<'a> {
    station: &'a mut Station,
}

impl<'a> StationAdapter<'a> {
    pub fn new(station: &'a mut Station) -> Self {
        Self { station }
    }
    pub fn add_missing(&mut self, missing: MissingData) {
        self.station.missing_data.insert(missing);
    }
    pub fn set_no_directional_variation(&mut self) {
        self.station.no_visibility_directional_variation = true;
    }
    /// Sensor status indicator, possibly qualified by a runway or direction
    pub fn set_sensor_status(
        &mut self,
        kind: SensorKind,
        runway: Option<Runway>,
        direction: Option<&Direction>,
    ) {
        let missing = match kind {
            SensorKind::Pwino => MissingData::WeatherIdentifier,
            SensorKind::Pno => MissingData::PrecipitationAmount,
            SensorKind::Fzrano => MissingData::FreezingRainSensor,
            SensorKind::Tsno => MissingData::LightningDetector,
            SensorKind::Rvrno => MissingData::RunwayVisualRange,
            SensorKind::Slpno => MissingData::SeaLevelPressure,
            SensorKind::WindMissing => MissingData::Wind,
            SensorKind::VisibilityMissing => MissingData::Visibility,
            SensorKind::WeatherMissing => MissingData::Weather,
            SensorKind::CloudsMissing => MissingData::Clouds,
            SensorKind::TemperatureMissing => MissingData::Temperature,
            SensorKind::DewPointMissing => MissingData::DewPoint,
            SensorKind::PressureMissing => MissingData::Pressure,
            SensorKind::Visno | SensorKind::Chino => {
                self.set_secondary_sensor(kind == SensorKind::Chino, runway, direction);
                return;
            },
        };
        self.add_missing(missing);
    }
    fn set_secondary_sensor(
        &mut self,
        ceiling: bool,
        runway: Option<Runway>,
        direction: Option<&Direction>,
    ) {
        let cardinal = direction
            .map(basic::cardinal)
            .filter(|c| *c != Cardinal::NotSpecified);
        if runway.is_none() && cardinal.is_none() {
            self.add_missing(if ceiling {
                MissingData::SecondaryCeiling
            } else {
                MissingData::SecondaryVisibility
            });
            return;
        }
        if let Some(runway) = runway {
            if ceiling {
                self.add_missing(MissingData::SecondaryCeilingRunway);
                self.station.runways_no_ceiling_data.insert(runway);
            } else {
                self.add_missing(MissingData::SecondaryVisibilityRunway);
                self.station.runways_no_visibility_data.insert(runway);
            }
        }
        if let Some(cardinal) = cardinal {
            if ceiling {
                self.add_missing(MissingData::SecondaryCeilingDirection);
                self.station.directions_no_ceiling_data.insert(cardinal);
            } else {
                self.add_missing(MissingData::SecondaryVisibilityDirection);
                self.station.directions_no_visibility_data.insert(cardinal);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::units::Designator;
    #[test]
    fn secondary_sensors() {
        let mut station = Station::default();
        let mut adapter = StationAdapter::new(&mut station);
        adapter.set_sensor_status(SensorKind::Chino, None, None);
        let rwy = Runway::new(27, Designator::Left);
        adapter.set_sensor_status(SensorKind::Visno, Some(rwy), None);
        adapter.set_sensor_status(
            SensorKind::Chino,
            None,
            Some(&Direction::Cardinal(Cardinal::NE)),
        );
        adapter.set_sensor_status(SensorKind::Tsno, None, None);
        adapter.set_sensor_status(SensorKind::Tsno, None, None);

        assert_eq!(
            station.missing_data.iter().copied().collect::<Vec<_>>(),
            vec![
                MissingData::LightningDetector,
                MissingData::SecondaryCeiling,
                MissingData::SecondaryCeilingDirection,
                MissingData::SecondaryVisibilityRunway,
            ]
        );
        assert!(station.runways_no_visibility_data.contains(&rwy));
        assert!(station.runways_no_ceiling_data.is_empty());
        assert!(station.directions_no_ceiling_data.contains(&Cardinal::NE));
    }
}
