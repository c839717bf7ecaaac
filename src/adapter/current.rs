use crate::{
    adapter::{
        basic,
        merge::{merge, Absent, Warnings},
    },
    group::{value, CloudTypeEntry, LightningGroup, VicinityGroup},
    summary::{CloudType, Current, WarningMessage},
    units::{Precipitation, Pressure, Temperature},
};

/// Temperature merge, aware of precision: a tenth of degree reading
/// supersedes a whole degree one.
fn merge_temperature(
    field: &mut Temperature,
    precise: &mut bool,
    incoming: &value::Temperature,
    warnings: &mut Warnings,
) -> bool {
    let converted = basic::temperature(incoming);
    if converted.is_absent() {
        return true;
    }
    if incoming.precise {
        if field.is_absent() || !*precise || field.is_minus_zero() {
            *field = converted;
            *precise = true;
            return true;
        }
    } else if *precise {
        return true;
    }
    if !merge(field, converted, warnings) {
        *precise = false;
        return false;
    }
    true
}

/// Writes [Current]: observations specific to METAR / SPECI,
/// other than [Current::weather_data]
pub(crate) struct CurrentAdapter<'a> {
    current: &'a mut Current,
    warnings: Warnings<'a>,
}

impl<'a> CurrentAdapter<'a> {
    pub fn new(current: &'a mut Current, warnings: Warnings<'a>) -> Self {
        Self { current, warnings }
    }

    /// Air temperature and dew point, main body (TT/TdTd) or remark (TsnTTTsnTdTdTd).
    /// Relative humidity is refreshed afterwards.
    pub fn set_temperature(
        &mut self,
        air: &value::Temperature,
        dew_point: &value::Temperature,
    ) -> bool {
        let c = &mut *self.current;
        let air = merge_temperature(
            &mut c.air_temperature,
            &mut c.air_temperature_precise,
            air,
            &mut self.warnings,
        );
        let dew_point = merge_temperature(
            &mut c.dew_point,
            &mut c.dew_point_precise,
            dew_point,
            &mut self.warnings,
        );
        c.relative_humidity = basic::relative_humidity(&c.air_temperature, &c.dew_point);
        air && dew_point
    }

    /// QFE
    pub fn set_ground_pressure(&mut self, pressure: Pressure) -> bool {
        merge(
            &mut self.current.pressure_ground_level,
            pressure,
            &mut self.warnings,
        )
    }

    /// SLPppp remark
    pub fn set_mean_sea_level_pressure(&mut self, pressure: Pressure) -> bool {
        merge(
            &mut self.current.mean_sea_level_pressure,
            pressure,
            &mut self.warnings,
        )
    }

    /// WTT/SS or WTT/HHHH
    pub fn set_sea_surface(
        &mut self,
        temperature: &value::Temperature,
        wave_height: &value::WaveHeight,
    ) -> bool {
        let c = &mut *self.current;
        let temperature = merge(
            &mut c.sea_surface_temperature,
            basic::temperature(temperature),
            &mut self.warnings,
        );
        let wave_height = merge(
            &mut c.wave_height,
            basic::wave_height(wave_height),
            &mut self.warnings,
        );
        temperature && wave_height
    }

    /// 4/sss
    pub fn set_snow_depth(&mut self, depth: Precipitation) -> bool {
        merge(
            &mut self.current.snow_depth_on_ground,
            depth,
            &mut self.warnings,
        )
    }

    /// Cloud types remark. Unknown genus entries are skipped.
    pub fn add_cloud_types(&mut self, entries: &[CloudTypeEntry]) -> bool {
        let mut valid = true;
        for entry in entries {
            match basic::cloud_genus(&entry.code) {
                Some(genus) => self.current.cloud_types.push(CloudType {
                    genus,
                    okta: entry.okta,
                    height: entry.height,
                }),
                None => {
                    self.warnings.push(WarningMessage::InvalidGroup);
                    valid = false;
                },
            }
        }
        valid
    }

    /// 8/CLCMCH
    pub fn set_low_mid_high_clouds(
        &mut self,
        low: Option<u8>,
        mid: Option<u8>,
        high: Option<u8>,
    ) -> bool {
        let low = basic::low_cloud_layer(low);
        let mid = basic::mid_cloud_layer(mid);
        let high = basic::high_cloud_layer(high);
        let c = &mut *self.current;
        merge_atomic!(
            self.warnings,
            c.low_cloud_layer => low,
            c.mid_cloud_layer => mid,
            c.high_cloud_layer => high,
        )
    }

    pub fn add_lightning(&mut self, group: &LightningGroup) {
        self.current.lightning.push(basic::lightning(group));
    }

    pub fn add_vicinity(&mut self, group: &VicinityGroup) {
        self.current.phenomena_in_vicinity.push(basic::vicinity(group));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::summary::{
        CloudGenus, HighCloudLayer, LightningFrequency, LightningKind, LowCloudLayer,
        MidCloudLayer, ObservedPhenomena,
    };
    use crate::units::{Cardinal, DistanceUnit, Height, WaveHeight};
    #[test]
    fn temperature_and_humidity() {
        let mut current = Current::default();
        let mut list = Vec::new();
        let mut adapter = CurrentAdapter::new(&mut current, Warnings::new(&mut list, "07/03"));
        assert!(adapter.set_temperature(&value::Temperature::new(7), &value::Temperature::new(3)));
        assert_eq!(current.air_temperature, Temperature::celsius(7.0));
        assert_eq!(current.dew_point, Temperature::celsius(3.0));
        assert_eq!(current.relative_humidity, Some(75));
        assert!(!current.air_temperature_precise);
        assert!(list.is_empty());
    }
    #[test]
    fn precise_supersedes_coarse() {
        let mut current = Current::default();
        let mut list = Vec::new();
        let mut adapter = CurrentAdapter::new(&mut current, Warnings::new(&mut list, "T00720028"));
        assert!(adapter.set_temperature(&value::Temperature::new(7), &value::Temperature::new(3)));
        assert!(adapter.set_temperature(
            &value::Temperature::precise(7.2),
            &value::Temperature::precise(2.8)
        ));
        assert!(adapter.set_temperature(&value::Temperature::new(7), &value::Temperature::new(3)));
        assert_eq!(current.air_temperature, Temperature::celsius(7.2));
        assert!(current.air_temperature_precise);
        assert_eq!(current.dew_point, Temperature::celsius(2.8));
        assert!(current.dew_point_precise);
        assert!(list.is_empty());
    }
    #[test]
    fn minus_zero() {
        let mut current = Current::default();
        let mut list = Vec::new();
        let mut adapter = CurrentAdapter::new(&mut current, Warnings::new(&mut list, "02/M00"));
        assert!(adapter.set_temperature(&value::Temperature::new(2), &value::Temperature::minus_zero()));
        assert!(current.dew_point.is_minus_zero());
        let mut adapter = CurrentAdapter::new(&mut current, Warnings::new(&mut list, "T00211003"));
        assert!(adapter.set_temperature(
            &value::Temperature::precise(2.1),
            &value::Temperature::precise(-0.3)
        ));
        assert_eq!(current.dew_point, Temperature::celsius(-0.3));
    }
    #[test]
    fn conflicting_temperature() {
        let mut current = Current::default();
        let mut list = Vec::new();
        let mut adapter = CurrentAdapter::new(&mut current, Warnings::new(&mut list, "T01000050"));
        let none = value::Temperature::default();
        assert!(adapter.set_temperature(&value::Temperature::precise(10.0), &none));
        assert!(!adapter.set_temperature(&value::Temperature::precise(11.0), &none));
        assert_eq!(current.air_temperature, Temperature::default());
        assert!(!current.air_temperature_precise);
        assert_eq!(current.relative_humidity, None);
        assert_eq!(list.len(), 1);
    }
    #[test]
    fn sea_surface() {
        let mut current = Current::default();
        let mut list = Vec::new();
        let mut adapter = CurrentAdapter::new(&mut current, Warnings::new(&mut list, "W15/S4"));
        assert!(adapter.set_sea_surface(
            &value::Temperature::new(15),
            &value::WaveHeight::StateCode(4)
        ));
        assert_eq!(current.sea_surface_temperature, Temperature::celsius(15.0));
        assert_eq!(current.wave_height, WaveHeight::meters(2.5));
    }
    #[test]
    fn cloud_types() {
        let mut current = Current::default();
        let mut list = Vec::new();
        let mut adapter = CurrentAdapter::new(&mut current, Warnings::new(&mut list, "CB1XX2SC4"));
        let entries = [
            CloudTypeEntry {
                code: "CB".to_string(),
                okta: 1,
                height: Height::feet(2500),
            },
            CloudTypeEntry {
                code: "XX".to_string(),
                okta: 2,
                height: Height::default(),
            },
            CloudTypeEntry {
                code: "SC".to_string(),
                okta: 4,
                height: Height::default(),
            },
        ];
        assert!(!adapter.add_cloud_types(&entries));
        let genus = current.cloud_types.iter().map(|c| c.genus).collect::<Vec<_>>();
        assert_eq!(genus, vec![CloudGenus::Cumulonimbus, CloudGenus::Stratocumulus]);
        assert_eq!(list[0].message, WarningMessage::InvalidGroup);
    }
    #[test]
    fn synoptic_layers() {
        let mut current = Current::default();
        let mut list = Vec::new();
        let mut adapter = CurrentAdapter::new(&mut current, Warnings::new(&mut list, "8/6//"));
        assert!(adapter.set_low_mid_high_clouds(Some(6), None, None));
        assert!(adapter.set_low_mid_high_clouds(Some(6), None, None));
        assert_eq!(current.mid_cloud_layer, MidCloudLayer::NotObservable);
        assert_eq!(current.high_cloud_layer, HighCloudLayer::NotObservable);
        assert_ne!(current.low_cloud_layer, LowCloudLayer::Unknown);
        assert!(list.is_empty());
    }
    #[test]
    fn lightning_and_vicinity() {
        let mut current = Current::default();
        let mut list = Vec::new();
        let mut adapter = CurrentAdapter::new(&mut current, Warnings::new(&mut list, "LTG"));
        adapter.add_lightning(&LightningGroup {
            frequency: LightningFrequency::Frequent,
            kinds: vec![LightningKind::InCloud, LightningKind::CloudToGround],
            distance: value::Distance::Distant,
            directions: vec![
                value::Direction::Cardinal(Cardinal::NE),
                value::Direction::Cardinal(Cardinal::E),
            ],
        });
        adapter.add_vicinity(&VicinityGroup {
            phenomena: ObservedPhenomena::Cumulonimbus,
            distance: value::Distance::Vicinity,
            directions: vec![value::Direction::Cardinal(Cardinal::W)],
            moving: value::Direction::Cardinal(Cardinal::E),
        });
        let lightning = &current.lightning[0];
        assert_eq!(lightning.directions, vec![Cardinal::NE, Cardinal::E]);
        assert_eq!(lightning.distance.maximum.value, Some(30.0));
        let vicinity = &current.phenomena_in_vicinity[0];
        assert_eq!(vicinity.distance.minimum.unit, DistanceUnit::NauticalMiles);
        assert_eq!(vicinity.distance.minimum.value, Some(5.0));
        assert_eq!(vicinity.moving, Cardinal::E);
    }
}
