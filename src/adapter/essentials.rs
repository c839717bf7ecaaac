use crate::{
    adapter::{
        basic,
        merge::{conflicts, merge, merge_range, Warnings},
    },
    constants::CAVOK_VISIBILITY,
    group::{value, AmountCode, ConvectiveCode},
    summary::{CloudLayer, Essentials, SkyCondition, WarningMessage, Weather, WindShear},
    units::{Distance, DistanceModifier, DistanceRange, Height, Pressure, Speed},
};

/// Writes one [Essentials] block: current observation, prevailing
/// forecast, or trend.
pub(crate) struct EssentialsAdapter<'a> {
    essentials: &'a mut Essentials,
    warnings: Warnings<'a>,
}

impl<'a> EssentialsAdapter<'a> {
    pub fn new(essentials: &'a mut Essentials, warnings: Warnings<'a>) -> Self {
        Self {
            essentials,
            warnings,
        }
    }

    /// Surface wind. Calm, variable and directional wind exclude each other.
    pub fn set_wind(&mut self, direction: &value::Direction, speed: Speed, gust: Speed) -> bool {
        let calm = matches!(direction, value::Direction::Degrees(0))
            && speed.value == Some(0)
            && gust.value.is_none();
        let variable = *direction == value::Direction::Variable;
        let mut degrees = basic::direction_degrees(direction);
        if calm {
            degrees = None;
        }

        let e = &mut *self.essentials;
        let exclusive = (calm && (e.wind_direction_degrees.is_some() || e.wind_direction_variable))
            || (variable && (e.wind_calm || e.wind_direction_degrees.is_some()))
            || (degrees.is_some() && (e.wind_calm || e.wind_direction_variable));
        if exclusive {
            e.wind_direction_degrees = None;
            e.wind_direction_variable = false;
            e.wind_calm = false;
            e.wind_speed = Speed::default();
            e.gust_speed = Speed::default();
            self.warnings.push(WarningMessage::DuplicatedData);
            return false;
        }
        merge_atomic!(
            self.warnings,
            e.wind_direction_degrees => degrees,
            e.wind_direction_variable => variable,
            e.wind_calm => calm,
            e.wind_speed => speed,
            e.gust_speed => gust,
        )
    }

    /// Variable wind sector, clockwise
    pub fn set_variable_sector(&mut self, from: &value::Direction, to: &value::Direction) -> bool {
        let from = basic::direction_degrees(from);
        let to = basic::direction_degrees(to);
        let e = &mut *self.essentials;
        merge_atomic!(
            self.warnings,
            e.wind_direction_var_from_degrees => from,
            e.wind_direction_var_to_degrees => to,
        )
    }

    pub fn add_wind_shear(&mut self, height: Height, direction: &value::Direction, speed: Speed) {
        self.essentials.wind_shear.push(WindShear {
            height,
            direction_degrees: basic::direction_degrees(direction),
            speed,
        });
    }

    pub fn set_visibility(&mut self, distance: &value::Distance) -> bool {
        self.merge_visibility(basic::distance_range(distance))
    }

    /// Variable prevailing visibility: both bounds, or none
    pub fn set_variable_visibility(
        &mut self,
        minimum: &value::Distance,
        maximum: &value::Distance,
    ) -> bool {
        let range = DistanceRange::ranged(basic::distance(minimum), basic::distance(maximum));
        self.merge_visibility(range)
    }

    /// CAVOK: visibility of 10 km or more, and no cloud of operational significance
    pub fn set_cavok(&mut self) -> bool {
        let cavok = true;
        let visibility = DistanceRange::prevailing(
            Distance::meters(CAVOK_VISIBILITY).with_modifier(DistanceModifier::MoreThan),
        );
        let sky = SkyCondition::Cavok;
        let e = &mut *self.essentials;
        merge_atomic!(
            self.warnings,
            e.cavok => cavok,
            e.visibility => visibility,
            e.sky_condition => sky,
        )
    }

    pub fn add_cloud_layer(
        &mut self,
        amount: AmountCode,
        height: Height,
        convective: ConvectiveCode,
    ) -> bool {
        if !self.merge_sky(SkyCondition::Clouds) {
            return false;
        }
        self.essentials.cloud_layers.push(CloudLayer {
            amount: basic::cloud_amount(amount),
            height,
            details: basic::cloud_details(convective),
        });
        true
    }

    /// NSC, NCD, CLR or SKC
    pub fn set_sky_condition(&mut self, sky: SkyCondition) -> bool {
        self.merge_sky(sky)
    }

    /// VVxxx: obscured sky
    pub fn set_vertical_visibility(&mut self, height: Height) -> bool {
        let sky = SkyCondition::Obscured;
        if self.cavok_conflict(&sky) {
            return false;
        }
        let e = &mut *self.essentials;
        merge_atomic!(
            self.warnings,
            e.sky_condition => sky,
            e.vertical_visibility => height,
        )
    }

    /// Weather phenomena, refused once NSW was reported
    pub fn add_weather(&mut self, weather: Weather) -> bool {
        if self.essentials.no_significant_weather {
            self.essentials.no_significant_weather = false;
            self.essentials.weather.clear();
            self.warnings.push(WarningMessage::InconsistentData);
            return false;
        }
        self.essentials.weather.push(weather);
        true
    }

    /// NSW: clears weather reported so far
    pub fn set_no_significant_weather(&mut self) {
        self.essentials.weather.clear();
        self.essentials.no_significant_weather = true;
    }

    /// Sky condition, other than CAVOK
    fn merge_sky(&mut self, sky: SkyCondition) -> bool {
        if self.cavok_conflict(&sky) {
            return false;
        }
        merge(&mut self.essentials.sky_condition, sky, &mut self.warnings)
    }

    fn merge_visibility(&mut self, range: DistanceRange) -> bool {
        let e = &*self.essentials;
        if e.cavok && conflicts(&e.visibility, &range) {
            self.reset_cavok();
            return false;
        }
        merge_range(&mut self.essentials.visibility, range, &mut self.warnings)
    }

    /// Returns true if given sky condition contradicts CAVOK,
    /// in which case CAVOK was reset.
    fn cavok_conflict(&mut self, sky: &SkyCondition) -> bool {
        let e = &*self.essentials;
        if !e.cavok || !conflicts(&e.sky_condition, sky) {
            return false;
        }
        self.reset_cavok();
        true
    }

    /// CAVOK is reset as a whole: flag, visibility and sky condition
    fn reset_cavok(&mut self) {
        let e = &mut *self.essentials;
        e.cavok = false;
        e.visibility = DistanceRange::default();
        e.sky_condition = SkyCondition::default();
        self.warnings.push(WarningMessage::DuplicatedData);
    }

    /// QNH
    pub fn set_sea_level_pressure(&mut self, pressure: Pressure) -> bool {
        merge(
            &mut self.essentials.sea_level_pressure,
            pressure,
            &mut self.warnings,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::summary::{CloudAmount, CloudDetails, Phenomena, Warning};
    fn knots(direction: u32, speed: u32) -> (value::Direction, Speed) {
        (value::Direction::Degrees(direction), Speed::knots(speed))
    }
    #[test]
    fn wind() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "23007KT"));
        let (direction, speed) = knots(230, 7);
        assert!(adapter.set_wind(&direction, speed, Speed::default()));
        assert!(adapter.set_wind(&direction, speed, Speed::default()));
        assert_eq!(essentials.wind_direction_degrees, Some(230));
        assert_eq!(essentials.wind_speed, Speed::knots(7));
        assert!(!essentials.wind_calm);
        assert!(list.is_empty());
    }
    #[test]
    fn calm_versus_directional() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "00000KT"));
        let (direction, speed) = knots(0, 0);
        assert!(adapter.set_wind(&direction, speed, Speed::default()));
        let (direction, speed) = knots(120, 5);
        assert!(!adapter.set_wind(&direction, speed, Speed::default()));
        assert!(!essentials.wind_calm);
        assert_eq!(essentials.wind_direction_degrees, None);
        assert_eq!(essentials.wind_speed, Speed::default());
        assert_eq!(list.len(), 1);
    }
    #[test]
    fn variable_versus_directional() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "VRB03KT"));
        assert!(adapter.set_wind(&value::Direction::Variable, Speed::knots(3), Speed::default()));
        assert!(essentials.wind_direction_variable);
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "VRB03KT"));
        let (direction, speed) = knots(90, 3);
        assert!(!adapter.set_wind(&direction, speed, Speed::default()));
        assert!(!essentials.wind_direction_variable);
        assert_eq!(list, vec![Warning::new(WarningMessage::DuplicatedData, "VRB03KT")]);
    }
    #[test]
    fn cavok() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "CAVOK"));
        assert!(adapter.set_cavok());
        assert!(adapter.set_cavok());
        assert!(!adapter.add_cloud_layer(AmountCode::Broken, Height::feet(2000), ConvectiveCode::None));
        assert!(!essentials.cavok);
        assert!(essentials.visibility.is_empty());
        assert_eq!(essentials.sky_condition, SkyCondition::Unknown);
        assert!(essentials.cloud_layers.is_empty());
        assert_eq!(list.len(), 1);
    }
    #[test]
    fn cavok_then_vertical_visibility() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "VV002"));
        assert!(adapter.set_cavok());
        assert!(!adapter.set_vertical_visibility(Height::feet(200)));
        assert!(!essentials.cavok);
        assert!(essentials.visibility.is_empty());
        assert_eq!(essentials.sky_condition, SkyCondition::Unknown);
        assert!(essentials.vertical_visibility.value.is_none());
        assert_eq!(list, vec![Warning::new(WarningMessage::DuplicatedData, "VV002")]);
    }
    #[test]
    fn cavok_then_visibility() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "4000"));
        assert!(adapter.set_cavok());
        assert!(!adapter.set_visibility(&value::Distance::meters(4000)));
        assert!(!essentials.cavok);
        assert!(essentials.visibility.is_empty());
        assert_eq!(essentials.sky_condition, SkyCondition::Unknown);
        assert_eq!(list.len(), 1);
    }
    #[test]
    fn cavok_then_sky_condition() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "NSC"));
        assert!(adapter.set_cavok());
        assert!(!adapter.set_sky_condition(SkyCondition::NoSignificantClouds));
        assert!(!essentials.cavok);
        assert!(essentials.visibility.is_empty());
        assert_eq!(essentials.sky_condition, SkyCondition::Unknown);
    }
    #[test]
    fn cavok_conflicting_visibility() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "CAVOK"));
        assert!(adapter.set_visibility(&value::Distance::meters(4000)));
        assert!(!adapter.set_cavok());
        assert!(!essentials.cavok);
        assert!(essentials.visibility.is_empty());
        assert_eq!(essentials.sky_condition, SkyCondition::Unknown);
    }
    #[test]
    fn cloud_layers() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "FEW020"));
        assert!(adapter.add_cloud_layer(AmountCode::Few, Height::feet(2000), ConvectiveCode::None));
        assert!(adapter.add_cloud_layer(
            AmountCode::Broken,
            Height::feet(4000),
            ConvectiveCode::Cumulonimbus
        ));
        assert!(!adapter.set_sky_condition(SkyCondition::NoSignificantClouds));
        assert_eq!(essentials.sky_condition, SkyCondition::Unknown);
        assert_eq!(
            essentials.cloud_layers[1],
            CloudLayer {
                amount: CloudAmount::Broken,
                height: Height::feet(4000),
                details: CloudDetails::Cumulonimbus,
            }
        );
    }
    #[test]
    fn vertical_visibility() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "VV002"));
        assert!(adapter.set_vertical_visibility(Height::feet(200)));
        assert_eq!(essentials.sky_condition, SkyCondition::Obscured);
        assert_eq!(essentials.vertical_visibility, Height::feet(200));
    }
    #[test]
    fn no_significant_weather() {
        let mut essentials = Essentials::default();
        let mut list = Vec::new();
        let mut adapter = EssentialsAdapter::new(&mut essentials, Warnings::new(&mut list, "RA"));
        assert!(adapter.add_weather(Weather::new(Phenomena::Mist)));
        adapter.set_no_significant_weather();
        assert!(!adapter.add_weather(Weather::new(Phenomena::Haze)));
        assert!(essentials.weather.is_empty());
        assert!(!essentials.no_significant_weather);
        assert_eq!(list[0].message, WarningMessage::InconsistentData);
    }
}
