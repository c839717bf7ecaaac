use crate::group::{
    value::{Direction, Distance, Temperature},
    AmountCode, CloudGroup, ConvectiveCode, Group, GroupKind, Keyword, LayerForecastGroup,
    LayerKind, PressureGroup, TemperatureGroup, TrendGroup, TrendKind, VicinityGroup,
    VisibilityGroup, WeatherGroup, WeatherPhenomena, WindGroup,
};
use crate::summary::{ObservedPhenomena, Summary, WarningMessage};
use crate::units::{Height, Pressure, Speed, Time};

use rand::{seq::SliceRandom, Rng};
use std::str::FromStr;

/// Builds a [Time] from "DDHHMM" or "HHMM"
#[macro_export]
macro_rules! time {
    ($content: expr) => {
        <$crate::units::Time as std::str::FromStr>::from_str($content).unwrap()
    };
}

/// Builds a group list from (kind, raw) pairs
#[macro_export]
macro_rules! groups {
    ($(($kind: expr, $raw: expr)),* $(,)?) => {
        vec![$($crate::group::Group::new($kind, $raw)),*]
    };
}

/*
 * Body groups
 */
pub fn wind(direction: u32, speed: u32, raw: &str) -> Group {
    wind_gusting(direction, speed, None, raw)
}

pub fn wind_gusting(direction: u32, speed: u32, gust: Option<u32>, raw: &str) -> Group {
    Group::new(
        GroupKind::Wind(WindGroup::Surface {
            direction: Direction::Degrees(direction),
            speed: Speed::knots(speed),
            gust: gust.map(Speed::knots).unwrap_or_default(),
        }),
        raw,
    )
}

pub fn variable_sector(from: u32, to: u32, raw: &str) -> Group {
    Group::new(
        GroupKind::Wind(WindGroup::VariableSector {
            from: Direction::Degrees(from),
            to: Direction::Degrees(to),
        }),
        raw,
    )
}

pub fn visibility(meters: u32, raw: &str) -> Group {
    Group::new(
        GroupKind::Visibility(VisibilityGroup::Prevailing(Distance::meters(meters))),
        raw,
    )
}

pub fn keyword(keyword: Keyword, raw: &str) -> Group {
    Group::new(GroupKind::Keyword(keyword), raw)
}

pub fn cavok() -> Group {
    keyword(Keyword::Cavok, "CAVOK")
}

pub fn cloud_layer(amount: AmountCode, hundreds_of_feet: u32, raw: &str) -> Group {
    Group::new(
        GroupKind::Cloud(CloudGroup::Layer {
            amount,
            height: Height::feet(hundreds_of_feet * 100),
            convective: ConvectiveCode::None,
        }),
        raw,
    )
}

/// Weather group, decoded from its raw text
pub fn weather(raw: &str) -> Group {
    let phenomena = WeatherPhenomena::from_str(raw).unwrap();
    Group::new(GroupKind::Weather(WeatherGroup::Current(phenomena)), raw)
}

pub fn temperature(air: i32, dew_point: i32, raw: &str) -> Group {
    Group::new(
        GroupKind::Temperature(TemperatureGroup {
            air: Temperature::new(air),
            dew_point: Temperature::new(dew_point),
        }),
        raw,
    )
}

pub fn qnh(hpa: f32, raw: &str) -> Group {
    Group::new(
        GroupKind::Pressure(PressureGroup::ObservedQnh(Pressure::hpa(hpa))),
        raw,
    )
}

/*
 * Forecast groups
 */
pub fn trend(kind: TrendKind, raw: &str) -> Group {
    Group::new(GroupKind::Trend(TrendGroup::new(kind)), raw)
}

/// "DDHH/DDHH" time span
pub fn time_span(from: Time, until: Time, raw: &str) -> Group {
    Group::new(GroupKind::Trend(TrendGroup::time_span(from, until)), raw)
}

pub fn icing(code: u8, base: u32, top: u32, raw: &str) -> Group {
    Group::new(
        GroupKind::LayerForecast(LayerForecastGroup {
            kind: LayerKind::Icing(code),
            base: Height::feet(base),
            top: Height::feet(top),
        }),
        raw,
    )
}

pub fn turbulence(code: char, base: u32, top: u32, raw: &str) -> Group {
    Group::new(
        GroupKind::LayerForecast(LayerForecastGroup {
            kind: LayerKind::Turbulence(code),
            base: Height::feet(base),
            top: Height::feet(top),
        }),
        raw,
    )
}

pub fn lowest_qnh(inhg: f32, raw: &str) -> Group {
    Group::new(
        GroupKind::Pressure(PressureGroup::ForecastLowestQnh(Pressure::inhg(inhg))),
        raw,
    )
}

/// Phenomena in vicinity remark, without direction
pub fn vicinity(phenomena: ObservedPhenomena, raw: &str) -> Group {
    Group::new(
        GroupKind::Vicinity(VicinityGroup {
            phenomena,
            distance: Distance::Vicinity,
            directions: Vec::new(),
            moving: Direction::NotReported,
        }),
        raw,
    )
}

/*
 * Checks
 */

/// Returns the warnings of given summary, as (message, group) pairs
pub fn warnings(summary: &Summary) -> Vec<(WarningMessage, &str)> {
    summary
        .report
        .warnings
        .iter()
        .map(|w| (w.message, w.id.as_str()))
        .collect()
}

/// Returns a randomly shuffled copy of given groups
pub fn shuffled(groups: &[Group]) -> Vec<Group> {
    let mut groups = groups.to_vec();
    groups.shuffle(&mut rand::thread_rng());
    groups
}

/// Returns given groups with one random pair of entries swapped
pub fn random_swap(groups: &[Group]) -> Vec<Group> {
    let mut groups = groups.to_vec();
    if groups.len() > 1 {
        let mut rng = rand::thread_rng();
        let a = rng.gen_range(0..groups.len());
        let b = rng.gen_range(0..groups.len());
        groups.swap(a, b);
    }
    groups
}
