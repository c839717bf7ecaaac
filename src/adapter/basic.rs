//! Stateless conversions from parser values into unit-typed quantities
//! and classified phenomena.
use num_traits::FromPrimitive;

use crate::{
    constants::{Magnus, QualitativeDistance},
    group::{
        value, AmountCode, ConvectiveCode, Descriptor, LightningGroup, Qualifier, RvrTendency,
        VicinityGroup, WeatherCode, WeatherPhenomena,
    },
    summary::{
        BrakingAction, CloudAmount, CloudDetails, CloudGenus, ContaminationExtent, Deposits,
        HighCloudLayer, IcingKind, IcingSeverity, Lightning, LowCloudLayer, MidCloudLayer,
        ObservedPhenomena, Phenomena, PrecipitationKind, PressureTendency, RvrTrend,
        TurbulenceFrequency, TurbulenceLocation, TurbulenceSeverity, Vicinity, Weather,
    },
    units::{
        direction_to_cardinal, Cardinal, Distance, DistanceRange, DistanceUnit, Precipitation,
        Temperature, TemperatureUnit, WaveHeight,
    },
};

/// Converts any reported distance. Qualitative distances (VC, DSNT)
/// produce a ranged result, exact distances a single valued one.
pub(crate) fn distance_range(distance: &value::Distance) -> DistanceRange {
    let ranged = |(min, max): (f32, f32)| {
        DistanceRange::ranged(
            Distance::new(min, DistanceUnit::NauticalMiles),
            Distance::new(max, DistanceUnit::NauticalMiles),
        )
    };
    match distance {
        value::Distance::Vicinity => ranged(QualitativeDistance::VICINITY),
        value::Distance::Distant => ranged(QualitativeDistance::DISTANT),
        _ => DistanceRange::prevailing(self::distance(distance)),
    }
}

/// Converts an exact distance. Qualitative distances are absent.
pub(crate) fn distance(distance: &value::Distance) -> Distance {
    match *distance {
        value::Distance::Value {
            integer,
            fraction,
            unit,
            modifier,
        } => {
            let fraction = match fraction {
                Some((_, 0)) => return Distance::default(),
                Some((num, den)) => Some(num as f32 / den as f32),
                None => None,
            };
            let value = match (integer, fraction) {
                (None, None) => return Distance::default(),
                (integer, fraction) => {
                    integer.unwrap_or(0) as f32 + fraction.unwrap_or(0.0)
                },
            };
            Distance::new(value, unit).with_modifier(modifier)
        },
        _ => Distance::default(),
    }
}

/// Direction in degrees, if reported as such
pub(crate) fn direction_degrees(direction: &value::Direction) -> Option<u32> {
    match direction {
        value::Direction::Degrees(degrees) => Some(*degrees),
        _ => None,
    }
}

pub(crate) fn cardinal(direction: &value::Direction) -> Cardinal {
    match direction {
        value::Direction::Degrees(degrees) => direction_to_cardinal(Some(*degrees as i32)),
        value::Direction::Cardinal(cardinal) => *cardinal,
        _ => Cardinal::NotSpecified,
    }
}

/// Cardinal directions of a direction list, unspecified entries skipped
pub(crate) fn cardinals(directions: &[value::Direction]) -> Vec<Cardinal> {
    directions
        .iter()
        .map(cardinal)
        .filter(|c| *c != Cardinal::NotSpecified)
        .collect()
}

pub(crate) fn lightning(group: &LightningGroup) -> Lightning {
    Lightning {
        frequency: group.frequency,
        kinds: group.kinds.clone(),
        distance: distance_range(&group.distance),
        directions: cardinals(&group.directions),
    }
}

pub(crate) fn vicinity(group: &VicinityGroup) -> Vicinity {
    Vicinity {
        phenomena: group.phenomena,
        distance: distance_range(&group.distance),
        directions: cardinals(&group.directions),
        moving: cardinal(&group.moving),
    }
}

pub(crate) fn temperature(temperature: &value::Temperature) -> Temperature {
    match temperature.value {
        Some(value) => Temperature::celsius(value),
        None => Temperature::default(),
    }
}

/// Sea state codes resolve to the upper bound of their range, in decimeters
pub(crate) fn wave_height(wave_height: &value::WaveHeight) -> WaveHeight {
    const STATE_UPPER_BOUNDS: [u32; 10] = [0, 1, 5, 12, 25, 40, 60, 90, 140, 141];
    match wave_height {
        value::WaveHeight::Decimeters(dm) => WaveHeight::meters(*dm as f32 / 10.0),
        value::WaveHeight::StateCode(code) => match STATE_UPPER_BOUNDS.get(*code as usize) {
            Some(dm) => WaveHeight::meters(*dm as f32 / 10.0),
            None => WaveHeight::default(),
        },
        value::WaveHeight::NotReported => WaveHeight::default(),
    }
}

pub(crate) fn cloud_amount(amount: AmountCode) -> CloudAmount {
    match amount {
        AmountCode::Few => CloudAmount::Few,
        AmountCode::Scattered => CloudAmount::Scattered,
        AmountCode::Broken => CloudAmount::Broken,
        AmountCode::Overcast => CloudAmount::Overcast,
        AmountCode::NotReported => CloudAmount::NotReported,
    }
}

pub(crate) fn cloud_details(convective: ConvectiveCode) -> CloudDetails {
    match convective {
        ConvectiveCode::None => CloudDetails::None,
        ConvectiveCode::Cumulonimbus => CloudDetails::Cumulonimbus,
        ConvectiveCode::ToweringCumulus => CloudDetails::ToweringCumulus,
        ConvectiveCode::NotReported => CloudDetails::NotReported,
    }
}

pub(crate) fn cloud_genus(code: &str) -> Option<CloudGenus> {
    code.parse::<CloudGenus>().ok()
}

/// Synoptic cloud layers: a missing digit ("/") means not observable
pub(crate) fn low_cloud_layer(code: Option<u8>) -> LowCloudLayer {
    match code {
        Some(code) if code <= 9 => LowCloudLayer::from_u8(code).unwrap_or_default(),
        Some(_) => LowCloudLayer::Unknown,
        None => LowCloudLayer::NotObservable,
    }
}

pub(crate) fn mid_cloud_layer(code: Option<u8>) -> MidCloudLayer {
    match code {
        Some(code) if code <= 9 => MidCloudLayer::from_u8(code).unwrap_or_default(),
        Some(_) => MidCloudLayer::Unknown,
        None => MidCloudLayer::NotObservable,
    }
}

pub(crate) fn high_cloud_layer(code: Option<u8>) -> HighCloudLayer {
    match code {
        Some(code) if code <= 9 => HighCloudLayer::from_u8(code).unwrap_or_default(),
        Some(_) => HighCloudLayer::Unknown,
        None => HighCloudLayer::NotObservable,
    }
}

pub(crate) fn pressure_tendency(code: Option<u8>) -> PressureTendency {
    match code {
        Some(code) if code <= 8 => PressureTendency::from_u8(code).unwrap_or_default(),
        _ => PressureTendency::NotReported,
    }
}

pub(crate) fn rvr_trend(tendency: RvrTendency) -> RvrTrend {
    match tendency {
        RvrTendency::NotReported => RvrTrend::NotReported,
        RvrTendency::Upward => RvrTrend::Upward,
        RvrTendency::Neutral => RvrTrend::Neutral,
        RvrTendency::Downward => RvrTrend::Downward,
    }
}

pub(crate) fn deposits(code: Option<u8>) -> Deposits {
    code.and_then(Deposits::from_u8)
        .filter(|d| *d != Deposits::NotReported)
        .unwrap_or_default()
}

pub(crate) fn contamination_extent(code: Option<u8>) -> ContaminationExtent {
    match code {
        None => ContaminationExtent::NotReported,
        Some(0) => ContaminationExtent::None,
        Some(1) => ContaminationExtent::LessThan11Percent,
        Some(2) => ContaminationExtent::From11To25Percent,
        Some(5) => ContaminationExtent::From26To50Percent,
        Some(9) => ContaminationExtent::MoreThan50Percent,
        Some(_) => ContaminationExtent::Reserved,
    }
}

/// Deposit depth, and whether the code declares the runway not operational
pub(crate) fn deposit_depth(code: Option<u8>) -> (Precipitation, bool) {
    match code {
        Some(depth @ 0..=90) => (Precipitation::mm(depth as f32), false),
        Some(code @ 92..=98) => (Precipitation::mm((code as f32 - 90.0) * 50.0), false),
        Some(99) => (Precipitation::default(), true),
        _ => (Precipitation::default(), false),
    }
}

/// Friction coefficient, braking action, and whether friction is unreliable
pub(crate) fn friction(code: Option<u8>) -> (Option<f32>, BrakingAction, bool) {
    match code {
        Some(coef @ 0..=90) => (Some(coef as f32 / 100.0), BrakingAction::None, false),
        Some(91) => (None, BrakingAction::Poor, false),
        Some(92) => (None, BrakingAction::MediumPoor, false),
        Some(93) => (None, BrakingAction::Medium, false),
        Some(94) => (None, BrakingAction::MediumGood, false),
        Some(95) => (None, BrakingAction::Good, false),
        Some(99) => (None, BrakingAction::None, true),
        _ => (None, BrakingAction::None, false),
    }
}

/// Icing intensity and type, WMO code table 1738
pub(crate) fn icing(code: u8) -> Option<(IcingSeverity, IcingKind)> {
    let severity = match code {
        0 => return Some((IcingSeverity::NoneOrTrace, IcingKind::NotSpecified)),
        1..=3 => IcingSeverity::Light,
        4..=6 => IcingSeverity::Moderate,
        7..=9 => IcingSeverity::Severe,
        _ => return None,
    };
    let kind = match (code - 1) % 3 {
        0 => IcingKind::NotSpecified,
        1 => IcingKind::RimeInCloud,
        _ => IcingKind::ClearInPrecipitation,
    };
    Some((severity, kind))
}

/// Turbulence intensity, location and frequency, WMO code table 0300
pub(crate) fn turbulence(
    code: char,
) -> Option<(TurbulenceSeverity, TurbulenceLocation, TurbulenceFrequency)> {
    use TurbulenceFrequency::{Frequent, Occasional};
    use TurbulenceLocation::{InClearAir, InCloud};
    let unspecified = (TurbulenceLocation::NotSpecified, TurbulenceFrequency::NotSpecified);
    let (severity, (location, frequency)) = match code {
        '0' => (TurbulenceSeverity::None, unspecified),
        '1' => (TurbulenceSeverity::Light, unspecified),
        '2' => (TurbulenceSeverity::Moderate, (InClearAir, Occasional)),
        '3' => (TurbulenceSeverity::Moderate, (InClearAir, Frequent)),
        '4' => (TurbulenceSeverity::Moderate, (InCloud, Occasional)),
        '5' => (TurbulenceSeverity::Moderate, (InCloud, Frequent)),
        '6' => (TurbulenceSeverity::Severe, (InClearAir, Occasional)),
        '7' => (TurbulenceSeverity::Severe, (InClearAir, Frequent)),
        '8' => (TurbulenceSeverity::Severe, (InCloud, Occasional)),
        '9' => (TurbulenceSeverity::Severe, (InCloud, Frequent)),
        'X' => (TurbulenceSeverity::Extreme, unspecified),
        _ => return None,
    };
    Some((severity, location, frequency))
}

/// Relative humidity (Magnus formula), truncated to a whole percent
pub(crate) fn relative_humidity(air: &Temperature, dew_point: &Temperature) -> Option<u32> {
    let t = air.to_unit(TemperatureUnit::Celsius)? as f64;
    let td = dew_point.to_unit(TemperatureUnit::Celsius)? as f64;
    let saturation = |t: f64| (Magnus::A * t / (Magnus::B + t)).exp();
    let rh = 100.0 * saturation(td) / saturation(t);
    if rh.is_finite() && rh >= 0.0 {
        Some(rh as u32)
    } else {
        None
    }
}

fn precipitation_kind(code: WeatherCode) -> Option<PrecipitationKind> {
    match code {
        WeatherCode::Drizzle => Some(PrecipitationKind::Drizzle),
        WeatherCode::Rain => Some(PrecipitationKind::Rain),
        WeatherCode::Snow => Some(PrecipitationKind::Snow),
        WeatherCode::SnowGrains => Some(PrecipitationKind::SnowGrains),
        WeatherCode::IceCrystals => Some(PrecipitationKind::IceCrystals),
        WeatherCode::IcePellets => Some(PrecipitationKind::IcePellets),
        WeatherCode::Hail => Some(PrecipitationKind::Hail),
        WeatherCode::SmallHail => Some(PrecipitationKind::SmallHail),
        WeatherCode::Undetermined => Some(PrecipitationKind::Undetermined),
        _ => None,
    }
}

/// Non precipitation phenomena, matched on the exact code sequence
const PHENOMENA: &[(Qualifier, Descriptor, &[WeatherCode], Phenomena)] = {
    use Descriptor as D;
    use Phenomena as P;
    use Qualifier as Q;
    use WeatherCode as W;
    &[
        (Q::None, D::None, &[W::NotReported], P::NotReported),
        (Q::None, D::None, &[W::Mist], P::Mist),
        (Q::None, D::None, &[W::Fog], P::Fog),
        (Q::None, D::Shallow, &[W::Fog], P::FogShallow),
        (Q::None, D::Partial, &[W::Fog], P::FogPartial),
        (Q::None, D::Patches, &[W::Fog], P::FogPatches),
        (Q::None, D::Freezing, &[W::Fog], P::FogFreezing),
        (Q::None, D::None, &[W::Smoke], P::Smoke),
        (Q::None, D::None, &[W::VolcanicAsh], P::VolcanicAsh),
        (Q::None, D::None, &[W::Dust], P::Dust),
        (Q::None, D::LowDrifting, &[W::Dust], P::DustDrifting),
        (Q::None, D::Blowing, &[W::Dust], P::DustBlowing),
        (Q::None, D::None, &[W::Sand], P::Sand),
        (Q::None, D::LowDrifting, &[W::Sand], P::SandDrifting),
        (Q::None, D::Blowing, &[W::Sand], P::SandBlowing),
        (Q::None, D::LowDrifting, &[W::Snow], P::SnowDrifting),
        (Q::None, D::Blowing, &[W::Snow], P::SnowBlowing),
        (Q::None, D::Blowing, &[W::Spray], P::SprayBlowing),
        (Q::None, D::None, &[W::Haze], P::Haze),
        (Q::None, D::None, &[W::DustWhirls], P::DustWhirls),
        (Q::None, D::None, &[W::Squalls], P::Squalls),
        (Q::None, D::None, &[W::FunnelCloud], P::FunnelCloud),
        (Q::Heavy, D::None, &[W::FunnelCloud], P::Tornado),
        (Q::None, D::None, &[W::Duststorm], P::Duststorm),
        (Q::Heavy, D::None, &[W::Duststorm], P::DuststormHeavy),
        (Q::None, D::None, &[W::Sandstorm], P::Sandstorm),
        (Q::Heavy, D::None, &[W::Sandstorm], P::SandstormHeavy),
        (Q::None, D::None, &[W::Duststorm, W::Sandstorm], P::DuststormSandstorm),
        (Q::None, D::None, &[W::Sandstorm, W::Duststorm], P::DuststormSandstorm),
        (Q::Heavy, D::None, &[W::Duststorm, W::Sandstorm], P::DuststormSandstormHeavy),
        (Q::Heavy, D::None, &[W::Sandstorm, W::Duststorm], P::DuststormSandstormHeavy),
        (Q::None, D::Thunderstorm, &[], P::Thunderstorm),
    ]
};

/// Precipitation phenomena, by intensity and descriptor
const PRECIPITATION: &[(Qualifier, Descriptor, Phenomena)] = {
    use Descriptor as D;
    use Phenomena as P;
    use Qualifier as Q;
    &[
        (Q::Light, D::None, P::PrecipitationLight),
        (Q::None, D::None, P::Precipitation),
        (Q::Heavy, D::None, P::PrecipitationHeavy),
        (Q::Light, D::Freezing, P::PrecipitationFreezingLight),
        (Q::None, D::Freezing, P::PrecipitationFreezing),
        (Q::Heavy, D::Freezing, P::PrecipitationFreezingHeavy),
        (Q::Light, D::Showers, P::PrecipitationShowersLight),
        (Q::None, D::Showers, P::PrecipitationShowers),
        (Q::Heavy, D::Showers, P::PrecipitationShowersHeavy),
        (Q::Light, D::Thunderstorm, P::ThunderstormPrecipitationLight),
        (Q::None, D::Thunderstorm, P::ThunderstormPrecipitation),
        (Q::Heavy, D::Thunderstorm, P::ThunderstormPrecipitationHeavy),
    ]
};

/// Phenomena in vicinity (VC qualifier)
const VICINITY: &[(Descriptor, &[WeatherCode], ObservedPhenomena)] = {
    use Descriptor as D;
    use ObservedPhenomena as O;
    use WeatherCode as W;
    &[
        (D::Showers, &[], O::PrecipitationInVicinity),
        (D::Thunderstorm, &[], O::Thunderstorm),
        (D::None, &[W::Fog], O::Fog),
        (D::Blowing, &[W::Snow], O::BlowingSnow),
        (D::Blowing, &[W::Sand], O::BlowingSand),
        (D::Blowing, &[W::Dust], O::BlowingDust),
        (D::None, &[W::DustWhirls], O::DustWhirls),
        (D::None, &[W::FunnelCloud], O::FunnelCloud),
        (D::None, &[W::VolcanicAsh], O::VolcanicAsh),
        (D::None, &[W::Sandstorm], O::Sandstorm),
        (D::None, &[W::Duststorm], O::Duststorm),
    ]
};

/// Classifies a weather group. Returns None if the combination is not
/// a known weather phenomena: it may still be a phenomena in vicinity.
pub(crate) fn weather(phenomena: &WeatherPhenomena) -> Option<Weather> {
    let (qualifier, descriptor, codes) = (
        phenomena.qualifier,
        phenomena.descriptor,
        phenomena.codes.as_slice(),
    );
    if let Some((_, _, _, p)) = PHENOMENA
        .iter()
        .find(|(q, d, c, _)| *q == qualifier && *d == descriptor && *c == codes)
    {
        return Some(Weather::new(*p));
    }
    if codes.is_empty() {
        return None;
    }
    let precipitation = codes
        .iter()
        .map(|code| precipitation_kind(*code))
        .collect::<Option<Vec<_>>>()?;
    PRECIPITATION
        .iter()
        .find(|(q, d, _)| *q == qualifier && *d == descriptor)
        .map(|(_, _, p)| Weather::with_precipitation(*p, &precipitation))
}

/// Classifies a VC weather group
pub(crate) fn vicinity_phenomena(phenomena: &WeatherPhenomena) -> Option<ObservedPhenomena> {
    if phenomena.qualifier != Qualifier::Vicinity {
        return None;
    }
    VICINITY
        .iter()
        .find(|(d, c, _)| *d == phenomena.descriptor && *c == phenomena.codes.as_slice())
        .map(|(_, _, o)| *o)
}
