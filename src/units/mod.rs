//! Unit-typed quantities.
//!
//! Every quantity stores a value-or-absent plus a unit tag. Absent is never
//! zero: `to_unit` on an absent quantity returns `None`.
mod cardinal;
mod distance;
mod height;
mod precipitation;
mod pressure;
mod runway;
mod speed;
mod temperature;
mod time;
mod wave_height;

pub use cardinal::{direction_to_cardinal, Cardinal};
pub use distance::{Distance, DistanceModifier, DistanceRange, DistanceUnit};
pub use height::{Ceiling, Height, HeightUnit};
pub use precipitation::{Precipitation, PrecipitationUnit};
pub use pressure::{Pressure, PressureUnit};
pub use runway::{Designator, Runway};
pub use speed::{Speed, SpeedUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use time::Time;
pub use wave_height::{StateOfSurface, WaveHeight, WaveHeightUnit};

/// A unit related to its canonical unit by a single multiplier
pub(crate) trait Linear: Copy + PartialEq {
    /// Multiplier from `self` to the canonical unit
    fn factor(&self) -> f64;
}

/// Converts `value` expressed in `from` into `to`, through the canonical unit
pub(crate) fn convert<U: Linear>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        value
    } else {
        value * from.factor() / to.factor()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn identity_conversion() {
        assert_eq!(convert(12.5, SpeedUnit::Knots, SpeedUnit::Knots), 12.5);
        assert_eq!(convert(1.0, DistanceUnit::Meters, DistanceUnit::Meters), 1.0);
    }
}
