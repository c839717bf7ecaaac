//! Cardinal and ordinal directions
use strum_macros::EnumString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the 8 cardinal / ordinal directions
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cardinal {
    #[default]
    #[strum(disabled)]
    NotSpecified,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl std::fmt::Display for Cardinal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotSpecified => Ok(()),
            Self::N => "N".fmt(f),
            Self::NE => "NE".fmt(f),
            Self::E => "E".fmt(f),
            Self::SE => "SE".fmt(f),
            Self::S => "S".fmt(f),
            Self::SW => "SW".fmt(f),
            Self::W => "W".fmt(f),
            Self::NW => "NW".fmt(f),
        }
    }
}

/// Buckets a direction in degrees into one of the 8 cardinal
/// directions. Degrees are wrapped into [0; 360[ first.
/// Sectors are 45° wide, north being [339; 23].
pub fn direction_to_cardinal(degrees: Option<i32>) -> Cardinal {
    const OCTANTS: [Cardinal; 8] = [
        Cardinal::N,
        Cardinal::NE,
        Cardinal::E,
        Cardinal::SE,
        Cardinal::S,
        Cardinal::SW,
        Cardinal::W,
        Cardinal::NW,
    ];
    match degrees {
        Some(degrees) => {
            let wrapped = degrees.rem_euclid(360);
            OCTANTS[(((wrapped + 21) / 45) % 8) as usize]
        },
        None => Cardinal::NotSpecified,
    }
}
