//! Weather phenomena codes, as classified by the report parser
use strum_macros::EnumString;

use crate::units::Time;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Intensity or proximity qualifier
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Qualifier {
    /// Moderate intensity, or not applicable
    #[default]
    #[strum(serialize = "")]
    None,
    #[strum(serialize = "-")]
    Light,
    #[strum(serialize = "+")]
    Heavy,
    #[strum(serialize = "VC")]
    Vicinity,
}

/// Weather descriptor
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Descriptor {
    #[default]
    #[strum(serialize = "")]
    None,
    #[strum(serialize = "MI")]
    Shallow,
    #[strum(serialize = "PR")]
    Partial,
    #[strum(serialize = "BC")]
    Patches,
    #[strum(serialize = "DR")]
    LowDrifting,
    #[strum(serialize = "BL")]
    Blowing,
    #[strum(serialize = "SH")]
    Showers,
    #[strum(serialize = "TS")]
    Thunderstorm,
    #[strum(serialize = "FZ")]
    Freezing,
}

/// Weather phenomena code
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeatherCode {
    #[strum(serialize = "//")]
    NotReported,
    #[strum(serialize = "DZ")]
    Drizzle,
    #[strum(serialize = "RA")]
    Rain,
    #[strum(serialize = "SN")]
    Snow,
    #[strum(serialize = "SG")]
    SnowGrains,
    #[strum(serialize = "IC")]
    IceCrystals,
    #[strum(serialize = "PL")]
    IcePellets,
    #[strum(serialize = "GR")]
    Hail,
    #[strum(serialize = "GS")]
    SmallHail,
    #[strum(serialize = "UP")]
    Undetermined,
    #[strum(serialize = "BR")]
    Mist,
    #[strum(serialize = "FG")]
    Fog,
    #[strum(serialize = "FU")]
    Smoke,
    #[strum(serialize = "VA")]
    VolcanicAsh,
    #[strum(serialize = "DU")]
    Dust,
    #[strum(serialize = "SA")]
    Sand,
    #[strum(serialize = "HZ")]
    Haze,
    #[strum(serialize = "PY")]
    Spray,
    #[strum(serialize = "PO")]
    DustWhirls,
    #[strum(serialize = "SQ")]
    Squalls,
    #[strum(serialize = "FC")]
    FunnelCloud,
    #[strum(serialize = "SS")]
    Sandstorm,
    #[strum(serialize = "DS")]
    Duststorm,
}

impl WeatherCode {
    /// Returns true for precipitation codes
    pub fn is_precipitation(&self) -> bool {
        matches!(
            self,
            Self::Drizzle
                | Self::Rain
                | Self::Snow
                | Self::SnowGrains
                | Self::IceCrystals
                | Self::IcePellets
                | Self::Hail
                | Self::SmallHail
                | Self::Undetermined
        )
    }
}

/// Qualifier, descriptor and codes of one weather group (e.g. "-SHRASN")
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherPhenomena {
    pub qualifier: Qualifier,
    pub descriptor: Descriptor,
    pub codes: Vec<WeatherCode>,
}

impl WeatherPhenomena {
    /// Builds [WeatherPhenomena] from its parts
    pub fn new(qualifier: Qualifier, descriptor: Descriptor, codes: &[WeatherCode]) -> Self {
        Self {
            qualifier,
            descriptor,
            codes: codes.to_vec(),
        }
    }
}

impl std::str::FromStr for WeatherPhenomena {
    type Err = crate::error::ParsingError;
    /// Decodes a weather group like "+TSRAGR", "VCSH" or "BCFG"
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut content = content.trim();
        let mut qualifier = Qualifier::None;
        for (prefix, q) in [
            ("-", Qualifier::Light),
            ("+", Qualifier::Heavy),
            ("VC", Qualifier::Vicinity),
        ] {
            if let Some(stripped) = content.strip_prefix(prefix) {
                qualifier = q;
                content = stripped;
                break;
            }
        }
        let mut descriptor = Descriptor::None;
        if content.len() >= 2 && content.is_char_boundary(2) {
            if let Ok(d) = content[..2].parse::<Descriptor>() {
                descriptor = d;
                content = &content[2..];
            }
        }
        let mut codes = Vec::with_capacity(content.len() / 2);
        while !content.is_empty() {
            if content.len() < 2 || !content.is_char_boundary(2) {
                return Err(crate::error::ParsingError::Weather(content.to_string()));
            }
            codes.push(content[..2].parse::<WeatherCode>()?);
            content = &content[2..];
        }
        Ok(Self {
            qualifier,
            descriptor,
            codes,
        })
    }
}

/// Begin or end of a phenomena, in a weather event remark
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventCode {
    /// "B"
    Began,
    /// "E"
    Ended,
}

/// One weather event: phenomena began or ended at given time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherEventCode {
    pub phenomena: WeatherPhenomena,
    pub event: EventCode,
    pub time: Time,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn phenomena_from_str() {
        let wx = WeatherPhenomena::from_str("+TSRAGR").unwrap();
        assert_eq!(wx.qualifier, Qualifier::Heavy);
        assert_eq!(wx.descriptor, Descriptor::Thunderstorm);
        assert_eq!(wx.codes, vec![WeatherCode::Rain, WeatherCode::Hail]);

        let wx = WeatherPhenomena::from_str("VCSH").unwrap();
        assert_eq!(wx.qualifier, Qualifier::Vicinity);
        assert_eq!(wx.descriptor, Descriptor::Showers);
        assert!(wx.codes.is_empty());

        let wx = WeatherPhenomena::from_str("BR").unwrap();
        assert_eq!(wx, WeatherPhenomena::new(Qualifier::None, Descriptor::None, &[WeatherCode::Mist]));

        assert!(WeatherPhenomena::from_str("RAX").is_err());
        assert!(WeatherPhenomena::from_str("XX").is_err());
    }
    #[test]
    fn precipitation_codes() {
        assert!(WeatherCode::SmallHail.is_precipitation());
        assert!(!WeatherCode::Fog.is_precipitation());
    }
}
