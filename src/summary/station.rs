//! Reporting station and data availability
use std::collections::BTreeSet;

use crate::units::{Cardinal, Runway};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type of automated station
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AutoType {
    #[default]
    None,
    /// AO1: no precipitation discriminator
    Ao1,
    /// AO1A: AO1, augmented by an observer
    Ao1a,
    /// AO2: with precipitation discriminator
    Ao2,
    /// AO2A: AO2, augmented by an observer
    Ao2a,
}

/// Categories of data the station declared as missing or unavailable
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MissingData {
    Wind,
    Visibility,
    /// RVRNO
    RunwayVisualRange,
    /// WX MISG
    Weather,
    /// PWINO: present weather identifier
    WeatherIdentifier,
    Clouds,
    Temperature,
    DewPoint,
    Pressure,
    /// SLPNO
    SeaLevelPressure,
    /// PNO: precipitation amount
    PrecipitationAmount,
    /// FZRANO: freezing rain sensor
    FreezingRainSensor,
    /// TSNO: lightning detector
    LightningDetector,
    /// CHINO: secondary ceiling height indicator
    SecondaryCeiling,
    /// CHINO RWY
    SecondaryCeilingRunway,
    /// CHINO followed by a direction
    SecondaryCeilingDirection,
    /// VISNO: secondary visibility sensor
    SecondaryVisibility,
    /// VISNO RWY
    SecondaryVisibilityRunway,
    /// VISNO followed by a direction
    SecondaryVisibilityDirection,
}

/// Station identity and data availability
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    /// ICAO location indicator
    pub icao: String,
    pub auto_type: AutoType,
    /// Maintenance indicator ($)
    pub requires_maintenance: bool,
    /// NOSPECI: station does not issue SPECI reports
    pub no_speci_reports: bool,
    /// NDV: no directional visibility variation can be reported
    pub no_visibility_directional_variation: bool,
    pub missing_data: BTreeSet<MissingData>,
    pub runways_no_ceiling_data: BTreeSet<Runway>,
    pub runways_no_visibility_data: BTreeSet<Runway>,
    pub directions_no_ceiling_data: BTreeSet<Cardinal>,
    pub directions_no_visibility_data: BTreeSet<Cardinal>,
}
