//! Conversion factors, towards the canonical unit of each quantity

/// Speed factors, canonical unit is [m.s^-1]
pub(crate) struct SpeedFactor;

impl SpeedFactor {
    pub const MPS: f64 = 1.0;
    pub const KNOT: f64 = 1.0 / 1.943844;
    pub const KMH: f64 = 1.0 / 3.6;
    pub const MPH: f64 = 1.0 / 2.236936;
}

/// Length factors, canonical unit is [m]
pub(crate) struct LengthFactor;

impl LengthFactor {
    pub const METER: f64 = 1.0;
    pub const FOOT: f64 = 0.3048;
    pub const STATUTE_MILE: f64 = 1609.344;
    pub const NAUTICAL_MILE: f64 = 1852.0;
}

/// Pressure factors, canonical unit is [hPa]
pub(crate) struct PressureFactor;

impl PressureFactor {
    pub const HPA: f64 = 1.0;
    pub const INHG: f64 = 33.8639;
    pub const MMHG: f64 = 1.3332239;
}

/// Precipitation factors, canonical unit is [mm]
pub(crate) struct PrecipitationFactor;

impl PrecipitationFactor {
    pub const MM: f64 = 1.0;
    pub const INCH: f64 = 25.4;
}

/// Wave height factors, canonical unit is [dm]
pub(crate) struct WaveHeightFactor;

impl WaveHeightFactor {
    pub const METER: f64 = 10.0;
    pub const FOOT: f64 = 3.048;
}

/// Magnus formula coefficients, used to derive relative humidity
pub(crate) struct Magnus;

impl Magnus {
    pub const A: f64 = 17.625;
    pub const B: f64 = 243.04;
}

/// Bounds of qualitative distances, in [nm]
pub(crate) struct QualitativeDistance;

impl QualitativeDistance {
    /// VC
    pub const VICINITY: (f32, f32) = (5.0, 10.0);
    /// DSNT
    pub const DISTANT: (f32, f32) = (10.0, 30.0);
}

/// Visibility implied by CAVOK, in [m], always "more than"
pub(crate) const CAVOK_VISIBILITY: f32 = 10_000.0;
