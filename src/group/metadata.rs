//! Report header, as identified by the report parser
use bitflags::bitflags;

use crate::units::Time;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Report type, as identified by the parser
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParsedType {
    #[default]
    Unknown,
    /// METAR or SPECI, see [Attributes::SPECI]
    Metar,
    Taf,
}

/// Parser error codes
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseError {
    #[default]
    None,
    EmptyReport,
    ExpectedReportTypeOrLocation,
    ExpectedLocation,
    ExpectedReportTime,
    ExpectedTimeSpan,
    UnexpectedReportEnd,
    UnexpectedGroupAfterNil,
    UnexpectedGroupAfterCnl,
    UnexpectedNilOrCnlInReportBody,
    AmdAllowedInTafOnly,
    CnlAllowedInTafOnly,
    MaintenanceIndicatorAllowedInMetarOnly,
    ReportTooLarge,
}

bitflags! {
    /// Report attributes found in the report header
    #[derive(Debug, Copy, Clone)]
    #[derive(PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Attributes: u16 {
        /// SPECI instead of METAR
        const SPECI = 0x0001;
        /// NOSPECI: station does not issue SPECI reports
        const NOSPECI = 0x0002;
        /// Fully automated report
        const AUTO = 0x0004;
        /// Automated station without precipitation discriminator
        const AO1 = 0x0008;
        /// AO1, augmented by an observer
        const AO1A = 0x0010;
        /// Automated station with precipitation discriminator
        const AO2 = 0x0020;
        /// AO2, augmented by an observer
        const AO2A = 0x0040;
        /// Missing report
        const NIL = 0x0080;
        /// Cancelled forecast
        const CNL = 0x0100;
        /// Amended forecast
        const AMD = 0x0200;
        /// Correction
        const COR = 0x0400;
        /// $: station requires maintenance
        const MAINTENANCE = 0x0800;
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::empty()
    }
}

/// Report header
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metadata {
    pub report_type: ParsedType,
    pub error: ParseError,
    pub attributes: Attributes,
    /// CCA, CCB...: 1, 2...; 0 if not numbered
    pub correction_number: u32,
    /// ICAO location indicator
    pub icao: String,
    pub report_time: Option<Time>,
    /// TAF validity, from
    pub time_from: Option<Time>,
    /// TAF validity, until
    pub time_until: Option<Time>,
}

impl Metadata {
    /// Builds a METAR header
    pub fn metar(icao: &str, report_time: Time) -> Self {
        Self {
            report_type: ParsedType::Metar,
            icao: icao.to_string(),
            report_time: Some(report_time),
            ..Default::default()
        }
    }
    /// Builds a TAF header
    pub fn taf(icao: &str, report_time: Option<Time>, from: Time, until: Time) -> Self {
        Self {
            report_type: ParsedType::Taf,
            icao: icao.to_string(),
            report_time,
            time_from: Some(from),
            time_until: Some(until),
            ..Default::default()
        }
    }
    /// Copies and returns [Metadata] with given attributes
    pub fn with_attributes(&self, attributes: Attributes) -> Self {
        let mut s = self.clone();
        s.attributes |= attributes;
        s
    }
    /// Copies and returns [Metadata] with given parser error
    pub fn with_error(&self, error: ParseError) -> Self {
        let mut s = self.clone();
        s.error = error;
        s
    }
    /// Copies and returns [Metadata] with given correction number
    pub fn with_correction_number(&self, number: u32) -> Self {
        let mut s = self.clone();
        s.correction_number = number;
        s
    }
}
