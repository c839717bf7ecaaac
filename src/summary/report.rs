//! Report identity, lifecycle and diagnostics
use crate::units::Time;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of report
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportType {
    /// Report could not be identified, see [Report::error]
    #[default]
    Error,
    /// Routine aerodrome observation
    Metar,
    /// Unscheduled aerodrome observation
    Speci,
    /// Terminal aerodrome forecast
    Taf,
}

/// Terminal errors: any of these aborts collation of the report body
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportError {
    /// Report was identified and collated
    NoError,
    /// Metadata has not been processed yet
    #[default]
    NotProcessed,
    EmptyReport,
    UnknownReportType,
    ReportTooLarge,
    UnexpectedReportEnd,
    /// Report type, location or times are malformed
    ReportHeaderFormat,
    /// NIL or CNL report containing further groups
    NilOrCnlFormat,
    /// Group not allowed in this report type
    GroupNotAllowed,
}

/// Non fatal diagnostics
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WarningMessage {
    /// Contradictory flags or attributes
    InconsistentData,
    /// Same field set twice with different values: field was reset
    DuplicatedData,
    /// Group incompatible with current context
    InvalidGroup,
    /// Missing or conflicting required time
    InvalidTime,
}

impl std::fmt::Display for WarningMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InconsistentData => "inconsistent data".fmt(f),
            Self::DuplicatedData => "duplicated data".fmt(f),
            Self::InvalidGroup => "invalid group".fmt(f),
            Self::InvalidTime => "invalid time".fmt(f),
        }
    }
}

/// One diagnostic, attached to the group (or description) that triggered it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Warning {
    pub message: WarningMessage,
    /// Raw text of the triggering group, or a description
    pub id: String,
}

impl Warning {
    pub fn new(message: WarningMessage, id: &str) -> Self {
        Self {
            message,
            id: id.to_string(),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

/// Report identity and lifecycle
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    pub report_type: ReportType,
    /// NIL report
    pub missing: bool,
    /// CNL (cancelled) forecast
    pub cancelled: bool,
    /// COR (correction to a previously issued report)
    pub correctional: bool,
    /// Correction number, when the correction is numbered
    pub correction_number: u32,
    /// AMD (amended forecast)
    pub amended: bool,
    /// Fully automated report, no human intervention
    pub automated: bool,
    /// Report release time
    pub report_time: Option<Time>,
    /// Forecast validity, from
    pub applicable_from: Option<Time>,
    /// Forecast validity, until
    pub applicable_until: Option<Time>,
    pub error: ReportError,
    pub warnings: Vec<Warning>,
    /// Groups that could not be interpreted, in order of appearance
    pub plain_text: Vec<String>,
}
