//! Report identity, from the report header
use itertools::Itertools;

use crate::{
    adapter::Warnings,
    group::{Attributes, Metadata, ParseError, ParsedType},
    summary::{AutoType, Report, ReportError, ReportType, Station, WarningMessage},
};

#[cfg(feature = "log")]
use log::{debug, error};

impl From<ParseError> for ReportError {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::None => Self::NoError,
            ParseError::EmptyReport => Self::EmptyReport,
            ParseError::ExpectedReportTypeOrLocation
            | ParseError::ExpectedLocation
            | ParseError::ExpectedReportTime
            | ParseError::ExpectedTimeSpan => Self::ReportHeaderFormat,
            ParseError::UnexpectedReportEnd => Self::UnexpectedReportEnd,
            ParseError::UnexpectedGroupAfterNil
            | ParseError::UnexpectedGroupAfterCnl
            | ParseError::UnexpectedNilOrCnlInReportBody => Self::NilOrCnlFormat,
            ParseError::AmdAllowedInTafOnly
            | ParseError::CnlAllowedInTafOnly
            | ParseError::MaintenanceIndicatorAllowedInMetarOnly => Self::GroupNotAllowed,
            ParseError::ReportTooLarge => Self::ReportTooLarge,
        }
    }
}

fn report_type(
    metadata: &Metadata,
    warnings: &mut Warnings,
) -> (ReportType, ReportError) {
    let error = ReportError::from(metadata.error);
    if error != ReportError::NoError {
        return (ReportType::Error, error);
    }
    let speci = metadata.attributes.contains(Attributes::SPECI);
    match metadata.report_type {
        ParsedType::Unknown => (ReportType::Error, ReportError::UnknownReportType),
        ParsedType::Metar if speci => (ReportType::Speci, error),
        ParsedType::Metar => (ReportType::Metar, error),
        ParsedType::Taf => {
            if speci {
                warnings.push_with(
                    WarningMessage::InconsistentData,
                    "metadata / SPECI flag in TAF report",
                );
            }
            (ReportType::Taf, error)
        },
    }
}

fn auto_type(attributes: Attributes, warnings: &mut Warnings) -> AutoType {
    let candidates = [
        (Attributes::AO1, AutoType::Ao1),
        (Attributes::AO1A, AutoType::Ao1a),
        (Attributes::AO2, AutoType::Ao2),
        (Attributes::AO2A, AutoType::Ao2a),
    ];
    let found = candidates
        .iter()
        .filter(|(flag, _)| attributes.contains(*flag))
        .map(|(_, auto_type)| *auto_type)
        .at_most_one();
    match found {
        Ok(auto_type) => auto_type.unwrap_or_default(),
        Err(_) => {
            warnings.push_with(
                WarningMessage::InconsistentData,
                "metadata / more than one automated station type",
            );
            AutoType::None
        },
    }
}

/// Fills report identity and station flags, once, before any group
pub(crate) fn collate_metadata(metadata: &Metadata, report: &mut Report, station: &mut Station) {
    let mut list = Vec::new();
    let mut warnings = Warnings::new(&mut list, "metadata");

    let (report_type, error) = report_type(metadata, &mut warnings);
    report.report_type = report_type;
    report.error = error;
    station.icao = metadata.icao.clone();
    report.report_time = metadata.report_time;

    if report_type == ReportType::Error {
        #[cfg(feature = "log")]
        error!("{}: report not collated: {:?}", metadata.icao, error);
        report.warnings.append(&mut list);
        return;
    }

    let attributes = metadata.attributes;
    let is_taf = report_type == ReportType::Taf;

    let missing = attributes.contains(Attributes::NIL);
    let mut cancelled = attributes.contains(Attributes::CNL);
    if missing && cancelled {
        warnings.push_with(
            WarningMessage::InconsistentData,
            "metadata / both NIL and CNL in report",
        );
        cancelled = false;
    }

    let correctional = attributes.contains(Attributes::COR);
    let mut amended = attributes.contains(Attributes::AMD);
    if amended && correctional {
        warnings.push_with(
            WarningMessage::InconsistentData,
            "metadata / both AMD and COR in report",
        );
        amended = false;
    }

    let mut correction_number = metadata.correction_number;
    if correction_number != 0 && !correctional {
        warnings.push_with(
            WarningMessage::InconsistentData,
            "metadata / correction number without COR",
        );
        correction_number = 0;
    }

    if !is_taf {
        if amended {
            warnings.push_with(
                WarningMessage::InconsistentData,
                "metadata / AMD in non-TAF report",
            );
            amended = false;
        }
        if cancelled {
            warnings.push_with(
                WarningMessage::InconsistentData,
                "metadata / CNL in non-TAF report",
            );
            cancelled = false;
        }
    }

    report.missing = missing;
    report.cancelled = cancelled;
    report.correctional = correctional;
    report.amended = amended;
    report.correction_number = correction_number;
    report.automated = attributes.contains(Attributes::AUTO);

    station.auto_type = auto_type(attributes, &mut warnings);
    station.requires_maintenance = attributes.contains(Attributes::MAINTENANCE);
    station.no_speci_reports = attributes.contains(Attributes::NOSPECI);

    let applicable = metadata.time_from.is_some() || metadata.time_until.is_some();
    if is_taf {
        if metadata.time_from.is_none() || metadata.time_until.is_none() {
            warnings.push_with(
                WarningMessage::InvalidTime,
                "metadata / TAF applicable time missing",
            );
        }
        report.applicable_from = metadata.time_from;
        report.applicable_until = metadata.time_until;
    } else {
        if metadata.report_time.is_none() {
            warnings.push_with(
                WarningMessage::InvalidTime,
                "metadata / report release time missing",
            );
        }
        if applicable {
            warnings.push_with(
                WarningMessage::InvalidTime,
                "metadata / applicable time in non-TAF report",
            );
        }
    }

    #[cfg(feature = "log")]
    debug!("{}: {:?} report", metadata.icao, report_type);

    report.warnings.append(&mut list);
}
