#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate num_derive;

pub mod collate;
pub mod error;
pub mod group;
pub mod summary;
pub mod units;

mod adapter;
mod constants;

#[cfg(test)]
mod tests;

pub use collate::{collate, Collator};

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        collate::{collate, Collator},
        error::ParsingError,
        group::{
            value, Attributes, Group, GroupKind, Metadata, ParseError, ParsedType, TrendGroup,
            TrendKind,
        },
        summary::{
            Aerodrome, Current, Essentials, Forecast, Historical, Report, ReportError, ReportType,
            Station, Summary, Trend, TrendType, Warning, WarningMessage,
        },
        units::{
            Cardinal, Ceiling, Distance, DistanceRange, Height, Precipitation, Pressure, Runway,
            Speed, Temperature, Time, WaveHeight,
        },
    };
}
