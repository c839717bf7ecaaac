//! Errors that may rise when decoding identifiers and codes
use thiserror::Error;

/// Errors that may rise in decoding process
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsingError {
    /// Runway identifier is not "NN" + optional designator
    #[error("invalid runway identifier \"{0}\"")]
    Runway(String),
    /// Runway designator is not one of L, C or R
    #[error("invalid runway designator '{0}'")]
    Designator(char),
    /// Time is neither "HHMM" nor "DDHHMM"
    #[error("invalid time \"{0}\"")]
    Time(String),
    /// Weather group has a dangling character
    #[error("invalid weather group \"{0}\"")]
    Weather(String),
    /// Numerical field could not be parsed
    #[error("failed to parse integer")]
    ParseInt(#[from] std::num::ParseIntError),
    /// Unit, colour or direction code not recognized
    #[error("unknown code")]
    Code(#[from] strum::ParseError),
}
