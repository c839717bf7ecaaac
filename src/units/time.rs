//! Day and time of day, as reported in a weather report
use crate::error::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Day-of-month (optional), hour and minute
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    /// Day of month, if reported
    pub day: Option<u32>,
    /// Hour of day
    pub hour: u32,
    /// Minute
    pub minute: u32,
}

impl Time {
    /// Builds a [Time] on given day
    pub fn new(day: u32, hour: u32, minute: u32) -> Self {
        Self {
            day: Some(day),
            hour,
            minute,
        }
    }
    /// Builds a [Time] with no day of month
    pub fn hm(hour: u32, minute: u32) -> Self {
        Self {
            day: None,
            hour,
            minute,
        }
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(day) = self.day {
            write!(f, "{:02}", day)?;
        }
        write!(f, "{:02}{:02}Z", self.hour, self.minute)
    }
}

impl std::str::FromStr for Time {
    type Err = ParsingError;
    /// Decodes "HHMM", "DDHHMM" with optional trailing 'Z'
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let content = content.trim();
        let digits = content.strip_suffix('Z').unwrap_or(content);
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParsingError::Time(content.to_string()));
        }
        let (day, hhmm) = match digits.len() {
            4 => (None, digits),
            6 => (Some(digits[..2].parse::<u32>()?), &digits[2..]),
            _ => return Err(ParsingError::Time(content.to_string())),
        };
        let hour = hhmm[..2].parse::<u32>()?;
        let minute = hhmm[2..].parse::<u32>()?;
        if hour > 24 || minute > 59 || matches!(day, Some(d) if d == 0 || d > 31) {
            return Err(ParsingError::Time(content.to_string()));
        }
        Ok(Self { day, hour, minute })
    }
}
