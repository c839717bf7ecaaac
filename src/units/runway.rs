//! Runway identification
use crate::error::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parallel runway designator
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Designator {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl TryFrom<char> for Designator {
    type Error = ParsingError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Self::Left),
            'C' => Ok(Self::Center),
            'R' => Ok(Self::Right),
            c => Err(ParsingError::Designator(c)),
        }
    }
}

impl std::fmt::Display for Designator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Left => 'L'.fmt(f),
            Self::Center => 'C'.fmt(f),
            Self::Right => 'R'.fmt(f),
        }
    }
}

/// Runway, identified by its number and designator
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    /// Runway number, heading in tens of degrees
    pub number: u8,
    /// Parallel runway designator
    pub designator: Designator,
}

impl Runway {
    /// Number used to designate all runways at once
    pub const ALL_RUNWAYS: u8 = 88;
    /// Builds a new [Runway]
    pub fn new(number: u8, designator: Designator) -> Self {
        Self { number, designator }
    }
    /// Returns true if this describes all runways of the aerodrome
    pub fn is_all_runways(&self) -> bool {
        self.number == Self::ALL_RUNWAYS && self.designator == Designator::None
    }
}

impl std::fmt::Display for Runway {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:02}{}", self.number, self.designator)
    }
}

impl std::str::FromStr for Runway {
    type Err = ParsingError;
    /// Decodes "NN", "NNd" or "RNNd" runway identifiers
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let content = content.trim();
        let content = content.strip_prefix('R').unwrap_or(content);
        if content.len() < 2 || content.len() > 3 || !content.is_char_boundary(2) {
            return Err(ParsingError::Runway(content.to_string()));
        }
        let (number, designator) = content.split_at(2);
        let number = number.parse::<u8>()?;
        let designator = match designator.chars().next() {
            Some(c) => Designator::try_from(c)?,
            None => Designator::None,
        };
        Ok(Self { number, designator })
    }
}
