use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// The hour-pair number packs a value not suitable
/// for the sexagesimal minutes or seconds
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidHp {
    /// The minutes digits `.MM` are 60 or more
    ArcMinutes,
    /// The seconds digits `.xxSS` are 60 or more
    ArcSeconds,
}

impl fmt::Display for InvalidHp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ArcMinutes => "Hour-pair arc minute value not in range [0..60)",
            Self::ArcSeconds => "Hour-pair arc second value not in range [0..60)",
        };

        write!(f, "{msg}")
    }
}

impl Error for InvalidHp {}

/// The stored sign of an angle is neither `1` nor `-1`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidSign(pub i8);

impl fmt::Display for InvalidSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle sign should be 1 or -1, got {}", self.0)
    }
}

impl Error for InvalidSign {}

/// Failed to read an angle from its textual notation
#[derive(Debug)]
pub enum ParseAngleError {
    /// The string does not follow any known notation
    Notation,
    // this variant is practically impossible due to regex digits limitations
    /// The number is malformed
    Float(ParseFloatError),
}

enum_trivial_from_impl!(ParseFloatError => ParseAngleError:Float);

impl fmt::Display for ParseAngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse angle: ")?;
        match self {
            Self::Notation => write!(f, "neither DMS nor DDM notation"),
            Self::Float(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseAngleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Notation => None,
            Self::Float(inner) => Some(inner),
        }
    }
}
