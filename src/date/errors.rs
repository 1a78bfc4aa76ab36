use std::{error::Error, fmt, num::ParseIntError};

use geoconv_types::enum_trivial_from_impl;

/// Failed to read the date from the `YYYY.DDD` code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDoyError {
    /// Not four digits of the year and three digits of the day
    Notation,
    // this variant is practically impossible due to regex digits limitations
    /// The digits cannot be read as a number
    Int(ParseIntError),
    /// The date cannot be represented
    OutOfCalendar,
}

enum_trivial_from_impl!(ParseIntError => ParseDoyError:Int);

impl fmt::Display for ParseDoyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse day-of-year code: ")?;
        match self {
            Self::Notation => write!(f, "expected YYYY.DDD or YYYYDDD"),
            Self::Int(inner) => write!(f, "{inner}"),
            Self::OutOfCalendar => write!(f, "the date is out of range"),
        }
    }
}

impl Error for ParseDoyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Int(inner) => Some(inner),
            Self::Notation | Self::OutOfCalendar => None,
        }
    }
}
