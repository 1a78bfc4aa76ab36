//! Degrees, minutes and seconds of an angle with the single sign.
//!
//! The degrees and minutes are always kept as non-negative whole floats
//! (so the angle is not limited by any integer range)
//! and the seconds as a non-negative float,
//! while the orientation is stored separately.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};

use lazy_static::lazy_static;
use num_traits::AsPrimitive;
use regex::{Captures, Regex};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use super::{consts::NEGATIVE, errors::InvalidSign};

use crate::{convert::dec2dms, impl_angle_ops, impl_scalar_ops};

use super::{
    consts::{MINUTES_IN_DEGREE, POSITIVE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE},
    ddm::DdmAngle,
    errors::ParseAngleError,
    hp, parse_sign,
    sign::resolve_sign,
    sign_char, Angle,
};

/// The angle made of whole degrees, whole arc minutes and arc seconds.
///
/// ```
/// # use geoconv_types::{Angle, DmsAngle};
/// let angle = DmsAngle::new(123, 44, 55.5);
/// assert_eq!(angle.dec(), 123.748_75);
/// assert_eq!(angle.hp(), 123.445_55);
/// assert_eq!(angle.to_string(), "{DMSAngle: +123d 44m 55.5s}");
/// ```
///
/// Only angles and numbers can be used with the arithmetic operators:
///
/// ```compile_fail
/// # use geoconv_types::DmsAngle;
/// let _ = DmsAngle::new(1, 2, 3) + "a";
/// ```
///
/// ```compile_fail
/// # use geoconv_types::DmsAngle;
/// let _ = DmsAngle::new(1, 2, 3) * "a";
/// ```
///
/// ```compile_fail
/// # use geoconv_types::DmsAngle;
/// let _ = "a" * DmsAngle::new(1, 2, 3);
/// ```
#[derive(Debug, Copy, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "DmsParts")
)]
pub struct DmsAngle {
    sign: i8,
    degree: f64,
    minute: f64,
    second: f64,
}

impl DmsAngle {
    /// Construct the angle from the (possibly signed) parts.
    ///
    /// The sign of the angle is taken from the first non-zero part
    /// or from the negative zero (`-0.0`) degree.
    /// The degree and minute are truncated to the whole numbers.
    ///
    /// ```
    /// # use geoconv_types::DmsAngle;
    /// assert_eq!(DmsAngle::new(-1, 2, 3).sign(), -1);
    /// assert_eq!(DmsAngle::new(1, -2, 3).sign(), 1);
    /// assert_eq!(DmsAngle::new(0, 0, -3).sign(), -1);
    /// assert_eq!(DmsAngle::new(-0, 1, 2).sign(), 1);
    /// assert_eq!(DmsAngle::new(-0.0, 1, 2).sign(), -1);
    /// ```
    pub fn new(degree: impl Into<f64>, minute: impl Into<f64>, second: impl Into<f64>) -> Self {
        let (sign, [degree, minute, second]) =
            resolve_sign([degree.into(), minute.into(), second.into()]);
        Self::from_parts(sign, degree, minute, second)
    }

    /// The parts should be already unsigned
    pub(crate) fn from_parts(sign: i8, degree: f64, minute: f64, second: f64) -> Self {
        Self {
            sign,
            degree: degree.trunc(),
            minute: minute.trunc(),
            second,
        }
    }

    /// The whole degrees of the angle
    pub const fn degree(self) -> f64 {
        self.degree
    }

    /// The whole arc minutes of the angle
    pub const fn minute(self) -> f64 {
        self.minute
    }

    /// The arc seconds of the angle
    pub const fn second(self) -> f64 {
        self.second
    }

    /// The `1` or `-1` orientation of the angle
    pub const fn sign(self) -> i8 {
        self.sign
    }

    /// The same angle with the seconds merged into the minutes
    pub fn ddm(self) -> DdmAngle {
        DdmAngle::from_parts(
            self.sign,
            self.degree,
            self.minute + self.second / SECONDS_IN_MINUTE,
        )
    }
}

impl Default for DmsAngle {
    fn default() -> Self {
        Self {
            sign: POSITIVE,
            degree: 0.0,
            minute: 0.0,
            second: 0.0,
        }
    }
}

/// The deserialized parts before the sign check
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub struct DmsParts {
    sign: i8,
    degree: f64,
    minute: f64,
    second: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<DmsParts> for DmsAngle {
    type Error = InvalidSign;

    fn try_from(parts: DmsParts) -> Result<Self, Self::Error> {
        let DmsParts {
            sign,
            degree,
            minute,
            second,
        } = parts;

        if !matches!(sign, POSITIVE | NEGATIVE) {
            return Err(InvalidSign(sign));
        }

        Ok(Self::from_parts(
            sign,
            degree.abs(),
            minute.abs(),
            second.abs(),
        ))
    }
}

impl Angle for DmsAngle {
    fn sign(self) -> i8 {
        self.sign
    }

    fn dec(self) -> f64 {
        f64::from(self.sign)
            * (self.degree + self.minute / MINUTES_IN_DEGREE + self.second / SECONDS_IN_DEGREE)
    }

    fn hp(self) -> f64 {
        hp::pack(self.sign, self.degree, self.minute, self.second)
    }

    fn from_dec(dec: f64) -> Self {
        dec2dms(dec)
    }
}

impl_angle_ops!(DmsAngle);
impl_scalar_ops!(DmsAngle: f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl From<DdmAngle> for DmsAngle {
    fn from(angle: DdmAngle) -> Self {
        angle.dms()
    }
}

impl fmt::Display for DmsAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{DMSAngle: {}{}d {}m {}s}}",
            sign_char(self.sign),
            self.degree,
            self.minute,
            self.second
        )
    }
}

lazy_static! {
    static ref RE_REPR: Regex =
        Regex::new(r"^\{DMSAngle: (?P<sign>[+-])(?P<deg>\d+)d (?P<min>\d+)m (?P<sec>\d+(?:\.\d+)?)s\}$")
            .expect("DMS representation regex is valid");
    static ref RE_PLAIN: Regex =
        Regex::new(r"^(?P<sign>[+-])?(?P<deg>\d+) +(?P<min>\d+) +(?P<sec>\d+(?:\.\d+)?)$")
            .expect("DMS plain regex is valid");
}

impl DmsAngle {
    fn from_captures(caps: &Captures<'_>) -> Result<Self, ParseAngleError> {
        Ok(Self {
            sign: parse_sign(caps.name("sign").map(|m| m.as_str())),
            degree: caps["deg"].parse()?,
            minute: caps["min"].parse()?,
            second: caps["sec"].parse()?,
        })
    }
}

impl FromStr for DmsAngle {
    type Err = ParseAngleError;

    /// Parse either the `Display` representation or the
    /// plain space-separated notation (`-12 34 30`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let caps = RE_REPR.captures(s).or_else(|| RE_PLAIN.captures(s));
        caps.map_or_else(
            || {
                log::debug!("not a DMS notation: {s:?}");
                Err(ParseAngleError::Notation)
            },
            |caps| Self::from_captures(&caps),
        )
    }
}
