//! Degrees and decimal minutes of an angle with the single sign

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

use crate::{convert::dec2ddm, impl_angle_ops, impl_scalar_ops};

use super::{
    consts::{MINUTES_IN_DEGREE, POSITIVE, SECONDS_IN_MINUTE},
    dms::DmsAngle,
    errors::ParseAngleError,
    parse_sign,
    sign::resolve_sign,
    sign_char, Angle,
};

/// The angle made of whole degrees and decimal arc minutes.
///
/// ```
/// # use geoconv_types::{Angle, DdmAngle, DmsAngle};
/// let angle = DdmAngle::new(123, 44.925);
/// assert_eq!(angle.dec(), 123.748_75);
/// assert_eq!(angle, DmsAngle::new(123, 44, 55.5));
/// assert_eq!(angle.to_string(), "{DDMAngle: +123d 44.925m}");
/// ```
///
/// ```compile_fail
/// # use geoconv_types::DdmAngle;
/// let _ = DdmAngle::new(1, 2) - "a";
/// ```
///
/// ```compile_fail
/// # use geoconv_types::DdmAngle;
/// let _ = DdmAngle::new(1, 2) / "a";
/// ```
#[derive(Debug, Copy, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "DdmParts")
)]
pub struct DdmAngle {
    sign: i8,
    degree: f64,
    minute: f64,
}

impl DdmAngle {
    /// Construct the angle from the (possibly signed) parts.
    ///
    /// The sign rules are the same as for the [`DmsAngle::new`].
    ///
    /// ```
    /// # use geoconv_types::DdmAngle;
    /// assert_eq!(DdmAngle::new(0, -1).sign(), -1);
    /// assert_eq!(DdmAngle::new(-0.0, 1).sign(), -1);
    /// assert_eq!(DdmAngle::new(1, -2).sign(), 1);
    /// ```
    pub fn new(degree: impl Into<f64>, minute: impl Into<f64>) -> Self {
        let (sign, [degree, minute]) = resolve_sign([degree.into(), minute.into()]);
        Self::from_parts(sign, degree, minute)
    }

    pub(crate) fn from_parts(sign: i8, degree: f64, minute: f64) -> Self {
        Self {
            sign,
            degree: degree.trunc(),
            minute,
        }
    }

    /// The whole degrees of the angle
    pub const fn degree(self) -> f64 {
        self.degree
    }

    /// The decimal arc minutes of the angle
    pub const fn minute(self) -> f64 {
        self.minute
    }

    /// The `1` or `-1` orientation of the angle
    pub const fn sign(self) -> i8 {
        self.sign
    }

    /// The same angle with the fraction of minutes split into seconds
    pub fn dms(self) -> DmsAngle {
        let minute = self.minute.floor();
        DmsAngle::from_parts(
            self.sign,
            self.degree,
            minute,
            (self.minute - minute) * SECONDS_IN_MINUTE,
        )
    }
}

impl Default for DdmAngle {
    fn default() -> Self {
        Self {
            sign: POSITIVE,
            degree: 0.0,
            minute: 0.0,
        }
    }
}

/// The deserialized parts before the sign check
#[cfg(feature = "serde")]
#[derive(Deserialize)]
pub struct DdmParts {
    sign: i8,
    degree: f64,
    minute: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<DdmParts> for DdmAngle {
    type Error = InvalidSign;

    fn try_from(parts: DdmParts) -> Result<Self, Self::Error> {
        let DdmParts {
            sign,
            degree,
            minute,
        } = parts;

        if !matches!(sign, POSITIVE | NEGATIVE) {
            return Err(InvalidSign(sign));
        }

        Ok(Self::from_parts(sign, degree.abs(), minute.abs()))
    }
}

impl Angle for DdmAngle {
    fn sign(self) -> i8 {
        self.sign
    }

    fn dec(self) -> f64 {
        f64::from(self.sign) * (self.degree + self.minute / MINUTES_IN_DEGREE)
    }

    fn hp(self) -> f64 {
        self.dms().hp()
    }

    fn from_dec(dec: f64) -> Self {
        dec2ddm(dec)
    }
}

impl_angle_ops!(DdmAngle);
impl_scalar_ops!(DdmAngle: f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl From<DmsAngle> for DdmAngle {
    fn from(angle: DmsAngle) -> Self {
        angle.ddm()
    }
}

impl fmt::Display for DdmAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{DDMAngle: {}{}d {}m}}",
            sign_char(self.sign),
            self.degree,
            self.minute
        )
    }
}

lazy_static! {
    static ref RE_REPR: Regex =
        Regex::new(r"^\{DDMAngle: (?P<sign>[+-])(?P<deg>\d+)d (?P<min>\d+(?:\.\d+)?)m\}$")
            .expect("DDM representation regex is valid");
    static ref RE_PLAIN: Regex = Regex::new(r"^(?P<sign>[+-])?(?P<deg>\d+) +(?P<min>\d+(?:\.\d+)?)$")
        .expect("DDM plain regex is valid");
}

impl DdmAngle {
    fn from_captures(caps: &Captures<'_>) -> Result<Self, ParseAngleError> {
        Ok(Self {
            sign: parse_sign(caps.name("sign").map(|m| m.as_str())),
            degree: caps["deg"].parse()?,
            minute: caps["min"].parse()?,
        })
    }
}

impl FromStr for DdmAngle {
    type Err = ParseAngleError;

    /// Parse either the `Display` representation or the
    /// plain space-separated notation (`-12 34.5`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let caps = RE_REPR.captures(s).or_else(|| RE_PLAIN.captures(s));
        caps.map_or_else(
            || {
                log::debug!("not a DDM notation: {s:?}");
                Err(ParseAngleError::Notation)
            },
            |caps| Self::from_captures(&caps),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn reference() -> DdmAngle {
        DdmAngle::new(123, 44.925)
    }

    fn small() -> DdmAngle {
        DdmAngle::new(12, 34.5)
    }

    #[test]
    fn default_is_positive_zero() {
        let zero = DdmAngle::default();
        assert_eq!(zero.sign(), 1);
        assert_eq!(zero, DmsAngle::default());
    }

    #[test]
    fn signs() {
        assert_eq!(DdmAngle::new(-1, 2).sign(), -1);
        assert_eq!(DdmAngle::new(1, -2).sign(), 1);
        assert_eq!(DdmAngle::new(1, 2).sign(), 1);
        assert_eq!(DdmAngle::new(0, -1).sign(), -1);
        assert_eq!(DdmAngle::new(-0, 1).sign(), 1);
        assert_eq!(DdmAngle::new(-0.0, 1).sign(), -1);
    }

    #[test]
    fn stored_parts_are_unsigned() {
        let angle = DdmAngle::new(-12, -34.5);
        assert_eq!(angle.degree(), 12.0);
        assert_eq!(angle.minute(), 34.5);
    }

    #[test]
    fn dec() {
        assert_eq!(reference().dec(), 123.748_75);
        assert_eq!(DdmAngle::new(-123, 44.925).dec(), -123.748_75);
        assert_eq!(DdmAngle::new(123, -44.925).dec(), 123.748_75);
        assert_abs_diff_eq!(DdmAngle::new(0, -3.15).dec(), -0.0525, epsilon = 1e-9);
        assert_abs_diff_eq!(DdmAngle::new(0, 3.15).dec(), 0.0525, epsilon = 1e-9);
    }

    #[test]
    fn hp() {
        assert_eq!(reference().hp(), 123.445_55);
        assert_eq!(DdmAngle::new(-12, -34.5).hp(), -12.343);
    }

    #[test]
    fn to_dms() {
        assert_eq!(reference().dms(), DmsAngle::new(123, 44, 55.5));

        let dms = DdmAngle::new(-12, -34.5).dms();
        assert_eq!(dms.sign(), -1);
        assert_eq!(dms.degree(), 12.0);
        assert_eq!(dms.minute(), 34.0);
        assert_eq!(dms.second(), 30.0);
    }

    #[test]
    fn dms_round_trip() {
        assert_eq!(reference().dms().ddm(), reference());
        assert_eq!(DdmAngle::from(reference().dms()), reference());
    }

    #[test]
    fn negation() {
        assert_eq!(-DdmAngle::new(-12, -34.5), small());
        assert_eq!(-small(), DdmAngle::new(-12, -34.5));
        assert_eq!((-DdmAngle::new(0, 3.15)).sign(), -1);
        assert_eq!((-DdmAngle::new(0, 0.3)).sign(), -1);
    }

    #[test]
    fn absolute() {
        assert_eq!((-reference()).abs(), reference());
        assert_eq!(DdmAngle::new(-12, -34.5).abs(), small());
    }

    #[test]
    fn equality_and_ordering() {
        assert!(reference() == DdmAngle::new(123, -44.925));
        assert!(reference() != small());
        assert!(reference() > small());
        assert!(small() < reference());
        assert!(!(small() > reference()));
        assert!(!(reference() < small()));
        assert_eq!(reference(), DmsAngle::new(123, 44, 55.5));
    }

    #[test]
    fn add_and_sub() {
        assert_eq!((reference() + small()).dec(), 123.748_75 + 12.575);
        assert_eq!((small() + reference()).dec(), 12.575 + 123.748_75);
        assert_eq!((reference() - small()).dec(), 123.748_75 - 12.575);
        assert_eq!((small() - reference()).dec(), 12.575 - 123.748_75);
    }

    #[test]
    fn add_dms() {
        assert_eq!(
            DdmAngle::new(2, 3) + DmsAngle::new(1, 2, 3),
            DdmAngle::new(3, 5.05)
        );
    }

    #[test]
    fn sub_dms() {
        let diff = DdmAngle::new(3, 2) - DmsAngle::new(2, 2, 30);
        assert_eq!(diff, DdmAngle::new(0, 59.5));
        assert_eq!(diff.degree(), 0.0);
    }

    #[test]
    fn scale() {
        assert_eq!((reference() * 5_i32).dec(), 123.748_75 * 5.0);
        assert_eq!((5_u16 * reference()).dec(), 5.0 * 123.748_75);
        assert_eq!((reference() / 3_i32).dec(), 123.748_75 / 3.0);
        assert_eq!((reference() / 3.0_f64).dec(), 123.748_75 / 3.0);
    }

    #[test]
    fn print() {
        assert_eq!(reference().to_string(), "{DDMAngle: +123d 44.925m}");
        assert_eq!(
            DdmAngle::new(-12, -34.5).to_string(),
            "{DDMAngle: -12d 34.5m}"
        );
    }

    #[test]
    fn parse_repr() {
        let angle: DdmAngle = "{DDMAngle: -12d 34.5m}".parse().unwrap();
        assert_eq!(angle, DdmAngle::new(-12, -34.5));
    }

    #[test]
    fn parse_plain() {
        let angle: DdmAngle = "123 44.925".parse().unwrap();
        assert_eq!(angle, reference());

        let angle: DdmAngle = "-0 3.15".parse().unwrap();
        assert_eq!(angle.sign(), -1);
    }

    #[test]
    fn display_round_trip() {
        for angle in [reference(), -small(), DdmAngle::new(-0.0, 0.3)] {
            let parsed: DdmAngle = angle.to_string().parse().unwrap();
            assert_eq!(parsed.sign(), angle.sign());
            assert_eq!(parsed, angle);
        }
    }

    #[test]
    #[should_panic(expected = "Notation")]
    fn parse_dms_as_ddm() {
        let _a: DdmAngle = "12 34 30".parse().unwrap();
    }

    #[test]
    fn degree_beyond_integer_range() {
        let angle = DdmAngle::new(-5.0e9, 30);
        assert_eq!(angle.degree(), 5.0e9);
        assert_eq!(angle.dec(), -5_000_000_000.5);
        assert_eq!(angle.dms().degree(), 5.0e9);
    }

    #[cfg(feature = "serde")]
    mod deserialize {
        use super::*;

        #[test]
        fn round_trip() {
            let json = serde_json::to_string(&reference()).unwrap();
            let restored: DdmAngle = serde_json::from_str(&json).unwrap();
            assert_eq!(restored.sign(), 1);
            assert_eq!(restored, reference());
        }

        #[test]
        fn parts_are_stored_unsigned() {
            let json = r#"{"sign":-1,"degree":-12,"minute":-34.5}"#;
            let angle: DdmAngle = serde_json::from_str(json).unwrap();
            assert_eq!(angle.degree(), 12.0);
            assert_eq!(angle.minute(), 34.5);
            assert_eq!(angle.dec(), -12.575);
        }

        #[test]
        #[should_panic(expected = "Angle sign should be 1 or -1, got -2")]
        fn bad_sign() {
            let json = r#"{"sign":-2,"degree":12,"minute":34.5}"#;
            let _a: DdmAngle = serde_json::from_str(json).unwrap();
        }
    }
}
