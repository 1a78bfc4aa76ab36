//! Conversions between the decimal degrees, hour-pair numbers
//! and the structured angles.
//!
//! The hour-pair (`hp`) notation packs the degrees into the integer part
//! and the minutes and seconds into the fractional part of a single number:
//! `123.44555` means 123°44′55.5″.

use crate::{
    angle::{
        consts::{MINUTES_IN_DEGREE, NEGATIVE, POSITIVE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE},
        ddm::DdmAngle,
        dms::DmsAngle,
        errors::InvalidHp,
        hp, Angle,
    },
    utils::div_mod,
};

/// Split the decimal degrees into the sign and the unsigned degree, minute, second
fn sexagesimal(dec: f64) -> (i8, f64, f64, f64) {
    let sign = if dec < 0.0 { NEGATIVE } else { POSITIVE };
    let dec = dec.abs();
    // the seconds of the largest whole values would overflow
    if dec.fract() == 0.0 {
        return (sign, dec, 0.0, 0.0);
    }

    let (minute, second) = div_mod(dec * SECONDS_IN_DEGREE, SECONDS_IN_MINUTE);
    let (degree, minute) = div_mod(minute, MINUTES_IN_DEGREE);
    (sign, degree, minute, second)
}

fn from_parts(sign: i8, [degree, minute, second]: [f64; 3]) -> f64 {
    f64::from(sign) * (degree + minute / MINUTES_IN_DEGREE + second / SECONDS_IN_DEGREE)
}

/// Decimal degrees to the hour-pair notation
///
/// ```
/// # use geoconv_types::dec2hp;
/// assert_eq!(dec2hp(123.748_75), 123.445_55);
/// assert_eq!(dec2hp(-12.575), -12.343);
/// ```
pub fn dec2hp(dec: f64) -> f64 {
    dec2dms(dec).hp()
}

/// Hour-pair notation to the decimal degrees.
///
/// The digits after the first four fractional ones are the fraction of a second.
/// No check is made whether the minutes and seconds are less than 60,
/// use [`hp2dec_checked`] for that.
///
/// ```
/// # use geoconv_types::hp2dec;
/// assert_eq!(hp2dec(123.445_55), 123.748_75);
/// assert_eq!(hp2dec(-0.0018), -0.005);
/// ```
pub fn hp2dec(hp: f64) -> f64 {
    let (sign, parts) = hp::unpack(hp);
    from_parts(sign, parts)
}

/// Hour-pair notation to the decimal degrees
/// only if the packed minutes and seconds are valid.
///
/// # Errors
/// The minutes or seconds digits represent a value of 60 or more.
///
/// ```
/// # use geoconv_types::{hp2dec_checked, InvalidHp};
/// assert_eq!(hp2dec_checked(12.343), Ok(12.575));
/// assert_eq!(hp2dec_checked(12.63), Err(InvalidHp::ArcMinutes));
/// ```
pub fn hp2dec_checked(hp: f64) -> Result<f64, InvalidHp> {
    let (sign, parts) = hp::unpack_checked(hp).map_err(|err| {
        log::debug!("invalid hour-pair {hp}: {err}");
        err
    })?;
    Ok(from_parts(sign, parts))
}

/// Decimal degrees to the degrees, minutes and seconds
pub fn dec2dms(dec: f64) -> DmsAngle {
    let (sign, degree, minute, second) = sexagesimal(dec);
    DmsAngle::from_parts(sign, degree, minute, second)
}

/// Decimal degrees to the degrees and decimal minutes
pub fn dec2ddm(dec: f64) -> DdmAngle {
    let (sign, degree, minute, second) = sexagesimal(dec);
    DdmAngle::from_parts(sign, degree, minute + second / SECONDS_IN_MINUTE)
}

/// Hour-pair notation to the degrees, minutes and seconds
///
/// ```
/// # use geoconv_types::hp2dms;
/// let angle = hp2dms(-0.0018);
/// assert_eq!(angle.sign(), -1);
/// assert_eq!(angle.degree(), 0.0);
/// assert_eq!(angle.minute(), 0.0);
/// ```
pub fn hp2dms(hp: f64) -> DmsAngle {
    dec2dms(hp2dec(hp))
}

/// Hour-pair notation to the degrees and decimal minutes
pub fn hp2ddm(hp: f64) -> DdmAngle {
    dec2ddm(hp2dec(hp))
}
