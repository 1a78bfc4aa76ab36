//! Packing of the sexagesimal parts into a single hour-pair number.
//!
//! The parts are concatenated as the decimal digits,
//! so the value read back is exactly the one written
//! (up to the precision of the `f64` itself).

use crate::utils::split_decimal;

use super::{
    consts::{MAX_HP_PAIR, NEGATIVE, POSITIVE},
    errors::InvalidHp,
};

/// Pack the whole degree and minute with the seconds into the `DDD.MMSSsss` number
pub(crate) fn pack(sign: i8, degree: f64, minute: f64, second: f64) -> f64 {
    let sign = f64::from(sign);
    if !(degree.is_finite() && minute.is_finite() && second.is_finite()) {
        return sign * (degree + minute / 100.0 + second / 10_000.0);
    }

    let second = second.abs().to_string();
    let (whole, fract) = split_decimal(&second);
    let packed: f64 = format!("{degree}.{minute:02}{whole:0>2}{fract}")
        .parse()
        .expect("Formatted digits are valid float");
    sign * packed
}

/// Split the `DDD.MMSSsss` number into the sign and the unsigned parts
/// (degree, minute, second)
pub(crate) fn unpack(hp: f64) -> (i8, [f64; 3]) {
    let sign = if hp < 0.0 { NEGATIVE } else { POSITIVE };
    if !hp.is_finite() {
        return (sign, [hp.abs(), 0.0, 0.0]);
    }

    let digits = hp.abs().to_string();
    let (whole, fract) = split_decimal(&digits);
    let fract = format!("{fract:0<4}");
    let (minute, second) = fract.split_at(2);
    let (second, second_fract) = second.split_at(2);

    let degree: f64 = whole.parse().expect("Integer part is a valid float");
    let minute: f64 = minute.parse().expect("Two digits are valid float");
    let second: f64 = if second_fract.is_empty() {
        second.parse()
    } else {
        format!("{second}.{second_fract}").parse()
    }
    .expect("Seconds digits are valid float");

    (sign, [degree, minute, second])
}

/// Same as [`unpack`] but the minutes and seconds should be less than 60
pub(crate) fn unpack_checked(hp: f64) -> Result<(i8, [f64; 3]), InvalidHp> {
    let (sign, [degree, minute, second]) = unpack(hp);
    if minute >= MAX_HP_PAIR {
        return Err(InvalidHp::ArcMinutes);
    }

    if second >= MAX_HP_PAIR {
        return Err(InvalidHp::ArcSeconds);
    }

    Ok((sign, [degree, minute, second]))
}
