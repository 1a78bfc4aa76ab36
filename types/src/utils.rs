//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Truncated division and remainder in one step.
///
/// The remainder takes the sign of the divider (as with `%`).
/// The quotient is calculated from the remainder,
/// so it is always a whole number, even for the large dividers.
pub(crate) fn div_mod(divider: f64, divisor: f64) -> (f64, f64) {
    let rem = divider % divisor;
    ((divider - rem) / divisor, rem)
}

/// Split the string into the integer and the fractional parts around the decimal dot
pub(crate) fn split_decimal(s: &str) -> (&str, &str) {
    s.split_once('.').unwrap_or((s, ""))
}
