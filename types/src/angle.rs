//! The traits for an angle

pub(crate) mod consts;
pub mod ddm;
pub mod dms;
pub mod errors;
pub(crate) mod hp;
pub mod sign;

/// Single signed angular value which can be represented
/// with the decimal degrees or with the packed hour-pair notation.
///
/// Any two angles are equal (or ordered) when their decimal degrees are.
pub trait Angle: Copy {
    /// The sign of the angle: `1` or `-1`
    fn sign(self) -> i8;

    /// The angle in decimal degrees
    fn dec(self) -> f64;

    /// The angle in the hour-pair notation (`DDD.MMSSsss`)
    fn hp(self) -> f64;

    /// Construct the angle from decimal degrees
    fn from_dec(dec: f64) -> Self;

    /// Whether the angle has the negative sign
    fn is_negative(self) -> bool {
        self.sign() < 0
    }
}

#[doc(hidden)]
#[macro_export]
/// Implement comparison, negation, addition and subtraction
/// for the angle type. The right operand can be any `Angle`.
macro_rules! impl_angle_ops {
    ($t:ty) => {
        impl $t {
            /// The same angle with the positive sign
            pub fn abs(self) -> Self {
                Self {
                    sign: POSITIVE,
                    ..self
                }
            }
        }

        impl Neg for $t {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    sign: -self.sign,
                    ..self
                }
            }
        }

        impl<A: Angle> PartialEq<A> for $t {
            fn eq(&self, other: &A) -> bool {
                self.dec() == other.dec()
            }
        }

        impl<A: Angle> PartialOrd<A> for $t {
            fn partial_cmp(&self, other: &A) -> Option<Ordering> {
                self.dec().partial_cmp(&other.dec())
            }
        }

        impl<A: Angle> Add<A> for $t {
            type Output = Self;

            fn add(self, rhs: A) -> Self::Output {
                Self::from_dec(self.dec() + rhs.dec())
            }
        }

        impl<A: Angle> Sub<A> for $t {
            type Output = Self;

            fn sub(self, rhs: A) -> Self::Output {
                Self::from_dec(self.dec() - rhs.dec())
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
/// Implement scaling of the angle type by the primitive numbers.
/// The multiplication is implemented in both directions.
macro_rules! impl_scalar_ops {
    ($t:ty: $($scalar:ty),+ $(,)?) => {
        $(
            impl Mul<$scalar> for $t {
                type Output = Self;

                fn mul(self, rhs: $scalar) -> Self::Output {
                    let rhs: f64 = rhs.as_();
                    Self::from_dec(self.dec() * rhs)
                }
            }

            impl Mul<$t> for $scalar {
                type Output = $t;

                fn mul(self, rhs: $t) -> Self::Output {
                    rhs * self
                }
            }

            impl Div<$scalar> for $t {
                type Output = Self;

                fn div(self, rhs: $scalar) -> Self::Output {
                    let rhs: f64 = rhs.as_();
                    Self::from_dec(self.dec() / rhs)
                }
            }
        )+
    };
}

/// The sign from the optional `+` or `-` prefix of the textual notation
pub(crate) fn parse_sign(prefix: Option<&str>) -> i8 {
    match prefix {
        Some("-") => consts::NEGATIVE,
        _ => consts::POSITIVE,
    }
}

/// The prefix which always shows the sign of the angle
pub(crate) const fn sign_char(sign: i8) -> char {
    if sign < 0 {
        '-'
    } else {
        '+'
    }
}
