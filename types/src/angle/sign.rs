//! Resolve the single sign of the angle given as a number of components

use super::consts::{NEGATIVE, POSITIVE};

/// Find the sign of the angle made of the components
/// (most significant first) and drop the sign from every component.
///
/// The sign of the whole angle is the sign of the first non-zero component.
/// The only exception is the negative zero (`-0.0`) in the leading position
/// which makes the whole angle negative.
/// The signs of the rest of components are ignored.
///
/// ```
/// # use geoconv_types::resolve_sign;
/// assert_eq!(resolve_sign([-1.0, 2.0, 3.0]), (-1, [1.0, 2.0, 3.0]));
/// assert_eq!(resolve_sign([1.0, -2.0, 3.0]), (1, [1.0, 2.0, 3.0]));
/// assert_eq!(resolve_sign([0.0, 0.0, -3.0]), (-1, [0.0, 0.0, 3.0]));
///
/// // negative zero is only seen in the floating numbers
/// assert_eq!(resolve_sign([-0.0, 1.0, 2.0]).0, -1);
/// assert_eq!(resolve_sign([f64::from(-0), 1.0, 2.0]).0, 1);
/// ```
pub fn resolve_sign<const N: usize>(components: [f64; N]) -> (i8, [f64; N]) {
    let sign = match components.first() {
        Some(&leading) if leading == 0.0 && leading.is_sign_negative() => NEGATIVE,
        _ => components
            .iter()
            .find(|&&c| c != 0.0)
            .map_or(POSITIVE, |&c| if c < 0.0 { NEGATIVE } else { POSITIVE }),
    };

    (sign, components.map(f64::abs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_degree() {
        assert_eq!(resolve_sign([-1.0, 2.0, 3.0]).0, -1);
    }

    #[test]
    fn negative_minute_after_degree_is_ignored() {
        assert_eq!(resolve_sign([1.0, -2.0, 3.0]), (1, [1.0, 2.0, 3.0]));
    }

    #[test]
    fn negative_second_after_degree_is_ignored() {
        assert_eq!(resolve_sign([1.0, 2.0, -3.0]), (1, [1.0, 2.0, 3.0]));
    }

    #[test]
    fn all_negative_do_not_cancel() {
        assert_eq!(resolve_sign([-12.0, -34.0, -30.0]), (-1, [12.0, 34.0, 30.0]));
    }

    #[test]
    fn zero_degree_negative_minute() {
        assert_eq!(resolve_sign([0.0, -1.0, 2.0]), (-1, [0.0, 1.0, 2.0]));
    }

    #[test]
    fn positive_minute_wins_over_negative_second() {
        assert_eq!(resolve_sign([0.0, 1.0, -2.0]).0, 1);
    }

    #[test]
    fn only_seconds() {
        assert_eq!(resolve_sign([0.0, 0.0, -3.0]), (-1, [0.0, 0.0, 3.0]));
        assert_eq!(resolve_sign([0.0, 0.0, 3.0]).0, 1);
    }

    #[test]
    fn negative_zero_degree() {
        let (sign, [degree, ..]) = resolve_sign([-0.0, 1.0, 2.0]);
        assert_eq!(sign, -1);
        assert!(degree.is_sign_positive());
    }

    #[test]
    fn negative_zero_minute_is_ordinary_zero() {
        assert_eq!(resolve_sign([0.0, -0.0, 2.0]).0, 1);
    }

    #[test]
    fn integer_zero_is_positive() {
        assert_eq!(resolve_sign([f64::from(-0_i32), 1.0, 2.0]).0, 1);
    }

    #[test]
    fn all_zeros() {
        assert_eq!(resolve_sign([0.0, 0.0, 0.0]), (1, [0.0; 3]));
        assert_eq!(resolve_sign([-0.0, 0.0]).0, -1);
    }

    #[test]
    fn two_components() {
        assert_eq!(resolve_sign([0.0, -34.5]), (-1, [0.0, 34.5]));
        assert_eq!(resolve_sign([12.0, -34.5]), (1, [12.0, 34.5]));
    }

    #[test]
    fn empty() {
        assert_eq!(resolve_sign::<0>([]).0, 1);
    }
}
