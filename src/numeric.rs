// Floating-point comparison and rounding helpers used by lesson 5.

use thiserror::Error;

/// Absolute tolerance used by [`approx_eq`].
pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum DivisionError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not finite: {0}")]
    NotFinite(f64),
}

/// Compares two floats within an absolute tolerance of [`EPSILON`].
///
/// Exact `==` on computed floats is unreliable: `0.1 + 0.2` is not exactly
/// `0.3` in binary. NaN compares unequal to everything, including here.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Relative comparison for magnitudes where a fixed tolerance is too tight.
///
/// The spacing between adjacent floats grows with magnitude, so near 1e15
/// an absolute 1e-9 tolerance can never match.
pub fn approx_eq_relative(a: f64, b: f64, rel: f64) -> bool {
    let diff = (a - b).abs();
    let larger = a.abs().max(b.abs());
    diff <= larger * rel
}

/// Rounds `x` to `decimals` places: shift the point, round, shift back.
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let shift = 10f64.powi(decimals as i32);
    (x * shift).round() / shift
}

/// Division that reports a zero divisor or a non-finite result instead of
/// silently handing back ±inf or NaN.
pub fn safe_div(a: f64, b: f64) -> Result<f64, DivisionError> {
    if b == 0.0 {
        return Err(DivisionError::DivisionByZero);
    }
    let quotient = a / b;
    if !quotient.is_finite() {
        return Err(DivisionError::NotFinite(quotient));
    }
    Ok(quotient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_one_plus_point_two_is_not_exactly_point_three() {
        let sum = 0.1 + 0.2;
        assert_ne!(sum, 0.3);
        assert!(approx_eq(sum, 0.3));
    }

    #[test]
    fn approx_eq_rejects_distinct_values() {
        assert!(!approx_eq(0.3, 0.31));
    }

    #[test]
    fn nan_is_never_approximately_equal() {
        assert!(!approx_eq(f64::NAN, f64::NAN));
        assert!(!approx_eq(f64::NAN, 0.0));
    }

    #[test]
    fn relative_comparison_scales_with_magnitude() {
        let a = 1.0e15;
        let b = a + 1.0;
        assert!(!approx_eq(a, b));
        assert!(approx_eq_relative(a, b, 1e-9));
        assert!(!approx_eq_relative(1.0, 2.0, 1e-9));
    }

    #[test]
    fn round_to_decimal_places() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(3.14159, 3), 3.142);
        assert_eq!(round_to(2.0, 2), 2.0);
    }

    #[test]
    fn safe_div_divides() {
        assert_eq!(safe_div(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn safe_div_rejects_zero_divisor() {
        assert_eq!(safe_div(1.0, 0.0), Err(DivisionError::DivisionByZero));
        assert_eq!(safe_div(0.0, 0.0), Err(DivisionError::DivisionByZero));
    }

    #[test]
    fn safe_div_rejects_overflow_to_infinity() {
        let err = safe_div(f64::MAX, 1e-300).unwrap_err();
        assert!(matches!(err, DivisionError::NotFinite(q) if q.is_infinite()));
    }
}
