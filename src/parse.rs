// String-to-number conversion helpers used by lessons 4 and 5.
// The input is echoed into the error so a failed parse names its culprit.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseNumberError {
    #[error("invalid integer {input:?}: {source}")]
    Int {
        input: String,
        source: ParseIntError,
    },
    #[error("invalid float {input:?}: {source}")]
    Float {
        input: String,
        source: ParseFloatError,
    },
}

/// Parses a base-10 integer. Surrounding whitespace is not accepted; trim
/// first if the input may carry any.
pub fn parse_int(input: &str) -> Result<i64, ParseNumberError> {
    input.parse().map_err(|source| ParseNumberError::Int {
        input: input.to_string(),
        source,
    })
}

/// Parses an integer written in the given radix (2 to 36), e.g. `"ff"` in
/// radix 16 or `"101010"` in radix 2.
pub fn parse_int_radix(input: &str, radix: u32) -> Result<i64, ParseNumberError> {
    i64::from_str_radix(input, radix).map_err(|source| ParseNumberError::Int {
        input: input.to_string(),
        source,
    })
}

/// Parses a float. Accepts decimal and scientific notation, plus the
/// special spellings `inf`, `-inf`, and `NaN`.
pub fn parse_float(input: &str) -> Result<f64, ParseNumberError> {
    input.parse().map_err(|source| ParseNumberError::Float {
        input: input.to_string(),
        source,
    })
}

const RADIX_DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Formats `value` in any radix from 2 to 36 with lowercase digits. The
/// common radixes also have `format!` specifiers (`{:b}`, `{:o}`, `{:x}`).
pub fn format_radix(value: u64, radix: u32) -> String {
    assert!((2..=36).contains(&radix), "radix must be in 2..=36");
    if value == 0 {
        return "0".to_string();
    }
    let radix = u64::from(radix);
    let mut digits = Vec::new();
    let mut rest = value;
    while rest > 0 {
        digits.push(RADIX_DIGITS[(rest % radix) as usize]);
        rest /= radix;
    }
    digits.reverse();
    String::from_utf8(digits).expect("radix digits are ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int("-7"), Ok(-7));
    }

    #[test]
    fn rejects_garbage_and_reports_the_input() {
        let err = parse_int("abc").unwrap_err();
        assert_eq!(err.to_string(), format!("invalid integer \"abc\": {}", "abc".parse::<i64>().unwrap_err()));
    }

    #[test]
    fn does_not_trim_whitespace() {
        assert!(parse_int("  42  ").is_err());
        assert_eq!(parse_int("  42  ".trim()), Ok(42));
    }

    #[test]
    fn rejects_decimals_as_integers() {
        assert!(parse_int("42.5").is_err());
    }

    #[test]
    fn parses_binary_and_hex() {
        assert_eq!(parse_int_radix("101010", 2), Ok(42));
        assert_eq!(parse_int_radix("ff", 16), Ok(255));
        assert_eq!(parse_int_radix("FF", 16), Ok(255));
        assert_eq!(parse_int_radix("1111", 2), Ok(15));
    }

    #[test]
    fn radix_parse_rejects_out_of_range_digits() {
        assert!(parse_int_radix("12", 2).is_err());
    }

    #[test]
    fn parses_floats() {
        assert_eq!(parse_float("3.14"), Ok(3.14));
        assert_eq!(parse_float("1e3"), Ok(1000.0));
        assert!(parse_float("3.14.15").is_err());
    }

    #[test]
    fn formats_in_common_radixes() {
        assert_eq!(format_radix(42, 2), "101010");
        assert_eq!(format_radix(42, 10), "42");
        assert_eq!(format_radix(42, 16), "2a");
        assert_eq!(format_radix(255, 16), "ff");
        assert_eq!(format_radix(0, 2), "0");
    }

    #[test]
    fn format_agrees_with_the_format_macro() {
        assert_eq!(format_radix(42, 2), format!("{:b}", 42));
        assert_eq!(format_radix(42, 8), format!("{:o}", 42));
        assert_eq!(format_radix(42, 16), format!("{:x}", 42));
    }

    #[test]
    fn formats_in_base_36() {
        assert_eq!(format_radix(35, 36), "z");
        assert_eq!(format_radix(36, 36), "10");
    }
}
