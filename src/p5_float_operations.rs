// Lesson 5: Float Operations
// Demonstrates f32/f64 precision, the rounding family, formatting and
// parsing, tolerance-based comparison, and the NaN/infinity algebra.
//
// Run with: cargo run --bin p5_float_operations

use colored::Colorize;
use rust_fundamentals::numeric::{approx_eq, approx_eq_relative, round_to, safe_div};
use rust_fundamentals::parse;

fn section(title: &str) {
    println!("\n=== {} ===", title.bold().cyan());
}

// ============================================================================
// Float types
// ============================================================================

fn float_types() {
    // f32: ~6-7 significant decimal digits. f64: ~15-16, and the default
    // for float literals. Reach for f32 only under memory pressure.
    let single: f32 = 1.234_567_89;
    let double: f64 = 1.234_567_890_123_456_789;
    println!("f32 keeps:  {}", single);
    println!("f64 keeps:  {}", double);

    println!("f32::MAX = {:e}", f32::MAX);
    println!("f64::MAX = {:e}", f64::MAX);
}

// ============================================================================
// Inherent methods
// ============================================================================

fn inherent_methods() {
    let x = 3.7_f64;
    let y = -1.2_f64;

    println!("({}).abs()  = {}", y, y.abs());
    println!("({}).ceil() = {}", x, x.ceil());
    println!("({}).floor() = {}", x, x.floor());
    println!("({}).round() = {}", x, x.round());
    println!("({}).trunc() = {}", x, x.trunc());

    println!("2f64.powf(10.0) = {}", 2f64.powf(10.0));
    println!("2f64.powi(10)   = {}", 2f64.powi(10));
    println!("16f64.sqrt()    = {}", 16f64.sqrt());
    println!("27f64.cbrt()    = {}", 27f64.cbrt());
    println!("1f64.exp()      = {}", 1f64.exp());
    println!("3f64.exp2()     = {}", 3f64.exp2());
    println!("3f64.hypot(4.0) = {}", 3f64.hypot(4.0));
    println!("E.ln()          = {}", std::f64::consts::E.ln());
    println!("100f64.log10()  = {}", 100f64.log10());
    println!("8f64.log2()     = {}", 8f64.log2());
    println!("0f64.ln_1p()    = {}", 0f64.ln_1p());
    println!("5.5f64.max(10.2) = {}", 5.5f64.max(10.2));
    println!("5.5f64.min(10.2) = {}", 5.5f64.min(10.2));
}

// ============================================================================
// The rounding family
// ============================================================================

fn rounding() {
    // ceil goes toward +inf, floor toward -inf; visible on negatives.
    println!("(-4.2).ceil()  = {}", (-4.2_f64).ceil());
    println!("(-4.8).floor() = {}", (-4.8_f64).floor());

    // trunc drops the fraction toward zero, which differs from floor for
    // negative input.
    println!("(3.9).trunc()  = {}", 3.9_f64.trunc());
    println!("(-3.9).trunc() = {}", (-3.9_f64).trunc());
    println!("(-3.9).floor() = {}", (-3.9_f64).floor());

    // round: ties away from zero. round_ties_even: banker's rounding,
    // ties to the even neighbor, which cancels bias over many roundings.
    println!("2.5.round()           = {}", 2.5_f64.round());
    println!("2.5.round_ties_even() = {}", 2.5_f64.round_ties_even());
    println!("3.5.round()           = {}", 3.5_f64.round());
    println!("3.5.round_ties_even() = {}", 3.5_f64.round_ties_even());
    println!("-2.5.round()          = {}", (-2.5_f64).round());

    // Rounding to decimal places: shift, round, unshift.
    println!("round_to(3.14159, 2) = {}", round_to(3.14159, 2));
    println!("round_to(3.14159, 3) = {}", round_to(3.14159, 3));
}

// ============================================================================
// Formatting and parsing
// ============================================================================

fn formatting_and_parsing() {
    let z = 3.1415926_f64;

    // Fixed precision.
    println!("{{:.2}} -> {:.2}", z);
    println!("{{:.4}} -> {:.4}", z);
    println!("{{:.6}} -> {:.6}", z);

    // Scientific notation, lower and upper case.
    println!("{{:e}} -> {:e}", 1234.5678_f64);
    println!("{{:E}} -> {:E}", 1234.5678_f64);

    // Bare {} prints the shortest string that parses back to the same bits.
    println!("{{}}  -> {}", z);
    println!("0.1 + 0.2 prints as {}", 0.1 + 0.2);

    // String to float; the failure path is a value.
    println!("parse \"3.1415926\": {:?}", parse::parse_float("3.1415926"));
    match parse::parse_float("3.14.15") {
        Ok(v) => println!("parsed: {}", v),
        Err(e) => println!("parse failed: {}", e),
    }
}

// ============================================================================
// Comparison
// ============================================================================

fn comparison() {
    // Two computations that should agree often differ in the last bits, so
    // == is the wrong tool for derived values.
    let a = 0.1 + 0.2;
    let b = 0.3;
    println!("0.1 + 0.2 == 0.3:        {}", a == b);
    println!("approx_eq(0.1+0.2, 0.3): {}", approx_eq(a, b));

    // Accumulation drifts: ten additions of 0.1 don't land exactly on 2.0.
    let mut x = 1.0_f64;
    for _ in 0..10 {
        x += 0.1;
    }
    println!("1.0 + 0.1*10 == 2.0:     {}", x == 2.0);
    println!("x = {}", x);
    println!("approx_eq(x, 2.0):       {}", approx_eq(x, 2.0));

    // Absolute tolerance collapses at large magnitude; compare relatively.
    let big = 1.0e15;
    println!(
        "approx_eq_relative(1e15, 1e15+1, 1e-9): {}",
        approx_eq_relative(big, big + 1.0, 1e-9)
    );
}

// ============================================================================
// NaN
// ============================================================================

fn nan_behavior() {
    let nan = f64::NAN;

    // NaN equals nothing, not even itself; every ordering against it is
    // false. is_nan() is the only reliable probe.
    println!("nan == nan: {}", nan == nan);
    println!("nan > 0.0:  {}", nan > 0.0);
    println!("nan < 0.0:  {}", nan < 0.0);
    println!("nan == 0.0: {}", nan == 0.0);
    println!("nan != 0.0: {}", nan != 0.0);
    println!("nan.is_nan(): {}", nan.is_nan());

    // NaN propagates through arithmetic.
    println!("nan + 5.0 = {}", nan + 5.0);
    println!("nan * 2.0 = {}", nan * 2.0);

    // Producers of NaN: 0/0, inf - inf, sqrt of a negative.
    println!("0.0/0.0 is NaN:       {}", (0.0_f64 / 0.0).is_nan());
    println!("(-1.0).sqrt() is NaN: {}", (-1.0_f64).sqrt().is_nan());

    // max/min skip a NaN operand rather than propagating it.
    println!("nan.max(5.0) = {}", nan.max(5.0));
    println!("nan.min(5.0) = {}", nan.min(5.0));
}

// ============================================================================
// Infinity
// ============================================================================

fn infinity_behavior() {
    let inf = f64::INFINITY;

    // Infinity, unlike NaN, equals itself and orders normally.
    println!("inf == inf: {}", inf == inf);
    println!("inf > 0.0:  {}", inf > 0.0);

    // Float division by zero doesn't panic; it lands on ±inf (or NaN for
    // 0/0). Only integer division by zero panics.
    println!("1.0/0.0  = {}", 1.0_f64 / 0.0);
    println!("-1.0/0.0 = {}", -1.0_f64 / 0.0);
    println!("0.0/0.0  = {}", 0.0_f64 / 0.0);

    // Arithmetic that stays infinite, and the indeterminate forms that
    // collapse to NaN.
    println!("inf + 100.0 = {}", inf + 100.0);
    println!("inf - inf   = {}", inf - inf);
    println!("inf * 0.0   = {}", inf * 0.0);
    println!("inf / inf   = {}", inf / inf);

    println!("inf.is_infinite(): {}", inf.is_infinite());
    println!("inf.is_sign_positive(): {}", inf.is_sign_positive());
    println!("f64::NEG_INFINITY.is_sign_negative(): {}", f64::NEG_INFINITY.is_sign_negative());

    // Overflow lands on infinity; underflow fades through subnormals to 0.
    println!("1e308 * 10.0 = {}", 1e308_f64 * 10.0);
    println!("1e-308 / 1e100 = {}", 1e-308_f64 / 1e100);

    // Signed zero: equal to zero, yet it remembers its sign in division.
    println!("-0.0 == 0.0: {}", -0.0_f64 == 0.0);
    println!("1.0 / -0.0 = {}", 1.0_f64 / -0.0);
    println!("1.0 /  0.0 = {}", 1.0_f64 / 0.0);
}

// ============================================================================
// Guarded division
// ============================================================================

fn guarded_division() {
    // The library helper turns the silent ±inf/NaN outcomes into errors.
    println!("safe_div(10.0, 4.0) = {:?}", safe_div(10.0, 4.0));
    match safe_div(1.0, 0.0) {
        Ok(q) => println!("quotient: {}", q),
        Err(e) => println!("safe_div(1.0, 0.0) failed: {}", e),
    }
    match safe_div(f64::MAX, 1e-300) {
        Ok(q) => println!("quotient: {}", q),
        Err(e) => println!("safe_div(MAX, 1e-300) failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_of_tenths_is_close_but_not_equal() {
        let sum = 0.1 + 0.2;
        assert_ne!(sum, 0.3);
        assert!(approx_eq(sum, 0.3));
        assert_eq!(format!("{}", sum), "0.30000000000000004");
    }

    #[test]
    fn accumulated_tenths_drift() {
        let mut x = 1.0_f64;
        for _ in 0..10 {
            x += 0.1;
        }
        assert_ne!(x, 2.0);
        assert!(approx_eq(x, 2.0));
    }

    #[test]
    fn ceil_floor_on_negatives() {
        assert_eq!((-4.2_f64).ceil(), -4.0);
        assert_eq!((-4.8_f64).floor(), -5.0);
        assert_eq!((-3.2_f64).ceil(), -3.0);
    }

    #[test]
    fn trunc_differs_from_floor_for_negatives() {
        assert_eq!(3.9_f64.trunc(), 3.0);
        assert_eq!((-3.9_f64).trunc(), -3.0);
        assert_eq!((-3.9_f64).floor(), -4.0);
    }

    #[test]
    fn round_ties_away_from_zero() {
        assert_eq!(2.5_f64.round(), 3.0);
        assert_eq!(3.5_f64.round(), 4.0);
        assert_eq!((-2.5_f64).round(), -3.0);
    }

    #[test]
    fn round_ties_even_is_bankers_rounding() {
        assert_eq!(2.5_f64.round_ties_even(), 2.0);
        assert_eq!(3.5_f64.round_ties_even(), 4.0);
        assert_eq!(4.5_f64.round_ties_even(), 4.0);
        assert_eq!((-0.5_f64).round_ties_even(), 0.0);
    }

    #[test]
    fn powers_logs_and_roots() {
        assert_eq!(2f64.powf(10.0), 1024.0);
        assert_eq!(2f64.powi(10), 1024.0);
        assert_eq!(16f64.sqrt(), 4.0);
        assert_eq!(27f64.cbrt(), 3.0);
        assert_eq!(100f64.log10(), 2.0);
        assert_eq!(8f64.log2(), 3.0);
        assert_eq!(3f64.hypot(4.0), 5.0);
        assert_eq!(std::f64::consts::E.ln(), 1.0);
        assert_eq!(0f64.ln_1p(), 0.0);
        assert_eq!(3f64.exp2(), 8.0);
    }

    #[test]
    fn sqrt_agrees_with_half_power() {
        assert_eq!(2f64.sqrt(), 2f64.powf(0.5));
    }

    #[test]
    fn zero_to_the_zero_is_one() {
        assert_eq!(0f64.powf(0.0), 1.0);
        assert_eq!(0f64.powi(0), 1.0);
    }

    #[test]
    fn fixed_precision_formatting() {
        assert_eq!(format!("{:.2}", 3.1415926), "3.14");
        assert_eq!(format!("{:.4}", 3.1415926), "3.1416");
        assert_eq!(format!("{:.2}", 1234.5678), "1234.57");
    }

    #[test]
    fn scientific_notation_formatting() {
        assert_eq!(format!("{:e}", 1234.5678), "1.2345678e3");
        assert_eq!(format!("{:E}", 1234.5678), "1.2345678E3");
    }

    #[test]
    fn parsing_floats() {
        assert_eq!(parse::parse_float("3.14"), Ok(3.14));
        assert!(parse::parse_float("3.14.15").is_err());
        assert!(parse::parse_float("abc").is_err());
    }

    #[test]
    fn nan_compares_false_with_everything() {
        let nan = f64::NAN;
        assert!(nan != nan);
        assert!(!(nan > 0.0));
        assert!(!(nan < 0.0));
        assert!(!(nan == 0.0));
        assert!(nan != 0.0);
        assert!(nan.is_nan());
    }

    #[test]
    fn nan_propagates_through_arithmetic() {
        assert!((f64::NAN + 5.0).is_nan());
        assert!((f64::NAN * 2.0).is_nan());
        assert!((f64::NAN / 10.0).is_nan());
    }

    #[test]
    fn nan_producers() {
        assert!((0.0_f64 / 0.0).is_nan());
        assert!((-1.0_f64).sqrt().is_nan());
        assert!((-1.0_f64).ln().is_nan());
        assert!((f64::INFINITY - f64::INFINITY).is_nan());
        assert!((f64::INFINITY * 0.0).is_nan());
        assert!((f64::INFINITY / f64::INFINITY).is_nan());
    }

    #[test]
    fn max_min_skip_nan_operands() {
        assert_eq!(f64::NAN.max(5.0), 5.0);
        assert_eq!(f64::NAN.min(5.0), 5.0);
        assert_eq!(5.0_f64.max(f64::NAN), 5.0);
    }

    #[test]
    fn infinity_equals_itself_and_orders() {
        let inf = f64::INFINITY;
        assert!(inf == inf);
        assert!(inf > 0.0);
        assert!(!(inf > inf));
        assert!(inf != 0.0);
    }

    #[test]
    fn float_division_by_zero_yields_infinities() {
        assert_eq!(1.0_f64 / 0.0, f64::INFINITY);
        assert_eq!(-1.0_f64 / 0.0, f64::NEG_INFINITY);
        assert!((0.0_f64 / 0.0).is_nan());
    }

    #[test]
    fn arithmetic_with_infinity_stays_infinite() {
        let inf = f64::INFINITY;
        assert_eq!(inf + 100.0, inf);
        assert_eq!(inf - 100.0, inf);
        assert_eq!(inf * 2.0, inf);
        assert_eq!(inf / 2.0, inf);
    }

    #[test]
    fn overflow_lands_on_infinity() {
        assert!((1e308_f64 * 10.0).is_infinite());
        assert_eq!(f64::MAX * 2.0, f64::INFINITY);
    }

    #[test]
    fn underflow_fades_to_zero() {
        assert_eq!(1e-308_f64 / 1e100, 0.0);
    }

    #[test]
    fn signed_zero_equality_and_division() {
        assert_eq!(-0.0_f64, 0.0);
        assert_eq!(1.0_f64 / -0.0, f64::NEG_INFINITY);
        assert_eq!(1.0_f64 / 0.0, f64::INFINITY);
    }

    #[test]
    fn f32_keeps_seven_digits() {
        assert_eq!(format!("{}", 1.234_567_89_f32), "1.2345679");
    }
}

fn main() {
    section("FLOAT TYPES");
    float_types();

    section("INHERENT METHODS");
    inherent_methods();

    section("ROUNDING");
    rounding();

    section("FORMATTING AND PARSING");
    formatting_and_parsing();

    section("COMPARISON");
    comparison();

    section("NAN");
    nan_behavior();

    section("INFINITY");
    infinity_behavior();

    section("GUARDED DIVISION");
    guarded_division();
}
