// Lesson 4: Integer Operations
// Demonstrates the fixed-width integer menu, arithmetic and bitwise
// operators, the overflow-handling family, casts, and conversions between
// numbers and strings.
//
// Run with: cargo run --bin p4_integer_operations

use colored::Colorize;
use rust_fundamentals::bits;
use rust_fundamentals::parse;

fn section(title: &str) {
    println!("\n=== {} ===", title.bold().cyan());
}

// ============================================================================
// The integer menu
// ============================================================================

fn integer_types() {
    // Signed: i8, i16, i32, i64, i128. Unsigned: u8, u16, u32, u64, u128.
    // isize/usize match the platform's pointer width and index collections.
    // Every width publishes its own range as associated constants.
    println!("i8:   {} ..= {}", i8::MIN, i8::MAX);
    println!("i16:  {} ..= {}", i16::MIN, i16::MAX);
    println!("i32:  {} ..= {}", i32::MIN, i32::MAX);
    println!("i64:  {} ..= {}", i64::MIN, i64::MAX);
    println!("u8:   {} ..= {}", u8::MIN, u8::MAX);
    println!("u16:  {} ..= {}", u16::MIN, u16::MAX);
    println!("u32:  {} ..= {}", u32::MIN, u32::MAX);
    println!("u64:  {} ..= {}", u64::MIN, u64::MAX);
    println!("usize is {} bits on this platform", usize::BITS);
}

// ============================================================================
// Arithmetic
// ============================================================================

fn arithmetic() {
    let a = 10;
    let b = 3;

    println!("{} + {} = {}", a, b, a + b);
    println!("{} - {} = {}", a, b, a - b);
    println!("{} * {} = {}", a, b, a * b);
    // Integer division truncates toward zero.
    println!("{} / {} = {}", a, b, a / b);
    println!("{} % {} = {}", a, b, a % b);

    // No ++ or --; compound assignment covers it.
    let mut a = a;
    let mut b = b;
    a += 1;
    b -= 1;
    println!("after a += 1: {}, after b -= 1: {}", a, b);

    // The remainder takes its sign from the dividend.
    println!("-10 % 3 = {}", -10 % 3);
    println!("10 % -3 = {}", 10 % -3);
    println!("-10 % -3 = {}", -10 % -3);

    // min/max come from Ord and work on every integer width directly.
    println!("5.max(10) = {}", 5.max(10));
    println!("5.min(10) = {}", 5.min(10));
}

// ============================================================================
// Bitwise operators
// ============================================================================

fn bitwise() {
    // num1 = 0101, num2 = 0011
    let num1: u8 = 5;
    let num2: u8 = 3;

    // AND: a bit survives only where both inputs have it.
    // 0101 & 0011 = 0001
    println!("{} & {} = {}", num1, num2, num1 & num2);

    // OR: a bit survives where either input has it.
    // 0101 | 0011 = 0111
    println!("{} | {} = {}", num1, num2, num1 | num2);

    // XOR: a bit survives where the inputs differ.
    // 0101 ^ 0011 = 0110
    println!("{} ^ {} = {}", num1, num2, num1 ^ num2);

    // Bit clear: keep num1's bits except those set in num2.
    // 0101 & !0011 = 0100
    println!("{} & !{} = {}", num1, num2, num1 & !num2);

    // Shifts: left multiplies by powers of two, right divides.
    // 0101 << 2 = 10100
    println!("{} << 2 = {}", num1, num1 << 2);
    // 0101 >> 1 = 0010
    println!("{} >> 1 = {}", num1, num1 >> 1);

    // On signed types the right shift is arithmetic: the sign bit smears in
    // from the top, so negative stays negative.
    println!("-5i8 >> 1 = {}", -5i8 >> 1);
    // On unsigned types it is logical: zeros come in from the top.
    println!("0x80u8 >> 1 = {:#04x}", 0x80u8 >> 1);
}

// ============================================================================
// Overflow
// ============================================================================

fn overflow() {
    // Plain + on an overflow panics in debug builds and wraps in release;
    // the wraparound is never something to stumble into silently. The
    // intent goes in the method name instead:

    // wrapping_*: modular arithmetic on purpose.
    println!("i8::MAX.wrapping_add(1) = {}", i8::MAX.wrapping_add(1));
    println!("0u8.wrapping_sub(1)     = {}", 0u8.wrapping_sub(1));
    println!("255u8.wrapping_add(1)   = {}", 255u8.wrapping_add(1));

    // checked_*: None on overflow.
    println!("i8::MAX.checked_add(1)  = {:?}", i8::MAX.checked_add(1));
    println!("100i8.checked_add(1)    = {:?}", 100i8.checked_add(1));

    // saturating_*: clamp to the boundary.
    println!("i8::MAX.saturating_add(1) = {}", i8::MAX.saturating_add(1));
    println!("i8::MIN.saturating_sub(1) = {}", i8::MIN.saturating_sub(1));

    // overflowing_*: the wrapped value plus a did-it-wrap flag.
    println!("i8::MAX.overflowing_add(1) = {:?}", i8::MAX.overflowing_add(1));

    // The same sign-inspection identity, written out by hand.
    println!(
        "bits::add_checked(i64::MAX, 1) = {:?}",
        bits::add_checked(i64::MAX, 1)
    );
}

// ============================================================================
// Casts and conversions
// ============================================================================

fn conversions() {
    // Nothing converts implicitly, not even i32 to i64. Widening is
    // infallible, so From/Into cover it.
    let small: i32 = 100;
    let large: i64 = i64::from(small);
    println!("i32 -> i64 via From: {}", large);

    let byte: u8 = 255;
    let wide: u32 = byte.into();
    println!("u8 -> u32 via Into: {}", wide);

    // Narrowing can lose data, so TryFrom makes it fallible.
    let back: Result<i8, _> = i8::try_from(300i64);
    println!("i8::try_from(300): {:?}", back);
    let fits: Result<i8, _> = i8::try_from(42i64);
    println!("i8::try_from(42):  {:?}", fits);

    // `as` is the explicit lossy cast: it truncates to the low bits.
    println!("300i64 as i8 = {}", 300i64 as i8); // 300 mod 256 = 44
    println!("256i32 as u8 = {}", 256i32 as u8);
    println!("-1i64 as u64 = {}", -1i64 as u64);

    // Int to float widens; float to int with `as` truncates toward zero.
    let n: i32 = 42;
    let x = f64::from(n);
    println!("i32 -> f64: {}", x);
    println!("10.9f64 as i32 = {}", 10.9f64 as i32);
    println!("1.9999999999999998f64 as i32 = {}", 1.999_999_999_999_999_8_f64 as i32);
}

// ============================================================================
// Numbers and strings
// ============================================================================

fn number_strings() {
    // Int to string.
    let number = 42;
    println!("to_string: {:?}", number.to_string());
    println!("binary {{:b}}: {}", format!("{:b}", number));
    println!("octal  {{:o}}: {}", format!("{:o}", number));
    println!("hex    {{:x}}: {}", format!("{:x}", number));
    println!("any radix: {}", parse::format_radix(number, 5));

    // String to int. Failure is a value, printed here rather than unwrapped.
    match parse::parse_int("42") {
        Ok(n) => println!("parsed: {}", n),
        Err(e) => println!("parse failed: {}", e),
    }
    match parse::parse_int("abc") {
        Ok(n) => println!("parsed: {}", n),
        Err(e) => println!("parse failed: {}", e),
    }
    // Whitespace is not forgiven; trim first.
    match parse::parse_int("  42  ") {
        Ok(n) => println!("parsed: {}", n),
        Err(e) => println!("parse failed: {}", e),
    }
    println!("after trim: {:?}", parse::parse_int("  42  ".trim()));

    // Radix parsing.
    println!("\"101010\" in binary: {:?}", parse::parse_int_radix("101010", 2));
    println!("\"ff\" in hex:        {:?}", parse::parse_int_radix("ff", 16));
}

// ============================================================================
// Inherent methods
// ============================================================================

fn inherent_methods() {
    println!("(-5i32).abs() = {}", (-5i32).abs());
    println!("2i64.pow(10)  = {}", 2i64.pow(10));
    println!("13u32.count_ones()    = {}", 13u32.count_ones());
    println!("13u32.leading_zeros() = {}", 13u32.leading_zeros());
    println!("8u32.is_power_of_two() = {}", 8u32.is_power_of_two());
    println!("13u8.reverse_bits() = {:#010b}", 13u8.reverse_bits());

    // The same identities spelled out long-hand.
    println!("bits::is_even(4)          = {}", bits::is_even(4));
    println!("bits::is_power_of_two(8)  = {}", bits::is_power_of_two(8));
    println!("bits::count_set_bits(13)  = {}", bits::count_set_bits(13));
    println!("bits::abs_branchless(-5)  = {}", bits::abs_branchless(-5));
    println!("bits::xor_swap(5, 3)      = {:?}", bits::xor_swap(5, 3));
}


fn main() {
    section("INTEGER TYPES");
    integer_types();

    section("ARITHMETIC OPERATORS");
    arithmetic();

    section("BITWISE OPERATORS");
    bitwise();

    section("OVERFLOW");
    overflow();

    section("CASTS AND CONVERSIONS");
    conversions();

    section("NUMBERS AND STRINGS");
    number_strings();

    section("INHERENT METHODS");
    inherent_methods();
}
