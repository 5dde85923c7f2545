// Lesson 2: Simple Values
// Demonstrates literals and operators for every primitive: strings,
// booleans, integers, floats, bytes, and chars.
//
// Run with: cargo run --bin p2_simple_values

use colored::Colorize;
use rust_fundamentals::numeric::approx_eq;

fn section(title: &str) {
    println!("\n=== {} ===", title.bold().cyan());
}

// ============================================================================
// Strings
// ============================================================================

fn string_values() {
    // A string literal is a `&str`: an immutable, UTF-8 encoded slice.
    println!("{}", "Hello, World!");

    // println! takes any number of arguments through the format string.
    println!("1+1 = {}", 1 + 1);

    // Concatenation allocates a new String; the pieces are unchanged.
    let language = String::from("rust") + " " + "lang";
    println!("{}", language);
    // For heavy concatenation in a loop, push onto one String instead of
    // chaining `+`, which reallocates at every step.
}

// ============================================================================
// Booleans
// ============================================================================

fn boolean_values() {
    println!("{}", true);
    println!("{}", false);

    println!("true && false = {}", true && false);
    println!("true || false = {}", true || false);
    println!("!true = {}", !true);

    // && and || short-circuit: the right side only runs when the left side
    // hasn't already decided the answer.
    let mut evaluated = false;
    let _ = true
        || {
            evaluated = true;
            true
        };
    println!("right side of `true || ...` evaluated: {}", evaluated);

    // A bool is not a number: `true as i32` is an explicit cast, and there
    // is no implicit conversion in either direction.
    println!("true as i32 = {}", true as i32);
}

// ============================================================================
// Integers
// ============================================================================

fn integer_values() {
    println!("1 + 1 = {}", 1 + 1);
    println!("7 - 3 = {}", 7 - 3);
    println!("3 * 3 = {}", 3 * 3);
    println!("10 / 2 = {}", 10 / 2);
    // Integer division truncates toward zero: no decimals, no rounding.
    println!("10 / 3 = {}", 10 / 3);
    println!("10 % 3 = {}", 10 % 3);

    // Untyped-looking literals default to i32; a suffix or annotation picks
    // another width: 255u8, 1_000_000i64.
    let default_width = 1 + 1;
    let wide: i64 = 1 + 1;
    println!("i32 result: {}, i64 result: {}", default_width, wide);
}

// ============================================================================
// Floats
// ============================================================================

fn float_values() {
    println!("1.0 + 1.0 = {}", 1.0 + 1.0);
    println!("7.0 - 3.0 = {}", 7.0 - 3.0);
    println!("3.0 * 3.0 = {}", 3.0 * 3.0);
    // True division, unlike the integer kind.
    println!("10.0 / 4.0 = {}", 10.0 / 4.0);

    // The classic trap: 0.1 + 0.2 is not exactly 0.3 in binary floating
    // point. Lesson 5 digs into why; the fix is a tolerance comparison.
    let sum = 0.1 + 0.2;
    println!("0.1 + 0.2 == 0.3 ? {}", sum == 0.3);
    println!("0.1 + 0.2 = {}", sum);
    println!("within 1e-9 of 0.3 ? {}", approx_eq(sum, 0.3));
}

// ============================================================================
// Bytes
// ============================================================================

fn byte_values() {
    // A byte literal b'A' is a u8 holding the ASCII code.
    println!("b'A' = {}", b'A');
    println!("b'B' = {}", b'B');
    println!("b'C' = {}", b'C');

    // Cast a u8 back to a char to print the character itself.
    println!("65u8 as char = {}", 65u8 as char);
}

// ============================================================================
// Chars
// ============================================================================

fn char_values() {
    // A char is a Unicode scalar value, 4 bytes wide, not a byte. Any
    // character from any script fits, emoji included.
    let a = 'A';
    let hanzi = '中';
    let rocket = '🚀';
    println!("{} {} {}", a, hanzi, rocket);
    println!("'A' as u32 = {}", a as u32);
    println!("'中' as u32 = {}", hanzi as u32);

    // String length counts BYTES, not characters. Two chars of CJK text
    // encode as six bytes of UTF-8.
    let s = "世界";
    println!("{:?}: {} bytes, {} chars", s, s.len(), s.chars().count());
}

// ============================================================================
// Defaults
// ============================================================================

fn default_values() {
    // Rust never zero-initializes behind your back: reading an
    // uninitialized binding is a compile error. When a "zero value" is what
    // you mean, ask for it with Default.
    let n: i32 = Default::default();
    let x: f64 = Default::default();
    let b: bool = Default::default();
    let s: String = Default::default();
    println!("i32: {}, f64: {}, bool: {}, String: {:?}", n, x, b, s);
}


fn main() {
    section("STRING");
    string_values();

    section("BOOLEAN");
    boolean_values();

    section("INTEGER");
    integer_values();

    section("FLOAT");
    float_values();

    section("BYTE");
    byte_values();

    section("CHAR");
    char_values();

    section("DEFAULTS");
    default_values();
}
