// Rust Fundamentals
// Annotated lessons on primitive types, variables, operators, and the
// standard library's numeric/string conversion surface.

//! # Rust Fundamentals
//!
//! Each lesson is a standalone binary that prints sectioned demonstration
//! output and carries its own test module asserting the facts it teaches:
//!
//! ## Lesson 1: Hello, World (`p1_hello_world`)
//! - The smallest runnable program
//! - What `cargo run` does versus `cargo build`
//!
//! ## Lesson 2: Simple Values (`p2_simple_values`)
//! - String, boolean, integer, float, byte, and char literals
//! - Arithmetic and logical operators, short-circuit evaluation
//! - `Default::default()` in place of implicit zero values
//!
//! ## Lesson 3: Variables (`p3_variables`)
//! - `let`, type annotations, inference defaults, mutability
//! - Shadowing, block scope, `const` and `static`
//! - References, `Box`, enum discriminants, primitive sizes
//!
//! ## Lesson 4: Integer Operations (`p4_integer_operations`)
//! - The fixed-width integer menu and its ranges
//! - Arithmetic, bitwise, and shift operators
//! - Wrapping/checked/saturating/overflowing arithmetic
//! - Casts, `From`/`TryFrom`, parsing and radix formatting
//!
//! ## Lesson 5: Float Operations (`p5_float_operations`)
//! - `f32`/`f64` precision, the rounding family, formatting and parsing
//! - Epsilon comparison, NaN and infinity algebra, signed zero
//!
//! ## Lesson 6: String Operations (`p6_string_operations`)
//! - `String` vs `&str`, UTF-8, bytes versus chars
//! - Searching, trimming, splitting, joining, replacing, regex matching
//!
//! The shared modules below hold the helpers the lessons build on.

pub mod bits;
pub mod numeric;
pub mod parse;
