// Lesson 3: Variables
// Demonstrates binding forms, mutability, shadowing, scope, constants,
// references, heap allocation, and how big the primitives actually are.
//
// Run with: cargo run --bin p3_variables

use colored::Colorize;
use std::mem;

fn section(title: &str) {
    println!("\n=== {} ===", title.bold().cyan());
}

// ============================================================================
// Constants and statics
// ============================================================================

// Constants require a type and are inlined at every use site; they occupy
// no memory of their own at runtime. Statics are a single memory location
// for the whole program.
const PI: f64 = 3.141_592_653_59;
const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

static GREETING: &str = "accessible anywhere in this crate";

// The counted-constant idiom: discriminants start at 0 and count up unless
// given an explicit value to continue from.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Priority {
    Low,    // 0
    Medium, // 1
    High,   // 2
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ExitCode {
    Ok = 1,
    Warning, // 2
    Error,   // 3
}

// ============================================================================
// Binding forms
// ============================================================================

fn binding_forms() {
    // With a type and a value.
    let name: &str = "John";
    let age: i32 = 24;

    // Value only; the type is inferred. Integer literals default to i32,
    // float literals to f64.
    let inferred_int = 10;
    let inferred_float = 10.0;
    let inferred_str = "hello";
    let inferred_bool = true;

    println!("{} is {}", name, age);
    println!(
        "inferred: {} {} {} {}",
        inferred_int, inferred_float, inferred_str, inferred_bool
    );

    // There is no "declare now, read later" without initialization: every
    // binding must be assigned before its first use, enforced at compile
    // time rather than papered over with implicit zeroes.

    // Multiple bindings in one statement via tuple destructuring.
    let (one, two, three) = (1, 2, 3);
    println!("{} {} {}", one, two, three);

    // Different types mix freely in the tuple.
    let (label, count) = ("john", 24);
    println!("{} {}", label, count);
}

// ============================================================================
// Mutability and reassignment
// ============================================================================

fn mutability() {
    // Immutable by default: plain `let` bindings cannot be reassigned.
    let fixed = 10;
    println!("fixed: {}", fixed);
    // fixed = 20; // error[E0384]: cannot assign twice to immutable variable

    // Opt in with `mut`.
    let mut counter = 0;
    counter += 1;
    counter += 1;
    println!("counter: {}", counter);

    // Reassignment keeps the type: `counter = "hello"` is a type error.

    // Swapping without a temporary, by destructuring.
    let (mut x, mut y) = (10, 20);
    (x, y) = (y, x);
    println!("swapped: {} {}", x, y);

    // The right side is evaluated in full before either assignment lands.
    let (mut a, mut b) = (1, 2);
    (a, b) = (b, a + b);
    println!("fibonacci step: {} {}", a, b);
}

// ============================================================================
// Shadowing
// ============================================================================

fn shadowing() {
    // Re-binding a name with `let` creates a new variable that shadows the
    // old one. Idiomatic for staged transformations, since the type may change.
    let x = 10;
    println!("x: {}", x);

    let x = x + 1;
    println!("x after shadowing: {}", x);

    let x = format!("{}!", x);
    println!("x as a String now: {}", x);

    // A shadow inside a block expires with the block.
    let y = 10;
    {
        let y = 20;
        println!("inner y: {}", y);
    }
    println!("outer y: {}", y);

    // Without `let`, an inner block assigns to the existing variable.
    let mut z = 10;
    println!("z before: {}", z);
    {
        z = 20;
    }
    println!("z after inner assignment: {}", z);
}

// ============================================================================
// Scope
// ============================================================================

fn scope() {
    println!("static: {}", GREETING);

    let function_scoped = "visible until the end of this function";
    if true {
        let block_scoped = "visible only inside this block";
        println!("{}", block_scoped);
    }
    // println!("{}", block_scoped); // error[E0425]: not found in this scope
    println!("{}", function_scoped);

    // An `if let`-scoped binding follows the same rule: alive in its arms,
    // gone after.
    let maybe = Some(10);
    if let Some(n) = maybe {
        println!("bound inside if let: {}", n);
    }
}

// ============================================================================
// Constants
// ============================================================================

fn constants() {
    println!("PI = {}", PI);
    println!(
        "status codes: {} {} {}",
        STATUS_OK, STATUS_NOT_FOUND, STATUS_INTERNAL_SERVER_ERROR
    );

    // Constant expressions fold at compile time.
    const TWO_PI: f64 = PI * 2.0;
    println!("TWO_PI = {}", TWO_PI);

    // Enum discriminants as counted constants.
    println!(
        "Priority: {} {} {}",
        Priority::Low as u8,
        Priority::Medium as u8,
        Priority::High as u8
    );
    println!(
        "ExitCode: {} {} {}",
        ExitCode::Ok as u8,
        ExitCode::Warning as u8,
        ExitCode::Error as u8
    );
}

// ============================================================================
// The discard pattern
// ============================================================================

fn pair() -> (i32, i32) {
    (1, 2)
}

fn discards() {
    // `_` drops a value on the spot; it is a pattern, not a binding, so it
    // cannot be read back.
    let (_, second) = pair();
    println!("kept only the second: {}", second);

    // A leading underscore keeps the binding but silences the unused-variable
    // lint.
    let _unused_but_named = 42;
}

// ============================================================================
// References
// ============================================================================

fn double_in_place(n: &mut i32) {
    // The caller's value, reached through the reference.
    *n *= 2;
}

fn doubled(n: i32) -> i32 {
    // A copy: the caller's value is untouched.
    n * 2
}

fn references() {
    let x = 10;
    let r = &x;
    println!("x through a reference: {}", *r);

    // A mutable reference grants write access; only one may exist at a time.
    let mut y = 10;
    {
        let m = &mut y;
        *m = 20;
    }
    println!("y after write through &mut: {}", y);

    // Pass-by-value copies; pass-by-&mut mutates.
    let a = 10;
    let b = doubled(a);
    println!("doubled({}) = {}, a still {}", 10, b, a);

    let mut c = 10;
    double_in_place(&mut c);
    println!("c after double_in_place: {}", c);

    // Reference to a reference: each level peels off with one `*`, and the
    // compiler checks the count.
    let rr = &r;
    println!("through two levels: {}", **rr);

    // There is no null reference to dereference. "Might be absent" is
    // spelled Option, and the compiler makes you look inside before use.
    let absent: Option<i32> = None;
    println!("absent: {:?}, unwrap_or: {}", absent, absent.unwrap_or(0));
}

// ============================================================================
// Stack and heap
// ============================================================================

fn stack_value() -> i32 {
    let x = 10;
    x // copied out; the stack slot dies with the call
}

fn heap_value() -> Box<i32> {
    let x = Box::new(10);
    x // the box moves out; the heap allocation survives the call
}

fn stack_and_heap() {
    // Locals live on the stack. Returning one returns a copy.
    println!("from the stack: {}", stack_value());

    // A Box owns a heap allocation. Returning it transfers ownership:
    // there is no dangling pointer to get wrong, and no garbage collector
    // either: the allocation is freed when the box goes out of scope.
    let boxed = heap_value();
    println!("from the heap: {}", *boxed);
}

// ============================================================================
// Sizes
// ============================================================================

fn sizes() {
    println!("i64:     {} bytes", mem::size_of::<i64>());
    println!("f64:     {} bytes", mem::size_of::<f64>());
    println!("bool:    {} byte", mem::size_of::<bool>());
    println!("u8:      {} byte", mem::size_of::<u8>());
    println!("char:    {} bytes", mem::size_of::<char>());
    // A &str is a pointer plus a length.
    println!("&str:    {} bytes", mem::size_of::<&str>());
    // A String adds a capacity on top of pointer plus length.
    println!("String:  {} bytes", mem::size_of::<String>());
    // Option<Box<T>> costs no more than Box<T>: the niche where a null
    // pointer would be encodes None.
    println!("Box<i32>:         {} bytes", mem::size_of::<Box<i32>>());
    println!("Option<Box<i32>>: {} bytes", mem::size_of::<Option<Box<i32>>>());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destructuring_swap() {
        let (mut x, mut y) = (10, 20);
        (x, y) = (y, x);
        assert_eq!((x, y), (20, 10));
    }

    #[test]
    fn simultaneous_assignment_reads_before_writing() {
        let (mut a, mut b) = (1, 2);
        (a, b) = (b, a + b);
        assert_eq!((a, b), (2, 3));
    }

    #[test]
    fn shadowing_may_change_type() {
        let x = 10;
        let x = x + 1;
        let x = format!("{}!", x);
        assert_eq!(x, "11!");
    }

    #[test]
    fn block_shadow_expires_with_the_block() {
        let y = 10;
        let inner = {
            let y = 20;
            y
        };
        assert_eq!(inner, 20);
        assert_eq!(y, 10);
    }

    #[test]
    fn assignment_without_let_writes_through() {
        let mut z = 10;
        assert_eq!(z, 10);
        {
            z = 20;
        }
        assert_eq!(z, 20);
    }

    #[test]
    fn constant_expressions_fold() {
        const TWO_PI: f64 = PI * 2.0;
        assert_eq!(TWO_PI, PI * 2.0);
        assert_eq!(STATUS_OK, 200);
    }

    #[test]
    fn discriminants_count_from_zero() {
        assert_eq!(Priority::Low as u8, 0);
        assert_eq!(Priority::Medium as u8, 1);
        assert_eq!(Priority::High as u8, 2);
    }

    #[test]
    fn discriminants_continue_from_explicit_values() {
        assert_eq!(ExitCode::Ok as u8, 1);
        assert_eq!(ExitCode::Warning as u8, 2);
        assert_eq!(ExitCode::Error as u8, 3);
    }

    #[test]
    fn discard_keeps_the_rest() {
        let (_, second) = pair();
        assert_eq!(second, 2);
    }

    #[test]
    fn pass_by_value_copies() {
        let a = 10;
        assert_eq!(doubled(a), 20);
        assert_eq!(a, 10);
    }

    #[test]
    fn pass_by_mut_reference_mutates() {
        let mut c = 10;
        double_in_place(&mut c);
        assert_eq!(c, 20);
    }

    #[test]
    fn double_dereference() {
        let x = 10;
        let r = &x;
        let rr = &r;
        assert_eq!(**rr, 10);
    }

    #[test]
    fn boxed_value_outlives_its_function() {
        assert_eq!(*heap_value(), 10);
        assert_eq!(stack_value(), 10);
    }

    #[test]
    fn primitive_sizes() {
        assert_eq!(mem::size_of::<i64>(), 8);
        assert_eq!(mem::size_of::<i32>(), 4);
        assert_eq!(mem::size_of::<bool>(), 1);
        assert_eq!(mem::size_of::<u8>(), 1);
        assert_eq!(mem::size_of::<char>(), 4);
        assert_eq!(mem::size_of::<&str>(), 2 * mem::size_of::<usize>());
        assert_eq!(mem::size_of::<String>(), 3 * mem::size_of::<usize>());
    }

    #[test]
    fn option_box_has_no_overhead() {
        assert_eq!(
            mem::size_of::<Option<Box<i32>>>(),
            mem::size_of::<Box<i32>>()
        );
    }
}

fn main() {
    section("BINDING FORMS");
    binding_forms();

    section("MUTABILITY");
    mutability();

    section("SHADOWING");
    shadowing();

    section("SCOPE");
    scope();

    section("CONSTANTS");
    constants();

    section("DISCARDS");
    discards();

    section("REFERENCES");
    references();

    section("STACK AND HEAP");
    stack_and_heap();

    section("SIZES");
    sizes();
}
