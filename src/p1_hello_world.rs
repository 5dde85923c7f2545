// Lesson 1: Hello, World
// The smallest runnable program, and what happens when you run it.
//
// Run with: cargo run --bin p1_hello_world

fn greeting() -> &'static str {
    "Hello, World!"
}

fn main() {
    println!("{}", greeting());
}

// `cargo run` is two steps folded into one: it compiles the binary into
// target/debug/ and then executes it. Unlike a scripting language there is
// no interpreter in the loop. By the time the program prints anything,
// rustc has already lexed the source into tokens, parsed them into an AST,
// type-checked it, lowered it through MIR to LLVM IR, and linked a native
// executable.
//
// `cargo build` stops after the compile step and leaves the executable at
// target/debug/p1_hello_world; `cargo run` keeps the artifact too (builds
// are incremental), it just launches it as well.
//
// `println!` is a macro, not a function; the trailing `!` is the giveaway.
// Its format string is checked at compile time, so a stray `{}` with no
// argument is a compile error rather than mangled output at runtime.
