// Lesson 6: String Operations
// Demonstrates String vs &str, UTF-8 bytes versus chars, the search, trim,
// split, join, and replace surface, and regex matching.
//
// Run with: cargo run --bin p6_string_operations

use colored::Colorize;
use regex::Regex;

fn section(title: &str) {
    println!("\n=== {} ===", title.bold().cyan());
}

// ============================================================================
// Basics
// ============================================================================

fn basics() {
    // A &str is an immutable, UTF-8 encoded slice; a String owns and grows.
    let s = "hello world";
    println!("sample: {}", s);

    // Raw literals keep backslashes and may span lines.
    let raw = r"raw string literal
        spans multiple lines
        and contains \n literally";
    println!("{}", raw);

    // len() counts BYTES.
    println!("len: {}", s.len());

    // Indexing by position yields bytes, and only through as_bytes();
    // s[0] does not compile, because a byte is not a character in UTF-8.
    println!("s.as_bytes()[0]: {}", s.as_bytes()[0]);
    println!("first char: {:?}", s.chars().next());

    // A &str never mutates. Growing means owning:
    let mut owned = String::from(s);
    owned.push('!');
    println!("owned: {}", owned);
}

// ============================================================================
// Searching
// ============================================================================

fn searching() {
    let s = "the string package";

    println!("contains \"the\": {}", s.contains("the"));
    println!("contains \"not\": {}", s.contains("not"));
    // A char-set probe is a closure over chars.
    println!("any vowel: {}", s.contains(|c| "aeiou".contains(c)));
    println!("contains 'W': {}", s.contains('W'));

    println!("starts_with \"the\": {}", s.starts_with("the"));
    println!("ends_with \"age\":   {}", s.ends_with("age"));

    // find returns a byte offset, or None rather than a sentinel -1.
    println!("find \"string\": {:?}", s.find("string"));
    println!("find \"not\":    {:?}", s.find("not"));
    println!("rfind 'e':      {:?}", s.rfind('e'));
    println!("find 'e':       {:?}", s.find('e'));

    println!("count of \"t\": {}", s.matches('t').count());
    println!("count of \"aeiou\": {}", s.matches("aeiou").count());
}

// ============================================================================
// Case
// ============================================================================

fn case() {
    let s = "Hello, World!";
    println!("lower: {}", s.to_lowercase());
    println!("upper: {}", s.to_uppercase());

    // Case mapping is Unicode-aware and may change length: ß uppercases
    // to SS.
    let german = "Straße";
    println!("{} -> {}", german, german.to_uppercase());

    println!("eq_ignore_ascii_case(\"go\", \"GO\"): {}", "go".eq_ignore_ascii_case("GO"));
}

// ============================================================================
// Trimming
// ============================================================================

fn trimming() {
    let s = "  hello world  ";
    println!("trim:       {:?}", s.trim());
    println!("trim_start: {:?}", s.trim_start());
    println!("trim_end:   {:?}", s.trim_end());

    // strip_* return Option: None tells you the affix wasn't there.
    println!("strip_prefix \"  \": {:?}", s.strip_prefix("  "));
    println!("strip_suffix \"  \": {:?}", s.strip_suffix("  "));
    println!("strip_prefix \"xx\": {:?}", s.strip_prefix("xx"));

    // trim_matches takes a char or a predicate.
    println!("trim_matches(' ' or 'h'): {:?}", s.trim_matches(|c| c == ' ' || c == 'h'));
    println!("trim_start_matches: {:?}", s.trim_start_matches(|c| c == ' ' || c == 'h'));
}

// ============================================================================
// Joining and padding
// ============================================================================

fn joining_and_padding() {
    let words = ["hello", "world", "!"];
    println!("join \" \": {}", words.join(" "));
    println!("join \"-\": {}", words.join("-"));
    println!("join \"\":  {}", words.join(""));

    println!("repeat: {}", "ab".repeat(3));

    // Width specifiers pad; > right-aligns, < left-aligns, ^ centers.
    println!("[{:>10}]", "right");
    println!("[{:<10}]", "left");
    println!("[{:^10}]", "center");
}

// ============================================================================
// Replacing and splitting
// ============================================================================

fn replacing_and_splitting() {
    let s = "the string package";

    println!("replacen 1: {}", s.replacen("the", "a", 1));
    println!("replace:    {}", s.replace("the", "a"));

    let parts: Vec<&str> = s.split(' ').collect();
    println!("split: {:?}", parts);

    let limited: Vec<&str> = s.splitn(2, ' ').collect();
    println!("splitn 2: {:?}", limited);

    let from_messy: Vec<&str> = "  a  b   c ".split_whitespace().collect();
    println!("split_whitespace: {:?}", from_messy);
}

// ============================================================================
// Comparing
// ============================================================================

fn comparing() {
    // == for equality, Ord for lexicographic order, by bytes, which for
    // ASCII is dictionary order with capitals first.
    println!("\"hello\" == \"hello\": {}", "hello" == "hello");
    println!("\"hello\" < \"world\":  {}", "hello" < "world");
    println!("\"The\" < \"the\":      {}", "The" < "the");
    println!("cmp: {:?}", "the string package".cmp("the string packages"));
}

// ============================================================================
// Bytes and chars
// ============================================================================

fn bytes_and_chars() {
    // Two chars of CJK text occupy six bytes.
    let s = "世界";
    println!("{:?}: {} bytes, {} chars", s, s.len(), s.chars().count());
    for (i, c) in s.char_indices() {
        println!("  byte offset {}: {}", i, c);
    }

    // String -> bytes is free; bytes -> String must re-check UTF-8.
    let bytes = "the string package".as_bytes();
    println!("first bytes: {:?}", &bytes[..6]);
    println!("back to str: {:?}", String::from_utf8(bytes.to_vec()));
    println!("invalid utf8: {:?}", String::from_utf8(vec![0xff, 0xfe]).is_err());

    // Slicing takes byte ranges and panics off a char boundary; get()
    // returns None instead.
    println!("s.get(0..3): {:?}", s.get(0..3));
    println!("s.get(0..2): {:?}", s.get(0..2));
}

// ============================================================================
// Regex
// ============================================================================

fn regex_matching() {
    // Matching.
    let date = Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap();
    println!("date matches: {}", date.is_match("2026-08-07"));

    // Capture groups.
    let parts = Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap();
    if let Some(caps) = parts.captures("released 2026-08-07") {
        println!("year {}, month {}, day {}", &caps[1], &caps[2], &caps[3]);
    }

    // Find all.
    let numbers = Regex::new(r"\d+").unwrap();
    let found: Vec<&str> = numbers.find_iter("ids: 42, 100, 7").map(|m| m.as_str()).collect();
    println!("all numbers: {:?}", found);

    // Replace all.
    println!("redacted: {}", numbers.replace_all("id: 123, code: 456", "XXX"));
}


fn main() {
    section("BASICS");
    basics();

    section("SEARCHING");
    searching();

    section("CASE");
    case();

    section("TRIMMING");
    trimming();

    section("JOINING AND PADDING");
    joining_and_padding();

    section("REPLACING AND SPLITTING");
    replacing_and_splitting();

    section("COMPARING");
    comparing();

    section("BYTES AND CHARS");
    bytes_and_chars();

    section("REGEX");
    regex_matching();
}
