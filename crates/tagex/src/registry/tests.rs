//! Tests for the conversion registry.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;
use regex::Regex;

// Booleans

#[test]
fn bool_literals_true() {
    for text in ["1", "t", "T", "TRUE", "true", "True"] {
        assert!(parse_bool(text).unwrap(), "{text} should be true");
    }
}

#[test]
fn bool_literals_false() {
    for text in ["0", "f", "F", "FALSE", "false", "False"] {
        assert!(!parse_bool(text).unwrap(), "{text} should be false");
    }
}

#[test]
fn bool_rejects_other_text() {
    let err = parse_bool("maybe").unwrap_err();
    assert_eq!(err.to_string(), "invalid boolean literal `maybe`");
    assert!(parse_bool("yes").is_err());
    assert!(parse_bool("").is_err());
}

#[test]
fn bool_pattern_matches_exactly_the_accepted_literals() {
    let re = Regex::new(&format!("^(?:{DEFAULT_BOOL_PATTERN})$")).unwrap();
    for text in ["1", "t", "T", "TRUE", "true", "True", "0", "f", "F", "FALSE", "false", "False"] {
        assert!(re.is_match(text), "{text}");
        assert!(parse_bool(text).is_ok());
    }
    assert!(!re.is_match("maybe"));
}

// Integers

#[test]
fn int_parses_decimal() {
    assert_eq!(parse_int::<i64>("8900").unwrap(), 8900);
    assert_eq!(parse_int::<i32>("-12").unwrap(), -12);
}

#[test]
fn int_overflow_is_an_error() {
    assert!(parse_int::<i8>("128").is_err());
    assert!(parse_int::<i64>("99999999999999999999").is_err());
}

#[test]
fn int_rejects_non_digits() {
    let err = parse_int::<i64>("12a").unwrap_err();
    assert!(err.to_string().contains("invalid integer `12a`"));
}

#[test]
fn int_pattern_is_digits() {
    let re = Regex::new(&format!("^(?:{DEFAULT_INT_PATTERN})$")).unwrap();
    assert!(re.is_match("0123456789"));
    assert!(!re.is_match(""));
    assert!(!re.is_match("1.5"));
}

// Text

#[test]
fn text_is_identity() {
    assert_eq!(parse_text("hello world"), "hello world");
}

#[test]
fn text_pattern_is_printable() {
    let re = Regex::new(&format!("^(?:{DEFAULT_TEXT_PATTERN})$")).unwrap();
    assert!(re.is_match("string with spaces!"));
    assert!(!re.is_match("tab\there"));
    assert!(!re.is_match(""));
}

// Kinds

#[test]
fn default_patterns_by_kind() {
    assert_eq!(Primitive::Bool.default_pattern(), DEFAULT_BOOL_PATTERN);
    assert_eq!(Primitive::Int.default_pattern(), DEFAULT_INT_PATTERN);
    assert_eq!(Primitive::Text.default_pattern(), DEFAULT_TEXT_PATTERN);
    assert_eq!(pattern_for(None), "");
    assert_eq!(pattern_for(Some(Primitive::Int)), DEFAULT_INT_PATTERN);
}

#[test]
fn kind_display() {
    assert_eq!(Primitive::Int.to_string(), "integer");
}
