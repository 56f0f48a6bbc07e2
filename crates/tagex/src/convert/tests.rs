//! Tests for settable value cells.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Default, PartialEq)]
struct Upper(String);

impl Convert for Upper {
    fn convert(&mut self, text: &str) -> Result<(), ConvertError> {
        if text.is_empty() {
            return Err(ConvertError::invalid("empty"));
        }
        self.0 = text.to_uppercase();
        Ok(())
    }
}

#[test]
fn primitives_convert_in_place() {
    let mut flag = false;
    flag.convert("T").unwrap();
    assert!(flag);

    let mut count = 0_i64;
    count.convert("100").unwrap();
    assert_eq!(count, 100);

    let mut text = String::from("old");
    text.convert("string").unwrap();
    assert_eq!(text, "string");
}

#[test]
fn failed_conversion_leaves_value() {
    let mut count = 3_i16;
    assert!(count.convert("70000").is_err());
    assert_eq!(count, 3);
}

#[test]
fn kinds_of_primitives() {
    assert_eq!(bool::kind(), Some(Primitive::Bool));
    assert_eq!(i8::kind(), Some(Primitive::Int));
    assert_eq!(isize::kind(), Some(Primitive::Int));
    assert_eq!(String::kind(), Some(Primitive::Text));
    assert_eq!(Upper::kind(), None);
}

#[test]
fn option_none_is_filled() {
    let mut value: Option<i32> = None;
    value.convert("42").unwrap();
    assert_eq!(value, Some(42));
}

#[test]
fn option_none_stays_none_on_failure() {
    let mut value: Option<Upper> = None;
    assert!(value.convert("").is_err());
    assert_eq!(value, None);
}

#[test]
fn option_some_is_written_through() {
    let mut value = Some(Upper(String::from("x")));
    value.convert("abc").unwrap();
    assert_eq!(value, Some(Upper(String::from("ABC"))));
}

#[test]
fn nested_indirection_reaches_innermost_value() {
    let mut value: Option<Box<Option<Box<i64>>>> = None;
    value.convert("7").unwrap();
    assert_eq!(value, Some(Box::new(Some(Box::new(7)))));
    assert_eq!(<Option<Box<Option<Box<i64>>>>>::kind(), Some(Primitive::Int));
}

#[test]
fn mutable_reference_writes_through() {
    let mut target = false;
    {
        let mut cell = &mut target;
        Convert::convert(&mut cell, "true").unwrap();
    }
    assert!(target);
}

#[test]
fn unique_rc_is_settable() {
    let mut value = Rc::new(0_i64);
    value.convert("5").unwrap();
    assert_eq!(*value, 5);
}

#[test]
fn shared_rc_is_unsettable() {
    let mut value = Rc::new(0_i64);
    let _other = Rc::clone(&value);
    let err = value.convert("5").unwrap_err();
    assert!(matches!(err, ConvertError::Unsettable { .. }));
    assert_eq!(*value, 0);
}

#[test]
fn shared_arc_is_unsettable() {
    let mut value = Arc::new(String::new());
    let _other = Arc::clone(&value);
    assert!(matches!(
        value.convert("x"),
        Err(ConvertError::Unsettable { .. })
    ));
}
