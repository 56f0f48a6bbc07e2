//! Fields reached through indirection, generic records and skipped fields.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use std::rc::Rc;

use pretty_assertions::assert_eq;
use tagex::{Convert, Error, Record, Schema};

#[derive(Record, Debug, Default, PartialEq)]
#[tagex(template = r"^{{count}}/{{label}}/{{flag}}$")]
struct Wrapped {
    count: Option<i64>,
    label: Box<String>,
    flag: Option<Box<bool>>,
}

#[test]
fn optional_and_boxed_fields() {
    let record: Wrapped = tagex::from_str("3/abc/false").unwrap();
    assert_eq!(
        record,
        Wrapped {
            count: Some(3),
            label: Box::new("abc".to_owned()),
            flag: Some(Box::new(false)),
        }
    );
}

#[derive(Record, Debug)]
#[tagex(template = "{{shared}}")]
struct Shared {
    shared: Rc<i64>,
}

#[test]
fn uniquely_held_rc_is_written() {
    let mut record = Shared {
        shared: Rc::new(0),
    };
    tagex::parse("12", &mut record).unwrap();
    assert_eq!(*record.shared, 12);
}

#[test]
fn shared_rc_is_an_invalid_target() {
    let mut record = Shared {
        shared: Rc::new(0),
    };
    let keep = Rc::clone(&record.shared);
    let err = tagex::parse("12", &mut record).unwrap_err();
    match err {
        Error::InvalidTarget { field, type_name } => {
            assert_eq!(field, "shared");
            assert!(type_name.contains("Rc<i64>"), "{type_name}");
        }
        other => panic!("expected InvalidTarget, got {other:?}"),
    }
    assert_eq!(*keep, 0);
}

#[derive(Record)]
#[tagex(template = "{{x}},{{y}}")]
struct Borrowed<'a> {
    x: &'a mut i64,
    y: &'a mut String,
}

#[test]
fn borrowed_slots_write_through() {
    let mut x = 0;
    let mut y = String::new();
    {
        let mut record = Borrowed {
            x: &mut x,
            y: &mut y,
        };
        tagex::parse("5,five", &mut record).unwrap();
    }
    assert_eq!(x, 5);
    assert_eq!(y, "five");
}

#[derive(Record, Debug, Default)]
#[tagex(template = "<{{item}}>")]
struct Generic<T>
where
    T: Convert + Default,
{
    item: T,
}

#[test]
fn generic_records() {
    let ints: Generic<i32> = tagex::from_str("<41>").unwrap();
    assert_eq!(ints.item, 41);

    let strings: Generic<String> = tagex::from_str("<hi there>").unwrap();
    assert_eq!(strings.item, "hi there");
}

#[derive(Record, Debug, Default)]
#[tagex(template = "{{type}}:{{value}}")]
struct RawIdent {
    #[tagex(pattern = "[a-z]+")]
    r#type: String,
    value: i64,
    #[tagex(skip)]
    ratio: f64,
}

#[test]
fn raw_identifiers_use_their_plain_name() {
    let schema = Schema::of::<RawIdent>();
    let names: Vec<_> = schema.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["type", "value"]);

    let record: RawIdent = tagex::from_str("port:8080").unwrap();
    assert_eq!(record.r#type, "port");
    assert_eq!(record.value, 8080);
    assert!(record.ratio.abs() < f64::EPSILON);
}

#[test]
fn boxed_target_is_still_a_record() {
    let mut boxed = Box::new(Generic::<i64>::default());
    tagex::parse("<9>", &mut boxed).unwrap();
    assert_eq!(boxed.item, 9);
}
