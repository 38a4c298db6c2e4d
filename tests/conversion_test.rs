use anyhow::Result;
use small_commons::convert::{self, boolean, character, date, number};
use small_commons::text::{compare, join};
use small_commons::NullOrder;
use std::cmp::Ordering;

#[test]
fn test_numeric_range_boundaries() {
    assert_eq!(convert::to_byte(Some(&i8::MIN.to_string()), 0), i8::MIN);
    assert_eq!(convert::to_byte(Some("128"), 9), 9);
    assert_eq!(convert::to_short(Some(&i16::MIN.to_string()), 0), i16::MIN);
    assert_eq!(convert::to_short(Some("-32769"), 9), 9);
    assert_eq!(convert::to_int(Some(&i32::MAX.to_string()), 0), i32::MAX);
    assert_eq!(convert::to_int(Some("2147483648"), 9), 9);
    assert_eq!(convert::to_long(Some(&i64::MIN.to_string()), 0), i64::MIN);
    assert_eq!(convert::to_long(Some("-9223372036854775809"), 9), 9);
    assert_eq!(convert::to_float(Some(&f32::MIN.to_string()), 0.0), f32::MIN);
    assert_eq!(convert::to_double(Some(&f64::MAX.to_string()), 0.0), f64::MAX);
}

#[test]
fn test_missing_values_use_defaults() -> Result<()> {
    assert_eq!(convert::to_int(None, 5), 5);
    assert!(boolean::to_bool_or(None, true));
    assert_eq!(character::to_char_or(None, '?'), '?');
    assert_eq!(convert::unbox_or(None::<f64>, 1.5), 1.5);
    assert_eq!(
        convert::to_primitives(&[Some('a'), None], '-'),
        vec!['a', '-']
    );

    let fallback = date::parse("2020-01-01", &["%Y-%m-%d"])?;
    assert_eq!(date::parse_or(None, &["%Y-%m-%d"], fallback), fallback);
    assert_eq!(date::format(None, "%Y")?, None);
    assert_eq!(date::from_millis(None), None);
    Ok(())
}

#[test]
fn test_decode_and_compare() -> Result<()> {
    assert_eq!(number::decode::<i16>("0x7fff")?, i16::MAX);
    assert_eq!(number::decode::<i64>("-077")?, -63);
    assert_eq!(number::compare(2.0f64, f64::NAN), Ordering::Less);
    assert_eq!(number::max(&[1i8, 5, -3])?, 5);
    Ok(())
}

#[test]
fn test_null_safe_string_helpers() {
    assert_eq!(compare::compare(None, Some(""), NullOrder::First), Ordering::Less);
    assert_eq!(compare::compare(None, Some(""), NullOrder::Last), Ordering::Greater);
    assert!(compare::equals_ignore_case(Some("STRASSE"), Some("strasse")));
    assert_eq!(join::join_opt([Some(1), None, Some(3)], "/"), "1//3");
}
