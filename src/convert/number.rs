use crate::utils::error::{Result, UtilError};
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

pub trait Numeric: FromStr + Copy + PartialOrd + Display {
    const NAME: &'static str;

    fn total_compare(&self, other: &Self) -> Ordering;

    fn is_nan(&self) -> bool {
        false
    }
}

pub trait Integral: Numeric {
    fn from_str_radix(s: &str, radix: u32) -> std::result::Result<Self, std::num::ParseIntError>;
}

macro_rules! impl_integral {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Numeric for $ty {
                const NAME: &'static str = $name;

                fn total_compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }

            impl Integral for $ty {
                fn from_str_radix(s: &str, radix: u32) -> std::result::Result<Self, std::num::ParseIntError> {
                    <$ty>::from_str_radix(s, radix)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Numeric for $ty {
                const NAME: &'static str = $name;

                fn total_compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                fn is_nan(&self) -> bool {
                    <$ty>::is_nan(*self)
                }
            }
        )*
    };
}

impl_integral!(i8 => "byte", i16 => "short", i32 => "int", i64 => "long");
impl_float!(f32 => "float", f64 => "double");

/// Parses a trimmed decimal representation. Out-of-range integers are errors.
pub fn parse<T: Numeric>(s: &str) -> Result<T> {
    s.trim().parse::<T>().map_err(|_| UtilError::ParseNumber {
        value: s.to_string(),
        target: T::NAME,
    })
}

pub fn parse_or<T: Numeric>(s: Option<&str>, default: T) -> T {
    match s {
        Some(s) if !s.trim().is_empty() => parse(s).unwrap_or_else(|_| {
            tracing::trace!("falling back to default {} for '{}'", default, s);
            default
        }),
        _ => default,
    }
}

/// Decodes an optionally signed integer written in hex (`0x`, `0X`, `#`),
/// octal (leading `0`) or decimal.
pub fn decode<T: Integral>(s: &str) -> Result<T> {
    let err = || UtilError::ParseNumber {
        value: s.to_string(),
        target: T::NAME,
    };

    let trimmed = s.trim();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let (radix, digits) = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (16, hex)
    } else if let Some(hex) = rest.strip_prefix('#') {
        (16, hex)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    // a second sign after the prefix is not allowed
    if digits.is_empty() || digits.starts_with(['-', '+']) {
        return Err(err());
    }

    T::from_str_radix(&format!("{}{}", sign, digits), radix).map_err(|_| err())
}

pub fn to_byte(s: Option<&str>, default: i8) -> i8 {
    parse_or(s, default)
}

pub fn to_short(s: Option<&str>, default: i16) -> i16 {
    parse_or(s, default)
}

pub fn to_int(s: Option<&str>, default: i32) -> i32 {
    parse_or(s, default)
}

pub fn to_long(s: Option<&str>, default: i64) -> i64 {
    parse_or(s, default)
}

pub fn to_float(s: Option<&str>, default: f32) -> f32 {
    parse_or(s, default)
}

pub fn to_double(s: Option<&str>, default: f64) -> f64 {
    parse_or(s, default)
}

pub fn compare<T: Numeric>(a: T, b: T) -> Ordering {
    a.total_compare(&b)
}

/// NaN wins over every other value.
pub fn min<T: Numeric>(values: &[T]) -> Result<T> {
    extreme(values, "min", Ordering::Less)
}

/// NaN wins over every other value.
pub fn max<T: Numeric>(values: &[T]) -> Result<T> {
    extreme(values, "max", Ordering::Greater)
}

fn extreme<T: Numeric>(values: &[T], operation: &str, wanted: Ordering) -> Result<T> {
    let (first, rest) = values
        .split_first()
        .ok_or_else(|| UtilError::empty_input(operation))?;

    let mut best = *first;
    for value in rest {
        if best.is_nan() {
            break;
        }
        if value.is_nan() || value.partial_cmp(&best) == Some(wanted) {
            best = *value;
        }
    }
    Ok(best)
}

pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    a == b || (a - b).abs() <= epsilon
}
