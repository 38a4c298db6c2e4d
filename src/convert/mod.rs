//! Null-safe conversions. `Option<T>` stands in for a possibly missing
//! value; every `*_or` function falls back to the caller's default.

pub mod boolean;
pub mod character;
pub mod date;
pub mod number;

pub use number::{to_byte, to_double, to_float, to_int, to_long, to_short};

pub fn unbox_or<T: Copy>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Replaces every missing element with `default`.
pub fn to_primitives<T: Copy>(values: &[Option<T>], default: T) -> Vec<T> {
    values.iter().map(|v| v.unwrap_or(default)).collect()
}

pub fn to_options<T: Copy>(values: &[T]) -> Vec<Option<T>> {
    values.iter().copied().map(Some).collect()
}
