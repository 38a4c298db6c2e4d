use crate::object::{compare_by, NullOrder};
use std::cmp::Ordering;

pub fn compare(a: Option<&str>, b: Option<&str>, nulls: NullOrder) -> Ordering {
    compare_by(a, b, nulls, |x, y| x.cmp(y))
}

/// Compares char by char after Unicode lowercasing.
pub fn compare_ignore_case(a: Option<&str>, b: Option<&str>, nulls: NullOrder) -> Ordering {
    compare_by(a, b, nulls, |x, y| {
        x.chars()
            .flat_map(char::to_lowercase)
            .cmp(y.chars().flat_map(char::to_lowercase))
    })
}

pub fn equals(a: Option<&str>, b: Option<&str>) -> bool {
    a == b
}

pub fn equals_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    compare_ignore_case(a, b, NullOrder::First) == Ordering::Equal
}

pub fn equals_any(a: Option<&str>, candidates: &[Option<&str>]) -> bool {
    candidates.iter().any(|candidate| equals(a, *candidate))
}
