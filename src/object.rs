//! Helpers that work on any value: defaults for missing values, null-safe
//! ordering, identity strings and clone-based assignment.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Where `None` sorts relative to present values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullOrder {
    #[default]
    First,
    Last,
}

impl NullOrder {
    pub(crate) fn order_missing(self, a_missing: bool, b_missing: bool) -> Option<Ordering> {
        match (a_missing, b_missing) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(match self {
                NullOrder::First => Ordering::Less,
                NullOrder::Last => Ordering::Greater,
            }),
            (false, true) => Some(match self {
                NullOrder::First => Ordering::Greater,
                NullOrder::Last => Ordering::Less,
            }),
            (false, false) => None,
        }
    }
}

/// Compares two optional values, placing `None` according to `nulls`.
pub fn compare<T: Ord + ?Sized>(a: Option<&T>, b: Option<&T>, nulls: NullOrder) -> Ordering {
    compare_by(a, b, nulls, |x, y| x.cmp(y))
}

pub fn compare_by<T: ?Sized, F>(a: Option<&T>, b: Option<&T>, nulls: NullOrder, cmp: F) -> Ordering
where
    F: FnOnce(&T, &T) -> Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        _ => nulls
            .order_missing(a.is_none(), b.is_none())
            .unwrap_or(Ordering::Equal),
    }
}

pub fn default_if_none<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

pub fn first_some<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    values.into_iter().flatten().next()
}

pub fn all_some<T>(values: &[Option<T>]) -> bool {
    values.iter().all(Option::is_some)
}

pub fn any_some<T>(values: &[Option<T>]) -> bool {
    values.iter().any(Option::is_some)
}

/// Overwrites `target` with a copy of `source`, reusing `target`'s
/// allocations where the type allows it.
pub fn assign<T: Clone>(target: &mut T, source: &T) {
    target.clone_from(source);
}

pub fn clone_opt<T: Clone>(value: Option<&T>) -> Option<T> {
    value.cloned()
}

pub fn type_name_of<T: ?Sized>(_value: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// `type_name@address`. Two live values of the same sized, non-zero-sized
/// type never collide. Zero-sized values may share an address, and so may a
/// struct and its first field, in which case only the type name differs.
pub fn identity_string<T: ?Sized>(value: &T) -> String {
    let address = value as *const T as *const () as usize;
    format!("{}@{:x}", std::any::type_name::<T>(), address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_null_order() {
        assert_eq!(compare::<i32>(None, None, NullOrder::First), Ordering::Equal);
        assert_eq!(compare(None, Some(&1), NullOrder::First), Ordering::Less);
        assert_eq!(compare(None, Some(&1), NullOrder::Last), Ordering::Greater);
        assert_eq!(compare(Some(&1), None, NullOrder::Last), Ordering::Less);
        assert_eq!(compare(Some(&1), Some(&2), NullOrder::Last), Ordering::Less);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_if_none(None, 7), 7);
        assert_eq!(default_if_none(Some(3), 7), 3);
        assert_eq!(first_some(vec![None, Some("a"), Some("b")]), Some("a"));
        assert_eq!(first_some::<i32, _>(vec![None, None]), None);
        assert!(all_some(&[Some(1), Some(2)]));
        assert!(!all_some(&[Some(1), None]));
        assert!(any_some(&[None, Some(1)]));
        assert!(!any_some::<i32>(&[None]));
    }

    #[test]
    fn test_assign_and_clone() {
        let mut target = vec![1, 2, 3];
        let source = vec![4, 5];
        assign(&mut target, &source);
        assert_eq!(target, source);

        assert_eq!(clone_opt(Some(&String::from("x"))), Some("x".to_string()));
        assert_eq!(clone_opt::<String>(None), None);
    }

    #[test]
    fn test_identity_string() {
        let a = String::from("same");
        let b = String::from("same");
        let id_a = identity_string(&a);

        assert!(id_a.starts_with("alloc::string::String@"));
        assert_eq!(id_a, identity_string(&a));
        assert_ne!(id_a, identity_string(&b));
        assert_eq!(type_name_of(&5u8), "u8");
    }

    #[test]
    fn test_identity_string_shared_address() {
        #[repr(C)]
        struct Wrapper(u32);

        let wrapper = Wrapper(1);
        let id_outer = identity_string(&wrapper);
        let id_inner = identity_string(&wrapper.0);
        let address = |id: &str| id.rsplit('@').next().map(str::to_string);

        assert_ne!(id_outer, id_inner);
        assert_eq!(address(&id_outer), address(&id_inner));
        assert!(id_inner.starts_with("u32@"));
    }
}
