use crate::utils::error::{Result, UtilError};
use std::fmt::{Display, Write};

pub fn join<I, T>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        // writing into a String cannot fail
        let _ = write!(out, "{}", item);
    }
    out
}

/// Like [`join`], `None` items render as empty strings but keep their
/// separator.
pub fn join_opt<I, T>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: Display,
{
    join(
        items
            .into_iter()
            .map(|item| item.map(|v| v.to_string()).unwrap_or_default()),
        separator,
    )
}

pub fn join_range<T: Display>(items: &[T], separator: &str, start: usize, end: usize) -> Result<String> {
    if start > end || end > items.len() {
        return Err(UtilError::IndexOutOfRange {
            start,
            end,
            len: items.len(),
        });
    }
    Ok(join(&items[start..end], separator))
}

pub fn split_joined(s: &str, separator: &str) -> Result<Vec<String>> {
    if separator.is_empty() {
        return Err(UtilError::empty_input("separator"));
    }
    if s.is_empty() {
        return Ok(Vec::new());
    }
    Ok(s.split(separator).map(str::to_string).collect())
}
