//! Levenshtein edit distance with unit costs for insertion, deletion and
//! substitution. Distances are counted in chars, not bytes.

use crate::utils::error::{Result, UtilError};

pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_chars(&a, &b, None).unwrap_or(usize::MAX)
}

/// Both arguments are required; `None` is an error rather than an empty string.
pub fn distance_opt(a: Option<&str>, b: Option<&str>) -> Result<usize> {
    let a = a.ok_or_else(|| UtilError::null_argument("a"))?;
    let b = b.ok_or_else(|| UtilError::null_argument("b"))?;
    Ok(distance(a, b))
}

/// Returns `None` as soon as the distance is known to exceed `threshold`.
pub fn distance_within(a: &str, b: &str, threshold: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > threshold {
        return None;
    }
    distance_chars(&a, &b, Some(threshold))
}

/// `1.0` for identical strings, `0.0` when nothing lines up.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance(a, b) as f64 / longest as f64
}

fn distance_chars(a: &[char], b: &[char], threshold: Option<usize>) -> Option<usize> {
    // keep the shorter sequence in the row
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return within(long.len(), threshold);
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0usize; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        current[0] = i + 1;
        let mut row_min = current[0];

        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            current[j + 1] = (previous[j] + cost)
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
            row_min = row_min.min(current[j + 1]);
        }

        if let Some(limit) = threshold {
            if row_min > limit {
                return None;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    within(previous[short.len()], threshold)
}

fn within(value: usize, threshold: Option<usize>) -> Option<usize> {
    match threshold {
        Some(limit) if value > limit => None,
        _ => Some(value),
    }
}
