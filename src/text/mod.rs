pub mod compare;
pub mod escape;
pub mod join;
pub mod levenshtein;
pub mod quote;

pub use escape::{escape, unescape};
pub use quote::{quote, quote_char, unquote, unquote_char, QuoteKind};

pub fn is_empty(s: Option<&str>) -> bool {
    s.map_or(true, str::is_empty)
}

pub fn is_blank(s: Option<&str>) -> bool {
    s.map_or(true, |s| s.trim().is_empty())
}

pub fn default_if_empty<'a>(s: Option<&'a str>, default: &'a str) -> &'a str {
    match s {
        Some(s) if !s.is_empty() => s,
        _ => default,
    }
}

pub fn default_string(s: Option<&str>) -> &str {
    s.unwrap_or("")
}
