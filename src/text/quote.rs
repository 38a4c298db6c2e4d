use crate::text::escape::{push_escaped, unescape};
use crate::utils::error::{Result, UtilError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteKind {
    /// `"..."`, any length.
    #[default]
    Double,
    /// `'.'`, exactly one character.
    Single,
}

impl QuoteKind {
    pub fn delimiter(self) -> char {
        match self {
            QuoteKind::Double => '"',
            QuoteKind::Single => '\'',
        }
    }

    pub fn from_delimiter(c: char) -> Option<Self> {
        match c {
            '"' => Some(QuoteKind::Double),
            '\'' => Some(QuoteKind::Single),
            _ => None,
        }
    }
}

/// With [`QuoteKind::Single`] the value should be one character, otherwise
/// the literal is not accepted by [`unquote`]; prefer [`quote_char`].
pub fn quote(s: &str, kind: QuoteKind) -> String {
    let delimiter = kind.delimiter();
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        push_escaped(&mut out, c);
    }
    out.push(delimiter);
    out
}

pub fn quote_opt(s: Option<&str>, kind: QuoteKind) -> Option<String> {
    s.map(|s| quote(s, kind))
}

pub fn quote_char(c: char) -> String {
    let mut out = String::with_capacity(4);
    out.push('\'');
    push_escaped(&mut out, c);
    out.push('\'');
    out
}

/// Strips the surrounding delimiter and unescapes the content. The delimiter
/// is taken from the first character; single quotes must hold exactly one
/// character.
pub fn unquote(s: &str) -> Result<String> {
    let (kind, content) = split_quoted(s)?;
    let value = unescape(content)?;

    if kind == QuoteKind::Single {
        let actual = value.chars().count();
        if actual != 1 {
            return Err(UtilError::InvalidQuotedLength {
                expected: 1,
                actual,
            });
        }
    }
    Ok(value)
}

pub fn unquote_opt(s: Option<&str>) -> Result<Option<String>> {
    s.map(unquote).transpose()
}

pub fn unquote_char(s: &str) -> Result<char> {
    let (kind, _) = split_quoted(s)?;
    if kind != QuoteKind::Single {
        return Err(UtilError::MismatchedDelimiter {
            expected: QuoteKind::Single.delimiter(),
            found: kind.delimiter(),
        });
    }

    let value = unquote(s)?;
    value
        .chars()
        .next()
        .ok_or(UtilError::InvalidQuotedLength {
            expected: 1,
            actual: 0,
        })
}

/// True exactly when [`unquote`] accepts the value, including the escape
/// and single-character rules.
pub fn is_quoted(s: &str) -> bool {
    unquote(s).is_ok()
}

/// Returns the quote kind and the raw (still escaped) content between the
/// delimiters.
fn split_quoted(s: &str) -> Result<(QuoteKind, &str)> {
    let mut chars = s.char_indices();
    let kind = chars
        .next()
        .and_then(|(_, c)| QuoteKind::from_delimiter(c))
        .ok_or_else(|| UtilError::Unquoted {
            value: s.to_string(),
        })?;
    let delimiter = kind.delimiter();

    let mut escaped = false;
    let mut last_unescaped = None;
    for (pos, c) in chars {
        if escaped {
            escaped = false;
            last_unescaped = None;
            continue;
        }
        if c == '\\' {
            escaped = true;
            last_unescaped = None;
            continue;
        }
        if c == delimiter {
            let end = pos + c.len_utf8();
            if end != s.len() {
                return Err(UtilError::TrailingContent { position: end });
            }
            return Ok((kind, &s[1..pos]));
        }
        last_unescaped = Some(c);
    }

    match last_unescaped {
        Some(found) if QuoteKind::from_delimiter(found).is_some() => {
            Err(UtilError::MismatchedDelimiter {
                expected: delimiter,
                found,
            })
        }
        _ => Err(UtilError::UnterminatedQuote { delimiter }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_escapes_content() {
        assert_eq!(quote("hello", QuoteKind::Double), "\"hello\"");
        assert_eq!(quote("say \"hi\"", QuoteKind::Double), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("", QuoteKind::Double), "\"\"");
        assert_eq!(quote_char('x'), "'x'");
        assert_eq!(quote_char('\''), "'\\''");
        assert_eq!(quote_char('\n'), "'\\n'");
    }

    #[test]
    fn test_unquote_round_trip() {
        for sample in ["", "a", "with space", "tab\tand \"quotes\" and 'apostrophes'", "\\"] {
            assert_eq!(unquote(&quote(sample, QuoteKind::Double)).unwrap(), sample);
        }
        for c in ['a', '\'', '"', '\\', '\0', 'é', '🎉'] {
            assert_eq!(unquote_char(&quote_char(c)).unwrap(), c);
        }
    }

    #[test]
    fn test_unquote_accepts_other_quote_inside() {
        assert_eq!(unquote("\"it's\"").unwrap(), "it's");
        assert_eq!(unquote("'\"'").unwrap(), "\"");
    }

    #[test]
    fn test_unquote_rejects_unquoted() {
        assert!(matches!(unquote(""), Err(UtilError::Unquoted { .. })));
        assert!(matches!(unquote("abc"), Err(UtilError::Unquoted { .. })));
    }

    #[test]
    fn test_unquote_unterminated() {
        assert!(matches!(
            unquote("\""),
            Err(UtilError::UnterminatedQuote { delimiter: '"' })
        ));
        assert!(matches!(
            unquote("\"abc"),
            Err(UtilError::UnterminatedQuote { delimiter: '"' })
        ));
        // closing quote is escaped
        assert!(matches!(
            unquote("\"abc\\\""),
            Err(UtilError::UnterminatedQuote { .. })
        ));
    }

    #[test]
    fn test_unquote_mismatched_delimiter() {
        match unquote("\"abc'") {
            Err(UtilError::MismatchedDelimiter { expected, found }) => {
                assert_eq!(expected, '"');
                assert_eq!(found, '\'');
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            unquote_char("\"a\""),
            Err(UtilError::MismatchedDelimiter { expected: '\'', .. })
        ));
    }

    #[test]
    fn test_unquote_trailing_content() {
        assert!(matches!(
            unquote("\"abc\"def"),
            Err(UtilError::TrailingContent { position: 5 })
        ));
    }

    #[test]
    fn test_single_quote_length() {
        assert!(matches!(
            unquote("''"),
            Err(UtilError::InvalidQuotedLength { expected: 1, actual: 0 })
        ));
        assert!(matches!(
            unquote("'ab'"),
            Err(UtilError::InvalidQuotedLength { expected: 1, actual: 2 })
        ));
        assert_eq!(unquote("'\\u0041'").unwrap(), "A");
    }

    #[test]
    fn test_is_quoted() {
        assert!(is_quoted("\"x\""));
        assert!(is_quoted("'x'"));
        assert!(!is_quoted("x"));
        assert!(!is_quoted("\"x"));
    }

    #[test]
    fn test_is_quoted_agrees_with_unquote() {
        let cases = [
            "\"x\"", "'x'", "''", "'ab'", "\"\"", "'\\n'", "\"a\\q\"", "\"abc'", "\"done\" extra", "x", "",
        ];
        for case in cases {
            assert_eq!(is_quoted(case), unquote(case).is_ok(), "{}", case);
        }
        assert!(!is_quoted("'ab'"));
        assert!(!is_quoted("''"));
        assert!(!is_quoted(&quote("ab", QuoteKind::Single)));
        assert!(is_quoted(&quote("a", QuoteKind::Single)));
    }

    #[test]
    fn test_optional_variants() {
        assert_eq!(quote_opt(None, QuoteKind::Single), None);
        assert_eq!(unquote_opt(None).unwrap(), None);
        assert_eq!(unquote_opt(Some("\"a\"")).unwrap(), Some("a".to_string()));
    }
}
