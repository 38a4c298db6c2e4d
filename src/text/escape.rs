use crate::utils::error::{Result, UtilError};
use std::str::CharIndices;

/// Escapes backslashes, quotes and control characters so the result can be
/// embedded between quote delimiters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        push_escaped(&mut out, c);
    }
    out
}

pub(crate) fn push_escaped(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        '\'' => out.push_str("\\'"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        '\u{8}' => out.push_str("\\b"),
        '\u{c}' => out.push_str("\\f"),
        c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
        c => out.push(c),
    }
}

pub fn escape_opt(s: Option<&str>) -> Option<String> {
    s.map(escape)
}

/// Reverses [`escape`]. Also accepts `\uXXXX` escapes, including UTF-16
/// surrogate pairs written as two consecutive escapes.
pub fn unescape(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.char_indices();
    let mut escaped = false;

    while let Some((pos, c)) = chars.next() {
        if !escaped {
            if c == '\\' {
                escaped = true;
            } else {
                out.push(c);
            }
            continue;
        }

        escaped = false;
        let start = pos - 1;
        let decoded = match c {
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'u' => decode_unicode(s, start, &mut chars)?,
            other => {
                return Err(UtilError::InvalidEscape {
                    sequence: format!("\\{}", other),
                    position: start,
                })
            }
        };
        out.push(decoded);
    }

    if escaped {
        return Err(UtilError::DanglingEscape);
    }
    Ok(out)
}

pub fn unescape_opt(s: Option<&str>) -> Result<Option<String>> {
    s.map(unescape).transpose()
}

fn read_hex4(s: &str, start: usize, chars: &mut CharIndices<'_>) -> Result<u32> {
    let mut value = 0u32;
    for _ in 0..4 {
        let (_, c) = chars.next().ok_or(UtilError::DanglingEscape)?;
        let digit = c.to_digit(16).ok_or_else(|| invalid_unicode(s, start))?;
        value = value * 16 + digit;
    }
    Ok(value)
}

fn decode_unicode(s: &str, start: usize, chars: &mut CharIndices<'_>) -> Result<char> {
    let high = read_hex4(s, start, chars)?;

    if (0xD800..0xDC00).contains(&high) {
        // high surrogate, the low half must follow as another \u escape
        let follows =
            matches!(chars.next(), Some((_, '\\'))) && matches!(chars.next(), Some((_, 'u')));
        if !follows {
            return Err(invalid_unicode(s, start));
        }
        let low = read_hex4(s, start, chars)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(invalid_unicode(s, start));
        }
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(code).ok_or_else(|| invalid_unicode(s, start));
    }

    char::from_u32(high).ok_or_else(|| invalid_unicode(s, start))
}

fn invalid_unicode(s: &str, start: usize) -> UtilError {
    let sequence: String = s[start..].chars().take(6).collect();
    UtilError::InvalidEscape {
        sequence,
        position: start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a\"b"), "a\\\"b");
        assert_eq!(escape("it's"), "it\\'s");
        assert_eq!(escape("line\nbreak\ttab"), "line\\nbreak\\ttab");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
        assert_eq!(escape("\u{1b}"), "\\u001b");
        assert_eq!(escape("héllo"), "héllo");
    }

    #[test]
    fn test_unescape_round_trip() {
        let samples = ["", "simple", "tab\there", "quote\"s and 'single'", "\\\\", "\u{0}\u{8}\u{c}\u{7f}", "日本語 🎉"];
        for sample in samples {
            assert_eq!(unescape(&escape(sample)).unwrap(), sample);
        }
    }

    #[test]
    fn test_unescape_unicode() {
        assert_eq!(unescape("\\u0041\\u00e9").unwrap(), "Aé");
        assert_eq!(unescape("\\ud83c\\udf89").unwrap(), "🎉");
    }

    #[test]
    fn test_unescape_errors() {
        assert!(matches!(unescape("abc\\"), Err(UtilError::DanglingEscape)));
        assert!(matches!(unescape("\\u00"), Err(UtilError::DanglingEscape)));
        match unescape("ab\\q") {
            Err(UtilError::InvalidEscape { sequence, position }) => {
                assert_eq!(sequence, "\\q");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(unescape("\\u00zz"), Err(UtilError::InvalidEscape { .. })));
        assert!(matches!(unescape("\\ud83c"), Err(UtilError::InvalidEscape { .. })));
        assert!(matches!(unescape("\\udf89"), Err(UtilError::InvalidEscape { .. })));
    }

    #[test]
    fn test_optional_variants() {
        assert_eq!(escape_opt(None), None);
        assert_eq!(unescape_opt(None).unwrap(), None);
        assert_eq!(unescape_opt(Some("\\n")).unwrap(), Some("\n".to_string()));
    }
}
