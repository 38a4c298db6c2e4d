use crate::utils::error::{Result, UtilError};

/// First char of the string, `None` for a missing or empty string.
pub fn to_char(s: Option<&str>) -> Option<char> {
    s?.chars().next()
}

pub fn to_char_or(s: Option<&str>, default: char) -> char {
    to_char(s).unwrap_or(default)
}

pub fn digit_value(c: char) -> Result<u32> {
    if !c.is_ascii_digit() {
        return Err(UtilError::NotADigit(c));
    }
    Ok(c as u32 - '0' as u32)
}

pub fn digit_value_or(c: char, default: u32) -> u32 {
    digit_value(c).unwrap_or(default)
}

/// `\uXXXX` form of the char; chars outside the BMP become a surrogate pair.
pub fn unicode_escaped(c: char) -> String {
    let mut units = [0u16; 2];
    c.encode_utf16(&mut units)
        .iter()
        .map(|unit| format!("\\u{:04x}", unit))
        .collect()
}

pub fn to_string_opt(c: Option<char>) -> Option<String> {
    c.map(String::from)
}

/// Space through tilde.
pub fn is_ascii_printable(c: char) -> bool {
    matches!(c, ' '..='~')
}

pub fn is_ascii_control(c: char) -> bool {
    c.is_ascii_control()
}
