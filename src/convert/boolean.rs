use crate::utils::error::{Result, UtilError};

const TRUE_WORDS: [&str; 6] = ["true", "yes", "on", "y", "t", "1"];
const FALSE_WORDS: [&str; 6] = ["false", "no", "off", "n", "f", "0"];

/// Case-insensitive; anything unrecognised is `None`.
pub fn parse(s: Option<&str>) -> Option<bool> {
    let s = s?.trim();
    if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(s)) {
        Some(true)
    } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(s)) {
        Some(false)
    } else {
        None
    }
}

pub fn parse_strict(s: &str) -> Result<bool> {
    parse(Some(s)).ok_or_else(|| UtilError::ParseBool {
        value: s.to_string(),
    })
}

pub fn to_bool_or(s: Option<&str>, default: bool) -> bool {
    parse(s).unwrap_or(default)
}

pub fn from_int(value: i64) -> bool {
    value != 0
}

pub fn to_int(value: bool) -> i32 {
    i32::from(value)
}

pub fn from_int_with(value: i64, true_value: i64, false_value: i64) -> Result<bool> {
    if value == true_value {
        Ok(true)
    } else if value == false_value {
        Ok(false)
    } else {
        Err(UtilError::ParseBool {
            value: value.to_string(),
        })
    }
}

pub fn to_str_true_false(value: Option<bool>) -> Option<&'static str> {
    value.map(|b| if b { "true" } else { "false" })
}

pub fn to_str_yes_no(value: Option<bool>) -> Option<&'static str> {
    value.map(|b| if b { "yes" } else { "no" })
}

pub fn to_str_on_off(value: Option<bool>) -> Option<&'static str> {
    value.map(|b| if b { "on" } else { "off" })
}

pub fn negate(value: Option<bool>) -> Option<bool> {
    value.map(|b| !b)
}

pub fn is_true(value: Option<bool>) -> bool {
    value == Some(true)
}

pub fn is_false(value: Option<bool>) -> bool {
    value == Some(false)
}

pub fn and(values: &[bool]) -> Result<bool> {
    non_empty(values, "and")?;
    Ok(values.iter().all(|b| *b))
}

pub fn or(values: &[bool]) -> Result<bool> {
    non_empty(values, "or")?;
    Ok(values.iter().any(|b| *b))
}

/// True when an odd number of values are true.
pub fn xor(values: &[bool]) -> Result<bool> {
    non_empty(values, "xor")?;
    Ok(values.iter().fold(false, |acc, b| acc ^ b))
}

fn non_empty(values: &[bool], operation: &str) -> Result<()> {
    if values.is_empty() {
        return Err(UtilError::empty_input(operation));
    }
    Ok(())
}
