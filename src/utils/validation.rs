use crate::utils::error::{Result, UtilError};
use chrono::format::{Item, StrftimeItems};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value)) {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// chrono 的格式字串驗證，未知的 `%` 指令會被拒絕
pub fn validate_date_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_non_empty_string(field_name, pattern)?;

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Invalid strftime pattern".to_string(),
        });
    }
    Ok(())
}
