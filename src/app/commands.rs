use crate::config::{Command, ConvertTarget, SmallCommonsConfig};
use crate::convert::{boolean, character, date, number};
use crate::system::SystemInfo;
use crate::text::{self, join, levenshtein, QuoteKind};
use crate::utils::error::{Result, UtilError};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput {
    pub command: &'static str,
    pub result: Value,
}

impl CommandOutput {
    fn new(command: &'static str, result: impl Into<Value>) -> Self {
        Self {
            command,
            result: result.into(),
        }
    }

    pub fn render(&self, as_json: bool) -> String {
        if as_json {
            return serde_json::to_string(self).unwrap_or_else(|_| self.result.to_string());
        }
        match &self.result {
            Value::String(s) => s.clone(),
            Value::Null => "null".to_string(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }
}

pub fn execute(command: &Command, config: &SmallCommonsConfig) -> Result<CommandOutput> {
    tracing::debug!("executing {:?}", command);

    match command {
        Command::Escape { value } => Ok(CommandOutput::new("escape", text::escape(value))),
        Command::Unescape { value } => Ok(CommandOutput::new("unescape", text::unescape(value)?)),
        Command::Quote { value, single } => {
            let kind = if *single {
                QuoteKind::Single
            } else {
                config.text.quote
            };
            Ok(CommandOutput::new("quote", quote_value(value, kind)?))
        }
        Command::Unquote { value } => Ok(CommandOutput::new("unquote", text::unquote(value)?)),
        Command::Distance {
            left,
            right,
            threshold,
        } => {
            let result = match threshold {
                Some(limit) => levenshtein::distance_within(left, right, *limit)
                    .map_or(Value::Null, |d| json!(d)),
                None => json!(levenshtein::distance(left, right)),
            };
            Ok(CommandOutput::new("distance", result))
        }
        Command::Join { items, separator } => {
            let separator = separator.as_deref().unwrap_or(&config.text.join_separator);
            Ok(CommandOutput::new("join", join::join(items, separator)))
        }
        Command::Convert {
            target,
            value,
            default,
        } => Ok(CommandOutput::new(
            "convert",
            convert_value(*target, value.as_deref(), default.as_deref())?,
        )),
        Command::Date {
            value,
            pattern,
            format,
        } => {
            let patterns: Vec<&str> = if pattern.is_empty() {
                config.date_patterns()
            } else {
                pattern.iter().map(String::as_str).collect()
            };
            let output_pattern = format.as_deref().unwrap_or(&config.date.output_pattern);

            let parsed = date::parse(value, &patterns)?;
            let formatted = date::format(Some(&parsed), output_pattern)?;
            Ok(CommandOutput::new("date", formatted.map_or(Value::Null, Value::String)))
        }
        Command::System => {
            let info = SystemInfo::collect();
            let value = serde_json::to_value(&info).map_err(|e| UtilError::ConfigError {
                message: format!("Cannot serialize system info: {}", e),
            })?;
            Ok(CommandOutput::new("system", value))
        }
    }
}

fn quote_value(value: &str, kind: QuoteKind) -> Result<String> {
    if kind == QuoteKind::Double {
        return Ok(text::quote(value, kind));
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(text::quote_char(c)),
        _ => Err(UtilError::InvalidQuotedLength {
            expected: 1,
            actual: value.chars().count(),
        }),
    }
}

/// The default itself must be valid for the target type.
fn convert_value(target: ConvertTarget, value: Option<&str>, default: Option<&str>) -> Result<Value> {
    let result = match target {
        ConvertTarget::Bool => {
            let fallback = default.map(boolean::parse_strict).transpose()?.unwrap_or(false);
            json!(boolean::to_bool_or(value, fallback))
        }
        ConvertTarget::Byte => json!(number::to_byte(value, parse_default(default)?)),
        ConvertTarget::Short => json!(number::to_short(value, parse_default(default)?)),
        ConvertTarget::Int => json!(number::to_int(value, parse_default(default)?)),
        ConvertTarget::Long => json!(number::to_long(value, parse_default(default)?)),
        ConvertTarget::Float => json!(number::to_float(value, parse_default(default)?)),
        ConvertTarget::Double => json!(number::to_double(value, parse_default(default)?)),
        ConvertTarget::Char => {
            let fallback = character::to_char(default);
            match character::to_char(value).or(fallback) {
                Some(c) => json!(c.to_string()),
                None => return Err(UtilError::null_argument("value")),
            }
        }
    };
    Ok(result)
}

fn parse_default<T: number::Numeric + Default>(default: Option<&str>) -> Result<T> {
    default.map(number::parse::<T>).transpose().map(Option::unwrap_or_default)
}
