use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Argument '{name}' must not be null")]
    NullArgument { name: String },

    #[error("Input must not be empty: {context}")]
    EmptyInput { context: String },

    #[error("Value is not quoted: {value}")]
    Unquoted { value: String },

    #[error("Unterminated quote, expected closing {delimiter}")]
    UnterminatedQuote { delimiter: char },

    #[error("Mismatched delimiter: expected {expected}, found {found}")]
    MismatchedDelimiter { expected: char, found: char },

    #[error("Unexpected content after closing quote at position {position}")]
    TrailingContent { position: usize },

    #[error("Quoted content must be {expected} character(s), got {actual}")]
    InvalidQuotedLength { expected: usize, actual: usize },

    #[error("Input ends inside an escape sequence")]
    DanglingEscape,

    #[error("Invalid escape sequence '{sequence}' at position {position}")]
    InvalidEscape { sequence: String, position: usize },

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Cannot parse '{value}' as {target}")]
    ParseNumber { value: String, target: &'static str },

    #[error("Cannot interpret '{value}' as a boolean")]
    ParseBool { value: String },

    #[error("Cannot parse date '{value}' with patterns [{patterns}]")]
    ParseDate { value: String, patterns: String },

    #[error("Character '{0}' is not a digit")]
    NotADigit(char),

    #[error("Range {start}..{end} is out of bounds for length {len}")]
    IndexOutOfRange { start: usize, end: usize, len: usize },

    #[error("Date arithmetic overflowed: {operation}")]
    DateOverflow { operation: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Format,
    Conversion,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl UtilError {
    pub fn null_argument(name: &str) -> Self {
        Self::NullArgument {
            name: name.to_string(),
        }
    }

    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NullArgument { .. } | Self::EmptyInput { .. } | Self::IndexOutOfRange { .. } => {
                ErrorCategory::Argument
            }
            Self::Unquoted { .. }
            | Self::UnterminatedQuote { .. }
            | Self::MismatchedDelimiter { .. }
            | Self::TrailingContent { .. }
            | Self::InvalidQuotedLength { .. }
            | Self::DanglingEscape
            | Self::InvalidEscape { .. }
            | Self::InvalidPattern { .. } => ErrorCategory::Format,
            Self::ParseNumber { .. }
            | Self::ParseBool { .. }
            | Self::ParseDate { .. }
            | Self::NotADigit(_)
            | Self::DateOverflow { .. } => ErrorCategory::Conversion,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Argument | ErrorCategory::Conversion => ErrorSeverity::Medium,
            ErrorCategory::Format => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::NullArgument { name } => format!("Provide a value for '{}'", name),
            Self::EmptyInput { .. } => "Provide at least one input value".to_string(),
            Self::Unquoted { .. } => {
                "Wrap the value in double quotes (\"...\") or single quotes ('.')".to_string()
            }
            Self::UnterminatedQuote { delimiter } => {
                format!("Add a closing {} or escape the last one", delimiter)
            }
            Self::MismatchedDelimiter { expected, .. } => {
                format!("Close the value with {}", expected)
            }
            Self::TrailingContent { .. } => "Remove characters after the closing quote".to_string(),
            Self::InvalidQuotedLength { .. } => {
                "Single quotes hold exactly one character; use double quotes for text".to_string()
            }
            Self::DanglingEscape | Self::InvalidEscape { .. } => {
                "Use one of \\\\ \\\" \\' \\n \\r \\t \\b \\f \\0 or \\uXXXX".to_string()
            }
            Self::InvalidPattern { .. } => "Check the strftime pattern (e.g. %Y-%m-%d)".to_string(),
            Self::ParseNumber { target, .. } => format!("Provide a value within the {} range", target),
            Self::ParseBool { .. } => "Use true/false, yes/no, on/off, y/n, t/f or 1/0".to_string(),
            Self::ParseDate { .. } => "Check the date against the configured patterns".to_string(),
            Self::NotADigit(_) => "Provide a character between '0' and '9'".to_string(),
            Self::IndexOutOfRange { .. } => "Check the start and end indices".to_string(),
            Self::DateOverflow { .. } => "Use a smaller offset".to_string(),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Check the configuration file".to_string()
            }
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Argument => format!("Invalid argument: {}", self),
            ErrorCategory::Format => format!("Malformed input: {}", self),
            ErrorCategory::Conversion => format!("Conversion failed: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;
