use crate::object::NullOrder;
use crate::text::QuoteKind;
use crate::utils::error::{Result, UtilError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SmallCommonsConfig {
    pub text: TextConfig,
    pub date: DateConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub join_separator: String,
    pub quote: QuoteKind,
    pub null_order: NullOrder,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            join_separator: ",".to_string(),
            quote: QuoteKind::Double,
            null_order: NullOrder::First,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    pub patterns: Vec<String>,
    pub output_pattern: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d".to_string(),
            ],
            output_pattern: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl SmallCommonsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UtilError::IoError)?;
        tracing::debug!("loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UtilError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SEPARATOR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| UtilError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn date_patterns(&self) -> Vec<&str> {
        self.date.patterns.iter().map(String::as_str).collect()
    }
}

impl Validate for SmallCommonsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("text.join_separator", &self.text.join_separator)?;

        validation::validate_non_empty_list("date.patterns", &self.date.patterns)?;
        for pattern in &self.date.patterns {
            validation::validate_date_pattern("date.patterns", pattern)?;
        }
        validation::validate_date_pattern("date.output_pattern", &self.date.output_pattern)?;

        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        Ok(())
    }
}
