use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-commons")]
#[command(about = "Null-safe conversions and string helpers from the command line")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Escape quotes, backslashes and control characters
    Escape {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Reverse `escape`
    Unescape {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Escape and wrap a value in quotes
    #[command(allow_negative_numbers = true)]
    Quote {
        value: String,
        /// Use single quotes (value must be one character)
        #[arg(long)]
        single: bool,
    },

    /// Strip quotes and unescape the content
    Unquote {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Levenshtein distance between two values
    #[command(allow_negative_numbers = true)]
    Distance {
        left: String,
        right: String,
        /// Give up once the distance exceeds this value
        #[arg(long)]
        threshold: Option<usize>,
    },

    /// Join values with a separator
    #[command(allow_negative_numbers = true)]
    Join {
        items: Vec<String>,
        /// Overrides text.join_separator from the config
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Convert a value to a primitive type, falling back to a default
    #[command(allow_negative_numbers = true)]
    Convert {
        #[arg(value_enum)]
        target: ConvertTarget,
        value: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        default: Option<String>,
    },

    /// Parse a date and reformat it
    #[command(allow_negative_numbers = true)]
    Date {
        value: String,
        /// Overrides date.patterns from the config
        #[arg(short, long)]
        pattern: Vec<String>,
        /// Overrides date.output_pattern from the config
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show host information
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConvertTarget {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}
