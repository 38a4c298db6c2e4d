#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use small_commons::app::execute;
use small_commons::utils::validation::Validate;
use small_commons::{CliConfig, SmallCommonsConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn run(args: &[&str], config: &SmallCommonsConfig) -> Result<String> {
    let cli = CliConfig::try_parse_from(args)?;
    Ok(execute(&cli.command, config)?.render(cli.json))
}

#[test]
fn test_config_file_drives_commands() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(
        br#"
[text]
join_separator = " + "
quote = "single"

[date]
patterns = ["%d/%m/%Y"]
output_pattern = "%Y-%m-%d"
"#,
    )?;

    let config = SmallCommonsConfig::from_file(config_file.path())?;
    config.validate()?;

    assert_eq!(run(&["small-commons", "join", "a", "b"], &config)?, "a + b");
    assert_eq!(run(&["small-commons", "quote", "z"], &config)?, "'z'");
    assert_eq!(run(&["small-commons", "date", "24/12/2023"], &config)?, "2023-12-24");
    Ok(())
}

#[test]
fn test_text_commands_with_defaults() -> Result<()> {
    let config = SmallCommonsConfig::default();

    assert_eq!(run(&["small-commons", "escape", "a\"b"], &config)?, "a\\\"b");
    assert_eq!(run(&["small-commons", "unquote", "\"x\\ty\""], &config)?, "x\ty");
    assert_eq!(run(&["small-commons", "distance", "flaw", "lawn"], &config)?, "2");
    assert_eq!(
        run(&["small-commons", "convert", "int", "abc", "--default", "7", "--json"], &config)?,
        r#"{"command":"convert","result":7}"#
    );
    Ok(())
}

#[test]
fn test_command_errors_surface() -> Result<()> {
    let config = SmallCommonsConfig::default();
    let cli = CliConfig::try_parse_from(["small-commons", "unescape", "dangling\\"])?;
    let err = execute(&cli.command, &config).expect_err("dangling escape must fail");
    assert!(err.user_friendly_message().starts_with("Malformed input"));
    Ok(())
}

#[test]
fn test_negative_values_reach_conversions() -> Result<()> {
    let config = SmallCommonsConfig::default();

    assert_eq!(run(&["small-commons", "convert", "byte", "-128"], &config)?, "-128");
    assert_eq!(
        run(&["small-commons", "convert", "byte", "-129", "--default", "-1"], &config)?,
        "-1"
    );
    assert_eq!(
        run(&["small-commons", "convert", "double", "-2.5", "--json"], &config)?,
        r#"{"command":"convert","result":-2.5}"#
    );
    assert_eq!(run(&["small-commons", "escape", "-x"], &config)?, "-x");
    Ok(())
}
