use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .tolkrc.json\n");

    let content = test.read_file(".tolkrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["referenceLanguage"], "en");
    assert_eq!(parsed["database"], "./translations.db");
    assert_eq!(parsed["scanPatterns"][0], "src/**/*.tsx");
    assert!(content.contains("  \"sourceRoot\""));

    Ok(())
}

#[test]
fn test_init_refuses_existing_config() -> Result<()> {
    let test = CliTest::with_file(".tolkrc.json", "{}")?;

    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".tolkrc.json already exists"));
    assert_eq!(test.read_file(".tolkrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".tolkrc.json", r#"{ "scanPatterns": [] }"#)?;

    let output = test.run(&["languages"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("scanPatterns"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage: tolk"));

    Ok(())
}
