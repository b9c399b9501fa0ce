use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["roots"], serde_json::json!(["."]));
    assert_eq!(parsed["ignores"], serde_json::json!([]));
    assert_eq!(parsed["disabledRules"], serde_json::json!([]));
    assert!(parsed["fallbackLocale"].is_null());

    // 2-space indentation from serde_json's pretty printer
    assert!(content.contains("\n  \"roots\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&["init"])?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "\u{2713} Created .tscatrc.json\n");
    assert_config_content(&test.read_file(".tscatrc.json")?)?;
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".tscatrc.json", r#"{ "roots": ["ui"] }"#)?;

    let out = test.run(&["init"])?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains(".tscatrc.json already exists"));
    assert_eq!(test.read_file(".tscatrc.json")?, r#"{ "roots": ["ui"] }"#);
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = test.run(&[])?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Usage:"));
    assert!(out.stdout.contains("lookup"));
    Ok(())
}
