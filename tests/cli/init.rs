use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ Created .resxlookuprc.json\n");

    let content = test.read_file(".resxlookuprc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["resourcesDir"], "./Resources");
    assert_eq!(parsed["extension"], "resx");
    assert_eq!(parsed["onParseError"], "skip");
    assert_eq!(parsed["recursive"], false);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resxlookuprc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: .resxlookuprc.json already exists\n");
    assert_eq!(test.read_file(".resxlookuprc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_table("Resources/Greetings.resx", &[("Hello", "Hola")])?;

    let output = test.lookup_command("Hello").output()?;
    assert!(
        output.status.success(),
        "Lookup should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Translation: Hola\n");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
