use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_lookup_found() -> Result<()> {
    let test = CliTest::with_tables(&[("Greetings", &[("Hello", "Hola")])])?;

    let output = test.lookup_command("Hello").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Translation: Hola\n");
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_lookup_not_found() -> Result<()> {
    let test = CliTest::with_tables(&[("Greetings", &[("Hello", "Hola")])])?;

    let output = test.lookup_command("Goodbye").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Translation not found for the entered sentence.\n"
    );

    Ok(())
}

#[test]
fn test_lookup_first_table_wins() -> Result<()> {
    let test = CliTest::with_tables(&[("B", &[("Yes", "Ja")]), ("A", &[("Yes", "Si")])])?;

    let output = test.lookup_command("Yes").arg("-v").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Translation: Si\n  --> A\n");

    Ok(())
}

#[test]
fn test_lookup_is_case_sensitive() -> Result<()> {
    let test = CliTest::with_tables(&[("Greetings", &[("Hello", "Hola")])])?;

    let output = test.lookup_command("hello").output()?;

    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_lookup_empty_value_is_not_a_match() -> Result<()> {
    let test = CliTest::with_tables(&[("Forms", &[("Blank", ""), ("Name", "Nombre")])])?;

    let output = test.lookup_command("Blank").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Translation not found for the entered sentence.\n"
    );

    Ok(())
}

#[test]
fn test_lookup_json_output() -> Result<()> {
    let test = CliTest::with_tables(&[("Greetings", &[("Hello", "Hola")])])?;

    let found = test.lookup_command("Hello").args(["--format", "json"]).output()?;
    let value: Value = serde_json::from_slice(&found.stdout)?;
    assert_eq!(value, json!({"message": "Hola", "error": false}));

    let missing = test
        .lookup_command("Goodbye")
        .args(["--format", "json"])
        .output()?;
    let value: Value = serde_json::from_slice(&missing.stdout)?;
    assert_eq!(
        value,
        json!({
            "message": "Translation not found for the entered sentence.",
            "error": true
        })
    );
    assert_eq!(missing.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_lookup_with_dir_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("Forms/Login.resx", &[("Password", "Contraseña")])?;

    let output = test
        .lookup_command("Password")
        .args(["--dir", "Forms"])
        .output()?;

    assert_eq!(stdout(&output), "Translation: Contraseña\n");

    Ok(())
}

#[test]
fn test_lookup_with_env_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_table("Forms/Login.resx", &[("Password", "Passwort")])?;

    let output = test
        .lookup_command("Password")
        .env("RESX_LOOKUP_DIR", test.root().join("Forms"))
        .output()?;

    assert_eq!(stdout(&output), "Translation: Passwort\n");

    Ok(())
}

#[test]
fn test_lookup_uses_config_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resxlookuprc.json", r#"{"resourcesDir": "Localization"}"#)?;
    test.write_table("Localization/Main.resx", &[("Welcome", "Bienvenido")])?;

    let output = test.lookup_command("Welcome").output()?;

    assert_eq!(stdout(&output), "Translation: Bienvenido\n");

    Ok(())
}

#[test]
fn test_lookup_bundled() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .lookup_command("Thank you")
        .args(["--bundled", "de"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Translation [de]: Danke\n");

    Ok(())
}

#[test]
fn test_lookup_missing_directory_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .lookup_command("Hello")
        .args(["--dir", "missing"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(
        stderr(&output).contains("Cannot access resource tables at missing"),
        "stderr: {}",
        stderr(&output)
    );
    assert!(
        stderr(&output).contains("resources directory 'missing' does not exist"),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_lookup_skips_broken_file_with_warning() -> Result<()> {
    let test = CliTest::with_tables(&[("Greetings", &[("Hello", "Hola")])])?;
    test.write_file("Resources/Broken.resx", "<root><data name=\"Hello\">")?;

    let output = test.lookup_command("Hello").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Translation: Hola\n");
    assert_eq!(
        stderr(&output),
        "warning: 1 file(s) could not be parsed (use -v for details)\n"
    );

    Ok(())
}

#[test]
fn test_lookup_aborts_on_broken_file_when_configured() -> Result<()> {
    let test = CliTest::with_tables(&[("Greetings", &[("Hello", "Hola")])])?;
    test.write_file(".resxlookuprc.json", r#"{"onParseError": "abort"}"#)?;
    test.write_file("Resources/Broken.resx", "<root><data name=\"Hello\">")?;

    let output = test.lookup_command("Hello").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse resource tables from"));
    assert!(stderr(&output).contains("Broken.resx"));

    Ok(())
}

#[test]
fn test_lookup_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_tables(&[("Greetings", &[("Hello", "Hola")])])?;
    test.write_file(".resxlookuprc.json", r#"{"ignores": ["[bad"]}"#)?;

    let output = test.lookup_command("Hello").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}
