use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod lookup;

const BIN_NAME: &str = "resx-lookup";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Keep config discovery inside the fixture.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// Create a project with `Resources/<name>.resx` files.
    pub fn with_tables(tables: &[(&str, &[(&str, &str)])]) -> Result<Self> {
        let test = Self::new()?;
        for (name, entries) in tables {
            test.write_table(&format!("Resources/{}.resx", name), entries)?;
        }
        Ok(test)
    }

    pub fn write_table(&self, path: &str, entries: &[(&str, &str)]) -> Result<()> {
        self.write_file(path, &resx(entries))
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn lookup_command(&self, key: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("lookup").arg(key);
        cmd
    }

    pub fn tables_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("tables");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Render entries as a minimal `.resx` document.
pub fn resx(entries: &[(&str, &str)]) -> String {
    let mut content = String::from(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root>\n  <resheader name=\"resmimetype\">\n    <value>text/microsoft-resx</value>\n  </resheader>\n",
    );
    for (key, value) in entries {
        content.push_str(&format!(
            "  <data name=\"{}\" xml:space=\"preserve\">\n    <value>{}</value>\n  </data>\n",
            key, value
        ));
    }
    content.push_str("</root>\n");
    content
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
