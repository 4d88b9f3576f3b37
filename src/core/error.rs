use std::path::PathBuf;

use thiserror::Error;

/// Error raised while reading a single resource file.
#[derive(Debug, Error)]
pub enum ResxError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("duplicate key \"{0}\"")]
    DuplicateKey(String),

    #[error("malformed resource file: {0}")]
    Malformed(String),
}

/// Error raised while loading a directory of resource files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("resources directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read resources directory '{}': {error}", path.display())]
    ReadDir { path: PathBuf, error: walkdir::Error },

    #[error("failed to parse resource file '{}': {error}", file.display())]
    Parse { file: PathBuf, error: ResxError },
}

impl LoadError {
    /// True for failures of the directory itself rather than of one file in it.
    pub fn is_file_system(&self) -> bool {
        !matches!(self, LoadError::Parse { .. })
    }
}
