use std::path::{Path, PathBuf};

use glob::Pattern;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use super::{
    LoadError, ResourceCollection, ResourceTable, ResxError, parsers::resx::parse_resx_file,
};

pub const DEFAULT_EXTENSION: &str = "resx";

/// What to do when one resource file cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Leave the file out and record a warning.
    #[default]
    Skip,
    /// Fail the whole load.
    Abort,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// File extension of candidate files, without the dot. Compared case-insensitively.
    pub extension: String,
    /// Files whose path relative to the resources directory matches are skipped.
    pub ignores: Vec<Pattern>,
    pub recursive: bool,
    pub on_parse_error: ParseErrorPolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            ignores: Vec::new(),
            recursive: false,
            on_parse_error: ParseErrorPolicy::default(),
        }
    }
}

/// A resource file left out of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LoadResult {
    pub collection: ResourceCollection,
    pub warnings: Vec<LoadWarning>,
    /// Number of candidate files found, including skipped ones.
    pub files_scanned: usize,
}

/// Loads every resource file of a directory into a [`ResourceCollection`].
///
/// Files are discovered in file-name order, so `A.resx` always takes priority
/// over `B.resx`. Parsing runs in parallel; the resulting tables keep
/// discovery order.
#[derive(Debug, Clone, Default)]
pub struct ResourceTableLoader {
    options: LoadOptions,
}

impl ResourceTableLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn load(&self, dir: impl AsRef<Path>) -> Result<LoadResult, LoadError> {
        let dir = dir.as_ref();
        let files = self.discover(dir)?;

        let parsed: Vec<(PathBuf, Result<ResourceTable, ResxError>)> = files
            .into_par_iter()
            .map(|path| {
                let table = read_table(&path);
                (path, table)
            })
            .collect();

        let mut result = LoadResult {
            files_scanned: parsed.len(),
            ..Default::default()
        };
        let mut tables = Vec::with_capacity(parsed.len());

        for (path, table) in parsed {
            match table {
                Ok(table) => tables.push(table),
                Err(error) => match self.options.on_parse_error {
                    ParseErrorPolicy::Abort => {
                        return Err(LoadError::Parse { file: path, error });
                    }
                    ParseErrorPolicy::Skip => result.warnings.push(LoadWarning {
                        file_path: path.to_string_lossy().to_string(),
                        error: error.to_string(),
                    }),
                },
            }
        }

        result.collection = ResourceCollection::new(tables);
        Ok(result)
    }

    /// List candidate resource files in load order.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        if !dir.exists() {
            return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(LoadError::NotADirectory(dir.to_path_buf()));
        }

        let max_depth = if self.options.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|error| LoadError::ReadDir {
                path: dir.to_path_buf(),
                error,
            })?;
            let path = entry.path();

            if !path.is_file() || !self.has_resource_extension(path) {
                continue;
            }

            let relative = path.strip_prefix(dir).unwrap_or(path);
            if self.options.ignores.iter().any(|p| p.matches_path(relative)) {
                continue;
            }

            files.push(path.to_path_buf());
        }

        Ok(files)
    }

    fn has_resource_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.options.extension))
    }
}

/// Load a directory with default options.
pub fn load_resource_tables(dir: impl AsRef<Path>) -> Result<LoadResult, LoadError> {
    ResourceTableLoader::default().load(dir)
}

/// Derive a table name from a resource file name.
///
/// Examples:
/// - "Greetings.resx" -> Some("Greetings")
/// - "Resources.es.resx" -> Some("Resources.es")
pub fn table_name(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

fn read_table(path: &Path) -> Result<ResourceTable, ResxError> {
    let name = table_name(path)
        .ok_or_else(|| ResxError::Malformed("file name is not valid UTF-8".to_string()))?;
    let entries = parse_resx_file(path)?;
    Ok(ResourceTable::new(
        name,
        path.to_string_lossy().to_string(),
        entries,
    ))
}
