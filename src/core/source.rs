use std::{fmt, path::PathBuf};

use super::{LoadError, LoadOptions, LoadResult, ResourceTableLoader, TranslationLookup};
use crate::bundled::BundledLanguage;

/// Where resource tables are loaded from.
#[derive(Debug, Clone)]
pub enum ResourceSource {
    /// A folder of resource files on disk.
    Directory { path: PathBuf, options: LoadOptions },
    /// Tables embedded in the binary for one language.
    Bundled(BundledLanguage),
}

impl ResourceSource {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        ResourceSource::Directory {
            path: path.into(),
            options: LoadOptions::default(),
        }
    }

    /// The language of the tables, when known.
    pub fn language(&self) -> Option<BundledLanguage> {
        match self {
            ResourceSource::Directory { .. } => None,
            ResourceSource::Bundled(language) => Some(*language),
        }
    }

    pub fn load(&self) -> Result<LoadResult, LoadError> {
        match self {
            ResourceSource::Directory { path, options } => {
                ResourceTableLoader::new(options.clone()).load(path)
            }
            ResourceSource::Bundled(language) => {
                let collection = language.load()?;
                Ok(LoadResult {
                    files_scanned: collection.len(),
                    collection,
                    warnings: Vec::new(),
                })
            }
        }
    }

    /// Load the tables and wrap them for searching.
    pub fn open(&self) -> Result<(TranslationLookup, LoadResult), LoadError> {
        let mut result = self.load()?;
        let collection = std::mem::take(&mut result.collection);
        Ok((TranslationLookup::new(collection), result))
    }
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceSource::Directory { path, .. } => write!(f, "{}", path.display()),
            ResourceSource::Bundled(language) => {
                write!(f, "bundled {} tables", language.display_name())
            }
        }
    }
}
