//! Core lookup engine.
//!
//! Resource files are loaded once into an immutable, ordered
//! [`ResourceCollection`]; [`TranslationLookup`] answers queries against it.
//!
//! ## Module Structure
//!
//! - `parsers`: `.resx` reader producing raw key/value entries
//! - `loader`: directory discovery and table loading
//! - `lookup`: first-match-wins search over the loaded tables
//! - `source`: where a collection comes from (directory or bundled tables)

mod error;
pub mod loader;
pub mod lookup;
pub mod parsers;
pub mod source;

use std::collections::HashMap;

pub use error::{LoadError, ResxError};
pub use loader::{LoadOptions, LoadResult, LoadWarning, ParseErrorPolicy, ResourceTableLoader};
pub use lookup::{LookupMatch, LookupResult, TranslationLookup};
pub use source::ResourceSource;

/// A named set of translations read from one resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTable {
    name: String,
    file_path: String,
    entries: HashMap<String, String>,
}

impl ResourceTable {
    /// Build a table, dropping any entry whose value is empty.
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<String>,
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect();

        Self {
            name: name.into(),
            file_path: file_path.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resource tables in load order. Earlier tables take priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceCollection {
    tables: Vec<ResourceTable>,
}

impl ResourceCollection {
    pub fn new(tables: Vec<ResourceTable>) -> Self {
        Self { tables }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceTable> {
        self.tables.iter()
    }

    /// First table with the given name.
    pub fn table(&self, name: &str) -> Option<&ResourceTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Total number of entries across all tables, duplicates included.
    pub fn key_count(&self) -> usize {
        self.tables.iter().map(ResourceTable::len).sum()
    }
}

impl FromIterator<ResourceTable> for ResourceCollection {
    fn from_iter<I: IntoIterator<Item = ResourceTable>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResourceCollection {
    type Item = &'a ResourceTable;
    type IntoIter = std::slice::Iter<'a, ResourceTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
