use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bundled::BundledLanguage;
use crate::core::LoadWarning;

// ============================================================
// Shared source parameters
// ============================================================

/// Where to load resource tables from. Exactly one field must be set.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceParams {
    /// Absolute path to a folder of .resx files
    #[serde(default)]
    pub resources_dir: Option<String>,
    /// Bundled language tables to use instead of a folder ("ar", "es", "de", "ur")
    #[serde(default)]
    pub bundled: Option<BundledLanguage>,
}

// ============================================================
// Lookup Types (lookup)
// ============================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupParams {
    /// Text to translate, matched exactly and case-sensitively
    pub key: String,
    #[serde(flatten)]
    pub source: SourceParams,
}

/// Result of a lookup
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LookupToolResult {
    /// The translation, or a message explaining why there is none
    pub message: String,
    /// True when `message` is not a translation
    pub error: bool,
    /// Table that supplied the translation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    /// Language code of bundled tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

// ============================================================
// Tables Types (list_tables)
// ============================================================

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTablesParams {
    #[serde(flatten)]
    pub source: SourceParams,
}

/// Loaded tables in lookup priority order
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TablesResult {
    pub source: String,
    pub tables: Vec<TableInfo>,
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub name: String,
    pub file_path: String,
    pub key_count: usize,
}

/// A resource file that could not be parsed
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkippedFile {
    pub file_path: String,
    pub error: String,
}

impl From<LoadWarning> for SkippedFile {
    fn from(w: LoadWarning) -> Self {
        Self {
            file_path: w.file_path,
            error: w.error,
        }
    }
}
