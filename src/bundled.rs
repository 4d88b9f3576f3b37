//! Resource tables compiled into the binary.

use std::{fmt, path::PathBuf};

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{
    LoadError, ResourceCollection, ResourceTable, loader::table_name,
    parsers::resx::parse_resx_str,
};

const RESOURCES_AR: &str = include_str!("../resources/Resources.ar.resx");
const RESOURCES_DE: &str = include_str!("../resources/Resources.de.resx");
const RESOURCES_UR: &str = include_str!("../resources/Resources.ur.resx");
const ACTIVE_DIRECTORY_USER_ES: &str = include_str!("../resources/ActiveDirectoryUser.es.resx");

/// Languages with bundled resource tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
pub enum BundledLanguage {
    #[value(name = "ar", alias = "arabic")]
    #[serde(rename = "ar", alias = "arabic")]
    Arabic,
    #[value(name = "es", alias = "spanish")]
    #[serde(rename = "es", alias = "spanish")]
    Spanish,
    #[value(name = "de", alias = "german")]
    #[serde(rename = "de", alias = "german")]
    German,
    #[value(name = "ur", alias = "urdu")]
    #[serde(rename = "ur", alias = "urdu")]
    Urdu,
}

impl BundledLanguage {
    pub const ALL: [BundledLanguage; 4] = [
        BundledLanguage::Arabic,
        BundledLanguage::Spanish,
        BundledLanguage::German,
        BundledLanguage::Urdu,
    ];

    /// Language code, e.g. "es".
    pub fn code(self) -> &'static str {
        match self {
            BundledLanguage::Arabic => "ar",
            BundledLanguage::Spanish => "es",
            BundledLanguage::German => "de",
            BundledLanguage::Urdu => "ur",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            BundledLanguage::Arabic => "Arabic",
            BundledLanguage::Spanish => "Spanish",
            BundledLanguage::German => "German",
            BundledLanguage::Urdu => "Urdu",
        }
    }

    /// Embedded files for this language as (file name, content), in load order.
    fn files(self) -> &'static [(&'static str, &'static str)] {
        match self {
            BundledLanguage::Arabic => &[("Resources.ar.resx", RESOURCES_AR)],
            BundledLanguage::Spanish => &[("ActiveDirectoryUser.es.resx", ACTIVE_DIRECTORY_USER_ES)],
            BundledLanguage::German => &[("Resources.de.resx", RESOURCES_DE)],
            BundledLanguage::Urdu => &[("Resources.ur.resx", RESOURCES_UR)],
        }
    }

    /// Parse the embedded tables for this language.
    pub fn load(self) -> Result<ResourceCollection, LoadError> {
        self.files()
            .iter()
            .map(|(file_name, content)| {
                let file = PathBuf::from("bundled").join(file_name);
                let entries = parse_resx_str(content).map_err(|error| LoadError::Parse {
                    file: file.clone(),
                    error,
                })?;
                let name = table_name(file_name).unwrap_or_else(|| file_name.to_string());
                Ok(ResourceTable::new(
                    name,
                    file.to_string_lossy().to_string(),
                    entries,
                ))
            })
            .collect()
    }
}

impl fmt::Display for BundledLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
