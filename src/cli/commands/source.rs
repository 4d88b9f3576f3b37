use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::cli::{args::SourceArgs, report};
use crate::config::load_config;
use crate::core::{LoadError, ResourceSource, TranslationLookup};

/// A resource source with its tables loaded and ready to search.
pub struct LoadedSource {
    pub source: ResourceSource,
    pub lookup: TranslationLookup,
}

/// Decide where tables come from.
///
/// Precedence: `--bundled`, then `--dir` (or `RESX_LOOKUP_DIR`), then the
/// config file's `resourcesDir`, resolved relative to the config file.
pub fn resolve_source(args: &SourceArgs, cwd: &Path) -> Result<ResourceSource> {
    if let Some(language) = args.bundled {
        return Ok(ResourceSource::Bundled(language));
    }

    let loaded = load_config(cwd)?;
    let options = loaded.config.load_options()?;

    let path = match (&args.dir, &loaded.path) {
        (Some(dir), _) => dir.clone(),
        (None, Some(config_path)) => config_path
            .parent()
            .map(|parent| parent.join(&loaded.config.resources_dir))
            .unwrap_or_else(|| PathBuf::from(&loaded.config.resources_dir)),
        (None, None) => PathBuf::from(&loaded.config.resources_dir),
    };

    Ok(ResourceSource::Directory { path, options })
}

/// Resolve and load the tables, reporting skipped files on stderr.
pub fn open_source(args: &SourceArgs) -> Result<LoadedSource> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let source = resolve_source(args, &cwd)?;

    let (lookup, result) = source.open().map_err(|err| {
        let context = load_failure_context(&source, &err);
        anyhow::Error::new(err).context(context)
    })?;
    report::print_load_warnings(&result.warnings, args.verbose);

    Ok(LoadedSource { source, lookup })
}

fn load_failure_context(source: &ResourceSource, err: &LoadError) -> String {
    if err.is_file_system() {
        format!("Cannot access resource tables at {}", source)
    } else {
        format!("Failed to parse resource tables from {}", source)
    }
}
