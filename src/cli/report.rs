//! Report formatting and printing utilities.
//!
//! Kept apart from the lookup core so the library can be used without any
//! terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::bundled::BundledLanguage;
use crate::core::{LoadWarning, LookupResult, ResourceCollection};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Presentation details that travel alongside a lookup result.
#[derive(Debug, Default, Clone, Copy)]
pub struct LookupDisplay<'a> {
    /// Language of the tables searched, when known.
    pub language: Option<BundledLanguage>,
    /// Name of the table that supplied the translation (verbose output).
    pub table: Option<&'a str>,
}

/// Print a lookup result to stdout.
pub fn print_lookup(result: &LookupResult, display: LookupDisplay<'_>) {
    write_lookup(result, display, &mut io::stdout().lock());
}

/// Print a lookup result to a custom writer.
pub fn write_lookup<W: Write>(result: &LookupResult, display: LookupDisplay<'_>, writer: &mut W) {
    if result.error {
        let _ = writeln!(writer, "{}", result.message.yellow());
        return;
    }

    let label = match display.language {
        Some(language) => format!("Translation [{}]:", language.code()),
        None => "Translation:".to_string(),
    };
    let _ = writeln!(writer, "{} {}", label.bold().green(), result.message);

    if let Some(table) = display.table {
        let _ = writeln!(writer, "  {} {}", "-->".blue().bold(), table.dimmed());
    }
}

/// Print the loaded tables in priority order.
pub fn print_tables(collection: &ResourceCollection, origin: &str, verbose: bool) {
    write_tables(collection, origin, verbose, &mut io::stdout().lock());
}

/// Print the loaded tables to a custom writer.
pub fn write_tables<W: Write>(
    collection: &ResourceCollection,
    origin: &str,
    verbose: bool,
    writer: &mut W,
) {
    if collection.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.yellow(),
            format!("No resource tables found in {}", origin).yellow()
        );
        return;
    }

    // Pad by display width, table names may be non-ASCII.
    let name_width = collection
        .iter()
        .map(|t| UnicodeWidthStr::width(t.name()))
        .max()
        .unwrap_or(0);
    let index_width = collection.len().to_string().len();

    for (index, table) in collection.iter().enumerate() {
        let name = table.name();
        let padding = " ".repeat(name_width - UnicodeWidthStr::width(name));
        let _ = write!(
            writer,
            "{:>index_width$}. {}{}  {} {}",
            index + 1,
            name.bold(),
            padding,
            table.len(),
            if table.len() == 1 { "key" } else { "keys" },
        );
        if verbose {
            let _ = write!(writer, "  {}", table.file_path().dimmed());
        }
        let _ = writeln!(writer);
    }

    let count = collection.len();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Loaded {} {} ({} {}) from {}",
            count,
            if count == 1 { "table" } else { "tables" },
            collection.key_count(),
            if collection.key_count() == 1 { "key" } else { "keys" },
            origin
        )
        .green()
    );
}

/// Print warnings about resource files that were skipped.
pub fn print_load_warnings(warnings: &[LoadWarning], verbose: bool) {
    write_load_warnings(warnings, verbose, &mut io::stderr().lock());
}

/// Print load warnings to a custom writer.
///
/// Verbose mode lists every skipped file; otherwise a single summary line is
/// printed.
pub fn write_load_warnings<W: Write>(warnings: &[LoadWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} skipped {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}
