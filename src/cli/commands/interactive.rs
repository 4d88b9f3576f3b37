use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use super::open_source;
use crate::bundled::BundledLanguage;
use crate::cli::{
    args::InteractiveCommand,
    exit_status::ExitStatus,
    report::{self, LookupDisplay},
};
use crate::core::TranslationLookup;

pub const PROMPT: &str = "Enter a sentence in English (or type 'exit' to quit):";
const EXIT_COMMAND: &str = "exit";

pub fn interactive(cmd: InteractiveCommand) -> Result<ExitStatus> {
    let loaded = open_source(&cmd.source)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_session(
        &loaded.lookup,
        stdin.lock(),
        &mut stdout,
        loaded.source.language(),
        cmd.source.verbose,
    )
    .context("Failed to run interactive session")?;

    Ok(ExitStatus::Success)
}

/// Answer one lookup per input line until `exit` (any case) or end of input.
///
/// The tables are loaded once by the caller and shared by every query.
/// Returns the number of lookups performed.
pub fn run_session<R: BufRead, W: Write>(
    lookup: &TranslationLookup,
    input: R,
    output: &mut W,
    language: Option<BundledLanguage>,
    verbose: bool,
) -> io::Result<usize> {
    let mut lines = input.lines();
    let mut count = 0;

    loop {
        writeln!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let key = line?;

        if key.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        let result = lookup.search(&key);
        let table = if verbose {
            lookup.find(&key).map(|m| m.table.name())
        } else {
            None
        };
        report::write_lookup(&result, LookupDisplay { language, table }, output);
        count += 1;
    }

    Ok(count)
}
