use anyhow::Result;

use super::open_source;
use crate::cli::{args::TablesCommand, exit_status::ExitStatus, report};

pub fn tables(cmd: TablesCommand) -> Result<ExitStatus> {
    let loaded = open_source(&cmd.source)?;

    report::print_tables(
        loaded.lookup.collection(),
        &loaded.source.to_string(),
        cmd.source.verbose,
    );

    Ok(ExitStatus::Success)
}
