use anyhow::{Context, Result};

use super::open_source;
use crate::cli::{
    args::{LookupCommand, OutputFormat},
    exit_status::ExitStatus,
    report::{self, LookupDisplay},
};

pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let loaded = open_source(&cmd.source)?;
    let result = loaded.lookup.search(&cmd.key);

    match cmd.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .context("Failed to serialize lookup result.")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let table = if cmd.source.verbose {
                loaded.lookup.find(&cmd.key).map(|m| m.table.name())
            } else {
                None
            };
            report::print_lookup(
                &result,
                LookupDisplay {
                    language: loaded.source.language(),
                    table,
                },
            );
        }
    }

    Ok(if result.error {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
