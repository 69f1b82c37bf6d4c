use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::cli::context::Workspace;
use crate::core::run_extraction;

pub fn extract(ws: &Workspace) -> Result<CommandResult> {
    let scanner = ws.scanner()?;
    let mut store = ws.open_store()?;

    if ws.verbose {
        eprintln!("Scanning {}", scanner.root().display());
    }

    let summary = run_extraction(&scanner, &mut store)?;
    store.close()?;

    Ok(CommandResult::new(CommandSummary::Extract(summary)))
}
