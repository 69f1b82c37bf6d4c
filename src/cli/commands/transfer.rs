use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::cli::args::DirCommand;
use crate::cli::context::Workspace;
use crate::messages::{export_messages, import_messages};

pub fn import(ws: &Workspace, cmd: DirCommand) -> Result<CommandResult> {
    let mut store = ws.open_store()?;
    let summary = import_messages(&mut store, &cmd.dir)?;
    store.close()?;
    Ok(CommandResult::new(CommandSummary::Import(summary)))
}

pub fn export(ws: &Workspace, cmd: DirCommand) -> Result<CommandResult> {
    let store = ws.open_store()?;
    let summary = export_messages(&store, &cmd.dir)?;
    Ok(CommandResult::new(CommandSummary::Export(summary)))
}
