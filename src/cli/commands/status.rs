use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::cli::args::{KeysCommand, StatusCommand};
use crate::cli::context::Workspace;
use crate::core::{extracted_with_reference, load_overview};
use crate::messages::validate_language_code;

pub fn status(ws: &Workspace, cmd: StatusCommand) -> Result<CommandResult> {
    if let Err(msg) = validate_language_code(&cmd.language) {
        return Ok(CommandResult::refused(msg));
    }

    let store = ws.open_store()?;
    let mut overview = load_overview(&store, &cmd.language, ws.reference_language())?;

    if let Some(namespace) = &cmd.namespace {
        overview.retain_namespace(namespace);
    }

    Ok(CommandResult::json(
        CommandSummary::Status(overview),
        cmd.json,
    ))
}

pub fn keys(ws: &Workspace, cmd: KeysCommand) -> Result<CommandResult> {
    let store = ws.open_store()?;
    let views = extracted_with_reference(&store, ws.reference_language())?;
    Ok(CommandResult::json(CommandSummary::Keys(views), cmd.json))
}
