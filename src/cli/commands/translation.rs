use anyhow::Result;

use super::{ChangeKind, ChangeSummary, CommandResult, CommandSummary};
use crate::cli::args::{KeyCommand, ValueCommand};
use crate::cli::context::Workspace;
use crate::core::normalize_key;
use crate::messages::validate_language_code;
use crate::store::{KeyAction, StoreError, StoreResult, TranslationRecord, TranslationStore};

pub fn languages(ws: &Workspace) -> Result<CommandResult> {
    let store = ws.open_store()?;
    Ok(CommandResult::new(CommandSummary::Languages(
        store.languages()?,
    )))
}

pub fn get(ws: &Workspace, cmd: KeyCommand) -> Result<CommandResult> {
    if let Err(msg) = validate_language_code(&cmd.language) {
        return Ok(CommandResult::refused(msg));
    }

    let key = normalize_key(&cmd.key);
    let label = format!("{}/{}", cmd.language, key);
    let store = ws.open_store()?;

    match store.get(&cmd.language, &key.namespace, &key.key)? {
        Some(value) => Ok(CommandResult::new(CommandSummary::Get { label, value })),
        None => Ok(CommandResult::refused(
            StoreError::NotFound(label).to_string(),
        )),
    }
}

pub fn add(ws: &Workspace, cmd: ValueCommand) -> Result<CommandResult> {
    if let Err(msg) = validate_language_code(&cmd.language) {
        return Ok(CommandResult::refused(msg));
    }

    let key = normalize_key(&cmd.key);
    let record = TranslationRecord::new(&cmd.language, &key.namespace, &key.key, &cmd.value);
    let mut store = ws.open_store()?;
    let outcome = store.add(&record);
    store.close()?;

    finish(
        outcome.map(|()| ChangeKind::Key(KeyAction::Added)),
        record.label(),
    )
}

pub fn edit(ws: &Workspace, cmd: ValueCommand) -> Result<CommandResult> {
    if let Err(msg) = validate_language_code(&cmd.language) {
        return Ok(CommandResult::refused(msg));
    }

    let key = normalize_key(&cmd.key);
    let label = format!("{}/{}", cmd.language, key);
    let mut store = ws.open_store()?;
    let outcome = store.update(&cmd.language, &key.namespace, &key.key, &cmd.value);
    store.close()?;

    finish(
        outcome.map(|()| ChangeKind::Key(KeyAction::Updated)),
        label,
    )
}

pub fn remove(ws: &Workspace, cmd: KeyCommand) -> Result<CommandResult> {
    if let Err(msg) = validate_language_code(&cmd.language) {
        return Ok(CommandResult::refused(msg));
    }

    let key = normalize_key(&cmd.key);
    let label = format!("{}/{}", cmd.language, key);
    let mut store = ws.open_store()?;
    let outcome = store.delete(&cmd.language, &key.namespace, &key.key);
    store.close()?;

    finish(outcome.map(|()| ChangeKind::Removed), label)
}

/// Not-found and conflicts are refusals; anything else is an error.
fn finish(outcome: StoreResult<ChangeKind>, label: String) -> Result<CommandResult> {
    match outcome {
        Ok(kind) => Ok(CommandResult::new(CommandSummary::Changed(ChangeSummary {
            kind,
            label,
        }))),
        Err(err @ (StoreError::NotFound(_) | StoreError::AlreadyExists(_))) => {
            Ok(CommandResult::refused(err.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}
