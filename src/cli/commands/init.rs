use std::{fs, path::Path};

use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::refused(format!(
            "{} already exists",
            CONFIG_FILE_NAME
        )));
    }

    fs::write(&config_path, default_config_json()?)?;
    Ok(CommandResult::new(CommandSummary::Init))
}
