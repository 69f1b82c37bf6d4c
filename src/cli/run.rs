use anyhow::{Context, Result, bail};

use super::{
    args::{Command, CommonArgs},
    commands::CommandResult,
    commands::{extract::extract, init::init, status, transfer, translation},
    context::Workspace,
};

/// Dispatch a parsed command.
///
/// `serve` never reaches this point; it is handled by the binary entry point.
pub fn run(common: &CommonArgs, command: Command) -> Result<CommandResult> {
    let workspace = || Workspace::new(common);

    match command {
        Command::Init => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            init(&cwd)
        }
        Command::Extract => extract(&workspace()?),
        Command::Status(cmd) => status::status(&workspace()?, cmd),
        Command::Keys(cmd) => status::keys(&workspace()?, cmd),
        Command::Languages => translation::languages(&workspace()?),
        Command::Get(cmd) => translation::get(&workspace()?, cmd),
        Command::Add(cmd) => translation::add(&workspace()?, cmd),
        Command::Edit(cmd) => translation::edit(&workspace()?, cmd),
        Command::Remove(cmd) => translation::remove(&workspace()?, cmd),
        Command::Import(cmd) => transfer::import(&workspace()?, cmd),
        Command::Export(cmd) => transfer::export(&workspace()?, cmd),
        Command::Serve => bail!("Serve command should be handled before run()"),
    }
}
