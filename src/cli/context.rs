use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use super::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::Scanner;
use crate::store::SqliteStore;

/// Configuration resolved for one CLI invocation.
///
/// Paths from the config file are resolved against the directory holding the
/// file; paths from flags against the working directory.
pub struct Workspace {
    pub config: Config,
    pub base_dir: PathBuf,
    pub source_root: PathBuf,
    pub database: PathBuf,
    pub verbose: bool,
}

impl Workspace {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Self::load(&cwd, args)
    }

    pub fn load(start_dir: &Path, args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(start_dir)?;

        if args.verbose && !loaded.from_file {
            eprintln!("Note: No .tolkrc.json found, using default configuration");
        }

        let mut config = loaded.config;
        if let Some(path) = &args.source_root {
            config.source_root = start_dir.join(path).to_string_lossy().to_string();
        }
        if let Some(path) = &args.database {
            config.database = start_dir.join(path).to_string_lossy().to_string();
        }

        Ok(Self {
            source_root: config.source_root_in(&loaded.base_dir),
            database: config.database_in(&loaded.base_dir),
            base_dir: loaded.base_dir,
            config,
            verbose: args.verbose,
        })
    }

    pub fn reference_language(&self) -> &str {
        &self.config.reference_language
    }

    pub fn open_store(&self) -> Result<SqliteStore> {
        SqliteStore::open(&self.database)
            .with_context(|| format!("Failed to open database: {}", self.database.display()))
    }

    pub fn scanner(&self) -> Result<Scanner> {
        Scanner::from_config(&self.config, &self.base_dir)
    }
}
