use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tolkrc.json";

/// Directory names never descended into while scanning, in addition to dot-directories.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "build"];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_scan_patterns")]
    pub scan_patterns: Vec<String>,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_database", alias = "databasePath")]
    pub database: String,
    #[serde(default = "default_reference_language")]
    pub reference_language: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_scan_patterns() -> Vec<String> {
    ["src/**/*.tsx", "src/**/*.ts", "src/**/*.jsx", "src/**/*.js"]
        .map(String::from)
        .to_vec()
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_database() -> String {
    "./translations.db".to_string()
}

fn default_reference_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            scan_patterns: default_scan_patterns(),
            excluded_dirs: default_excluded_dirs(),
            ignores: Vec::new(),
            database: default_database(),
            reference_language: default_reference_language(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `scanPatterns` is empty, an `ignores` glob is invalid,
    /// or the reference language is blank.
    pub fn validate(&self) -> Result<()> {
        if self.scan_patterns.is_empty() {
            bail!("'scanPatterns' must contain at least one pattern");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.reference_language.trim().is_empty() {
            bail!("'referenceLanguage' cannot be empty");
        }

        Ok(())
    }

    /// Source root resolved against the directory the config was loaded from.
    pub fn source_root_in(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.source_root)
    }

    /// Database path resolved against the directory the config was loaded from.
    pub fn database_in(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.database)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config are resolved against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
