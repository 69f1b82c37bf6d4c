use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::store::KeyAction;

/// Writer for a `{ namespace: { key: value } }` language file.
pub struct JsonWriter {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl JsonWriter {
    /// Start an empty document that will be written to `path`.
    pub fn create(path: &Path) -> Self {
        Self {
            file_path: path.to_path_buf(),
            data: Map::new(),
        }
    }

    /// Set `namespace.key`, creating the namespace object if needed.
    pub fn insert(&mut self, namespace: &str, key: &str, value: &str) -> KeyAction {
        let entry = self
            .data
            .entry(namespace.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }

        let Value::Object(keys) = entry else {
            unreachable!("namespace entry was just made an object");
        };

        match keys.insert(key.to_string(), Value::String(value.to_string())) {
            Some(_) => KeyAction::Updated,
            None => KeyAction::Added,
        }
    }

    /// Save the JSON file with pretty formatting
    ///
    /// Uses 2-space indentation and adds a trailing newline.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&self.data).context("Failed to serialize JSON")?;

        fs::write(&self.file_path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}
