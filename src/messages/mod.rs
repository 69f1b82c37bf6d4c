//! Language files on disk.
//!
//! Each language is stored as `<dir>/<language>.json` containing
//! `{ "<namespace>": { "<key>": "<value>" } }`, the shape translation loaders
//! fetch per language.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value;

use crate::json_writer::JsonWriter;
use crate::store::{KeyAction, NamespaceMap, TranslationRecord, TranslationStore};

/// Validate a language code before it becomes a file name or a store key.
///
/// Only allows alphanumeric characters, hyphens, and underscores.
pub fn validate_language_code(language: &str) -> Result<(), String> {
    if language.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }
    if !language
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(
            "Language code can only contain letters, numbers, hyphens, and underscores"
                .to_string(),
        );
    }
    Ok(())
}

/// Parse one language file.
pub fn read_message_file(path: &Path) -> Result<NamespaceMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;

    let Value::Object(namespaces) = json else {
        bail!("Root of JSON file must be an object: {}", path.display());
    };

    let mut map = NamespaceMap::new();
    for (namespace, keys) in namespaces {
        let Value::Object(keys) = keys else {
            bail!(
                "Namespace \"{}\" must be an object in {}",
                namespace,
                path.display()
            );
        };
        let entries = map.entry(namespace.clone()).or_default();
        for (key, value) in keys {
            let Value::String(value) = value else {
                bail!(
                    "Value of \"{}:{}\" must be a string in {}",
                    namespace,
                    key,
                    path.display()
                );
            };
            entries.insert(key, value);
        }
    }

    Ok(map)
}

/// Language files found in `dir`, sorted by language code.
pub fn find_message_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read messages directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?
            .path();
        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(language) = path.file_stem().and_then(|s| s.to_str())
        {
            files.push((language.to_string(), path.clone()));
        }
    }
    files.sort();
    Ok(files)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub languages: Vec<String>,
    pub added_count: usize,
    pub updated_count: usize,
}

/// Load every `<language>.json` in `dir` into the store, overwriting existing values.
pub fn import_messages<S>(store: &mut S, dir: &Path) -> Result<ImportSummary>
where
    S: TranslationStore + ?Sized,
{
    let mut summary = ImportSummary::default();

    for (language, path) in find_message_files(dir)? {
        validate_language_code(&language)
            .map_err(|msg| anyhow::anyhow!("{}: {}", path.display(), msg))?;
        let map = read_message_file(&path)?;

        for (namespace, keys) in map {
            for (key, value) in keys {
                let record = TranslationRecord::new(&language, &namespace, key, value);
                let action = store
                    .set(&record)
                    .with_context(|| format!("Failed to store {}", record.label()))?;
                match action {
                    KeyAction::Added => summary.added_count += 1,
                    KeyAction::Updated => summary.updated_count += 1,
                }
            }
        }

        tracing::debug!(language = %language, path = %path.display(), "imported language file");
        summary.languages.push(language);
    }

    Ok(summary)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub files: Vec<String>,
    pub key_count: usize,
}

/// Write one `<language>.json` per stored language into `dir`.
pub fn export_messages<S>(store: &S, dir: &Path) -> Result<ExportSummary>
where
    S: TranslationStore + ?Sized,
{
    let mut summary = ExportSummary::default();

    for language in store.languages()? {
        let path = dir.join(format!("{}.json", language));
        let mut writer = JsonWriter::create(&path);
        for (namespace, keys) in store.get_all(&language)? {
            for (key, value) in keys {
                writer.insert(&namespace, &key, &value);
                summary.key_count += 1;
            }
        }
        writer.save()?;
        summary.files.push(path.to_string_lossy().to_string());
    }

    Ok(summary)
}
