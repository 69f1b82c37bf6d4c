//! Persistence for extracted keys and translations.
//!
//! Both stores are traits so the extraction pipeline and the editor views can
//! run against any backend; `SqliteStore` implements them on one database file.

mod schema;
mod sqlite;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use sqlite::SqliteStore;

use crate::core::DEFAULT_NAMESPACE;

/// `namespace -> key -> value` for one language.
pub type NamespaceMap = BTreeMap<String, BTreeMap<String, String>>;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open database: {0}")]
    Open(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Translation not found: {0}")]
    NotFound(String),

    #[error("Translation already exists: {0}")]
    AlreadyExists(String),
}

/// A key found by the most recent extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedKeyRecord {
    pub namespace: String,
    pub key: String,
    pub file_path: String,
    pub line_number: u32,
    pub usage_count: u32,
    pub last_extracted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub language: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    pub key: String,
    pub value: String,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl TranslationRecord {
    pub fn new(
        language: impl Into<String>,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            namespace: namespace.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// `language/namespace:key`, used in error messages.
    pub fn label(&self) -> String {
        record_label(&self.language, &self.namespace, &self.key)
    }
}

pub(crate) fn record_label(language: &str, namespace: &str, key: &str) -> String {
    format!("{}/{}:{}", language, namespace, key)
}

/// Whether a write created a row or replaced an existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyAction {
    Added,
    Updated,
}

impl KeyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
        }
    }
}

/// Keys discovered in source code, replaced wholesale by each extraction run.
pub trait ExtractionStore {
    /// Remove every record.
    fn clear(&mut self) -> StoreResult<()>;

    /// Insert with `usage_count = 1`, or bump the count and overwrite the location.
    fn upsert(
        &mut self,
        namespace: &str,
        key: &str,
        file_path: &str,
        line_number: u32,
    ) -> StoreResult<()>;

    /// All records ordered by namespace, then key.
    fn list_all(&self) -> StoreResult<Vec<ExtractedKeyRecord>>;
}

/// Translation values per `(language, namespace, key)`.
pub trait TranslationStore {
    fn get(&self, language: &str, namespace: &str, key: &str) -> StoreResult<Option<String>>;

    fn get_all(&self, language: &str) -> StoreResult<NamespaceMap>;

    /// Distinct language codes, sorted.
    fn languages(&self) -> StoreResult<Vec<String>>;

    /// Create a record; fails with `AlreadyExists` if one is present.
    fn add(&mut self, record: &TranslationRecord) -> StoreResult<()>;

    /// Change an existing value; fails with `NotFound` otherwise.
    fn update(&mut self, language: &str, namespace: &str, key: &str, value: &str)
    -> StoreResult<()>;

    /// Create or overwrite.
    fn set(&mut self, record: &TranslationRecord) -> StoreResult<KeyAction>;

    /// Remove a record; fails with `NotFound` if there was none.
    fn delete(&mut self, language: &str, namespace: &str, key: &str) -> StoreResult<()>;
}
