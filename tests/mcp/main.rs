use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;
use tolk::{
    config::Config,
    core::Scanner,
    mcp::TolkMcpServer,
    store::{SqliteStore, TranslationRecord, TranslationStore},
};

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a `src/` tree and an in-memory store.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
    translations: Vec<TranslationRecord>,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir_all(project_root.join("src"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
            translations: Vec::new(),
        })
    }

    /// Write a source file relative to the project root
    pub fn write_source(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source file: {}", path.display()))?;
        Ok(())
    }

    /// Seed a translation into the store the server is built with
    pub fn with_translation(
        mut self,
        language: &str,
        namespace: &str,
        key: &str,
        value: &str,
    ) -> Self {
        self.translations
            .push(TranslationRecord::new(language, namespace, key, value));
        self
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }

    /// Build a server over an in-memory store, English as reference language
    pub fn server(&self) -> Result<TolkMcpServer> {
        let mut store = SqliteStore::open_in_memory()?;
        for record in &self.translations {
            store.add(record)?;
        }
        let scanner = Scanner::new(&self.project_root, &Config::default().scan_patterns)?;
        Ok(TolkMcpServer::new(store, scanner, "en"))
    }
}

/// A component using `config:save` on line 2 and `cancel` on line 3.
pub const FORM_TSX: &str = "export function Form({ t }) {
  return <button>{t('config:save')}</button>
    || <button>{t('cancel')}</button>
}
";

/// Extract JSON from a successful tool result
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
