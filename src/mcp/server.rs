use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Result, anyhow};
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::cli::Workspace;
use crate::core::{Scanner, extracted_with_reference, load_overview, run_extraction};
use crate::messages::validate_language_code;
use crate::store::{SqliteStore, StoreError, TranslationRecord, TranslationStore};

use super::types::{
    ChangeResult, ExtractedKeysResult, GetStatusParams, LanguageParams, LanguagesResult,
    ListExtractedKeysParams, Pagination, StatusResult, TranslationKeyParams, TranslationResult,
    TranslationValueParams, TranslationsResult,
};

#[derive(Clone)]
pub struct TolkMcpServer {
    tool_router: ToolRouter<Self>,
    store: Arc<Mutex<SqliteStore>>,
    scanner: Scanner,
    reference_language: String,
}

#[tool_router]
impl TolkMcpServer {
    pub fn new(store: SqliteStore, scanner: Scanner, reference_language: &str) -> Self {
        Self {
            tool_router: Self::tool_router(),
            store: Arc::new(Mutex::new(store)),
            scanner,
            reference_language: reference_language.to_string(),
        }
    }

    /// List languages present in the translation store
    #[tool(description = "List language codes present in the translation store.")]
    pub async fn list_languages(&self) -> Result<CallToolResult, McpError> {
        let store = self.lock()?;
        let languages = store.languages().map_err(store_error)?;

        json_result(&LanguagesResult {
            reference_language: self.reference_language.clone(),
            languages,
        })
    }

    /// Get every translation of one language
    #[tool(
        description = "Get all translations of a language, grouped as { namespace: { key: value } }."
    )]
    pub async fn get_translations(
        &self,
        params: Parameters<LanguageParams>,
    ) -> Result<CallToolResult, McpError> {
        let language = &params.0.language;
        check_language(language)?;

        let store = self.lock()?;
        let translations = store.get_all(language).map_err(store_error)?;

        json_result(&TranslationsResult {
            language: language.clone(),
            key_count: translations.values().map(|keys| keys.len()).sum(),
            translations,
        })
    }

    /// Get one translation
    #[tool(description = "Get one translation value. Fails if the translation does not exist.")]
    pub async fn get_translation(
        &self,
        params: Parameters<TranslationKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_language(&params.language)?;
        let key = params.key_ref();

        let store = self.lock()?;
        let value = store
            .get(&params.language, &key.namespace, &key.key)
            .map_err(store_error)?
            .ok_or_else(|| {
                store_error(StoreError::NotFound(format!("{}/{}", params.language, key)))
            })?;

        json_result(&TranslationResult {
            language: params.language,
            namespace: key.namespace,
            key: key.key,
            value,
        })
    }

    /// Add a new translation
    #[tool(
        description = "Add a translation. Fails if it already exists; use update_translation to change it."
    )]
    pub async fn add_translation(
        &self,
        params: Parameters<TranslationValueParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_language(&params.language)?;
        let key = params.key_ref();

        let record =
            TranslationRecord::new(&params.language, &key.namespace, &key.key, params.value);
        self.lock()?.add(&record).map_err(store_error)?;

        json_result(&ChangeResult {
            success: true,
            action: "added",
            language: params.language,
            namespace: key.namespace,
            key: key.key,
        })
    }

    /// Change an existing translation
    #[tool(
        description = "Change the value of an existing translation. Fails if it does not exist."
    )]
    pub async fn update_translation(
        &self,
        params: Parameters<TranslationValueParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_language(&params.language)?;
        let key = params.key_ref();

        self.lock()?
            .update(&params.language, &key.namespace, &key.key, &params.value)
            .map_err(store_error)?;

        json_result(&ChangeResult {
            success: true,
            action: "updated",
            language: params.language,
            namespace: key.namespace,
            key: key.key,
        })
    }

    /// Delete a translation
    #[tool(description = "Delete a translation. Fails if it does not exist.")]
    pub async fn delete_translation(
        &self,
        params: Parameters<TranslationKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_language(&params.language)?;
        let key = params.key_ref();

        self.lock()?
            .delete(&params.language, &key.namespace, &key.key)
            .map_err(store_error)?;

        json_result(&ChangeResult {
            success: true,
            action: "deleted",
            language: params.language,
            namespace: key.namespace,
            key: key.key,
        })
    }

    /// List keys found by the last extraction run
    #[tool(
        description = "List translation keys found in source code by the last extraction run, with location, usage count and reference-language value. Paginated."
    )]
    pub async fn list_extracted_keys(
        &self,
        params: Parameters<ListExtractedKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut pagination = Pagination::new(params.offset, params.limit);

        let mut views = {
            let store = self.lock()?;
            extracted_with_reference(&*store, &self.reference_language).map_err(store_error)?
        };
        if let Some(namespace) = &params.namespace {
            views.retain(|v| &v.record.namespace == namespace);
        }

        let total_count = views.len();
        let items = pagination.page(views);

        json_result(&ExtractedKeysResult {
            reference_language: self.reference_language.clone(),
            total_count,
            items,
            pagination,
        })
    }

    /// Rescan source files and replace the extracted keys
    #[tool(
        description = "Scan the project's source files for translation keys and replace the extracted key list. Returns per-namespace counts."
    )]
    pub async fn extract_keys(&self) -> Result<CallToolResult, McpError> {
        let summary = {
            let mut store = self.lock()?;
            run_extraction(&self.scanner, &mut *store).map_err(|e| {
                McpError::internal_error(format!("Extraction failed: {:#}", e), None)
            })?
        };

        json_result(&summary)
    }

    /// Status of every key of a language
    #[tool(
        description = "Get the status (normal, missing, newInCode, notUsed) of every key of a language, compared with the reference language and the extracted keys. Filterable by namespace and status. Paginated."
    )]
    pub async fn get_status(
        &self,
        params: Parameters<GetStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        check_language(&params.language)?;
        let mut pagination = Pagination::new(params.offset, params.limit);

        let overview = {
            let store = self.lock()?;
            load_overview(&*store, &params.language, &self.reference_language)
                .map_err(store_error)?
        };

        let entries: Vec<_> = overview
            .entries()
            .filter(|e| params.namespace.as_ref().is_none_or(|ns| &e.namespace == ns))
            .filter(|e| params.status.is_none_or(|s| e.status == s))
            .cloned()
            .collect();

        let total_count = entries.len();
        let items = pagination.page(entries);

        json_result(&StatusResult {
            language: overview.language,
            reference_language: overview.reference_language,
            totals: overview.totals,
            total_count,
            items,
            pagination,
        })
    }
}

impl TolkMcpServer {
    fn lock(&self) -> Result<MutexGuard<'_, SqliteStore>, McpError> {
        self.store
            .lock()
            .map_err(|_| McpError::internal_error("Translation store lock poisoned", None))
    }

    /// Close the database if no other handle to it is alive.
    pub fn close(self) -> Result<()> {
        match Arc::try_unwrap(self.store) {
            Ok(mutex) => {
                let store = mutex
                    .into_inner()
                    .map_err(|_| anyhow!("Translation store lock poisoned"))?;
                store.close()?;
            }
            Err(_) => tracing::debug!("store still shared, closing on drop"),
        }
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for TolkMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Tolk MCP edits the translations of an i18next project and reports which keys \
                 the source code actually uses.\n\n\
                 Available tools:\n\
                 1. extract_keys - Rescan source files for translation keys\n\
                 2. list_extracted_keys - Keys found in code with location and reference value (paginated)\n\
                 3. list_languages - Languages present in the store\n\
                 4. get_status - Per-key status of a language (paginated)\n\
                 5. get_translations / get_translation - Read translations\n\
                 6. add_translation / update_translation / delete_translation - Edit translations\n\n\
                 Recommended Workflow:\n\
                 1. Run extract_keys so statuses reflect the current code\n\
                 2. Use get_status on the reference language and add values for newInCode keys\n\
                 3. Use get_status with status=missing on each other language and add the translations\n\
                 4. Review notUsed keys before deleting them"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn check_language(language: &str) -> Result<(), McpError> {
    validate_language_code(language).map_err(|msg| McpError::invalid_params(msg, None))
}

/// Not-found and conflicts are caller errors; anything else is internal.
fn store_error(err: StoreError) -> McpError {
    match err {
        StoreError::NotFound(_) | StoreError::AlreadyExists(_) => {
            McpError::invalid_params(err.to_string(), None)
        }
        _ => McpError::internal_error(err.to_string(), None),
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server.
///
/// Opens the database, serves tools over stdio until the client disconnects,
/// then closes the database.
pub fn run_server(workspace: &Workspace) -> Result<()> {
    let store = workspace.open_store()?;
    let scanner = workspace.scanner()?;
    let server = TolkMcpServer::new(store, scanner, workspace.reference_language());
    tracing::info!(database = %workspace.database.display(), "starting MCP server");

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = server.clone().serve(rmcp::transport::stdio()).await?;
            service.waiting().await?;
            Ok::<(), anyhow::Error>(())
        })?;

    server.close()
}
