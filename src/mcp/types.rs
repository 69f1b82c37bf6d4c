use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{ExtractedKeyView, KeyEntry, KeyRef, Status, StatusCounts, normalize_key};
use crate::store::NamespaceMap;

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageParams {
    /// Language code, e.g. "en" or "hu"
    pub language: String,
}

/// Identifies one translation.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationKeyParams {
    pub language: String,
    /// Namespace; when omitted, `key` may be written as "namespace:key"
    /// and a bare key falls into "general"
    pub namespace: Option<String>,
    pub key: String,
}

impl TranslationKeyParams {
    pub fn key_ref(&self) -> KeyRef {
        resolve_key(self.namespace.as_deref(), &self.key)
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationValueParams {
    pub language: String,
    /// Namespace; when omitted, `key` may be written as "namespace:key"
    /// and a bare key falls into "general"
    pub namespace: Option<String>,
    pub key: String,
    pub value: String,
}

impl TranslationValueParams {
    pub fn key_ref(&self) -> KeyRef {
        resolve_key(self.namespace.as_deref(), &self.key)
    }
}

fn resolve_key(namespace: Option<&str>, key: &str) -> KeyRef {
    match namespace {
        Some(namespace) => KeyRef::new(namespace, key),
        None => normalize_key(key),
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListExtractedKeysParams {
    /// Only keys of this namespace
    pub namespace: Option<String>,
    /// Maximum items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Items to skip (default 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStatusParams {
    pub language: String,
    /// Only keys of this namespace
    pub namespace: Option<String>,
    /// Only keys with this status
    pub status: Option<Status>,
    /// Maximum items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Items to skip (default 0)
    pub offset: Option<u32>,
}

// ============================================================
// Results
// ============================================================

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

impl Pagination {
    pub const DEFAULT_LIMIT: usize = 20;
    pub const MAX_LIMIT: usize = 100;

    pub fn new(offset: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            offset: offset.map(|v| v as usize).unwrap_or(0),
            limit: limit
                .map(|v| v as usize)
                .unwrap_or(Self::DEFAULT_LIMIT)
                .min(Self::MAX_LIMIT),
            has_more: false,
        }
    }

    /// Take one page of `items`, recording whether more remain.
    pub fn page<T>(&mut self, items: Vec<T>) -> Vec<T> {
        let total = items.len();
        let page: Vec<T> = items.into_iter().skip(self.offset).take(self.limit).collect();
        self.has_more = self.offset + page.len() < total;
        page
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResult {
    pub reference_language: String,
    pub languages: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationsResult {
    pub language: String,
    pub key_count: usize,
    pub translations: NamespaceMap,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub language: String,
    pub namespace: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResult {
    pub success: bool,
    /// "added", "updated" or "deleted"
    pub action: &'static str,
    pub language: String,
    pub namespace: String,
    pub key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedKeysResult {
    pub reference_language: String,
    pub total_count: usize,
    pub items: Vec<ExtractedKeyView>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    pub language: String,
    pub reference_language: String,
    /// Counts over every key of the language, before filtering
    pub totals: StatusCounts,
    /// Items matching the filters
    pub total_count: usize,
    pub items: Vec<KeyEntry>,
    pub pagination: Pagination,
}
