//! Extraction run: scan the source tree and refresh the extraction store.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use super::normalize::normalize_key;
use super::scan::Scanner;
use crate::store::ExtractionStore;

/// Outcome of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionSummary {
    pub files_scanned: usize,
    /// Matches successfully written to the store.
    pub keys_extracted: usize,
    /// Matches whose upsert failed.
    pub failed_count: usize,
    /// Written matches per namespace.
    pub by_namespace: BTreeMap<String, usize>,
}

/// Clear the store, then upsert every match the scanner yields, one at a time.
///
/// A file that cannot be read aborts the run. A failed upsert is logged and
/// counted, and the run moves on to the next match. Because the store is
/// cleared first, `usage_count` reflects occurrences in this run only.
pub fn run_extraction<S>(scanner: &Scanner, store: &mut S) -> Result<ExtractionSummary>
where
    S: ExtractionStore + ?Sized,
{
    store.clear().context("Failed to clear extracted keys")?;
    tracing::debug!(root = %scanner.root().display(), "cleared extracted keys, scanning");

    let matches = scanner.matches()?;
    let mut summary = ExtractionSummary {
        files_scanned: matches.file_count(),
        ..Default::default()
    };

    for raw in matches {
        let raw = raw?;
        let key = normalize_key(&raw.raw_key);

        match store.upsert(&key.namespace, &key.key, &raw.file_path, raw.line_number) {
            Ok(()) => {
                summary.keys_extracted += 1;
                *summary.by_namespace.entry(key.namespace).or_insert(0) += 1;
            }
            Err(err) => {
                summary.failed_count += 1;
                tracing::warn!(
                    key = %raw.raw_key,
                    file = %raw.file_path,
                    line = raw.line_number,
                    "failed to store extracted key: {}",
                    err
                );
            }
        }
    }

    tracing::info!(
        files = summary.files_scanned,
        keys = summary.keys_extracted,
        failed = summary.failed_count,
        "extraction finished"
    );

    Ok(summary)
}
