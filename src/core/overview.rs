//! Editor views: every key of a language grouped by namespace with its status,
//! and the extracted-key listing annotated with reference values.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use super::status::{LanguageRole, Status, StatusInput, classify};
use crate::store::{
    ExtractedKeyRecord, ExtractionStore, NamespaceMap, StoreResult, TranslationStore,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEntry {
    pub namespace: String,
    pub key: String,
    /// Empty when the language has no value.
    pub value: String,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub normal: usize,
    pub missing: usize,
    pub new_in_code: usize,
    pub not_used: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Normal => self.normal += 1,
            Status::Missing => self.missing += 1,
            Status::NewInCode => self.new_in_code += 1,
            Status::NotUsed => self.not_used += 1,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Normal => self.normal,
            Status::Missing => self.missing,
            Status::NewInCode => self.new_in_code,
            Status::NotUsed => self.not_used,
        }
    }

    pub fn total(&self) -> usize {
        self.normal + self.missing + self.new_in_code + self.not_used
    }

    fn add(&mut self, other: &StatusCounts) {
        self.normal += other.normal;
        self.missing += other.missing;
        self.new_in_code += other.new_in_code;
        self.not_used += other.not_used;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceGroup {
    pub namespace: String,
    pub entries: Vec<KeyEntry>,
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOverview {
    pub language: String,
    pub reference_language: String,
    pub groups: Vec<NamespaceGroup>,
    pub totals: StatusCounts,
}

impl LanguageOverview {
    pub fn entries(&self) -> impl Iterator<Item = &KeyEntry> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }

    pub fn find(&self, namespace: &str, key: &str) -> Option<&KeyEntry> {
        self.entries()
            .find(|e| e.namespace == namespace && e.key == key)
    }

    /// Keep only one namespace.
    pub fn retain_namespace(&mut self, namespace: &str) {
        self.groups.retain(|g| g.namespace == namespace);
        let mut totals = StatusCounts::default();
        for group in &self.groups {
            totals.add(&group.counts);
        }
        self.totals = totals;
    }
}

/// Build the editor view for `language`.
///
/// Keys come from the language itself, the reference language and the
/// extracted keys. Namespaces and keys are sorted.
pub fn build_overview(
    language: &str,
    reference_language: &str,
    current: &NamespaceMap,
    reference: &NamespaceMap,
    extracted: &[ExtractedKeyRecord],
) -> LanguageOverview {
    let role = LanguageRole::of(language, reference_language);

    let extracted_set: HashSet<(&str, &str)> = extracted
        .iter()
        .map(|r| (r.namespace.as_str(), r.key.as_str()))
        .collect();

    let mut all_keys: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for map in [current, reference] {
        for (namespace, keys) in map {
            all_keys
                .entry(namespace.as_str())
                .or_default()
                .extend(keys.keys().map(String::as_str));
        }
    }
    for record in extracted {
        all_keys
            .entry(record.namespace.as_str())
            .or_default()
            .insert(record.key.as_str());
    }

    let mut totals = StatusCounts::default();
    let mut groups = Vec::with_capacity(all_keys.len());

    for (namespace, keys) in all_keys {
        let current_ns = current.get(namespace);
        let reference_ns = reference.get(namespace);

        let mut counts = StatusCounts::default();
        let entries: Vec<KeyEntry> = keys
            .into_iter()
            .map(|key| {
                let value = current_ns
                    .and_then(|m| m.get(key))
                    .map(String::as_str)
                    .unwrap_or("");
                let reference_value = reference_ns.and_then(|m| m.get(key)).map(String::as_str);
                let status = classify(
                    role,
                    StatusInput {
                        value,
                        is_extracted: extracted_set.contains(&(namespace, key)),
                        reference_value,
                    },
                );
                counts.record(status);

                KeyEntry {
                    namespace: namespace.to_string(),
                    key: key.to_string(),
                    value: value.to_string(),
                    status,
                }
            })
            .collect();

        totals.add(&counts);
        groups.push(NamespaceGroup {
            namespace: namespace.to_string(),
            entries,
            counts,
        });
    }

    LanguageOverview {
        language: language.to_string(),
        reference_language: reference_language.to_string(),
        groups,
        totals,
    }
}

/// Read both stores and build the editor view for `language`.
pub fn load_overview<S>(
    store: &S,
    language: &str,
    reference_language: &str,
) -> StoreResult<LanguageOverview>
where
    S: TranslationStore + ExtractionStore + ?Sized,
{
    let current = store.get_all(language)?;
    let reference = if language == reference_language {
        current.clone()
    } else {
        store.get_all(reference_language)?
    };
    let extracted = store.list_all()?;

    Ok(build_overview(
        language,
        reference_language,
        &current,
        &reference,
        &extracted,
    ))
}

/// An extracted key together with its reference-language value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedKeyView {
    #[serde(flatten)]
    pub record: ExtractedKeyRecord,
    pub reference_value: Option<String>,
}

pub fn extracted_with_reference<S>(
    store: &S,
    reference_language: &str,
) -> StoreResult<Vec<ExtractedKeyView>>
where
    S: TranslationStore + ExtractionStore + ?Sized,
{
    let reference = store.get_all(reference_language)?;
    let views = store
        .list_all()?
        .into_iter()
        .map(|record| {
            let reference_value = reference
                .get(&record.namespace)
                .and_then(|m| m.get(&record.key))
                .cloned();
            ExtractedKeyView {
                record,
                reference_value,
            }
        })
        .collect();
    Ok(views)
}
