//! Pattern scanner: walks a source tree and reports every translation-key usage.
//!
//! File selection (`walker`) and line matching (`patterns`) are independent, so
//! the regex list can be swapped or tested without touching the filesystem.

mod patterns;
mod walker;

use std::{
    collections::VecDeque,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;

pub use patterns::{DEFAULT_PATTERN_SOURCES, KeyPatterns};
pub use walker::{FileFilter, SourceFile, collect_source_files};

use crate::config::Config;
use crate::core::utils::PathMatcher;

/// One key usage found in source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawMatch {
    pub raw_key: String,
    pub file_path: String,
    /// 1-based.
    pub line_number: u32,
    /// The whole source line, trimmed.
    pub line_text: String,
}

/// Scan the content of one file.
pub fn scan_source(patterns: &KeyPatterns, file_path: &str, content: &str) -> Vec<RawMatch> {
    let mut matches = Vec::new();
    for (idx, line) in content.split('\n').enumerate() {
        for raw_key in patterns.find_keys(line) {
            matches.push(RawMatch {
                raw_key: raw_key.to_string(),
                file_path: file_path.to_string(),
                line_number: idx as u32 + 1,
                line_text: line.trim().to_string(),
            });
        }
    }
    matches
}

/// Source tree scanner.
///
/// `matches()` can be called any number of times; every call walks the tree
/// again and reads files lazily as the returned iterator advances.
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    filter: FileFilter,
    patterns: KeyPatterns,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>, scan_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            filter: FileFilter {
                includes: PathMatcher::new(scan_patterns)?,
                excluded_dirs: crate::config::DEFAULT_EXCLUDED_DIRS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                ignores: Vec::new(),
            },
            patterns: KeyPatterns::default(),
        })
    }

    pub fn from_config(config: &Config, base_dir: &Path) -> Result<Self> {
        let ignores = config
            .ignores
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(config.source_root_in(base_dir), &config.scan_patterns)?
            .with_excluded_dirs(config.excluded_dirs.clone())
            .with_ignores(ignores))
    }

    pub fn with_patterns(mut self, patterns: KeyPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_excluded_dirs(mut self, excluded_dirs: Vec<String>) -> Self {
        self.filter.excluded_dirs = excluded_dirs;
        self
    }

    pub fn with_ignores(mut self, ignores: Vec<Pattern>) -> Self {
        self.filter.ignores = ignores;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> Result<Vec<SourceFile>> {
        collect_source_files(&self.root, &self.filter)
    }

    /// Walk the tree and return a lazy iterator over every match.
    ///
    /// Yields `Err` for a file that cannot be read. Invalid UTF-8 is decoded
    /// lossily and the file is still scanned.
    pub fn matches(&self) -> Result<ScanIter<'_>> {
        let files = self.files()?;
        Ok(ScanIter {
            patterns: &self.patterns,
            file_count: files.len(),
            files: files.into_iter(),
            pending: VecDeque::new(),
        })
    }
}

pub struct ScanIter<'a> {
    patterns: &'a KeyPatterns,
    file_count: usize,
    files: std::vec::IntoIter<SourceFile>,
    pending: VecDeque<RawMatch>,
}

impl ScanIter<'_> {
    /// Number of files selected by the walk.
    pub fn file_count(&self) -> usize {
        self.file_count
    }
}

impl Iterator for ScanIter<'_> {
    type Item = Result<RawMatch>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(m) = self.pending.pop_front() {
                return Some(Ok(m));
            }

            let file = self.files.next()?;
            match fs::read(&file.path) {
                Ok(bytes) => {
                    tracing::trace!(file = %file.relative_path, "scanning");
                    let content = String::from_utf8_lossy(&bytes);
                    self.pending
                        .extend(scan_source(self.patterns, &file.relative_path, &content));
                }
                Err(err) => {
                    return Some(Err(err).with_context(|| {
                        format!("Failed to read source file: {}", file.path.display())
                    }));
                }
            }
        }
    }
}
