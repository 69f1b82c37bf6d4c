use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::core::utils::PathMatcher;

/// A source file selected for scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub relative_path: String,
}

/// Selects which files under a root get scanned.
#[derive(Debug, Clone)]
pub struct FileFilter {
    pub includes: PathMatcher,
    pub excluded_dirs: Vec<String>,
    pub ignores: Vec<Pattern>,
}

impl FileFilter {
    fn descend_into(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !name.starts_with('.') && !self.excluded_dirs.iter().any(|d| d == name.as_ref())
    }

    fn accepts(&self, relative_path: &str) -> bool {
        self.includes.is_match(relative_path)
            && !self.ignores.iter().any(|p| p.matches(relative_path))
    }
}

/// Walk `root` and return matching files in a stable (name-sorted) order.
pub fn collect_source_files(root: &Path, filter: &FileFilter) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| filter.descend_into(e));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(relative_path) = relative_slash_path(root, path) else {
            continue;
        };

        if filter.accepts(&relative_path) {
            files.push(SourceFile {
                path: path.to_path_buf(),
                relative_path,
            });
        }
    }

    Ok(files)
}

fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
