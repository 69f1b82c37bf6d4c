//! Regular expressions recognising translation-key usages in source text.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

/// Built-in patterns, applied in this order. Capture group 1 is the raw key.
pub const DEFAULT_PATTERN_SOURCES: &[&str] = &[
    // useTranslation(['ns', ...])
    r#"useTranslation\(\s*\[\s*['"`]([^'"`]+)['"`]"#,
    // useTranslation('ns')
    r#"useTranslation\(\s*['"`]([^'"`]+)['"`]"#,
    // t('key')
    r#"\bt\(\s*['"`]([^'"`]+)['"`]"#,
    // <Trans i18nKey="key">
    r#"<Trans\s+i18nKey\s*=\s*['"`]([^'"`]+)['"`]"#,
    // i18n.t('key')
    r#"i18n\.t\(\s*['"`]([^'"`]+)['"`]"#,
];

static DEFAULT_PATTERNS: LazyLock<KeyPatterns> = LazyLock::new(|| {
    KeyPatterns::from_sources(DEFAULT_PATTERN_SOURCES).expect("built-in key patterns compile")
});

/// Ordered list of key-matching regexes.
///
/// Every pattern must expose the raw key as capture group 1.
#[derive(Debug, Clone)]
pub struct KeyPatterns {
    patterns: Vec<Regex>,
}

impl Default for KeyPatterns {
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

impl KeyPatterns {
    pub fn from_sources<S: AsRef<str>>(sources: &[S]) -> Result<Self> {
        let patterns = sources
            .iter()
            .map(|src| {
                let src = src.as_ref();
                Regex::new(src).with_context(|| format!("Invalid key pattern: {}", src))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// All raw keys on one line, pattern by pattern, left to right within a pattern.
    ///
    /// A usage recognised by two patterns is reported once per pattern.
    pub fn find_keys<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.patterns.iter().flat_map(move |re| {
            re.captures_iter(line)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        })
    }
}
