//! Database schema.

pub const CURRENT_VERSION: i32 = 1;

pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS translations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    language_code TEXT NOT NULL,
    namespace TEXT NOT NULL DEFAULT 'general',
    translation_key TEXT NOT NULL,
    translation_value TEXT NOT NULL,
    UNIQUE(language_code, namespace, translation_key)
);

CREATE INDEX IF NOT EXISTS idx_translations_language ON translations(language_code);

CREATE TABLE IF NOT EXISTS extracted_keys (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    namespace TEXT NOT NULL,
    translation_key TEXT NOT NULL,
    file_path TEXT NOT NULL,
    line_number INTEGER NOT NULL,
    usage_count INTEGER NOT NULL DEFAULT 1,
    last_extracted TEXT NOT NULL,
    UNIQUE(namespace, translation_key)
);
"#;
