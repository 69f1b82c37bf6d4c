use std::path::Path;

use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

use super::schema::{CURRENT_VERSION, SCHEMA, SCHEMA_VERSION_TABLE};
use super::{
    ExtractedKeyRecord, ExtractionStore, KeyAction, NamespaceMap, StoreError, StoreResult,
    TranslationRecord, TranslationStore, record_label,
};

/// SQLite-backed implementation of both stores.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a database at `path` and bring its schema up to date.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Open(e.to_string()))?;
        }

        let conn = Connection::open(path).map_err(|e| StoreError::Open(e.to_string()))?;
        tracing::debug!(path = %path.display(), "opened database");

        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open(e.to_string()))?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Flush and close the connection.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, e)| StoreError::Query(e))
    }

    fn schema_version(&self) -> StoreResult<i32> {
        let version = self.conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )?;
        Ok(version)
    }

    fn migrate(&self) -> StoreResult<()> {
        self.conn
            .execute_batch(SCHEMA_VERSION_TABLE)
            .map_err(|e| StoreError::Migration(e.to_string()))?;

        let from_version = self.schema_version()?;
        if from_version < 1 {
            self.conn
                .execute_batch(SCHEMA)
                .map_err(|e| StoreError::Migration(e.to_string()))?;
            self.conn
                .execute(
                    "INSERT INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
                    [CURRENT_VERSION],
                )
                .map_err(|e| StoreError::Migration(e.to_string()))?;
            tracing::info!("database migrated to version {}", CURRENT_VERSION);
        }

        Ok(())
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

impl ExtractionStore for SqliteStore {
    fn clear(&mut self) -> StoreResult<()> {
        let removed = self.conn.execute("DELETE FROM extracted_keys", [])?;
        tracing::debug!(removed, "cleared extracted keys");
        Ok(())
    }

    fn upsert(
        &mut self,
        namespace: &str,
        key: &str,
        file_path: &str,
        line_number: u32,
    ) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO extracted_keys
                 (namespace, translation_key, file_path, line_number, usage_count, last_extracted)
             VALUES (?1, ?2, ?3, ?4, 1, datetime('now'))
             ON CONFLICT(namespace, translation_key) DO UPDATE SET
                 usage_count = usage_count + 1,
                 file_path = excluded.file_path,
                 line_number = excluded.line_number,
                 last_extracted = excluded.last_extracted",
            params![namespace, key, file_path, line_number],
        )?;
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<ExtractedKeyRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT namespace, translation_key, file_path, line_number, usage_count, last_extracted
             FROM extracted_keys
             ORDER BY namespace, translation_key",
        )?;

        let records = stmt
            .query_map([], |row| {
                Ok(ExtractedKeyRecord {
                    namespace: row.get(0)?,
                    key: row.get(1)?,
                    file_path: row.get(2)?,
                    line_number: row.get(3)?,
                    usage_count: row.get(4)?,
                    last_extracted: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}

impl TranslationStore for SqliteStore {
    fn get(&self, language: &str, namespace: &str, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT translation_value FROM translations
                 WHERE language_code = ?1 AND namespace = ?2 AND translation_key = ?3",
                params![language, namespace, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn get_all(&self, language: &str) -> StoreResult<NamespaceMap> {
        let mut stmt = self.conn.prepare(
            "SELECT namespace, translation_key, translation_value FROM translations
             WHERE language_code = ?1",
        )?;

        let mut grouped = NamespaceMap::new();
        let rows = stmt.query_map([language], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;
        for row in rows {
            let (namespace, key, value) = row?;
            grouped.entry(namespace).or_default().insert(key, value);
        }

        Ok(grouped)
    }

    fn languages(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT language_code FROM translations ORDER BY language_code")?;
        let languages = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(languages)
    }

    fn add(&mut self, record: &TranslationRecord) -> StoreResult<()> {
        let result = self.conn.execute(
            "INSERT INTO translations (language_code, namespace, translation_key, translation_value)
             VALUES (?1, ?2, ?3, ?4)",
            params![record.language, record.namespace, record.key, record.value],
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_constraint_violation(&e) => Err(StoreError::AlreadyExists(record.label())),
            Err(e) => Err(e.into()),
        }
    }

    fn update(
        &mut self,
        language: &str,
        namespace: &str,
        key: &str,
        value: &str,
    ) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE translations SET translation_value = ?1
             WHERE language_code = ?2 AND namespace = ?3 AND translation_key = ?4",
            params![value, language, namespace, key],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(record_label(language, namespace, key)));
        }
        Ok(())
    }

    fn set(&mut self, record: &TranslationRecord) -> StoreResult<KeyAction> {
        let existed = self
            .get(&record.language, &record.namespace, &record.key)?
            .is_some();

        self.conn.execute(
            "INSERT INTO translations (language_code, namespace, translation_key, translation_value)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(language_code, namespace, translation_key)
             DO UPDATE SET translation_value = excluded.translation_value",
            params![record.language, record.namespace, record.key, record.value],
        )?;

        Ok(if existed {
            KeyAction::Updated
        } else {
            KeyAction::Added
        })
    }

    fn delete(&mut self, language: &str, namespace: &str, key: &str) -> StoreResult<()> {
        let removed = self.conn.execute(
            "DELETE FROM translations
             WHERE language_code = ?1 AND namespace = ?2 AND translation_key = ?3",
            params![language, namespace, key],
        )?;

        if removed == 0 {
            return Err(StoreError::NotFound(record_label(language, namespace, key)));
        }
        Ok(())
    }
}
