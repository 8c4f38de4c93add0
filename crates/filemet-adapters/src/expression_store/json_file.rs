//! JSON file-backed expression store.
//!
//! Records are persisted as a single JSON array at a fixed path. The file is
//! read on first access and rewritten after every mutation, so external edits
//! between runs are picked up and the on-disk copy never lags the store.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::debug;

use filemet_core::{
    application::{ports::ExpressionStore, ApplicationError},
    domain::CustomExpression,
    error::{FilemetError, FilemetResult},
};

/// Expression store persisted to a JSON file.
pub struct JsonFileExpressionStore {
    path: PathBuf,
    cache: Arc<RwLock<Option<Vec<CustomExpression>>>>,
}

impl JsonFileExpressionStore {
    /// Create a store backed by the given file. The file is not touched
    /// until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> FilemetResult<Vec<CustomExpression>> {
        if let Some(records) = self.cache.read().map_err(lock_error)?.as_ref() {
            return Ok(records.clone());
        }

        let records = if self.path.exists() {
            let raw = fs::read_to_string(&self.path).map_err(|e| store_error("read", e))?;
            serde_json::from_str(&raw).map_err(|e| store_error("parse", e))?
        } else {
            debug!(path = %self.path.display(), "store file missing, starting empty");
            Vec::new()
        };

        *self.cache.write().map_err(lock_error)? = Some(records.clone());
        Ok(records)
    }

    fn save(&self, records: Vec<CustomExpression>) -> FilemetResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| store_error("create directory for", e))?;
            }
        }

        let raw =
            serde_json::to_string_pretty(&records).map_err(|e| store_error("serialize", e))?;
        fs::write(&self.path, raw).map_err(|e| store_error("write", e))?;

        *self.cache.write().map_err(lock_error)? = Some(records);
        Ok(())
    }
}

impl ExpressionStore for JsonFileExpressionStore {
    fn insert(&self, record: CustomExpression) -> FilemetResult<()> {
        let mut records = self.load()?;
        if let Some(existing) = records.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        } else {
            records.push(record);
        }
        self.save(records)
    }

    fn get(&self, id: &str) -> FilemetResult<CustomExpression> {
        self.load()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| ApplicationError::ExpressionNotFound { id: id.into() }.into())
    }

    fn remove(&self, id: &str) -> FilemetResult<()> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ApplicationError::ExpressionNotFound { id: id.into() }.into());
        }
        self.save(records)
    }

    fn list(&self) -> FilemetResult<Vec<CustomExpression>> {
        self.load()
    }

    fn replace_all(&self, records: Vec<CustomExpression>) -> FilemetResult<()> {
        self.save(records)
    }
}

fn store_error(operation: &str, e: impl std::fmt::Display) -> FilemetError {
    ApplicationError::StoreError {
        reason: format!("Failed to {} store file: {}", operation, e),
    }
    .into()
}

fn lock_error<T>(_: T) -> FilemetError {
    ApplicationError::StoreError {
        reason: "store lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use filemet_core::domain::NewExpression;

    fn record(name: &str) -> CustomExpression {
        CustomExpression::from_draft(NewExpression {
            name: name.into(),
            expression: "src/{a.ts,b.ts}".into(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileExpressionStore::new(dir.path().join("expressions.json"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn insert_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expressions.json");

        let rec = record("layout");
        JsonFileExpressionStore::new(&path).insert(rec.clone()).unwrap();

        let reopened = JsonFileExpressionStore::new(&path);
        assert_eq!(reopened.get(&rec.id).unwrap().name, "layout");
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/expressions.json");

        JsonFileExpressionStore::new(&path).insert(record("x")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn remove_rewrites_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expressions.json");
        let store = JsonFileExpressionStore::new(&path);

        let rec = record("doomed");
        store.insert(rec.clone()).unwrap();
        store.remove(&rec.id).unwrap();

        assert!(JsonFileExpressionStore::new(&path).list().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_surfaces_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expressions.json");
        fs::write(&path, "not json").unwrap();

        assert!(JsonFileExpressionStore::new(&path).list().is_err());
    }

    #[test]
    fn replace_all_swaps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileExpressionStore::new(dir.path().join("expressions.json"));

        store.insert(record("old")).unwrap();
        store.replace_all(vec![record("new")]).unwrap();

        let names: Vec<String> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["new"]);
    }
}
