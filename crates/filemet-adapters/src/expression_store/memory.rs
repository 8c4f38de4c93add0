//! In-memory expression store.
//!
//! Keeps records in a Vec to preserve insertion order, matching the JSON
//! array layout of the file-backed store.

use std::sync::{Arc, RwLock};

use filemet_core::{
    application::{ports::ExpressionStore, ApplicationError},
    domain::CustomExpression,
    error::FilemetResult,
};

/// Thread-safe in-memory expression store.
#[derive(Clone, Default)]
pub struct InMemoryExpressionStore {
    inner: Arc<RwLock<Vec<CustomExpression>>>,
}

impl InMemoryExpressionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ExpressionStore for InMemoryExpressionStore {
    fn insert(&self, record: CustomExpression) -> FilemetResult<()> {
        let mut records = self.inner.write().map_err(lock_error)?;
        if let Some(existing) = records.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        } else {
            records.push(record);
        }
        Ok(())
    }

    fn get(&self, id: &str) -> FilemetResult<CustomExpression> {
        let records = self.inner.read().map_err(lock_error)?;
        records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ApplicationError::ExpressionNotFound { id: id.into() }.into())
    }

    fn remove(&self, id: &str) -> FilemetResult<()> {
        let mut records = self.inner.write().map_err(lock_error)?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ApplicationError::ExpressionNotFound { id: id.into() }.into());
        }
        Ok(())
    }

    fn list(&self) -> FilemetResult<Vec<CustomExpression>> {
        Ok(self.inner.read().map_err(lock_error)?.clone())
    }

    fn replace_all(&self, records: Vec<CustomExpression>) -> FilemetResult<()> {
        *self.inner.write().map_err(lock_error)? = records;
        Ok(())
    }
}

fn lock_error<T>(_: T) -> filemet_core::error::FilemetError {
    ApplicationError::StoreError {
        reason: "store lock poisoned".into(),
    }
    .into()
}
