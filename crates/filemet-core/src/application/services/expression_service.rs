//! Expression Service - custom expression management.
//!
//! CRUD, search, and JSON export/import over the [`ExpressionStore`] port.
//! Separated from `StructureService` for single responsibility: this service
//! never touches the filesystem port, only the store.

use chrono::Utc;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    application::{ports::ExpressionStore, ApplicationError},
    domain::{expression::DEFAULT_CATEGORY, parser, CustomExpression, ExpressionUpdate, NewExpression},
    error::FilemetResult,
};

/// Whether imported records are appended to or replace the current set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    #[default]
    Merge,
    Replace,
}

/// Service for custom expression operations.
pub struct ExpressionService {
    store: Box<dyn ExpressionStore>,
}

impl ExpressionService {
    /// Create a new expression service.
    pub fn new(store: Box<dyn ExpressionStore>) -> Self {
        Self { store }
    }

    /// Save a new expression, generating its id and timestamps.
    ///
    /// The expression text must itself parse; a record that can never be
    /// materialized is rejected up front.
    #[instrument(skip_all, fields(name = %draft.name))]
    pub fn create(&self, draft: NewExpression) -> FilemetResult<CustomExpression> {
        parser::parse(&draft.expression)?;
        let record = CustomExpression::from_draft(draft)?;
        self.store.insert(record.clone())?;
        info!(id = %record.id, "Expression saved");
        Ok(record)
    }

    /// Apply a partial update to an existing record.
    pub fn update(&self, id: &str, update: ExpressionUpdate) -> FilemetResult<CustomExpression> {
        if let Some(expression) = &update.expression {
            parser::parse(expression)?;
        }
        let mut record = self.store.get(id)?;
        record.apply(update)?;
        self.store.insert(record.clone())?;
        Ok(record)
    }

    /// Delete a record by id.
    pub fn delete(&self, id: &str) -> FilemetResult<()> {
        self.store.remove(id)
    }

    /// Get a record by exact id, falling back to exact name match.
    pub fn get(&self, id_or_name: &str) -> FilemetResult<CustomExpression> {
        if let Ok(record) = self.store.get(id_or_name) {
            return Ok(record);
        }
        self.list()?
            .into_iter()
            .find(|r| r.name == id_or_name)
            .ok_or_else(|| {
                ApplicationError::ExpressionNotFound {
                    id: id_or_name.to_string(),
                }
                .into()
            })
    }

    /// List all records.
    pub fn list(&self) -> FilemetResult<Vec<CustomExpression>> {
        self.store.list()
    }

    /// List records in one category.
    pub fn by_category(&self, category: &str) -> FilemetResult<Vec<CustomExpression>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.category == category)
            .collect())
    }

    /// Case-insensitive search over name, description, tags, and expression.
    pub fn search(&self, query: &str) -> FilemetResult<Vec<CustomExpression>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.matches_query(query))
            .collect())
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> FilemetResult<Vec<String>> {
        let mut categories: Vec<String> = self.list()?.into_iter().map(|r| r.category).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    /// Distinct tags across all records, sorted.
    pub fn tags(&self) -> FilemetResult<Vec<String>> {
        let mut tags: Vec<String> = self
            .list()?
            .into_iter()
            .flat_map(|r| r.tags)
            .collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }

    /// Export all records as a pretty-printed JSON array.
    pub fn export_json(&self) -> FilemetResult<String> {
        let records = self.list()?;
        serde_json::to_string_pretty(&records).map_err(|e| {
            ApplicationError::StoreError {
                reason: format!("serialization failed: {e}"),
            }
            .into()
        })
    }

    /// Import records from a JSON array, returning how many were imported.
    ///
    /// Lenient on optional fields (missing id, category, tags, description
    /// get defaults) but strict on name and expression, matching the
    /// original tool. `updated_at` is always reset to the import time.
    #[instrument(skip_all)]
    pub fn import_json(&self, json: &str, mode: ImportMode) -> FilemetResult<usize> {
        let imported: Vec<ImportedExpression> =
            serde_json::from_str(json).map_err(|e| ApplicationError::ImportFailed {
                reason: format!("expected an array of expressions: {e}"),
            })?;

        let now = Utc::now();
        let mut records = Vec::with_capacity(imported.len());
        for entry in imported {
            let name = non_empty(entry.name).ok_or(ApplicationError::ImportFailed {
                reason: "name and expression are required".into(),
            })?;
            let expression = non_empty(entry.expression).ok_or(ApplicationError::ImportFailed {
                reason: "name and expression are required".into(),
            })?;

            records.push(CustomExpression {
                id: entry
                    .id
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
                name,
                description: entry.description.unwrap_or_default(),
                expression,
                category: entry
                    .category
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                tags: entry.tags.unwrap_or_default(),
                created_at: entry.created_at.unwrap_or(now),
                updated_at: now,
            });
        }

        let count = records.len();
        match mode {
            ImportMode::Merge => {
                for record in records {
                    self.store.insert(record)?;
                }
            }
            ImportMode::Replace => self.store.replace_all(records)?,
        }

        info!(count, ?mode, "Expressions imported");
        Ok(count)
    }
}

/// Import-side record: everything optional so hand-edited files with
/// missing fields still load; required fields are enforced afterwards.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportedExpression {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    expression: Option<String>,
    category: Option<String>,
    tags: Option<Vec<String>>,
    created_at: Option<chrono::DateTime<Utc>>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilemetError;
    use std::sync::{Arc, RwLock};

    /// Vec-backed store mirroring the adapter crate's in-memory store.
    #[derive(Clone, Default)]
    struct VecStore {
        inner: Arc<RwLock<Vec<CustomExpression>>>,
    }

    impl ExpressionStore for VecStore {
        fn insert(&self, record: CustomExpression) -> FilemetResult<()> {
            let mut records = self.inner.write().unwrap();
            if let Some(existing) = records.iter_mut().find(|r| r.id == record.id) {
                *existing = record;
            } else {
                records.push(record);
            }
            Ok(())
        }

        fn get(&self, id: &str) -> FilemetResult<CustomExpression> {
            self.inner
                .read()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| ApplicationError::ExpressionNotFound { id: id.into() }.into())
        }

        fn remove(&self, id: &str) -> FilemetResult<()> {
            let mut records = self.inner.write().unwrap();
            let before = records.len();
            records.retain(|r| r.id != id);
            if records.len() == before {
                return Err(ApplicationError::ExpressionNotFound { id: id.into() }.into());
            }
            Ok(())
        }

        fn list(&self) -> FilemetResult<Vec<CustomExpression>> {
            Ok(self.inner.read().unwrap().clone())
        }

        fn replace_all(&self, records: Vec<CustomExpression>) -> FilemetResult<()> {
            *self.inner.write().unwrap() = records;
            Ok(())
        }
    }

    fn service() -> ExpressionService {
        ExpressionService::new(Box::new(VecStore::default()))
    }

    fn draft(name: &str, category: &str, tags: &[&str]) -> NewExpression {
        NewExpression {
            name: name.into(),
            description: format!("{name} structure"),
            expression: "src/{a.ts,b.ts}".into(),
            category: Some(category.into()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let service = service();
        let saved = service.create(draft("react", "frontend", &["react"])).unwrap();
        let loaded = service.get(&saved.id).unwrap();
        assert_eq!(saved, loaded);
    }

    #[test]
    fn create_rejects_unparseable_expression() {
        let mut bad = draft("broken", "custom", &[]);
        bad.expression = "src/{a.ts".into();
        let err = service().create(bad).unwrap_err();
        assert!(matches!(
            err,
            FilemetError::Domain(crate::domain::DomainError::InvalidExpressionSyntax)
        ));
    }

    #[test]
    fn update_rejects_unparseable_expression() {
        let service = service();
        let saved = service.create(draft("ok", "custom", &[])).unwrap();
        let err = service
            .update(
                &saved.id,
                ExpressionUpdate {
                    expression: Some("a[".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, FilemetError::Domain(_)));
        // Record untouched.
        assert_eq!(service.get(&saved.id).unwrap().expression, saved.expression);
    }

    #[test]
    fn get_falls_back_to_name_lookup() {
        let service = service();
        service.create(draft("react", "frontend", &[])).unwrap();
        assert_eq!(service.get("react").unwrap().name, "react");
    }

    #[test]
    fn get_unknown_is_not_found() {
        let err = service().get("nope").unwrap_err();
        assert!(matches!(
            err,
            FilemetError::Application(ApplicationError::ExpressionNotFound { .. })
        ));
    }

    #[test]
    fn update_bumps_timestamp_and_keeps_id() {
        let service = service();
        let saved = service.create(draft("api", "backend", &[])).unwrap();
        let updated = service
            .update(
                &saved.id,
                ExpressionUpdate {
                    description: Some("new description".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.description, "new description");
        assert!(updated.updated_at >= saved.updated_at);
    }

    #[test]
    fn delete_removes_record() {
        let service = service();
        let saved = service.create(draft("tmp", "custom", &[])).unwrap();
        service.delete(&saved.id).unwrap();
        assert!(service.get(&saved.id).is_err());
    }

    #[test]
    fn by_category_filters() {
        let service = service();
        service.create(draft("a", "frontend", &[])).unwrap();
        service.create(draft("b", "backend", &[])).unwrap();
        service.create(draft("c", "frontend", &[])).unwrap();

        let frontend = service.by_category("frontend").unwrap();
        assert_eq!(frontend.len(), 2);
        assert!(frontend.iter().all(|r| r.category == "frontend"));
    }

    #[test]
    fn search_spans_fields() {
        let service = service();
        service.create(draft("react-layout", "frontend", &["spa"])).unwrap();
        service.create(draft("go-api", "backend", &["server"])).unwrap();

        assert_eq!(service.search("REACT").unwrap().len(), 1);
        assert_eq!(service.search("server").unwrap().len(), 1);
        // Both drafts share the same expression text.
        assert_eq!(service.search("src/{").unwrap().len(), 2);
    }

    #[test]
    fn categories_and_tags_are_sorted_distinct() {
        let service = service();
        service.create(draft("a", "frontend", &["x", "y"])).unwrap();
        service.create(draft("b", "backend", &["y", "z"])).unwrap();

        assert_eq!(service.categories().unwrap(), ["backend", "frontend"]);
        assert_eq!(service.tags().unwrap(), ["x", "y", "z"]);
    }

    // ── export / import ───────────────────────────────────────────────────

    #[test]
    fn export_import_round_trip() {
        let source = service();
        source.create(draft("react", "frontend", &["spa"])).unwrap();
        source.create(draft("go-api", "backend", &[])).unwrap();
        let json = source.export_json().unwrap();

        let dest = service();
        let count = dest.import_json(&json, ImportMode::Merge).unwrap();
        assert_eq!(count, 2);
        assert_eq!(dest.list().unwrap().len(), 2);
        assert_eq!(dest.get("react").unwrap().category, "frontend");
    }

    #[test]
    fn import_merge_keeps_existing_records() {
        let service = service();
        service.create(draft("keep-me", "custom", &[])).unwrap();
        let json = r#"[{"name": "new", "expression": "a.ts"}]"#;

        service.import_json(json, ImportMode::Merge).unwrap();
        assert_eq!(service.list().unwrap().len(), 2);
    }

    #[test]
    fn import_replace_drops_existing_records() {
        let service = service();
        service.create(draft("old", "custom", &[])).unwrap();
        let json = r#"[{"name": "new", "expression": "a.ts"}]"#;

        service.import_json(json, ImportMode::Replace).unwrap();
        let records = service.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "new");
    }

    #[test]
    fn import_fills_defaults_for_optional_fields() {
        let service = service();
        let json = r#"[{"name": "minimal", "expression": "a.ts"}]"#;
        service.import_json(json, ImportMode::Merge).unwrap();

        let record = service.get("minimal").unwrap();
        assert!(!record.id.is_empty());
        assert_eq!(record.category, DEFAULT_CATEGORY);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn import_rejects_non_array_payload() {
        let err = service()
            .import_json(r#"{"name": "x"}"#, ImportMode::Merge)
            .unwrap_err();
        assert!(matches!(
            err,
            FilemetError::Application(ApplicationError::ImportFailed { .. })
        ));
    }

    #[test]
    fn import_rejects_record_without_expression() {
        let err = service()
            .import_json(r#"[{"name": "x"}]"#, ImportMode::Merge)
            .unwrap_err();
        assert!(matches!(
            err,
            FilemetError::Application(ApplicationError::ImportFailed { .. })
        ));
    }
}
