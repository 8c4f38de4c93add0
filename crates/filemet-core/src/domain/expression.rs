//! Persisted custom expression records.
//!
//! A [`CustomExpression`] is a named, categorized, taggable expression string
//! that users save for reuse. The serde field renames pin the export/import
//! JSON shape to `{id, name, description, expression, category, tags,
//! createdAt, updatedAt}` — an array of these objects is the interchange
//! format, so the renames are part of the public contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Default category applied to records saved or imported without one.
pub const DEFAULT_CATEGORY: &str = "custom";

/// A saved, reusable file structure expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomExpression {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub expression: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// User-supplied fields for a new record; id and timestamps are filled in
/// by the application service.
#[derive(Debug, Clone, Default)]
pub struct NewExpression {
    pub name: String,
    pub description: String,
    pub expression: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ExpressionUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub expression: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl CustomExpression {
    /// Build a fresh record from user input with a generated id and
    /// current timestamps.
    pub fn from_draft(draft: NewExpression) -> Result<Self, DomainError> {
        let now = Utc::now();
        let record = Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            expression: draft.expression,
            category: draft.category.unwrap_or_else(default_category),
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        };
        record.validate()?;
        Ok(record)
    }

    /// Name and expression text are the only required fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }
        if self.expression.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "expression" });
        }
        Ok(())
    }

    /// Apply a partial update and bump `updated_at`.
    pub fn apply(&mut self, update: ExpressionUpdate) -> Result<(), DomainError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(expression) = update.expression {
            self.expression = expression;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
        self.validate()
    }

    /// Case-insensitive match against name, description, tags, and the
    /// expression text itself.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.expression.to_lowercase().contains(&q)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }
}
