// ============================================================================
// domain/error.rs - DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed file structure expression.
    ///
    /// Every syntax failure — empty input, unopened closer, unclosed opener,
    /// mismatched bracket kinds — collapses to this one signal. The display
    /// text is the exact user-visible error string and must stay stable;
    /// existing consumers surface it verbatim.
    #[error("ERROR: Invalid expression syntax")]
    InvalidExpressionSyntax,

    /// A saved expression record failed validation.
    #[error("Invalid expression record: {0}")]
    InvalidRecord(String),

    /// Required field missing on a record.
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidExpressionSyntax => vec![
                "Check that every [ { ( has a matching closer of the same kind".into(),
                "Separate entries with + or , at the top level".into(),
                "Example: components/{Header.jsx,Footer.jsx} + utils/helpers.js".into(),
            ],
            Self::InvalidRecord(msg) => vec![
                format!("Details: {}", msg),
                "Expressions need at least a name and an expression text".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidExpressionSyntax => ErrorCategory::Syntax,
            Self::InvalidRecord(_) | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Validation,
    NotFound,
    Internal,
}
