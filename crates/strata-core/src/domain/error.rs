// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy of the failure)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid name '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Merge Errors
    // ========================================================================
    /// Every placement of an insertion request declined the document.
    ///
    /// Only reachable for requests built without an unconditional
    /// `Prepend`/`Append` fallback.
    #[error("no insertion point found for {label}")]
    NoInsertionPoint { label: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { name, reason } => vec![
                format!("'{}' cannot be used as a name: {}", name, reason),
                "Names start with a letter and use letters, digits, '_' or '-'".into(),
                "Examples: billing, user_profile, order-history".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
                "Check layout.source_dir and layout.test_dir in your config".into(),
            ],
            Self::NoInsertionPoint { label } => vec![
                format!("Could not decide where to put the {}", label),
                "Restore the AUTO_IMPORTS / AUTO_ROUTES markers in the registry file".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Validation
            }
            Self::NoInsertionPoint { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
