//! Error types for AST operations.
//!
//! Two disjoint classes: [`AstError::Sql`] is a user-facing diagnostic
//! pinned to a source span (invalid SQL structure for a requested
//! operation), while [`AstError::Internal`] marks a violated invariant in
//! this crate's own contracts. Internal errors are logged at construction
//! and must never be reinterpreted as user errors.

use crate::span::Span;

/// Errors produced by AST validation and resolution helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    /// A user-facing SQL diagnostic with a source location.
    #[error("{message} [at {span}]")]
    Sql {
        /// Human-readable message, surfaced to the end user.
        message: String,
        /// Location of the most specific offending sub-expression.
        span: Span,
    },

    /// An internal invariant violation (a programming error, not bad SQL).
    #[error("internal error: {message}")]
    Internal {
        /// Description of the violated invariant.
        message: String,
    },
}

impl AstError {
    /// Creates a user-facing SQL diagnostic located at `span`.
    #[must_use]
    pub fn sql(message: impl Into<String>, span: Span) -> Self {
        Self::Sql {
            message: message.into(),
            span,
        }
    }

    /// Creates an internal invariant error and logs it loudly.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(target: "silica_sql_ast", "internal invariant violated: {message}");
        debug_assert!(false, "internal invariant violated: {message}");
        Self::Internal { message }
    }

    /// Returns the source span if this is a located SQL diagnostic.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Sql { span, .. } => Some(*span),
            Self::Internal { .. } => None,
        }
    }
}

/// Result type for AST operations.
pub type AstResult<T> = Result<T, AstError>;
