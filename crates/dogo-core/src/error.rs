//! Unified error handling for dogo core.
//!
//! Wraps domain and application errors behind one type with a category and
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for dogo core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DogoError {
    /// Request validation failed; nothing was written.
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    /// A filesystem or process side effect failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl DogoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// `true` if the failure happened before any side effect.
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    ExternalProcess,
    Internal,
}

/// Convenient result type alias.
pub type DogoResult<T> = Result<T, DogoError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn categories_follow_the_taxonomy() {
        assert_eq!(
            DogoError::from(DomainError::EmptyServiceName).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DogoError::from(ApplicationError::FilesystemError {
                path: PathBuf::from("x"),
                reason: "denied".into(),
            })
            .category(),
            ErrorCategory::Filesystem
        );
        assert_eq!(
            DogoError::from(ApplicationError::ExternalProcessFailed {
                command: "go mod tidy".into(),
                status: "exit status: 1".into(),
                output: "boom".into(),
            })
            .category(),
            ErrorCategory::ExternalProcess
        );
    }

    #[test]
    fn filesystem_error_names_the_path() {
        let err = DogoError::from(ApplicationError::FilesystemError {
            path: PathBuf::from("orders/pkg"),
            reason: "Failed to create directory: denied".into(),
        });
        assert!(err.to_string().contains("orders/pkg"));
    }

    #[test]
    fn process_error_carries_output() {
        let err = DogoError::from(ApplicationError::ExternalProcessFailed {
            command: "go mod init orders".into(),
            status: "exit status: 1".into(),
            output: "go.mod already exists".into(),
        });
        let msg = err.to_string();
        assert!(msg.contains("go mod init orders"));
        assert!(msg.contains("go.mod already exists"));
    }
}
