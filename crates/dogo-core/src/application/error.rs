//! Application layer errors.
//!
//! These errors represent failures while carrying out side effects, not
//! validation. Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command ran but exited unsuccessfully.
    #[error("`{command}` failed ({status}), output: {output}")]
    ExternalProcessFailed {
        command: String,
        status: String,
        output: String,
    },

    /// An external command could not be started at all.
    #[error("Could not run `{command}`: {reason}")]
    ProcessSpawnFailed { command: String, reason: String },

    /// Shared state of an adapter was poisoned.
    #[error("Adapter state lock poisoned")]
    StateLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ExternalProcessFailed { command, .. } => vec![
                format!("`{}` exited with an error, see its output above", command),
                "The directory layout was already written; rerun after fixing the cause".into(),
                "Use --skip-mod to generate without running the module tool".into(),
            ],
            Self::ProcessSpawnFailed { command, .. } => vec![
                format!("Could not start `{}`", command),
                "Ensure the Go toolchain is installed and in your PATH".into(),
                "Or point toolchain.program at it in the config file".into(),
            ],
            Self::StateLockError => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::ExternalProcessFailed { .. } | Self::ProcessSpawnFailed { .. } => {
                ErrorCategory::ExternalProcess
            }
            Self::StateLockError => ErrorCategory::Internal,
        }
    }
}
