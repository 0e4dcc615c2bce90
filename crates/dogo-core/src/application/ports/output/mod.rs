//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dogo-adapters` crate provides implementations.

use std::path::Path;

use crate::error::DogoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dogo_adapters::filesystem::LocalFilesystem` (production)
/// - `dogo_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it
    /// already exists.
    fn create_dir_all(&self, path: &Path) -> DogoResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> DogoResult<()>;
}

/// What an external command left behind once it finished.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// stdout followed by stderr.
    pub output: String,
}

impl CommandOutput {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            output: output.into(),
        }
    }

    pub fn failure(code: i32, output: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            output: output.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn status_description(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `dogo_adapters::process::ProcessRunner` (production)
/// - `dogo_adapters::process::RecordingRunner` (testing)
///
/// A non-zero exit is *not* an error at this level; the runner only fails
/// when the program could not be started or waited on.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> DogoResult<CommandOutput>;
}
