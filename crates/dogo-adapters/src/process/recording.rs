//! Scripted command runner for testing.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use dogo_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    error::DogoResult,
};

/// One observed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl RecordedCommand {
    /// `program arg1 arg2 ...`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone)]
struct Failure {
    arg: String,
    code: i32,
    output: String,
}

#[derive(Debug, Default)]
struct RecordingState {
    calls: Vec<RecordedCommand>,
    failures: Vec<Failure>,
    unavailable: bool,
}

/// Records every invocation and succeeds unless told otherwise.
///
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit with `code` and `output` for any invocation whose arguments
    /// contain `arg`.
    pub fn failing(self, arg: impl Into<String>, code: i32, output: impl Into<String>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.failures.push(Failure {
                arg: arg.into(),
                code,
                output: output.into(),
            });
        }
        self
    }

    /// Behave as if the program is not installed.
    pub fn unavailable(self) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.unavailable = true;
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCommand> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .calls
            .clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> DogoResult<CommandOutput> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?;

        let call = RecordedCommand {
            dir: dir.to_path_buf(),
            program: program.to_string(),
            args: args.to_vec(),
        };

        if state.unavailable {
            return Err(ApplicationError::ProcessSpawnFailed {
                command: call.command_line(),
                reason: "No such file or directory (os error 2)".into(),
            }
            .into());
        }

        let failure = state
            .failures
            .iter()
            .find(|f| args.iter().any(|a| *a == f.arg))
            .cloned();
        state.calls.push(call);

        Ok(match failure {
            Some(f) => CommandOutput::failure(f.code, f.output),
            None => CommandOutput::success(""),
        })
    }
}
