//! Blocking process execution using std::process.

use std::path::Path;
use std::process::Command;

use tracing::{debug, instrument};

use dogo_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    error::DogoResult,
};

/// Production runner: spawns the program, waits for it, and captures its
/// output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip_all, fields(program = %program, dir = %dir.display()))]
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> DogoResult<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| ApplicationError::ProcessSpawnFailed {
                command: display_command(program, args),
                reason: e.to_string(),
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(status = %output.status, bytes = combined.len(), "process exited");

        Ok(CommandOutput {
            code: output.status.code(),
            output: combined,
        })
    }
}

fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dogo_core::error::ErrorCategory;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    #[cfg(unix)]
    fn captures_stdout_and_stderr_and_exit_code() {
        let tmp = tempfile::tempdir().unwrap();
        let out = ProcessRunner::new()
            .run(
                tmp.path(),
                "sh",
                &args(&["-c", "echo to-stdout; echo to-stderr >&2; exit 3"]),
            )
            .unwrap();

        assert_eq!(out.code, Some(3));
        assert!(!out.is_success());
        assert!(out.output.contains("to-stdout"));
        assert!(out.output.contains("to-stderr"));
    }

    #[test]
    #[cfg(unix)]
    fn runs_in_requested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("marker.txt"), "").unwrap();

        let out = ProcessRunner::new()
            .run(tmp.path(), "ls", &[])
            .unwrap();
        assert!(out.is_success());
        assert!(out.output.contains("marker.txt"));
    }

    #[test]
    fn missing_program_is_a_spawn_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ProcessRunner::new()
            .run(tmp.path(), "dogo-no-such-program", &args(&["mod", "tidy"]))
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::ExternalProcess);
        assert!(err.to_string().contains("dogo-no-such-program mod tidy"));
    }
}
