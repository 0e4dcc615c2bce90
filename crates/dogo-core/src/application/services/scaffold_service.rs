//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the request
//! 2. Lay out the directory tree and render the two source files
//! 3. Write them through the `Filesystem` port
//! 4. Initialize the module manifest through the `CommandRunner` port
//!
//! Nothing is rolled back: a failure part-way leaves whatever was already
//! written on disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
    },
    domain::{ExternalCommand, FsEntry, ProjectStructure, ServiceRequest, Toolchain},
    error::DogoResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    toolchain: Toolchain,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters and the default
    /// (`go`) toolchain.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use dogo_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     runner,     // impl CommandRunner
    /// );
    /// let root = service.generate("orders", "rest", ".")?;
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> Self {
        Self {
            filesystem,
            runner,
            toolchain: Toolchain::default(),
        }
    }

    /// Replace the module toolchain.
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Validate raw input and generate the service under `output_dir`.
    ///
    /// Returns the service root. Validation failures are returned before any
    /// port is called.
    pub fn generate(
        &self,
        name: &str,
        kind: &str,
        output_dir: impl AsRef<Path>,
    ) -> DogoResult<PathBuf> {
        let request = ServiceRequest::new(name, kind)?;
        self.scaffold(&request, output_dir)
    }

    /// Generate an already validated request: layout, then module init.
    #[instrument(
        skip_all,
        fields(
            service = %request.name(),
            kind = %request.kind(),
            output_path = %output_dir.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        request: &ServiceRequest,
        output_dir: impl AsRef<Path>,
    ) -> DogoResult<PathBuf> {
        info!("Generating {} service {}", request.kind(), request.name());

        let root = self.write_layout(request, output_dir)?;
        self.init_module(request, &root)?;

        info!("Service generated successfully");
        Ok(root)
    }

    /// Compute what would be written, without touching anything.
    pub fn plan(&self, request: &ServiceRequest, output_dir: impl AsRef<Path>) -> ProjectStructure {
        ProjectStructure::for_request(request, output_dir.as_ref())
    }

    /// Create every planned directory and write both source files.
    ///
    /// Existing directories are fine; existing files are overwritten.
    #[instrument(skip_all, fields(service = %request.name()))]
    pub fn write_layout(
        &self,
        request: &ServiceRequest,
        output_dir: impl AsRef<Path>,
    ) -> DogoResult<PathBuf> {
        let structure = self.plan(request, output_dir);
        self.write_structure(&structure)?;
        Ok(structure.root().to_path_buf())
    }

    /// Run `mod init` then `mod tidy` in `root`. Stops at the first failure.
    #[instrument(skip_all, fields(service = %request.name(), root = %root.display()))]
    pub fn init_module(&self, request: &ServiceRequest, root: &Path) -> DogoResult<()> {
        for command in self.toolchain.module_commands(request.name()) {
            self.run_checked(root, &command)?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_structure(&self, structure: &ProjectStructure) -> DogoResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = structure.root().join(&dir.path);
                    debug!(path = %path.display(), "create directory");
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    debug!(path = %path.display(), bytes = file.size(), "write file");
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        info!(
            entries = structure.entry_count(),
            root = %structure.root().display(),
            "Layout written"
        );
        Ok(())
    }

    fn run_checked(&self, dir: &Path, command: &ExternalCommand) -> DogoResult<()> {
        info!(command = %command, "Running external command");

        let result = self.runner.run(dir, &command.program, &command.args)?;

        if !result.is_success() {
            return Err(ApplicationError::ExternalProcessFailed {
                command: command.to_string(),
                status: result.status_description(),
                output: result.output.trim().to_string(),
            }
            .into());
        }

        debug!(command = %command, output = %result.output.trim(), "External command finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mockall::Sequence;

    use super::*;
    use crate::{
        application::ports::{CommandOutput, MockCommandRunner, MockFilesystem},
        domain::DomainError,
        error::{DogoError, ErrorCategory},
    };

    fn permissive_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs
    }

    fn is_sub(args: &[String], sub: &str) -> bool {
        args.get(1).map(String::as_str) == Some(sub)
    }

    #[test]
    fn empty_name_touches_nothing() {
        // Mocks without expectations panic on any call.
        let service = ScaffoldService::new(
            Box::new(MockFilesystem::new()),
            Box::new(MockCommandRunner::new()),
        );

        let err = service.generate("", "rest", "out").unwrap_err();
        assert_eq!(err, DogoError::Domain(DomainError::EmptyServiceName));
        assert!(err.is_validation());
    }

    #[test]
    fn unknown_kind_touches_nothing() {
        let service = ScaffoldService::new(
            Box::new(MockFilesystem::new()),
            Box::new(MockCommandRunner::new()),
        );

        let err = service.generate("orders", "soap", "out").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn module_commands_run_in_order_in_service_root() {
        let mut seq = Sequence::new();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|dir, program, args| {
                dir.to_path_buf() == PathBuf::from("out").join("orders")
                    && program.to_string() == "go"
                    && is_sub(args, "init")
                    && args.get(2).map(String::as_str) == Some("orders")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(CommandOutput::success("go: creating new go.mod")));
        runner
            .expect_run()
            .withf(|_, _, args| is_sub(args, "tidy"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(CommandOutput::success("")));

        let service = ScaffoldService::new(Box::new(permissive_fs()), Box::new(runner));
        let root = service.generate("orders", "rest", "out").unwrap();
        assert_eq!(root, PathBuf::from("out").join("orders"));
    }

    #[test]
    fn failed_init_skips_tidy_and_reports_output() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, _, args| is_sub(args, "init"))
            .times(1)
            .returning(|_, _, _| Ok(CommandOutput::failure(1, "go: go.mod already exists\n")));
        runner
            .expect_run()
            .withf(|_, _, args| is_sub(args, "tidy"))
            .never();

        let service = ScaffoldService::new(Box::new(permissive_fs()), Box::new(runner));
        let err = service.generate("orders", "grpc", "out").unwrap_err();

        assert_eq!(
            err,
            DogoError::Application(ApplicationError::ExternalProcessFailed {
                command: "go mod init orders".into(),
                status: "exit code 1".into(),
                output: "go: go.mod already exists".into(),
            })
        );
    }

    #[test]
    fn filesystem_failure_aborts_before_commands() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to create directory: permission denied".into(),
            }
            .into())
        });
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(runner));
        let err = service.generate("orders", "rest", "out").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Filesystem);
    }

    #[test]
    fn custom_toolchain_program_is_used() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, program, _| program.to_string() == "go1.22")
            .times(2)
            .returning(|_, _, _| Ok(CommandOutput::success("")));

        let service = ScaffoldService::new(Box::new(permissive_fs()), Box::new(runner))
            .with_toolchain(Toolchain::new("go1.22"));
        service.generate("orders", "rest", "out").unwrap();
    }

    #[test]
    fn both_files_are_written_once() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path.ends_with("dogo/orders/main.go") && content.contains("Starting orders service")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path.ends_with("internal/router/routes.go"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .returning(|_, _, _| Ok(CommandOutput::success("")));

        let service = ScaffoldService::new(Box::new(fs), Box::new(runner));
        service.generate("orders", "rest", "out").unwrap();
    }
}
