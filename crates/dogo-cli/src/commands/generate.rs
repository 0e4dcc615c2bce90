//! Implementation of the `dogo gen` command.
//!
//! Responsibility: merge CLI arguments with configuration, call the core
//! scaffold service, and display progress. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use dogo_adapters::{LocalFilesystem, ProcessRunner};
use dogo_core::{
    application::ScaffoldService,
    domain::{ProjectStructure, ServiceRequest, Toolchain},
};

use crate::{
    cli::GenArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `dogo gen` command against the local filesystem and the
/// configured module tool.
#[instrument(skip_all, fields(service = %args.name))]
pub fn execute(args: GenArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessRunner::new()),
    )
    .with_toolchain(Toolchain::new(config.toolchain.program.clone()));

    run(&service, &args, &config, output).map(|_| ())
}

/// Everything `execute` does after the adapters are chosen.
///
/// Returns the service root, or `None` for a dry run.
fn run(
    service: &ScaffoldService,
    args: &GenArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Option<PathBuf>> {
    let kind = resolve_kind(args, config);
    let output_dir = resolve_output_dir(args, config);

    let request =
        ServiceRequest::new(&args.name, &kind).map_err(|e| CliError::Core(e.into()))?;

    if output_dir.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("output path '{}' is a file", output_dir.display()),
            source: None,
        });
    }

    debug!(
        service = %request.name(),
        kind = %request.kind(),
        output_dir = %output_dir.display(),
        "Request resolved"
    );

    if args.dry_run {
        show_plan(service, &request, &output_dir, output)?;
        return Ok(None);
    }

    output.header(&format!(
        "Generating {} service: {}",
        request.kind(),
        request.name()
    ))?;

    let root = service
        .write_layout(&request, &output_dir)
        .with_cli_context(|| "writing service layout")?;
    info!(root = %root.display(), "Layout written");

    if args.skip_mod || config.toolchain.skip_mod {
        output.info("Skipping module initialization")?;
    } else {
        output.info("Initializing module manifest...")?;
        let spinner = output.spinner(&format!(
            "{} mod init {} && {} mod tidy",
            service.toolchain().program(),
            request.name(),
            service.toolchain().program(),
        ));
        let result = service.init_module(&request, &root);
        spinner.finish_and_clear();
        result.with_cli_context(|| "initializing module")?;
    }

    output.success("Service generated successfully!")?;
    Ok(Some(root))
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// `--type`, then `defaults.type` from config.
fn resolve_kind(args: &GenArgs, config: &AppConfig) -> String {
    args.kind
        .clone()
        .unwrap_or_else(|| config.defaults.kind.clone())
}

/// `--output`, then `defaults.output_dir`, then the current directory.
fn resolve_output_dir(args: &GenArgs, config: &AppConfig) -> PathBuf {
    args.output
        .clone()
        .or_else(|| config.defaults.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

// ── Dry run ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct DryRunReport<'a> {
    service: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    plan: &'a ProjectStructure,
    commands: Vec<String>,
}

fn show_plan(
    service: &ScaffoldService,
    request: &ServiceRequest,
    output_dir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = service.plan(request, output_dir);
    let commands: Vec<String> = service
        .toolchain()
        .module_commands(request.name())
        .iter()
        .map(ToString::to_string)
        .collect();

    if output.is_json() {
        output.json(&DryRunReport {
            service: request.name().as_str(),
            kind: request.kind().as_str(),
            plan: &plan,
            commands,
        })?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would generate {} service '{}' at {}",
        request.kind(),
        request.name(),
        plan.root().display(),
    ))?;
    for dir in plan.directories() {
        output.print(&format!("  {}/", dir.path.display()))?;
    }
    for file in plan.files() {
        output.print(&format!("  {} ({} bytes)", file.path.display(), file.size()))?;
    }
    for command in &commands {
        output.print(&format!("  $ {command}"))?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
