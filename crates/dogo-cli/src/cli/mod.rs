//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dogo",
    bin_name = "dogo",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "dogo: generate REST and gRPC microservice skeletons",
    long_about = "dogo creates a conventional directory layout for a new Go \
                  service, writes its entry point and health-check route, \
                  and initializes the module manifest.",
    after_help = "EXAMPLES:\n\
        \x20 dogo gen --name orders\n\
        \x20 dogo gen -n billing -t grpc --output services\n\
        \x20 dogo completions bash > /usr/share/bash-completion/completions/dogo",
    arg_required_else_help = true,
    subcommand_required    = true,
    disable_help_subcommand = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a microservice skeleton.
    #[command(
        about = "Generate a microservice",
        after_help = "EXAMPLES:\n\
            \x20 dogo gen --name orders\n\
            \x20 dogo gen -n orders -t grpc\n\
            \x20 dogo gen -n orders --dry-run\n\
            \x20 dogo gen -n orders --skip-mod"
    )]
    Gen(GenArgs),

    /// Initialise a dogo configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dogo init           # default location\n\
            \x20 dogo init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dogo completions bash > ~/.local/share/bash-completion/completions/dogo\n\
            \x20 dogo completions zsh  > ~/.zfunc/_dogo\n\
            \x20 dogo completions fish > ~/.config/fish/completions/dogo.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the dogo configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dogo config get defaults.type\n\
            \x20 dogo config set toolchain.program go1.22\n\
            \x20 dogo config list"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// `false` for commands that create or locate the config file, which
    /// may therefore run before it exists.
    pub fn requires_config_file(&self) -> bool {
        !matches!(
            self,
            Self::Init(_) | Self::Config(ConfigCommands::Set { .. } | ConfigCommands::Path)
        )
    }
}

// ── gen ───────────────────────────────────────────────────────────────────────

/// Arguments for `dogo gen`.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Service name; also the name of the generated directory and module.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        required = true,
        help = "Service name (required)"
    )]
    pub name: String,

    /// Service type. Validated by the generator so that an unknown value is
    /// reported like any other input error.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Service type: rest or grpc (default: rest)"
    )]
    pub kind: Option<String>,

    /// Parent directory of the service root.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Do not run the module tool after writing the layout.
    #[arg(long = "skip-mod", help = "Skip `go mod init` / `go mod tidy`")]
    pub skip_mod: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dogo init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dogo completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dogo config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.type`.
        key: String,
    },
    /// Set a configuration key to a value in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
