//! Flags shared by `gen`, `init`, `config` and `completions`.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what `gen` does on stderr. Repeatable.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more detail on stderr (-v, -vv, -vvv)",
        long_help = "Log more detail on stderr:
    (none)  only warnings and the final error
    -v      each scaffold step and the module commands as they start
    -vv     every directory and file written, plus module tool output
    -vvv    trace level for all dogo crates"
    )]
    pub verbose: u8,

    /// Print nothing on success; errors still reach stdout.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing unless generation fails"
    )]
    pub quiet: bool,

    /// Also set by a non-empty `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never colour the report or the logs"
    )]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the platform default.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "dogo settings file (TOML)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How `gen --dry-run` and `config` render their report"
    )]
    pub output_format: OutputFormat,

    /// Append plain-text logs here as well as to stderr.
    #[arg(
        long = "log-file",
        global = true,
        value_name = "FILE",
        help = "Append logs to this file"
    )]
    pub log_file: Option<PathBuf>,
}

/// Rendering of the stdout report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured with status symbols.
    Human,
    /// Uncoloured lines.
    Plain,
    /// One JSON document (dry-run plan, config dump).
    Json,
}
