use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::linter::Style;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "wrap-guard")]
#[command(author, version, about = "Attribute wrapper guard - enforce one attribute wrapper style in templates")]
#[command(long_about = "Lints pre-parsed template documents (*.slim.json) for the configured \
    attribute wrapper style: none, round, curly, square or any.\n\n\
    Exit codes:\n  \
    0 - No lints\n  \
    1 - Lints found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter. An explicit `-v` outranks `--quiet`, which only
    /// silences warnings when no verbosity was asked for.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match (self.verbose, self.quiet) {
            (0, true) => "error",
            (0, false) => "warn",
            (1, _) => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint documents for attribute wrapper style
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),

    /// List the available wrapper styles
    Styles,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Documents or directories to lint
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Wrapper style (overrides config) [possible values: none, round, curly, square, any]
    #[arg(short, long)]
    pub style: Option<Style>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".wrap-guard.toml")]
    pub output: PathBuf,

    /// Wrapper style written to the new file
    #[arg(short, long, default_value = "none")]
    pub style: Style,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and linter options
    Validate {
        /// Path to configuration file (default: .wrap-guard.toml)
        #[arg(short, long, default_value = ".wrap-guard.toml")]
        config: PathBuf,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
