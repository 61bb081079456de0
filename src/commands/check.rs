use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::cli::{CheckArgs, Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::document::Document;
use crate::linter::{AttributesWrapper, LinterRegistry};
use crate::output::{
    ColorMode, FileReport, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::scanner::{DirectoryScanner, FileScanner};
use crate::{EXIT_CONFIG_ERROR, EXIT_LINTS_FOUND, EXIT_SUCCESS, Result};

use super::print_error;

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Lint every document under `args.paths`.
///
/// # Errors
/// Returns an error if the configuration is invalid, a path cannot be scanned,
/// or a document cannot be loaded.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    if let Some(style) = args.style {
        config.set_option(AttributesWrapper::NAME, "style", style.as_str());
    }

    // 2. Build linters (fails fast on misconfiguration)
    let registry = LinterRegistry::from_config(&config)?;

    // 3. Collect documents
    let scanner = DirectoryScanner::default();
    let mut files = Vec::new();
    for path in &args.paths {
        files.extend(scanner.scan(path)?);
    }
    log::info!("linting {} document(s)", files.len());

    // 4. Lint in parallel; `collect` keeps input order
    let reports = files
        .par_iter()
        .map(|path| lint_file(path, &registry))
        .collect::<Result<Vec<_>>>()?;

    // 5. Format and write output
    let output = format_output(args.format, &reports, color_choice_to_mode(cli.color))?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if reports.iter().all(FileReport::is_clean) {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_LINTS_FOUND)
    }
}

/// Load configuration from `config_path`, the current directory, or defaults.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Load one document and run every linter over it.
///
/// # Errors
/// Returns an error if the document cannot be read or parsed.
pub fn lint_file(path: &Path, registry: &LinterRegistry) -> Result<FileReport> {
    let document = Document::from_path(path).inspect_err(|e| {
        log::warn!("failed to load {}: {e}", path.display());
    })?;
    let lints = registry.lint(&document);
    log::debug!(
        "{}: {} line(s), {} lint(s)",
        path.display(),
        document.line_count(),
        lints.len()
    );
    Ok(FileReport {
        path: path.to_path_buf(),
        lints,
    })
}

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn format_output(format: OutputFormat, reports: &[FileReport], color: ColorMode) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color).format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
