//! Common utilities for the bch11 tools

use anyhow::Result;
use std::path::Path;

use crate::config::{OutputFormat, ShellConfig};

/// Map the verbosity flags to a log level.
///
/// Warnings are always shown, `--verbose` adds info and `--debug` adds
/// debug output.
pub fn log_level(verbose: bool, debug: bool) -> tracing::Level {
    if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    }
}

/// Initialize logging on stderr so stdout carries only decoder output
pub fn init_logging(verbose: bool, debug: bool) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose, debug))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the shell configuration and apply command line overrides
pub fn load_shell_config(
    path: Option<&Path>,
    format: Option<OutputFormat>,
    show_syndromes: bool,
) -> Result<ShellConfig> {
    let mut config = match path {
        Some(path) => ShellConfig::from_file(path)?,
        None => ShellConfig::default(),
    };

    if let Some(format) = format {
        config.format = format;
    }
    if show_syndromes {
        config.show_syndromes = true;
    }

    Ok(config)
}
