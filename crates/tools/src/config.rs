//! Configuration management for the bch11 shell

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for decode results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Interactive shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt printed before each input line
    pub prompt: String,

    /// Command that ends the session (case-insensitive)
    pub quit_command: String,

    /// Width of the horizontal rule around each result
    pub rule_width: usize,

    /// Print S1..S4 with every result
    pub show_syndromes: bool,

    pub format: OutputFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "Input Vector (or 'q' to quit): ".to_string(),
            quit_command: "q".to_string(),
            rule_width: 30,
            show_syndromes: false,
            format: OutputFormat::Text,
        }
    }
}

impl ShellConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Self = toml::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Check whether a trimmed input line is the quit command
    pub fn is_quit(&self, line: &str) -> bool {
        line.eq_ignore_ascii_case(&self.quit_command)
    }
}
