//! Interactive decode loop
//!
//! Reads one codeword per line, decodes it and prints the result until the
//! quit command or end of input. Malformed lines are reported and the loop
//! continues; a decoder failure ends the session with an error.

use anyhow::{Context, Result};
use bch11_core::{Codeword, CoreError};
use bch11_decoder::{decode, ErrorClass};
use serde::Serialize;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::config::{OutputFormat, ShellConfig};
use crate::report::{render_json, render_text};

/// Counts of decoded words per class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub zero_errors: usize,
    pub one_error: usize,
    pub two_errors: usize,
    pub uncorrectable: usize,
    /// Lines rejected as malformed input
    pub rejected: usize,
}

impl SessionStats {
    pub fn record(&mut self, class: ErrorClass) {
        match class {
            ErrorClass::ZeroErrors => self.zero_errors += 1,
            ErrorClass::OneError => self.one_error += 1,
            ErrorClass::TwoErrors => self.two_errors += 1,
            ErrorClass::Uncorrectable => self.uncorrectable += 1,
        }
    }

    /// Number of words that reached the decoder
    pub fn decoded(&self) -> usize {
        self.zero_errors + self.one_error + self.two_errors + self.uncorrectable
    }

    /// Number of symbol errors corrected
    pub fn corrected_errors(&self) -> usize {
        self.one_error + 2 * self.two_errors
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} word(s) decoded: {} clean, {} with one error, {} with two errors, {} uncorrectable; {} input(s) rejected",
            self.decoded(),
            self.zero_errors,
            self.one_error,
            self.two_errors,
            self.uncorrectable,
            self.rejected
        )
    }
}

/// Message shown for a rejected input line
pub fn rejection_message(error: &CoreError) -> String {
    match error {
        CoreError::LengthMismatch { expected, .. } => {
            format!("Error: Vector must be exactly {} digits.", expected)
        }
        CoreError::SymbolOutOfRange { .. } => "Error: Digits must be in GF(11) (0-10).".to_string(),
        CoreError::InvalidToken { .. } => "Invalid input format. Please enter integers.".to_string(),
        other => format!("Error: {}", other),
    }
}

enum Step {
    Continue,
    Quit,
}

/// Line-oriented decoder session over any input and output
pub struct Shell<R, W> {
    config: ShellConfig,
    input: R,
    output: W,
    stats: SessionStats,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
            stats: SessionStats::default(),
        }
    }

    /// Run until quit or end of input and return the session statistics
    pub fn run(mut self) -> Result<SessionStats> {
        if self.config.format == OutputFormat::Text {
            writeln!(self.output, "             --- 10-ary BCH Decoder in GF(11) ---")?;
            writeln!(
                self.output,
                "Enter the 10-digit code separated by spaces, commas, or as a single string."
            )?;
        }

        loop {
            if self.config.format == OutputFormat::Text {
                write!(self.output, "\n{}", self.config.prompt)?;
                self.output.flush()?;
            }

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw).context("Failed to read input")? == 0 {
                debug!("End of input");
                break;
            }

            // Invalid UTF-8 becomes U+FFFD and is rejected by the parser
            let line = String::from_utf8_lossy(&raw);
            if let Step::Quit = self.handle_line(line.trim())? {
                break;
            }
        }

        info!("Session finished: {}", self.stats);
        Ok(self.stats)
    }

    fn handle_line(&mut self, line: &str) -> Result<Step> {
        if self.config.is_quit(line) {
            return Ok(Step::Quit);
        }

        let word = match line.parse::<Codeword>() {
            Ok(word) => word,
            Err(e) => {
                debug!("Rejected input {:?}: {}", line, e);
                self.stats.rejected += 1;
                self.write_rejection(&e)?;
                return Ok(Step::Continue);
            }
        };

        let outcome = decode(&word).with_context(|| format!("Decoder failure on {}", word))?;
        self.stats.record(outcome.class());

        let rendered = match self.config.format {
            OutputFormat::Text => render_text(&outcome, self.config.rule_width, self.config.show_syndromes),
            OutputFormat::Json => render_json(&outcome)?,
        };
        writeln!(self.output, "{}", rendered)?;

        Ok(Step::Continue)
    }

    fn write_rejection(&mut self, error: &CoreError) -> Result<()> {
        let message = rejection_message(error);
        match self.config.format {
            OutputFormat::Text => writeln!(self.output, "{}", message)?,
            OutputFormat::Json => writeln!(
                self.output,
                "{}",
                serde_json::json!({ "error": message, "detail": error.to_string() })
            )?,
        }
        Ok(())
    }
}
