//! Rendering of decode results

use anyhow::Result;
use bch11_decoder::{Correction, DecodeOutcome, ErrorClass};
use serde::Serialize;

/// Serializable view of a decode outcome
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    pub class: ErrorClass,
    pub status: String,
    pub received: [u8; 10],
    pub decoded: [u8; 10],
    pub syndromes: [u8; 4],
    pub corrections: Vec<Correction>,
}

impl From<&DecodeOutcome> for DecodeReport {
    fn from(outcome: &DecodeOutcome) -> Self {
        Self {
            class: outcome.class(),
            status: outcome.status(),
            received: outcome.received.to_values(),
            decoded: outcome.decoded.to_values(),
            syndromes: outcome.syndromes.values().map(|s| s.value()),
            corrections: outcome.corrections().to_vec(),
        }
    }
}

/// Render an outcome as the framed text block printed by the shell
pub fn render_text(outcome: &DecodeOutcome, rule_width: usize, show_syndromes: bool) -> String {
    let rule = "-".repeat(rule_width);
    let mut lines = vec![
        rule.clone(),
        format!("Status: {}", outcome.status()),
        format!("Original: {}", outcome.received),
        format!("Decoded:  {}", outcome.decoded),
    ];
    if show_syndromes {
        lines.push(format!("Syndromes: {}", outcome.syndromes));
    }
    lines.push(rule);
    lines.join("\n")
}

/// Render an outcome as a single JSON line
pub fn render_json(outcome: &DecodeOutcome) -> Result<String> {
    Ok(serde_json::to_string(&DecodeReport::from(outcome))?)
}
