//! Double-error-correcting decoder

use crate::locator::{Correction, ErrorPattern};
use crate::syndrome::Syndromes;
use crate::{DecodeError, Result};
use bch11_core::Codeword;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Classification of a received word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    ZeroErrors,
    OneError,
    TwoErrors,
    Uncorrectable,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorClass::ZeroErrors => "zero errors",
            ErrorClass::OneError => "one error",
            ErrorClass::TwoErrors => "two errors",
            ErrorClass::Uncorrectable => "uncorrectable",
        };
        write!(f, "{}", name)
    }
}

/// Result of decoding one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOutcome {
    /// Word as received
    pub received: Codeword,
    /// Corrected word, or the received word if nothing was corrected
    pub decoded: Codeword,
    pub syndromes: Syndromes,
    pub pattern: ErrorPattern,
}

impl DecodeOutcome {
    pub fn class(&self) -> ErrorClass {
        match self.pattern {
            ErrorPattern::NoErrors => ErrorClass::ZeroErrors,
            ErrorPattern::Single(_) => ErrorClass::OneError,
            ErrorPattern::Double(_) => ErrorClass::TwoErrors,
            ErrorPattern::Uncorrectable => ErrorClass::Uncorrectable,
        }
    }

    /// Corrections applied to the received word
    pub fn corrections(&self) -> &[Correction] {
        self.pattern.corrections()
    }

    /// True if the decoded word differs from the received word
    pub fn is_corrected(&self) -> bool {
        !self.corrections().is_empty()
    }

    /// Human readable description of the outcome
    pub fn status(&self) -> String {
        match self.pattern {
            ErrorPattern::NoErrors => "The codeword was received with 0 errors.".to_string(),
            ErrorPattern::Single(c) => format!(
                "The codeword was received with one error of magnitude {} in position {} and corrected.",
                c.magnitude, c.position
            ),
            ErrorPattern::Double([a, b]) => format!(
                "The codeword was received with two errors of magnitudes {} and {} in the respective positions {} and {}. The word has been corrected.",
                a.magnitude, b.magnitude, a.position, b.position
            ),
            ErrorPattern::Uncorrectable => {
                "Three or more errors occurred, word could not be decoded. Request retransmission."
                    .to_string()
            }
        }
    }
}

/// Decode a received word, correcting up to two symbol errors.
///
/// The received word is left untouched; corrections are applied to a copy.
/// An uncorrectable word is returned as an `Ok` outcome. `Err` means the
/// field arithmetic or locator bookkeeping failed, which no input should
/// cause.
pub fn decode(word: &Codeword) -> Result<DecodeOutcome> {
    let syndromes = Syndromes::compute(word);
    let pattern = ErrorPattern::from_syndromes(&syndromes)?;

    let decoded = pattern
        .corrections()
        .iter()
        .try_fold(*word, |current, correction| {
            current
                .subtract_at(correction.position, correction.magnitude)
                .ok_or(DecodeError::InvalidLocator {
                    position: correction.position,
                })
        })?;

    let outcome = DecodeOutcome {
        received: *word,
        decoded,
        syndromes,
        pattern,
    };

    match outcome.class() {
        ErrorClass::Uncorrectable => warn!("Uncorrectable word {} ({})", word, syndromes),
        class => debug!("Decoded {} as {}: {:?}", word, class, outcome.corrections()),
    }

    Ok(outcome)
}
