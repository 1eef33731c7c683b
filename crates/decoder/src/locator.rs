//! Error location and evaluation
//!
//! Classifies a syndrome vector into one of the four decoding cases and
//! solves for error positions and magnitudes.

use crate::syndrome::{LocatorCoefficients, Syndromes};
use crate::Result;
use bch11_core::Gf11;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A located error: subtract `magnitude` at `position` to correct it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Correction {
    /// 1-based position in the codeword
    pub position: usize,
    pub magnitude: Gf11,
}

impl Correction {
    /// Build a correction from a located position and magnitude.
    ///
    /// Position 0 does not exist and a zero magnitude is not an error, so
    /// either yields `None`.
    fn located(position: Gf11, magnitude: Gf11) -> Option<Self> {
        if position.is_zero() || magnitude.is_zero() {
            return None;
        }
        Some(Self {
            position: position.value() as usize,
            magnitude,
        })
    }
}

/// Errors found in a received word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "corrections", rename_all = "snake_case")]
pub enum ErrorPattern {
    /// All syndromes vanish
    NoErrors,
    Single(Correction),
    Double([Correction; 2]),
    /// Three or more errors
    Uncorrectable,
}

impl ErrorPattern {
    /// Classify syndromes and locate the errors.
    ///
    /// The cases are checked in order: zero syndromes, vanishing locator
    /// coefficients (one error), a locator quadratic with two distinct roots
    /// (two errors), and otherwise uncorrectable.
    pub fn from_syndromes(syndromes: &Syndromes) -> Result<Self> {
        if syndromes.is_zero() {
            return Ok(Self::NoErrors);
        }

        let coefficients = syndromes.locator_coefficients();
        trace!("{} {}", syndromes, coefficients);

        if coefficients.all_zero() {
            return locate_single(syndromes);
        }

        let discriminant = coefficients.discriminant();
        if !coefficients.p.is_zero()
            && !coefficients.r.is_zero()
            && !discriminant.is_zero()
            && discriminant.is_quadratic_residue()
        {
            return locate_double(syndromes, &coefficients, discriminant);
        }

        Ok(Self::Uncorrectable)
    }

    /// Get the located corrections, empty for no or uncorrectable errors
    pub fn corrections(&self) -> &[Correction] {
        match self {
            Self::Single(correction) => std::slice::from_ref(correction),
            Self::Double(corrections) => corrections,
            Self::NoErrors | Self::Uncorrectable => &[],
        }
    }
}

fn locate_single(syndromes: &Syndromes) -> Result<ErrorPattern> {
    // S1 = e and S2 = e * p. S = (0, 0, 0, x) also makes P, Q and R vanish
    // but is no single error.
    let magnitude = syndromes.s1();
    if magnitude.is_zero() {
        return Ok(ErrorPattern::Uncorrectable);
    }
    let position = syndromes.s2().try_div(magnitude)?;

    Ok(Correction::located(position, magnitude)
        .map(ErrorPattern::Single)
        .unwrap_or(ErrorPattern::Uncorrectable))
}

fn locate_double(
    syndromes: &Syndromes,
    coefficients: &LocatorCoefficients,
    discriminant: Gf11,
) -> Result<ErrorPattern> {
    let root = discriminant.sqrt()?;
    let two_p = Gf11::reduce(2) * coefficients.p;

    let second = (-coefficients.q - root).try_div(two_p)?;
    let first = (-coefficients.q + root).try_div(two_p)?;

    // S1 = a + b and S2 = a * first + b * second
    let second_magnitude = (first * syndromes.s1() - syndromes.s2()).try_div(first - second)?;
    let first_magnitude = syndromes.s1() - second_magnitude;

    let located = Correction::located(first, first_magnitude)
        .zip(Correction::located(second, second_magnitude));

    Ok(match located {
        Some((a, b)) => ErrorPattern::Double([a, b]),
        None => ErrorPattern::Uncorrectable,
    })
}
