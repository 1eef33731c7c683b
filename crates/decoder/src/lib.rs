//! bch11 Decoder - syndrome decoding for the GF(11) BCH code
//!
//! This crate computes syndromes of a received ten-symbol codeword, locates
//! up to two symbol errors algebraically and returns the corrected word.

pub mod syndrome;
pub mod locator;
pub mod decoder;
pub mod error;

pub use decoder::{decode, DecodeOutcome, ErrorClass};
pub use error::{DecodeError, Result};
pub use locator::{Correction, ErrorPattern};
pub use syndrome::{LocatorCoefficients, Syndromes};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        syndrome::{Syndromes, LocatorCoefficients},
        locator::{Correction, ErrorPattern},
        decoder::{decode, DecodeOutcome, ErrorClass},
        error::{DecodeError, Result},
    };
}
