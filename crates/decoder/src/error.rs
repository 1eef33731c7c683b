//! Error types for bch11 Decoder

use thiserror::Error;

/// Decoder failure types.
///
/// These indicate an inconsistency inside the decoder, never a bad codeword.
/// An uncorrectable word is a normal outcome, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Field arithmetic failed: {0}")]
    Field(#[from] bch11_core::CoreError),
    
    #[error("Error locator produced invalid position {position}")]
    InvalidLocator { position: usize },
}

/// Result type for bch11 Decoder operations
pub type Result<T> = std::result::Result<T, DecodeError>;
