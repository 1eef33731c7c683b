//! Error types for bch11 core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Division by zero in GF(11): zero has no multiplicative inverse")]
    DivisionByZero,
    
    #[error("{value} is not a quadratic residue in GF(11)")]
    NonResidue { value: u8 },
    
    #[error("Symbol {value} is outside GF(11) (expected 0-10)")]
    SymbolOutOfRange { value: i64 },
    
    #[error("Codeword length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    
    #[error("Invalid symbol token: {token:?}")]
    InvalidToken { token: String },
}

/// Result type for bch11 core operations
pub type Result<T> = std::result::Result<T, CoreError>;
