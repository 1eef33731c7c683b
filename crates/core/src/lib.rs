//! bch11 Core - GF(11) arithmetic and codeword types
//!
//! This crate provides the prime field GF(11), the 10-symbol `Codeword`
//! received by the decoder, and the text grammar used to enter codewords.

pub mod field;
pub mod codeword;
pub mod error;

pub use codeword::{Codeword, CODEWORD_LEN};
pub use error::{CoreError, Result};
pub use field::Gf11;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        field::{Gf11, MODULUS},
        codeword::{Codeword, CODEWORD_LEN},
        error::{CoreError, Result},
    };
}
