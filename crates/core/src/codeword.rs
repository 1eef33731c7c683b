//! Received codewords
//!
//! A codeword is exactly ten GF(11) symbols. Positions are numbered 1..=10;
//! the position number itself enters the syndrome computation, so every
//! accessor here takes 1-based positions.

use crate::{CoreError, Gf11, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of symbols in a codeword
pub const CODEWORD_LEN: usize = 10;

/// Ten-symbol word over GF(11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Codeword([Gf11; CODEWORD_LEN]);

impl Codeword {
    /// Create a codeword from field elements
    pub const fn new(symbols: [Gf11; CODEWORD_LEN]) -> Self {
        Self(symbols)
    }

    /// The all-zero word
    pub const fn zero() -> Self {
        Self([Gf11::ZERO; CODEWORD_LEN])
    }

    /// Create a codeword from raw integers, checking length and range
    pub fn from_values(values: &[i64]) -> Result<Self> {
        if values.len() != CODEWORD_LEN {
            return Err(CoreError::LengthMismatch {
                expected: CODEWORD_LEN,
                actual: values.len(),
            });
        }

        let mut symbols = [Gf11::ZERO; CODEWORD_LEN];
        for (slot, &value) in symbols.iter_mut().zip(values) {
            *slot = u8::try_from(value)
                .ok()
                .and_then(|v| Gf11::new(v).ok())
                .ok_or(CoreError::SymbolOutOfRange { value })?;
        }

        Ok(Self(symbols))
    }

    /// Get all symbols in position order
    pub fn symbols(&self) -> &[Gf11; CODEWORD_LEN] {
        &self.0
    }

    /// Get the symbol at a 1-based position
    pub fn symbol(&self, position: usize) -> Option<Gf11> {
        position
            .checked_sub(1)
            .and_then(|index| self.0.get(index))
            .copied()
    }

    /// Iterate over `(position, symbol)` pairs with 1-based positions
    pub fn positions(&self) -> impl Iterator<Item = (usize, Gf11)> + '_ {
        self.0.iter().enumerate().map(|(index, &s)| (index + 1, s))
    }

    /// Return a copy with `magnitude` subtracted at `position`.
    ///
    /// Returns `None` when the position is outside 1..=10.
    pub fn subtract_at(&self, position: usize, magnitude: Gf11) -> Option<Self> {
        let mut symbols = self.0;
        let slot = symbols.get_mut(position.checked_sub(1)?)?;
        *slot -= magnitude;
        Some(Self(symbols))
    }

    /// Return a copy with `magnitude` added at `position`
    pub fn add_at(&self, position: usize, magnitude: Gf11) -> Option<Self> {
        self.subtract_at(position, -magnitude)
    }

    /// Get the symbols as plain integers
    pub fn to_values(&self) -> [u8; CODEWORD_LEN] {
        self.0.map(Gf11::value)
    }
}

impl From<[Gf11; CODEWORD_LEN]> for Codeword {
    fn from(symbols: [Gf11; CODEWORD_LEN]) -> Self {
        Self(symbols)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, symbol) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "]")
    }
}

/// Parses the input grammar accepted by the interactive shell.
///
/// Brackets are ignored and commas count as whitespace. If any whitespace
/// remains, the text is split into integer tokens (so `10` can be entered);
/// otherwise every character is read as a single decimal digit.
impl FromStr for Codeword {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '[' | ']'))
            .map(|c| if c == ',' { ' ' } else { c })
            .collect();
        let cleaned = cleaned.trim();

        let values = if cleaned.contains(char::is_whitespace) {
            cleaned
                .split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| CoreError::InvalidToken {
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            cleaned
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(i64::from)
                        .ok_or_else(|| CoreError::InvalidToken { token: c.to_string() })
                })
                .collect::<Result<Vec<_>>>()?
        };

        Self::from_values(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORD: [i64; 10] = [3, 7, 4, 5, 1, 9, 5, 8, 7, 6];

    #[test]
    fn test_from_values() {
        let word = Codeword::from_values(&WORD).unwrap();
        assert_eq!(word.to_values(), [3, 7, 4, 5, 1, 9, 5, 8, 7, 6]);
        assert_eq!(word.symbol(1).unwrap().value(), 3);
        assert_eq!(word.symbol(10).unwrap().value(), 6);
        assert_eq!(word.symbol(0), None);
        assert_eq!(word.symbol(11), None);
    }

    #[test]
    fn test_from_values_rejects_bad_length() {
        assert_eq!(
            Codeword::from_values(&[1, 2, 3]),
            Err(CoreError::LengthMismatch { expected: 10, actual: 3 })
        );
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        let mut values = WORD;
        values[4] = 11;
        assert_eq!(
            Codeword::from_values(&values),
            Err(CoreError::SymbolOutOfRange { value: 11 })
        );
        values[4] = -1;
        assert_eq!(
            Codeword::from_values(&values),
            Err(CoreError::SymbolOutOfRange { value: -1 })
        );
    }

    #[test]
    fn test_subtract_at_returns_copy() {
        let word = Codeword::from_values(&WORD).unwrap();
        let two = Gf11::new(2).unwrap();
        let changed = word.subtract_at(1, two).unwrap();
        assert_eq!(changed.symbol(1).unwrap().value(), 1);
        assert_eq!(word.symbol(1).unwrap().value(), 3);
        assert_eq!(changed.add_at(1, two).unwrap(), word);

        // Wraps modulo 11
        let wrapped = word.subtract_at(5, two).unwrap();
        assert_eq!(wrapped.symbol(5).unwrap().value(), 10);

        assert_eq!(word.subtract_at(0, two), None);
        assert_eq!(word.subtract_at(11, two), None);
    }

    #[test]
    fn test_positions_are_one_based() {
        let word = Codeword::from_values(&WORD).unwrap();
        let positions: Vec<usize> = word.positions().map(|(p, _)| p).collect();
        assert_eq!(positions, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_display() {
        let word = Codeword::from_values(&WORD).unwrap();
        assert_eq!(word.to_string(), "[3, 7, 4, 5, 1, 9, 5, 8, 7, 6]");
    }

    #[test]
    fn test_parse_contiguous() {
        let word: Codeword = "3745195876".parse().unwrap();
        assert_eq!(word.to_values(), [3, 7, 4, 5, 1, 9, 5, 8, 7, 6]);
    }

    #[test]
    fn test_parse_separated_forms() {
        let expected = Codeword::from_values(&[10, 7, 4, 5, 1, 9, 5, 8, 7, 6]).unwrap();
        for input in [
            "10 7 4 5 1 9 5 8 7 6",
            "10,7,4,5,1,9,5,8,7,6",
            "[10, 7, 4, 5, 1, 9, 5, 8, 7, 6]",
            "  [10 7 4 5 1 9 5 8 7 6]  ",
            "10,\t7, 4,5 ,1,9,5,8,7,6",
        ] {
            assert_eq!(input.parse::<Codeword>().unwrap(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_bracketed_contiguous() {
        let word: Codeword = "[0000000000]".parse().unwrap();
        assert_eq!(word, Codeword::zero());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "12345".parse::<Codeword>(),
            Err(CoreError::LengthMismatch { expected: 10, actual: 5 })
        );
        assert_eq!(
            "".parse::<Codeword>(),
            Err(CoreError::LengthMismatch { expected: 10, actual: 0 })
        );
        assert_eq!(
            "1 2 3 4 5 6 7 8 9 11".parse::<Codeword>(),
            Err(CoreError::SymbolOutOfRange { value: 11 })
        );
        assert_eq!(
            "12345x7890".parse::<Codeword>(),
            Err(CoreError::InvalidToken { token: "x".to_string() })
        );
        assert_eq!(
            "1 2 three".parse::<Codeword>(),
            Err(CoreError::InvalidToken { token: "three".to_string() })
        );
    }
}
