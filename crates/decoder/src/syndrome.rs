//! Syndrome calculation
//!
//! The syndrome vector is the received word multiplied by the transposed
//! parity check matrix `H^T`, whose entry at row `i`, column `k` is
//! `i^(k-1) mod 11` for positions `i = 1..=10`. The matrix evaluates powers
//! of the raw position numbers, not of a primitive element.

use bch11_core::{Codeword, Gf11, CODEWORD_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of syndromes (twice the correction capability)
pub const NUM_SYNDROMES: usize = 4;

/// Transposed parity check matrix
const PARITY_CHECK_T: [[Gf11; NUM_SYNDROMES]; CODEWORD_LEN] = build_parity_check_t();

const fn build_parity_check_t() -> [[Gf11; NUM_SYNDROMES]; CODEWORD_LEN] {
    let mut h = [[Gf11::ZERO; NUM_SYNDROMES]; CODEWORD_LEN];
    let mut i = 0;
    while i < CODEWORD_LEN {
        let mut k = 0;
        while k < NUM_SYNDROMES {
            h[i][k] = Gf11::reduce((i + 1) as i64).pow(k as u32);
            k += 1;
        }
        i += 1;
    }
    h
}

/// Syndrome vector S1..S4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syndromes([Gf11; NUM_SYNDROMES]);

impl Syndromes {
    /// Create a syndrome vector from known values
    pub const fn new(values: [Gf11; NUM_SYNDROMES]) -> Self {
        Self(values)
    }

    /// Compute the syndromes of a received word
    pub fn compute(word: &Codeword) -> Self {
        let mut values = [Gf11::ZERO; NUM_SYNDROMES];
        for (k, value) in values.iter_mut().enumerate() {
            *value = word
                .symbols()
                .iter()
                .zip(PARITY_CHECK_T.iter())
                .map(|(&y, row)| y * row[k])
                .sum();
        }
        Self(values)
    }

    pub fn s1(&self) -> Gf11 {
        self.0[0]
    }

    pub fn s2(&self) -> Gf11 {
        self.0[1]
    }

    pub fn s3(&self) -> Gf11 {
        self.0[2]
    }

    pub fn s4(&self) -> Gf11 {
        self.0[3]
    }

    /// Get all four syndromes
    pub fn values(&self) -> &[Gf11; NUM_SYNDROMES] {
        &self.0
    }

    /// True when the word is consistent with no errors
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|s| s.is_zero())
    }

    /// Coefficients of the error locator quadratic `P x^2 + Q x + R`
    pub fn locator_coefficients(&self) -> LocatorCoefficients {
        let [s1, s2, s3, s4] = self.0;
        LocatorCoefficients {
            p: s2 * s2 - s1 * s3,
            q: s1 * s4 - s2 * s3,
            r: s3 * s3 - s2 * s4,
        }
    }
}

impl fmt::Display for Syndromes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [s1, s2, s3, s4] = self.0;
        write!(f, "S1={} S2={} S3={} S4={}", s1, s2, s3, s4)
    }
}

/// Coefficients P, Q, R derived from the syndromes.
///
/// All three vanish for a single error. For two errors at distinct positions
/// both `p` and `r` are nonzero and the error positions are the roots of
/// `P x^2 + Q x + R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocatorCoefficients {
    pub p: Gf11,
    pub q: Gf11,
    pub r: Gf11,
}

impl LocatorCoefficients {
    pub fn all_zero(&self) -> bool {
        self.p.is_zero() && self.q.is_zero() && self.r.is_zero()
    }

    /// Discriminant `Q^2 - 4PR`
    pub fn discriminant(&self) -> Gf11 {
        self.q * self.q - Gf11::reduce(4) * self.p * self.r
    }
}

impl fmt::Display for LocatorCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P={} Q={} R={} D={}", self.p, self.q, self.r, self.discriminant())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn word(digits: &str) -> Codeword {
        digits.parse().unwrap()
    }

    fn gf(values: [u8; 4]) -> [Gf11; 4] {
        values.map(|v| Gf11::new(v).unwrap())
    }

    #[test]
    fn test_parity_check_matrix() {
        // Row for position 2: 1, 2, 4, 8
        assert_eq!(PARITY_CHECK_T[1], gf([1, 2, 4, 8]));
        // Row for position 10: 1, 10, 100 = 1, 1000 = 10
        assert_eq!(PARITY_CHECK_T[9], gf([1, 10, 1, 10]));
        assert!(PARITY_CHECK_T.iter().all(|row| row[0] == Gf11::ONE));
    }

    #[test]
    fn test_zero_word_has_zero_syndromes() {
        assert!(Syndromes::compute(&Codeword::zero()).is_zero());
    }

    #[test]
    fn test_valid_codeword_has_zero_syndromes() {
        assert!(Syndromes::compute(&word("3745195876")).is_zero());
    }

    #[test]
    fn test_known_syndromes() {
        let cases = [
            ("3945195876", [2, 4, 8, 5], (0, 0, 0)),
            ("3715195076", [0, 4, 0, 3], (5, 0, 10)),
            ("0743195876", [6, 0, 9, 1], (1, 6, 4)),
            ("3745195840", [2, 1, 4, 8], (4, 1, 8)),
            ("2745795878", [7, 5, 8, 10], (2, 8, 3)),
        ];

        for (digits, expected, (p, q, r)) in cases {
            let syndromes = Syndromes::compute(&word(digits));
            assert_eq!(syndromes, Syndromes::new(gf(expected)), "word {}", digits);

            let coefficients = syndromes.locator_coefficients();
            assert_eq!(coefficients.p.value(), p);
            assert_eq!(coefficients.q.value(), q);
            assert_eq!(coefficients.r.value(), r);
        }
    }

    #[test]
    fn test_discriminant() {
        let coefficients = Syndromes::new(gf([0, 4, 0, 3])).locator_coefficients();
        // 0 - 4 * 5 * 10 = -200 = 9
        assert_eq!(coefficients.discriminant().value(), 9);
    }

    #[test]
    fn test_single_error_coefficients_vanish() {
        for position in 1..=10 {
            for magnitude in 1..=10 {
                let received = Codeword::zero()
                    .add_at(position, Gf11::new(magnitude).unwrap())
                    .unwrap();
                let syndromes = Syndromes::compute(&received);
                assert_eq!(syndromes.s1().value(), magnitude);
                assert!(syndromes.locator_coefficients().all_zero());
            }
        }
    }

    #[test]
    fn test_display() {
        let syndromes = Syndromes::new(gf([2, 4, 8, 5]));
        assert_eq!(syndromes.to_string(), "S1=2 S2=4 S3=8 S4=5");
        assert_eq!(
            syndromes.locator_coefficients().to_string(),
            "P=0 Q=0 R=0 D=0"
        );
    }

    #[quickcheck]
    fn prop_syndromes_are_linear(a: Vec<u8>, b: Vec<u8>) -> bool {
        let to_word = |values: &[u8]| {
            let mut symbols = [Gf11::ZERO; CODEWORD_LEN];
            for (slot, &v) in symbols.iter_mut().zip(values) {
                *slot = Gf11::reduce(v as i64);
            }
            Codeword::new(symbols)
        };
        let x = to_word(&a);
        let y = to_word(&b);
        let mut sum = [Gf11::ZERO; CODEWORD_LEN];
        for (i, slot) in sum.iter_mut().enumerate() {
            *slot = x.symbols()[i] + y.symbols()[i];
        }

        let sx = Syndromes::compute(&x);
        let sy = Syndromes::compute(&y);
        let ss = Syndromes::compute(&Codeword::new(sum));
        (0..NUM_SYNDROMES).all(|k| ss.values()[k] == sx.values()[k] + sy.values()[k])
    }
}
