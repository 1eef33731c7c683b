//! Prime field GF(11)
//!
//! Elements are stored reduced into `0..=10`. Addition, subtraction, negation
//! and multiplication never fail and are exposed through the `std::ops`
//! traits. Inversion, division and square roots are partial and return
//! `Result`.

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Field modulus
pub const MODULUS: u8 = 11;

/// Multiplicative inverses, indexed by element. Entry 0 is unused.
const INV_TABLE: [u8; 11] = [0, 1, 6, 4, 3, 9, 2, 8, 7, 5, 10];

/// Canonical square roots (smallest root) of the quadratic residues.
const SQRT_TABLE: [Option<u8>; 11] = [
    Some(0),
    Some(1),
    None,
    Some(5),
    Some(2),
    Some(4),
    None,
    None,
    None,
    Some(3),
    None,
];

/// Element of GF(11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Gf11(u8);

impl Gf11 {
    pub const ZERO: Gf11 = Gf11(0);
    pub const ONE: Gf11 = Gf11(1);

    /// Create an element, rejecting values outside `0..=10`
    pub fn new(value: u8) -> Result<Self> {
        if value >= MODULUS {
            return Err(CoreError::SymbolOutOfRange { value: value as i64 });
        }
        Ok(Self(value))
    }

    /// Create an element from any integer, reducing it modulo 11
    pub const fn reduce(value: i64) -> Self {
        Self(value.rem_euclid(MODULUS as i64) as u8)
    }

    /// Get the canonical representative in `0..=10`
    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Raise to a non-negative power
    pub const fn pow(self, exp: u32) -> Self {
        let mut acc: u32 = 1;
        let mut i = 0;
        while i < exp {
            acc = (acc * self.0 as u32) % MODULUS as u32;
            i += 1;
        }
        Self(acc as u8)
    }

    /// Multiplicative inverse
    pub fn inv(self) -> Result<Self> {
        if self.is_zero() {
            return Err(CoreError::DivisionByZero);
        }
        Ok(Self(INV_TABLE[self.0 as usize]))
    }

    /// Field division `self / rhs`
    pub fn try_div(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs.inv()?)
    }

    /// Check membership in the quadratic residues {0, 1, 3, 4, 5, 9}
    pub fn is_quadratic_residue(self) -> bool {
        SQRT_TABLE[self.0 as usize].is_some()
    }

    /// Canonical square root of a quadratic residue.
    ///
    /// Of the two roots `r` and `-r`, the smaller representative is returned.
    /// The two-error locator depends on this choice to order its positions.
    pub fn sqrt(self) -> Result<Self> {
        SQRT_TABLE[self.0 as usize]
            .map(Self)
            .ok_or(CoreError::NonResidue { value: self.0 })
    }
}

impl TryFrom<u8> for Gf11 {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Gf11> for u8 {
    fn from(element: Gf11) -> u8 {
        element.0
    }
}

impl fmt::Display for Gf11 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Gf11 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0) % MODULUS)
    }
}

impl Sub for Gf11 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self((self.0 + MODULUS - rhs.0) % MODULUS)
    }
}

impl Mul for Gf11 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(((self.0 as u16 * rhs.0 as u16) % MODULUS as u16) as u8)
    }
}

impl Neg for Gf11 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl AddAssign for Gf11 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Gf11 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Sum for Gf11 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
