//! Fixed-length balanced ternary digit array.
//!
//! The array is the single point of truth for what each rod currently
//! shows. Its length is fixed at construction and every write goes
//! through [`DigitArray::set`], which rejects out-of-range rods.

use std::fmt;
use crate::abacus::AbacusError;
use crate::ternary::Trit;

/// Digits stored from least significant (index 0) to most significant.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigitArray {
    digits: Box<[Trit]>,
}

impl DigitArray {
    /// Create an all-zero array of `len` digits.
    pub fn new(len: usize) -> Self {
        Self {
            digits: vec![Trit::O; len].into_boxed_slice(),
        }
    }

    /// Number of digits (rods).
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Check if the array has no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Get a single digit by index (0 = LSB).
    #[inline]
    pub fn get(&self, index: usize) -> Result<Trit, AbacusError> {
        self.digits
            .get(index)
            .copied()
            .ok_or_else(|| AbacusError::out_of_range(index, self.len()))
    }

    /// Set a single digit by index (0 = LSB).
    #[inline]
    pub fn set(&mut self, index: usize, digit: Trit) -> Result<(), AbacusError> {
        let len = self.len();
        let slot = self
            .digits
            .get_mut(index)
            .ok_or_else(|| AbacusError::out_of_range(index, len))?;
        *slot = digit;
        Ok(())
    }

    /// Set every digit to zero.
    pub fn reset(&mut self) {
        self.digits.fill(Trit::O);
    }

    /// Check if every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|t| t.is_zero())
    }

    /// Iterate digits from least to most significant.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Trit> + ExactSizeIterator + '_ {
        self.digits.iter().copied()
    }

    /// Borrow the digits as a slice (LSB first).
    #[inline]
    pub fn as_slice(&self) -> &[Trit] {
        &self.digits
    }
}

impl fmt::Debug for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitArray(0t")?;
        for t in self.digits.iter().rev() {
            write!(f, "{:?}", t)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for DigitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.digits.iter().rev() {
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}
