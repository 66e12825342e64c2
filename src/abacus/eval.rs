//! Evaluation of the digit array into a decimal total and symbolic terms.

use serde::{Serialize, Deserialize};
use crate::ternary::Trit;

/// Precomputed positional weights 3^0 .. 3^(len-1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerTable {
    powers: Box<[i64]>,
}

impl PowerTable {
    /// Build the table for `len` rods.
    ///
    /// Returns `None` when 3^(len-1) would not fit in an `i64`.
    pub fn new(len: usize) -> Option<Self> {
        let mut powers = Vec::with_capacity(len);
        let mut power: i64 = 1;
        for i in 0..len {
            if i > 0 {
                power = power.checked_mul(3)?;
            }
            powers.push(power);
        }
        Some(Self { powers: powers.into_boxed_slice() })
    }

    /// Number of weights in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// Weight of rod `index` (3^index).
    #[inline]
    pub fn weight(&self, index: usize) -> Option<i64> {
        self.powers.get(index).copied()
    }
}

/// A nonzero digit's contribution: `coefficient · 3^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// Always `Trit::P` or `Trit::N`; carries the sign.
    pub coefficient: Trit,
    /// Rod index the digit sits on.
    pub exponent: usize,
}

impl Term {
    #[inline]
    pub const fn new(coefficient: Trit, exponent: usize) -> Self {
        Self { coefficient, exponent }
    }

    /// The term as a `(coefficient, exponent)` pair.
    #[inline]
    pub const fn as_pair(&self) -> (i8, usize) {
        (self.coefficient.to_i8(), self.exponent)
    }
}

/// Result of evaluating the abacus.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// Sum of digit[i] · 3^i.
    pub total: i64,
    /// One term per nonzero digit, most significant first.
    pub terms: Vec<Term>,
}

impl Evaluation {
    /// Evaluate a standalone LSB-first digit slice.
    ///
    /// Returns `None` if the slice is too long for an `i64` total.
    pub fn of(digits: &[Trit]) -> Option<Self> {
        let powers = PowerTable::new(digits.len())?;
        Some(evaluate(digits, &powers))
    }

    /// Pairs view of the terms, handy for comparisons.
    pub fn term_pairs(&self) -> Vec<(i8, usize)> {
        self.terms.iter().map(Term::as_pair).collect()
    }
}

/// Evaluate LSB-first digits against a power table of the same length.
pub fn evaluate(digits: &[Trit], powers: &PowerTable) -> Evaluation {
    debug_assert_eq!(digits.len(), powers.len(), "power table does not match rod count");

    let mut total: i64 = 0;
    let mut terms = Vec::new();

    for (i, (digit, power)) in digits.iter().zip(powers.powers.iter()).enumerate() {
        if digit.is_zero() {
            continue;
        }
        total += digit.to_i64() * power;
        terms.push(Term::new(*digit, i));
    }

    // collected least significant first; callers read most significant first
    terms.reverse();
    Evaluation { total, terms }
}
