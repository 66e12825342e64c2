//! Single balanced ternary digit (trit).
//!
//! A trit holds one of three values: -1, 0, or +1. On the abacus every
//! rod shows exactly one trit, so this type is what keeps a digit from
//! ever leaving {-1, 0, +1}.

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A single balanced ternary digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Trit {
    /// Negative (-1)
    N,
    /// Zero (0)
    #[default]
    O,
    /// Positive (+1)
    P,
}

impl Trit {
    /// All possible trit values in order: N, O, P
    pub const ALL: [Trit; 3] = [Trit::N, Trit::O, Trit::P];

    /// Create a trit from an integer value.
    #[inline]
    pub const fn from_i8(value: i8) -> Result<Self, TritError> {
        match value {
            -1 => Ok(Trit::N),
            0 => Ok(Trit::O),
            1 => Ok(Trit::P),
            _ => Err(TritError::OutOfRange(value)),
        }
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        match self {
            Trit::N => -1,
            Trit::O => 0,
            Trit::P => 1,
        }
    }

    /// Widen to `i64` for weighted sums.
    #[inline]
    pub const fn to_i64(self) -> i64 {
        self.to_i8() as i64
    }

    /// Parse a single digit character.
    ///
    /// Accepts the N/O/P letters (either case) and the `-`/`0`/`+` signs.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'N' | 'n' | '-' => Some(Trit::N),
            'O' | 'o' | '0' => Some(Trit::O),
            'P' | 'p' | '+' => Some(Trit::P),
            _ => None,
        }
    }

    /// Negate the trit (flip N ↔ P, O stays O).
    #[inline]
    pub const fn neg(self) -> Self {
        match self {
            Trit::N => Trit::P,
            Trit::O => Trit::O,
            Trit::P => Trit::N,
        }
    }

    /// Returns true if this trit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::O)
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "N"),
            Trit::O => write!(f, "O"),
            Trit::P => write!(f, "P"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "-"),
            Trit::O => write!(f, "0"),
            Trit::P => write!(f, "+"),
        }
    }
}

impl std::ops::Neg for Trit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Trit::neg(self)
    }
}

impl TryFrom<i8> for Trit {
    type Error = TritError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Trit::from_i8(value)
    }
}

impl From<Trit> for i8 {
    fn from(trit: Trit) -> Self {
        trit.to_i8()
    }
}

/// Error converting an integer into a trit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TritError {
    #[error("invalid trit value: {0} (must be -1, 0, or 1)")]
    OutOfRange(i8),
}
