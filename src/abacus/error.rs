//! Errors raised by the abacus core.

use thiserror::Error;

/// Errors that can occur when addressing the abacus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AbacusError {
    /// A rod index outside `[0, len)`. Wide enough to carry any `usize`
    /// and any negative index from signed callers unchanged.
    #[error("rod index {index} out of range for {len} rods")]
    IndexOutOfRange { index: i128, len: usize },
}

impl AbacusError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        AbacusError::IndexOutOfRange { index: index as i128, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_reported_unchanged() {
        let err = AbacusError::out_of_range(usize::MAX, 7);
        assert_eq!(err, AbacusError::IndexOutOfRange { index: usize::MAX as i128, len: 7 });
        assert_eq!(
            err.to_string(),
            format!("rod index {} out of range for 7 rods", usize::MAX)
        );
    }
}
