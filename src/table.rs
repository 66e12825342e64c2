//! Addition and subtraction combination tables.
//!
//! Each row shows how a small target is built from powers of three with
//! balanced digits, e.g. `+2 = 1·3^1 + -1·3^0`. These are the reference
//! tables a user follows when adding or subtracting rod by rod.

use serde::Serialize;
use thiserror::Error;
use crate::abacus::{Evaluation, Term};
use crate::ternary::{decompose, max_magnitude};

/// Largest target any table lists: everything nine rods can show.
pub const TABLE_LIMIT: u32 = 9_841;

/// Which table to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Targets +1 .. +max
    Addition,
    /// Targets -1 .. -max
    Subtraction,
}

/// One table row: a target and its power-of-three combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinationRow {
    pub target: i64,
    /// Most significant first, as produced by the evaluator.
    pub terms: Vec<Term>,
}

/// Build the combination table for targets of magnitude `1..=max`.
///
/// Every target must fit on `rods` rods and stay within [`TABLE_LIMIT`];
/// a `max` beyond either is rejected before any row is built.
pub fn combination_table(kind: TableKind, max: u32, rods: usize) -> Result<Vec<CombinationRow>, TableError> {
    let limit = max_magnitude(rods)
        .unwrap_or(i64::MAX)
        .min(i64::from(TABLE_LIMIT));
    if i64::from(max) > limit {
        return Err(TableError::MaxTooLarge { max, limit, rods });
    }

    let sign = match kind {
        TableKind::Addition => 1,
        TableKind::Subtraction => -1,
    };

    (1..=i64::from(max))
        .map(|n| {
            let target = sign * n;
            let evaluation = decompose(target, rods)
                .and_then(|digits| Evaluation::of(&digits))
                .ok_or(TableError::TargetTooLarge { target, rods })?;
            Ok::<_, TableError>(CombinationRow { target, terms: evaluation.terms })
        })
        .collect()
}

/// Errors building a combination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("target {target} does not fit on {rods} rods")]
    TargetTooLarge { target: i64, rods: usize },
    #[error("largest target {max} exceeds {limit}, the table limit for {rods} rods")]
    MaxTooLarge { max: u32, limit: i64, rods: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_rows() {
        let rows = combination_table(TableKind::Addition, 4, 7).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].target, 1);
        assert_eq!(rows[0].terms, vec![Term::new(crate::Trit::P, 0)]);

        // +2 = 3 - 1
        let pairs: Vec<_> = rows[1].terms.iter().map(Term::as_pair).collect();
        assert_eq!(pairs, vec![(1, 1), (-1, 0)]);
    }

    #[test]
    fn test_subtraction_rows_negate_addition() {
        let add = combination_table(TableKind::Addition, 13, 3).unwrap();
        let sub = combination_table(TableKind::Subtraction, 13, 3).unwrap();
        for (a, s) in add.iter().zip(&sub) {
            assert_eq!(s.target, -a.target);
            let negated: Vec<_> = a.terms.iter().map(|t| Term::new(-t.coefficient, t.exponent)).collect();
            assert_eq!(s.terms, negated);
        }
    }

    #[test]
    fn test_rows_evaluate_to_target() {
        for row in combination_table(TableKind::Addition, 40, 7).unwrap() {
            let sum: i64 = row
                .terms
                .iter()
                .map(|t| t.coefficient.to_i64() * 3i64.pow(t.exponent as u32))
                .sum();
            assert_eq!(sum, row.target);
        }
    }

    #[test]
    fn test_target_too_large() {
        assert_eq!(
            combination_table(TableKind::Addition, 14, 3),
            Err(TableError::MaxTooLarge { max: 14, limit: 13, rods: 3 })
        );
        assert!(combination_table(TableKind::Addition, 0, 3).unwrap().is_empty());
        assert_eq!(combination_table(TableKind::Subtraction, 13, 3).unwrap().len(), 13);
    }

    #[test]
    fn test_max_checked_before_rows() {
        assert_eq!(
            combination_table(TableKind::Addition, u32::MAX, 3),
            Err(TableError::MaxTooLarge { max: u32::MAX, limit: 13, rods: 3 })
        );
        assert_eq!(
            combination_table(TableKind::Subtraction, 4_000_000_000, 40),
            Err(TableError::MaxTooLarge { max: 4_000_000_000, limit: i64::from(TABLE_LIMIT), rods: 40 })
        );
        assert_eq!(
            combination_table(TableKind::Addition, TABLE_LIMIT, 40).unwrap().len(),
            TABLE_LIMIT as usize
        );
        assert!(matches!(
            combination_table(TableKind::Addition, 1, 0),
            Err(TableError::MaxTooLarge { limit: 0, .. })
        ));
    }
}
