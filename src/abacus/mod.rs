//! The balanced ternary abacus.
//!
//! [`Abacus`] owns the bead flags of every rod and the digit array derived
//! from them. Presentation layers drive it through four operations:
//! - [`Abacus::toggle_bead`] - flip one bead, returns the rod's new digit
//! - [`Abacus::evaluate`] - decimal total and symbolic terms
//! - [`Abacus::clear`] - every rod back to the empty form
//! - [`Abacus::rod_count`] - fixed number of rods
//!
//! Everything else here is read-only access for renderers.

mod digits;
mod error;
mod eval;
mod rod;

pub use digits::DigitArray;
pub use error::AbacusError;
pub use eval::{evaluate, Evaluation, PowerTable, Term};
pub use rod::{BeadSide, RodForm, RodState};

use tracing::debug;
use crate::config::{AbacusConfig, ConfigError, MAX_RODS};
use crate::ternary::Trit;

/// A fixed set of rods, each weighted by a power of three.
#[derive(Debug, Clone)]
pub struct Abacus {
    rods: Vec<RodState>,
    digits: DigitArray,
    powers: PowerTable,
}

impl Abacus {
    /// Create an abacus with `rods` empty rods.
    pub fn new(rods: usize) -> Result<Self, ConfigError> {
        Self::with_config(&AbacusConfig::with_rods(rods))
    }

    /// Create an abacus from a validated configuration.
    pub fn with_config(config: &AbacusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let powers = PowerTable::new(config.rods)
            .ok_or(ConfigError::RodCount { requested: config.rods, max: MAX_RODS })?;

        Ok(Self {
            rods: vec![RodState::EMPTY; config.rods],
            digits: DigitArray::new(config.rods),
            powers,
        })
    }

    /// Number of rods. Constant for the lifetime of the abacus.
    #[inline]
    pub fn rod_count(&self) -> usize {
        self.digits.len()
    }

    /// Flip one bead of a rod and return the rod's new digit.
    pub fn toggle_bead(&mut self, index: usize, side: BeadSide) -> Result<Trit, AbacusError> {
        let next = self.rod(index)?.toggle(side);
        self.digits.set(index, next.digit())?;
        if let Some(slot) = self.rods.get_mut(index) {
            *slot = next;
        }

        debug!(rod = index, %side, digit = %next.digit(), form = ?next.form(), "bead toggled");
        Ok(next.digit())
    }

    /// [`toggle_bead`](Self::toggle_bead) for callers holding a signed index.
    ///
    /// Negative indices are rejected, never clamped.
    pub fn toggle_bead_signed(&mut self, index: i64, side: BeadSide) -> Result<Trit, AbacusError> {
        let index = self.signed_index(index)?;
        self.toggle_bead(index, side)
    }

    /// Current total and terms. Always reflects the latest toggle.
    pub fn evaluate(&self) -> Evaluation {
        evaluate(self.digits.as_slice(), &self.powers)
    }

    /// Reset every rod to the empty form (both beads disengaged).
    pub fn clear(&mut self) {
        self.rods.fill(RodState::EMPTY);
        self.digits.reset();
        debug!(rods = self.rod_count(), "abacus cleared");
    }

    /// Bead flags of one rod.
    pub fn rod(&self, index: usize) -> Result<RodState, AbacusError> {
        self.rods
            .get(index)
            .copied()
            .ok_or_else(|| AbacusError::out_of_range(index, self.rod_count()))
    }

    /// [`rod`](Self::rod) for callers holding a signed index.
    pub fn rod_signed(&self, index: i64) -> Result<RodState, AbacusError> {
        self.rod(self.signed_index(index)?)
    }

    fn signed_index(&self, index: i64) -> Result<usize, AbacusError> {
        usize::try_from(index).map_err(|_| AbacusError::IndexOutOfRange {
            index: i128::from(index),
            len: self.rod_count(),
        })
    }

    /// Digit shown by one rod.
    #[inline]
    pub fn digit(&self, index: usize) -> Result<Trit, AbacusError> {
        self.digits.get(index)
    }

    /// Bead flags of all rods, least significant first.
    pub fn rods(&self) -> impl DoubleEndedIterator<Item = RodState> + ExactSizeIterator + '_ {
        self.rods.iter().copied()
    }

    /// The digit array (read-only).
    #[inline]
    pub fn digits(&self) -> &DigitArray {
        &self.digits
    }

    /// Positional weight of a rod (3^index).
    pub fn weight(&self, index: usize) -> Result<i64, AbacusError> {
        self.powers
            .weight(index)
            .ok_or_else(|| AbacusError::out_of_range(index, self.rod_count()))
    }
}

impl Default for Abacus {
    fn default() -> Self {
        Self::with_config(&AbacusConfig::default())
            .expect("default configuration is always valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a rod to `digit` using bead clicks only.
    fn show(abacus: &mut Abacus, index: usize, digit: Trit) {
        match digit {
            Trit::P => { abacus.toggle_bead(index, BeadSide::Top).unwrap(); }
            Trit::N => { abacus.toggle_bead(index, BeadSide::Bottom).unwrap(); }
            Trit::O => {}
        }
    }

    #[test]
    fn test_new_abacus_is_empty() {
        let abacus = Abacus::default();
        assert_eq!(abacus.rod_count(), 7);
        assert!(abacus.rods().all(|r| r == RodState::EMPTY));
        assert_eq!(abacus.evaluate(), Evaluation::default());
    }

    #[test]
    fn test_invalid_rod_counts() {
        assert!(Abacus::new(0).is_err());
        assert!(Abacus::new(MAX_RODS + 1).is_err());
        assert_eq!(Abacus::new(MAX_RODS).unwrap().rod_count(), MAX_RODS);
    }

    #[test]
    fn test_end_to_end_three_rods() {
        let mut abacus = Abacus::new(3).unwrap();
        assert_eq!(abacus.toggle_bead(0, BeadSide::Top), Ok(Trit::P));
        assert_eq!(abacus.toggle_bead(1, BeadSide::Bottom), Ok(Trit::N));

        let eval = abacus.evaluate();
        assert_eq!(eval.total, -2);
        assert_eq!(eval.term_pairs(), vec![(-1, 1), (1, 0)]);
    }

    #[test]
    fn test_highest_rod() {
        let mut abacus = Abacus::default();
        show(&mut abacus, 6, Trit::P);
        let eval = abacus.evaluate();
        assert_eq!(eval.total, 729);
        assert_eq!(eval.term_pairs(), vec![(1, 6)]);
        assert_eq!(abacus.weight(6), Ok(729));
    }

    #[test]
    fn test_toggle_twice_restores_digit() {
        let mut abacus = Abacus::default();
        assert_eq!(abacus.toggle_bead(2, BeadSide::Top), Ok(Trit::P));
        assert_eq!(abacus.toggle_bead(2, BeadSide::Top), Ok(Trit::O));
        assert_eq!(abacus.rod(2), Ok(RodState::EMPTY));
    }

    #[test]
    fn test_balanced_zero_not_in_terms() {
        let mut abacus = Abacus::default();
        abacus.toggle_bead(3, BeadSide::Top).unwrap();
        assert_eq!(abacus.toggle_bead(3, BeadSide::Bottom), Ok(Trit::O));

        assert_eq!(abacus.rod(3).unwrap().form(), RodForm::Balanced);
        assert_eq!(abacus.digit(3), Ok(Trit::O));
        let eval = abacus.evaluate();
        assert_eq!(eval.total, 0);
        assert!(eval.terms.is_empty());
    }

    #[test]
    fn test_clear_resets_to_empty_form() {
        let mut abacus = Abacus::default();
        abacus.toggle_bead(0, BeadSide::Top).unwrap();
        abacus.toggle_bead(1, BeadSide::Top).unwrap();
        abacus.toggle_bead(1, BeadSide::Bottom).unwrap();
        abacus.toggle_bead(5, BeadSide::Bottom).unwrap();

        abacus.clear();
        assert_eq!(abacus.rod_count(), 7);
        assert!(abacus.rods().all(|r| r.form() == RodForm::Empty));
        assert_eq!(abacus.evaluate(), Evaluation::default());
    }

    #[test]
    fn test_out_of_range() {
        let mut abacus = Abacus::new(4).unwrap();
        assert_eq!(
            abacus.toggle_bead(4, BeadSide::Top),
            Err(AbacusError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            abacus.toggle_bead_signed(-1, BeadSide::Bottom),
            Err(AbacusError::IndexOutOfRange { index: -1, len: 4 })
        );
        assert!(abacus.toggle_bead_signed(4, BeadSide::Top).is_err());
        assert!(abacus.rod(9).is_err());
        assert!(abacus.weight(4).is_err());
        // a rejected toggle leaves the abacus untouched
        assert_eq!(abacus.evaluate(), Evaluation::default());
    }

    #[test]
    fn test_huge_index_reported_unchanged() {
        let mut abacus = Abacus::default();
        let err = abacus.toggle_bead(usize::MAX, BeadSide::Top).unwrap_err();
        assert_eq!(err, AbacusError::IndexOutOfRange { index: usize::MAX as i128, len: 7 });
        assert!(err.to_string().contains(&usize::MAX.to_string()));
    }

    #[test]
    fn test_rod_signed() {
        let mut abacus = Abacus::new(3).unwrap();
        abacus.toggle_bead(2, BeadSide::Bottom).unwrap();
        assert_eq!(abacus.rod_signed(2).map(|r| r.form()), Ok(RodForm::Negative));
        assert_eq!(abacus.rod_signed(0), Ok(RodState::EMPTY));
        assert_eq!(
            abacus.rod_signed(-1),
            Err(AbacusError::IndexOutOfRange { index: -1, len: 3 })
        );
        assert_eq!(
            abacus.rod_signed(3),
            Err(AbacusError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_evaluation_is_fresh_after_each_toggle() {
        let mut abacus = Abacus::default();
        let mut seen = Vec::new();
        for side in [BeadSide::Top, BeadSide::Bottom, BeadSide::Top, BeadSide::Bottom] {
            abacus.toggle_bead(1, side).unwrap();
            seen.push(abacus.evaluate().total);
        }
        // (T) +3, (T+B) 0, (B) -3, (empty) 0
        assert_eq!(seen, vec![3, 0, -3, 0]);
    }
}
