//! Per-rod bead state and the interaction reducer.
//!
//! Each rod carries two beads that are toggled independently. The digit a
//! rod shows is a pure function of the two bead flags:
//!
//! | top   | bottom | digit | form     |
//! |-------|--------|-------|----------|
//! | false | false  |  0    | empty    |
//! | true  | false  | +1    | positive |
//! | false | true   | -1    | negative |
//! | true  | true   |  0    | balanced |

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::ternary::Trit;

/// Which bead of a rod was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeadSide {
    /// The upper bead, worth +1 when engaged.
    Top,
    /// The lower bead, worth -1 when engaged.
    Bottom,
}

impl fmt::Display for BeadSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeadSide::Top => write!(f, "top"),
            BeadSide::Bottom => write!(f, "bottom"),
        }
    }
}

/// The four visually distinct configurations of a rod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RodForm {
    /// No bead engaged (zero).
    Empty,
    /// Only the top bead engaged (+1).
    Positive,
    /// Only the bottom bead engaged (-1).
    Negative,
    /// Both beads engaged (zero, since 1 + (-1) = 0).
    Balanced,
}

/// Bead flags of a single rod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RodState {
    /// Top bead touches the bar.
    pub top: bool,
    /// Bottom bead touches the bar.
    pub bottom: bool,
}

impl RodState {
    /// The empty rod: no bead engaged.
    pub const EMPTY: RodState = RodState { top: false, bottom: false };

    /// Create a rod state from its two flags.
    #[inline]
    pub const fn new(top: bool, bottom: bool) -> Self {
        Self { top, bottom }
    }

    /// Flip one bead, leaving the other untouched.
    #[inline]
    pub const fn toggle(self, side: BeadSide) -> Self {
        match side {
            BeadSide::Top => Self { top: !self.top, bottom: self.bottom },
            BeadSide::Bottom => Self { top: self.top, bottom: !self.bottom },
        }
    }

    /// Whether the given bead is engaged.
    #[inline]
    pub const fn engaged(self, side: BeadSide) -> bool {
        match side {
            BeadSide::Top => self.top,
            BeadSide::Bottom => self.bottom,
        }
    }

    /// The digit this rod shows.
    #[inline]
    pub const fn digit(self) -> Trit {
        match (self.top, self.bottom) {
            (true, false) => Trit::P,
            (false, true) => Trit::N,
            _ => Trit::O,
        }
    }

    /// The visual form of this rod.
    #[inline]
    pub const fn form(self) -> RodForm {
        match (self.top, self.bottom) {
            (false, false) => RodForm::Empty,
            (true, false) => RodForm::Positive,
            (false, true) => RodForm::Negative,
            (true, true) => RodForm::Balanced,
        }
    }
}
