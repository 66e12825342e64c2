//! # HeiSanban
//!
//! An interactive balanced ternary abacus.
//!
//! Every rod stands for a power of three and carries two beads. Engaging
//! the top bead shows +1, the bottom bead -1, and engaging both (or
//! neither) shows 0. The abacus reports its decimal total together with
//! the power-of-three terms that make it up.

pub mod ternary;
pub mod abacus;
pub mod config;
pub mod notation;
pub mod table;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use ternary::Trit;
pub use abacus::{Abacus, AbacusError, BeadSide, Evaluation, RodForm, RodState, Term};
pub use config::{AbacusConfig, ConfigError};
pub use notation::{LatexNotation, NotationRenderer, NotationStyle, PlainNotation};
pub use table::{combination_table, CombinationRow, TableKind};

#[cfg(feature = "tui")]
pub use tui::run_abacus;
