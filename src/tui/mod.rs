//! Terminal front end for the abacus.
//!
//! Rods are drawn most significant first and grouped in threes. The
//! selected rod is moved with the arrow keys and its beads are toggled
//! with up/down; total and notation refresh after every key press.

mod app;
mod ui;

pub use app::{AbacusApp, run_abacus};
