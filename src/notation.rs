//! Symbolic notation for evaluation terms.
//!
//! Rendering is a capability handed to the presentation adapters, so the
//! abacus core never depends on a particular typesetting technology.

use serde::{Serialize, Deserialize};
use crate::abacus::Term;

/// Renders a sequence of terms (most significant first) as text.
pub trait NotationRenderer {
    fn render(&self, terms: &[Term]) -> String;
}

/// Inline LaTeX, e.g. `\( 1 \cdot 3^{1} + -1 \cdot 3^{0} \)`.
///
/// Renders nothing for an empty term list.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexNotation;

impl NotationRenderer for LatexNotation {
    fn render(&self, terms: &[Term]) -> String {
        if terms.is_empty() {
            return String::new();
        }
        let body = terms
            .iter()
            .map(|t| format!("{} \\cdot 3^{{{}}}", t.coefficient.to_i8(), t.exponent))
            .collect::<Vec<_>>()
            .join(" + ");
        format!("\\( {} \\)", body)
    }
}

/// Terminal-friendly text, e.g. `1·3^1 + -1·3^0`, or `0` when empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainNotation;

impl NotationRenderer for PlainNotation {
    fn render(&self, terms: &[Term]) -> String {
        if terms.is_empty() {
            return "0".into();
        }
        terms
            .iter()
            .map(|t| format!("{}·3^{}", t.coefficient.to_i8(), t.exponent))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Selectable notation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NotationStyle {
    Latex,
    #[default]
    Plain,
}

impl NotationStyle {
    /// The renderer implementing this style.
    pub fn renderer(self) -> Box<dyn NotationRenderer> {
        match self {
            NotationStyle::Latex => Box::new(LatexNotation),
            NotationStyle::Plain => Box::new(PlainNotation),
        }
    }

    /// The other style.
    pub fn toggled(self) -> Self {
        match self {
            NotationStyle::Latex => NotationStyle::Plain,
            NotationStyle::Plain => NotationStyle::Latex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ternary::Trit;

    fn sample() -> Vec<Term> {
        vec![Term::new(Trit::P, 1), Term::new(Trit::N, 0)]
    }

    #[test]
    fn test_latex() {
        assert_eq!(
            LatexNotation.render(&sample()),
            "\\( 1 \\cdot 3^{1} + -1 \\cdot 3^{0} \\)"
        );
        assert_eq!(LatexNotation.render(&[]), "");
    }

    #[test]
    fn test_plain() {
        assert_eq!(PlainNotation.render(&sample()), "1·3^1 + -1·3^0");
        assert_eq!(PlainNotation.render(&[]), "0");
    }

    #[test]
    fn test_style_dispatch() {
        let terms = [Term::new(Trit::P, 6)];
        assert_eq!(NotationStyle::Plain.renderer().render(&terms), "1·3^6");
        assert_eq!(NotationStyle::Latex.renderer().render(&terms), "\\( 1 \\cdot 3^{6} \\)");
        assert_eq!(NotationStyle::Plain.toggled(), NotationStyle::Latex);
    }
}
