//! Balanced ternary number system primitives.
//!
//! - [`Trit`] - A single balanced ternary digit (-1, 0, +1)
//! - [`convert`] - Integer and string conversions for trit sequences

mod trit;
pub mod convert;

pub use trit::{Trit, TritError};
pub use convert::{decompose, format_digits, max_magnitude, parse_digits, ParseError};
