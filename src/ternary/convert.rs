//! Conversions between integers, digit strings and trit sequences.
//!
//! Trit sequences are always stored least significant first (index 0 is
//! the 3^0 position). Strings are written the way the abacus is read, most
//! significant first: `"+-0"` is 9 - 3 + 0 = 6.

use thiserror::Error;
use crate::ternary::Trit;

/// Largest magnitude representable with `width` trits: (3^width - 1) / 2.
///
/// Returns `None` when the value does not fit in an `i64`.
pub fn max_magnitude(width: usize) -> Option<i64> {
    let width = u32::try_from(width).ok()?;
    let power = 3i128.checked_pow(width)?;
    i64::try_from((power - 1) / 2).ok()
}

/// Decompose an integer into exactly `width` balanced ternary digits.
///
/// Returns `None` if the value needs more than `width` trits.
pub fn decompose(value: i64, width: usize) -> Option<Vec<Trit>> {
    let negative = value < 0;
    let mut rest = value.unsigned_abs();
    let mut trits = Vec::with_capacity(width);

    for _ in 0..width {
        // remainder 2 becomes -1 with a carry into the next position
        let (trit, carry) = match rest % 3 {
            0 => (Trit::O, 0),
            1 => (Trit::P, 0),
            _ => (Trit::N, 1),
        };
        trits.push(if negative { trit.neg() } else { trit });
        rest = rest / 3 + carry;
    }

    if rest != 0 {
        return None;
    }
    Some(trits)
}

/// Parse a most-significant-first digit string into trits (LSB first).
///
/// Accepts `+ 0 -` and `P O N` (either case). An optional `0t` prefix is
/// allowed; underscores and spaces are ignored as group separators.
pub fn parse_digits(s: &str) -> Result<Vec<Trit>, ParseError> {
    let s = s.trim();
    let s = s.strip_prefix("0t").unwrap_or(s);

    let mut trits = Vec::with_capacity(s.len());
    for c in s.chars().rev() {
        if c == '_' || c == ' ' {
            continue;
        }
        match Trit::from_char(c) {
            Some(t) => trits.push(t),
            None => return Err(ParseError::InvalidChar(c)),
        }
    }

    if trits.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(trits)
}

/// Format LSB-first trits as a most-significant-first `+0-` string.
pub fn format_digits(trits: &[Trit]) -> String {
    trits.iter().rev().map(|t| t.to_string()).collect()
}

/// Errors that can occur when parsing digit strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no digits given")]
    Empty,

    #[error("invalid trit character: '{0}' (expected +/0/- or P/O/N)")]
    InvalidChar(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(trits: &[Trit]) -> i64 {
        trits.iter().rev().fold(0, |acc, t| acc * 3 + t.to_i64())
    }

    #[test]
    fn test_max_magnitude() {
        assert_eq!(max_magnitude(0), Some(0));
        assert_eq!(max_magnitude(1), Some(1));
        assert_eq!(max_magnitude(3), Some(13));
        assert_eq!(max_magnitude(7), Some(1093));
        assert_eq!(max_magnitude(40), Some(6_078_832_729_528_464_400));
        assert_eq!(max_magnitude(41), None);
    }

    #[test]
    fn test_decompose_known_values() {
        // 2 = 3 - 1
        assert_eq!(decompose(2, 2), Some(vec![Trit::N, Trit::P]));
        // -2 = -3 + 1
        assert_eq!(decompose(-2, 2), Some(vec![Trit::P, Trit::N]));
        assert_eq!(decompose(0, 3), Some(vec![Trit::O; 3]));
        assert_eq!(decompose(729, 7).map(|t| t[6]), Some(Trit::P));
    }

    #[test]
    fn test_decompose_all_in_range() {
        let max = max_magnitude(5).unwrap();
        for v in -max..=max {
            let trits = decompose(v, 5).unwrap();
            assert_eq!(trits.len(), 5);
            assert_eq!(value_of(&trits), v);
        }
    }

    #[test]
    fn test_decompose_overflow() {
        assert_eq!(decompose(14, 3), None);
        assert_eq!(decompose(-14, 3), None);
        assert_eq!(decompose(1, 0), None);
        assert!(decompose(i64::MIN, 40).is_none());
    }

    #[test]
    fn test_parse_digits() {
        let trits = parse_digits("+-0").unwrap();
        assert_eq!(trits, vec![Trit::O, Trit::N, Trit::P]);
        assert_eq!(value_of(&trits), 6);

        assert_eq!(parse_digits("0tPON").unwrap(), vec![Trit::N, Trit::O, Trit::P]);
        assert_eq!(parse_digits("+0_-").unwrap().len(), 3);
        assert_eq!(parse_digits(""), Err(ParseError::Empty));
        assert_eq!(parse_digits("+2"), Err(ParseError::InvalidChar('2')));
    }

    #[test]
    fn test_format_digits() {
        assert_eq!(format_digits(&[Trit::O, Trit::N, Trit::P]), "+-0");
        assert_eq!(format_digits(&[]), "");
    }
}
