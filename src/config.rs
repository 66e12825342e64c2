//! Abacus configuration.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::notation::NotationStyle;

/// Rod count used when none is configured.
pub const DEFAULT_RODS: usize = 7;

/// Largest rod count whose weights and totals fit in an `i64`.
pub const MAX_RODS: usize = 40;

/// Configuration for an abacus instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbacusConfig {
    /// Number of rods (positions 3^0 .. 3^(rods-1)).
    pub rods: usize,
    /// How adapters render the symbolic terms.
    pub notation: NotationStyle,
}

impl AbacusConfig {
    /// Configuration with the given rod count and default notation.
    pub fn with_rods(rods: usize) -> Self {
        Self { rods, ..Self::default() }
    }

    /// Check the rod count is in `1..=MAX_RODS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rods == 0 || self.rods > MAX_RODS {
            return Err(ConfigError::RodCount { requested: self.rods, max: MAX_RODS });
        }
        Ok(())
    }
}

impl Default for AbacusConfig {
    fn default() -> Self {
        Self {
            rods: DEFAULT_RODS,
            notation: NotationStyle::default(),
        }
    }
}

/// Errors in abacus configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rod count {requested} out of range (1-{max})")]
    RodCount { requested: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AbacusConfig::default();
        assert_eq!(config.rods, 7);
        assert_eq!(config.notation, NotationStyle::Plain);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rod_bounds() {
        assert!(AbacusConfig::with_rods(1).validate().is_ok());
        assert!(AbacusConfig::with_rods(MAX_RODS).validate().is_ok());
        assert_eq!(
            AbacusConfig::with_rods(0).validate(),
            Err(ConfigError::RodCount { requested: 0, max: MAX_RODS })
        );
        assert!(AbacusConfig::with_rods(MAX_RODS + 1).validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let config: AbacusConfig = serde_json::from_str(r#"{"rods": 9}"#).unwrap();
        assert_eq!(config.rods, 9);
        assert_eq!(config.notation, NotationStyle::Plain);

        let config: AbacusConfig = serde_json::from_str(r#"{"notation": "latex"}"#).unwrap();
        assert_eq!(config.rods, DEFAULT_RODS);
        assert_eq!(config.notation, NotationStyle::Latex);
    }
}
