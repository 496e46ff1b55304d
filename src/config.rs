//! Wheel configuration: the built-in default wheel, or one read from a JSON file.
//!
//! ```json
//! {
//!     "labels": ["Free Coffee", "Try Again"],
//!     "weights": [1.0, 3.0],
//!     "max_spins": 5
//! }
//! ```
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::wheel::RewardCatalog;

pub const DEFAULT_MAX_SPINS: u32 = 10;

const DEFAULT_REWARDS: [(&str, f64); 6] = [
    ("Free Coffee", 2.0),
    ("Extra Credit", 1.5),
    ("Amazon Gift Card", 1.0),
    ("Try Again", 3.0),
    ("Movie Ticket", 1.0),
    ("5% Discount Coupon", 1.5),
];

fn default_max_spins() -> u32 {
    DEFAULT_MAX_SPINS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WheelConfig {
    pub labels: Vec<String>,
    pub weights: Vec<f64>,
    #[serde(default = "default_max_spins")]
    pub max_spins: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        WheelConfig {
            labels: DEFAULT_REWARDS
                .iter()
                .map(|(label, _)| label.to_string())
                .collect(),
            weights: DEFAULT_REWARDS.iter().map(|(_, weight)| *weight).collect(),
            max_spins: DEFAULT_MAX_SPINS,
        }
    }
}

/// A validated configuration, ready to start sessions with.
#[derive(Debug, Clone, PartialEq)]
pub struct Wheel {
    pub catalog: RewardCatalog,
    pub max_spins: u32,
}

impl WheelConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Read wheel config from {}", path.display());
        Self::from_json_str(&json)
    }

    ///
    /// Loads `path` if given, otherwise the default wheel, then applies the
    /// command line's spin cap.
    ///
    pub fn resolve(path: Option<&Path>, max_spins: Option<u32>) -> Result<Self, ConfigurationError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(max_spins) = max_spins {
            config.max_spins = max_spins;
        }
        Ok(config)
    }

    pub fn build(self) -> Result<Wheel, ConfigurationError> {
        if self.max_spins == 0 {
            return Err(ConfigurationError::ZeroMaxSpins);
        }
        Ok(Wheel {
            catalog: RewardCatalog::new(self.labels, self.weights)?,
            max_spins: self.max_spins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wheel_is_valid() {
        let wheel = WheelConfig::default().build().unwrap();
        assert_eq!(wheel.catalog.len(), 6);
        assert_eq!(wheel.catalog.total_weight(), 10.0);
        assert_eq!(wheel.catalog.entries()[3].label, "Try Again");
        assert_eq!(wheel.max_spins, 10);
    }

    #[test]
    fn test_parse_json() {
        let config =
            WheelConfig::from_json_str(r#"{"labels": ["A", "B"], "weights": [1, 2.5], "max_spins": 3}"#)
                .unwrap();
        assert_eq!(config.labels, vec!["A", "B"]);
        assert_eq!(config.weights, vec![1.0, 2.5]);
        assert_eq!(config.max_spins, 3);
    }

    #[test]
    fn test_max_spins_defaults() {
        let config = WheelConfig::from_json_str(r#"{"labels": ["A"], "weights": [1]}"#).unwrap();
        assert_eq!(config.max_spins, DEFAULT_MAX_SPINS);
    }

    #[test]
    fn test_malformed_json() {
        for json in [r#"{"labels": ["A"]}"#, "not json", r#"{"labels": [], "weights": [], "colour": "red"}"#] {
            assert!(
                matches!(WheelConfig::from_json_str(json), Err(ConfigurationError::Parse(_))),
                "{} should not parse",
                json
            );
        }
    }

    #[test]
    fn test_mismatched_lengths_fail_to_build() {
        let config = WheelConfig::from_json_str(r#"{"labels": ["A", "B"], "weights": [1.0]}"#).unwrap();
        assert!(matches!(
            config.build(),
            Err(ConfigurationError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_max_spins() {
        let config = WheelConfig {
            max_spins: 0,
            ..WheelConfig::default()
        };
        assert!(matches!(config.build(), Err(ConfigurationError::ZeroMaxSpins)));
    }

    #[test]
    fn test_resolve_overrides_max_spins() {
        let config = WheelConfig::resolve(None, Some(4)).unwrap();
        assert_eq!(config.max_spins, 4);
        assert_eq!(config.labels.len(), 6);
    }

    #[test]
    fn test_missing_file() {
        let result = WheelConfig::load(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(ConfigurationError::Read { .. })));
    }
}
