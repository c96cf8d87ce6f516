//! Engine configuration.

use serde::Deserialize;

/// Tuning knobs for the default-value and capability caches.
///
/// ```toml
/// initial_capacity = 64
/// strict_defaults = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthConfig {
	/// Number of tag types each cache reserves room for up front.
	pub initial_capacity: usize,
	/// Reject tag types whose declared defaults do not match the attribute type.
	///
	/// When off, a mismatched default is converted to the declared type and
	/// only an inconvertible default makes the tag type unsynthesizable.
	pub strict_defaults: bool,
}

impl Default for SynthConfig {
	fn default() -> Self {
		Self {
			initial_capacity: 20,
			strict_defaults: true,
		}
	}
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown field.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

impl SynthConfig {
	/// Parses a configuration from TOML. Missing fields keep their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_config_uses_defaults() {
		let config = SynthConfig::from_toml_str("").unwrap();
		assert_eq!(config, SynthConfig::default());
		assert_eq!(config.initial_capacity, 20);
		assert!(config.strict_defaults);
	}

	#[test]
	fn test_partial_config() {
		let config = SynthConfig::from_toml_str("strict_defaults = false").unwrap();
		assert!(!config.strict_defaults);
		assert_eq!(config.initial_capacity, 20);
	}

	#[test]
	fn test_unknown_field_rejected() {
		let err = SynthConfig::from_toml_str("capacity = 3").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}
}
