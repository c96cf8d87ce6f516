//! Parsing helpers for string-supplied tag values.
//!
//! Supplied-value stores frequently hold raw strings (environment, property
//! files, command lines); these helpers define which spellings convert to the
//! typed variants of [`crate::TagValue`].

/// Parse a boolean value from common string representations.
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		_ => Err(format!(
			"invalid boolean: '{value}' (expected true/false, yes/no, on/off, 1/0)"
		)),
	}
}

/// Parse an integer value.
pub fn parse_int(value: &str) -> Result<i64, String> {
	value
		.trim()
		.parse::<i64>()
		.map_err(|_| format!("invalid integer: '{value}'"))
}

/// Parse a floating point value. Non-finite results are rejected.
pub fn parse_float(value: &str) -> Result<f64, String> {
	value
		.trim()
		.parse::<f64>()
		.ok()
		.filter(|v| v.is_finite())
		.ok_or_else(|| format!("invalid float: '{value}'"))
}
