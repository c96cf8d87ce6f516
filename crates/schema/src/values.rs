//! Stores of caller-supplied attribute values.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::value::{TagValue, ValueType};

/// Source of caller-supplied attribute values with type conversion.
///
/// A failed conversion is reported as `None`, never as an error.
pub trait ConvertibleValues: Send + Sync {
	/// Whether a value is supplied under `name`.
	fn contains(&self, name: &str) -> bool;

	/// Returns the value under `name` converted to `target`.
	fn get(&self, name: &str, target: ValueType) -> Option<TagValue>;

	/// Names of all supplied values, for diagnostics. Empty unless overridden.
	fn names(&self) -> Vec<&str> {
		Vec::new()
	}
}

/// Store that supplies nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyValues;

impl ConvertibleValues for EmptyValues {
	fn contains(&self, _name: &str) -> bool {
		false
	}

	fn get(&self, _name: &str, _target: ValueType) -> Option<TagValue> {
		None
	}
}

/// Insertion-ordered map of supplied values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
	values: IndexMap<String, TagValue>,
}

impl ValueMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a value, returning the previous one.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		value: impl Into<TagValue>,
	) -> Option<TagValue> {
		self.values.insert(name.into(), value.into())
	}

	/// Builder-style insert.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Self {
		self.insert(name, value);
		self
	}

	pub fn remove(&mut self, name: &str) -> Option<TagValue> {
		self.values.shift_remove(name)
	}

	/// Returns the raw, unconverted value.
	pub fn raw(&self, name: &str) -> Option<&TagValue> {
		self.values.get(name)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl ConvertibleValues for ValueMap {
	fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	fn get(&self, name: &str, target: ValueType) -> Option<TagValue> {
		self.values.get(name)?.convert(target)
	}

	fn names(&self) -> Vec<&str> {
		self.values.keys().map(String::as_str).collect()
	}
}

impl<K: Into<String>, V: Into<TagValue>> FromIterator<(K, V)> for ValueMap {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_converts() {
		let values = ValueMap::new().with("fixedRate", "5000");
		assert!(values.contains("fixedRate"));
		assert_eq!(
			values.get("fixedRate", ValueType::Int),
			Some(TagValue::Int(5000))
		);
	}

	#[test]
	fn test_failed_conversion_is_none() {
		let values = ValueMap::new().with("enabled", "sometimes");
		assert!(values.contains("enabled"));
		assert_eq!(values.get("enabled", ValueType::Bool), None);
	}

	#[test]
	fn test_names_keep_insertion_order() {
		let values: ValueMap = [("b", 1_i64), ("a", 2), ("c", 3)].into_iter().collect();
		assert_eq!(values.names(), ["b", "a", "c"]);
	}

	#[test]
	fn test_raw_is_unconverted() {
		let values = ValueMap::new().with("fixedRate", "5000");
		assert_eq!(values.raw("fixedRate"), Some(&TagValue::from("5000")));
		assert_eq!(values.raw("missing"), None);
	}

	#[test]
	fn test_deserialize_from_toml_keeps_document_order() {
		let values: ValueMap = toml::from_str("fixedRate = 5000\ncron = \"0 0 * * *\"").unwrap();
		assert_eq!(values.names(), ["fixedRate", "cron"]);
		assert_eq!(
			values.get("fixedRate", ValueType::Float),
			Some(TagValue::Float(5000.0))
		);
	}

	#[test]
	fn test_remove() {
		let mut values = ValueMap::new().with("a", true);
		assert_eq!(values.remove("a"), Some(TagValue::Bool(true)));
		assert!(values.is_empty());
		assert!(!values.contains("a"));
	}

	#[test]
	fn test_empty_values() {
		assert!(!EmptyValues.contains("anything"));
		assert_eq!(EmptyValues.get("anything", ValueType::String), None);
		assert!(EmptyValues.names().is_empty());
	}
}
