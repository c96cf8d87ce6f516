//! Tag attribute values and their conversion rules.

use serde::{Deserialize, Serialize};

use crate::parse::{parse_bool, parse_float, parse_int};

#[cfg(test)]
mod tests;

/// The value of a tag attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// Floating point value.
	Float(f64),
	/// String value.
	String(String),
	/// Ordered list of values (array-valued attributes).
	List(Vec<TagValue>),
}

/// The declared type of a tag attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	/// Boolean type.
	Bool,
	/// Integer type.
	Int,
	/// Floating point type.
	Float,
	/// String type.
	String,
	/// List type.
	List,
}

impl ValueType {
	/// Returns the display name used in diagnostics.
	pub const fn name(self) -> &'static str {
		match self {
			ValueType::Bool => "bool",
			ValueType::Int => "int",
			ValueType::Float => "float",
			ValueType::String => "string",
			ValueType::List => "list",
		}
	}
}

impl core::fmt::Display for ValueType {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.name())
	}
}

impl TagValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			TagValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			TagValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is a `Float` variant.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			TagValue::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			TagValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the elements if this is a `List` variant.
	pub fn as_list(&self) -> Option<&[TagValue]> {
		match self {
			TagValue::List(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the [`ValueType`] of this value.
	pub fn value_type(&self) -> ValueType {
		match self {
			TagValue::Bool(_) => ValueType::Bool,
			TagValue::Int(_) => ValueType::Int,
			TagValue::Float(_) => ValueType::Float,
			TagValue::String(_) => ValueType::String,
			TagValue::List(_) => ValueType::List,
		}
	}

	/// Returns true if this value matches the given type.
	pub fn matches_type(&self, ty: ValueType) -> bool {
		self.value_type() == ty
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		self.value_type().name()
	}

	/// Converts this value to `target`, returning `None` when no conversion exists.
	///
	/// Numeric conversions are exact; string conversions follow the parsers in
	/// [`crate::parse`]:
	///
	/// - identity when the value already has the target type
	/// - `Int -> Float` when the float holds the integer exactly (|v| <= 2^53
	///   always does), and `Float -> Int` for integral floats in range
	/// - `String -> Bool | Int | Float` through the parse helpers
	/// - a single-element `List` converts as its element
	/// - any other scalar `-> String` (display form) or `-> List` (singleton)
	pub fn convert(&self, target: ValueType) -> Option<TagValue> {
		if self.matches_type(target) {
			return Some(self.clone());
		}
		match (self, target) {
			(TagValue::Int(v), ValueType::Float) => {
				let f = *v as f64;
				(float_to_int(f) == Some(*v)).then_some(TagValue::Float(f))
			}
			(TagValue::Float(v), ValueType::Int) => float_to_int(*v).map(TagValue::Int),
			(TagValue::String(s), ValueType::Bool) => parse_bool(s).ok().map(TagValue::Bool),
			(TagValue::String(s), ValueType::Int) => parse_int(s).ok().map(TagValue::Int),
			(TagValue::String(s), ValueType::Float) => parse_float(s).ok().map(TagValue::Float),
			(TagValue::List(items), _) => match items.as_slice() {
				[single] => single.convert(target),
				_ => None,
			},
			(scalar, ValueType::String) => Some(TagValue::String(scalar.to_string())),
			(scalar, ValueType::List) => Some(TagValue::List(vec![scalar.clone()])),
			_ => None,
		}
	}
}

fn float_to_int(v: f64) -> Option<i64> {
	// i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
	(v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64).then_some(v as i64)
}

impl core::fmt::Display for TagValue {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			TagValue::Bool(v) => write!(f, "{v}"),
			TagValue::Int(v) => write!(f, "{v}"),
			TagValue::Float(v) => write!(f, "{v}"),
			TagValue::String(v) => f.write_str(v),
			TagValue::List(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					item.fmt_literal(f)?;
				}
				f.write_str("]")
			}
		}
	}
}

impl TagValue {
	/// Writes the value in source-literal form: strings are quoted, everything
	/// else uses [`Display`](core::fmt::Display).
	pub fn fmt_literal(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			TagValue::String(v) => write!(f, "{v:?}"),
			other => write!(f, "{other}"),
		}
	}
}

impl From<bool> for TagValue {
	fn from(v: bool) -> Self {
		TagValue::Bool(v)
	}
}

impl From<i64> for TagValue {
	fn from(v: i64) -> Self {
		TagValue::Int(v)
	}
}

impl From<f64> for TagValue {
	fn from(v: f64) -> Self {
		TagValue::Float(v)
	}
}

impl From<String> for TagValue {
	fn from(v: String) -> Self {
		TagValue::String(v)
	}
}

impl From<&str> for TagValue {
	fn from(v: &str) -> Self {
		TagValue::String(v.to_string())
	}
}

impl<T: Into<TagValue>> From<Vec<T>> for TagValue {
	fn from(v: Vec<T>) -> Self {
		TagValue::List(v.into_iter().map(Into::into).collect())
	}
}

// Seal the FromTagValue trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for i64 {}
	impl Sealed for bool {}
	impl Sealed for f64 {}
	impl Sealed for String {}
	impl Sealed for Vec<super::TagValue> {}
}

/// Trait for types that can be extracted from a [`TagValue`].
pub trait FromTagValue: sealed::Sealed + Sized {
	/// Returns the `ValueType` corresponding to this Rust type.
	fn value_type() -> ValueType;

	/// Extracts the value, converting first. Returns `None` when no conversion exists.
	fn from_tag_value(value: &TagValue) -> Option<Self>;
}

impl FromTagValue for i64 {
	fn value_type() -> ValueType {
		ValueType::Int
	}

	fn from_tag_value(value: &TagValue) -> Option<Self> {
		value.convert(ValueType::Int)?.as_int()
	}
}

impl FromTagValue for bool {
	fn value_type() -> ValueType {
		ValueType::Bool
	}

	fn from_tag_value(value: &TagValue) -> Option<Self> {
		value.convert(ValueType::Bool)?.as_bool()
	}
}

impl FromTagValue for f64 {
	fn value_type() -> ValueType {
		ValueType::Float
	}

	fn from_tag_value(value: &TagValue) -> Option<Self> {
		value.convert(ValueType::Float)?.as_float()
	}
}

impl FromTagValue for String {
	fn value_type() -> ValueType {
		ValueType::String
	}

	fn from_tag_value(value: &TagValue) -> Option<Self> {
		match value.convert(ValueType::String)? {
			TagValue::String(s) => Some(s),
			_ => None,
		}
	}
}

impl FromTagValue for Vec<TagValue> {
	fn value_type() -> ValueType {
		ValueType::List
	}

	fn from_tag_value(value: &TagValue) -> Option<Self> {
		match value.convert(ValueType::List)? {
			TagValue::List(items) => Some(items),
			_ => None,
		}
	}
}
