use proptest::prelude::*;

use super::*;

#[test]
fn test_convert_identity() {
	let value = TagValue::Int(42);
	assert_eq!(value.convert(ValueType::Int), Some(TagValue::Int(42)));
}

#[test]
fn test_convert_numeric() {
	assert_eq!(
		TagValue::Int(3).convert(ValueType::Float),
		Some(TagValue::Float(3.0))
	);
	assert_eq!(
		TagValue::Float(8.0).convert(ValueType::Int),
		Some(TagValue::Int(8))
	);
	assert_eq!(TagValue::Float(8.5).convert(ValueType::Int), None);
	assert_eq!(TagValue::Float(1e300).convert(ValueType::Int), None);
}

#[test]
fn test_int_to_float_is_exact() {
	let limit = 1_i64 << 53;
	assert_eq!(
		TagValue::Int(limit).convert(ValueType::Float),
		Some(TagValue::Float(9_007_199_254_740_992.0))
	);
	assert_eq!(
		TagValue::Int(-limit).convert(ValueType::Float),
		Some(TagValue::Float(-9_007_199_254_740_992.0))
	);
	assert_eq!(TagValue::Int(limit + 1).convert(ValueType::Float), None);
	assert_eq!(TagValue::Int(i64::MAX).convert(ValueType::Float), None);
	assert_eq!(f64::from_tag_value(&TagValue::Int(limit + 1)), None);
	// Large powers of two are still representable.
	assert_eq!(
		TagValue::Int(1 << 60).convert(ValueType::Float),
		Some(TagValue::Float((1_i64 << 60) as f64))
	);
}

#[test]
fn test_convert_from_string() {
	let s = TagValue::from("5000");
	assert_eq!(s.convert(ValueType::Int), Some(TagValue::Int(5000)));
	assert_eq!(s.convert(ValueType::Float), Some(TagValue::Float(5000.0)));
	assert_eq!(s.convert(ValueType::Bool), None);
	assert_eq!(
		TagValue::from("yes").convert(ValueType::Bool),
		Some(TagValue::Bool(true))
	);
}

#[test]
fn test_convert_to_string_and_list() {
	assert_eq!(
		TagValue::Bool(true).convert(ValueType::String),
		Some(TagValue::from("true"))
	);
	assert_eq!(
		TagValue::Int(1).convert(ValueType::List),
		Some(TagValue::List(vec![TagValue::Int(1)]))
	);
}

#[test]
fn test_convert_singleton_list_unwraps() {
	let single = TagValue::from(vec!["7"]);
	assert_eq!(single.convert(ValueType::Int), Some(TagValue::Int(7)));

	let pair = TagValue::from(vec![1_i64, 2]);
	assert_eq!(pair.convert(ValueType::Int), None);
	assert_eq!(pair.convert(ValueType::String), None);
}

#[test]
fn test_incompatible_scalars_do_not_convert() {
	assert_eq!(TagValue::Bool(true).convert(ValueType::Int), None);
	assert_eq!(TagValue::Int(1).convert(ValueType::Bool), None);
}

#[test]
fn test_from_tag_value_converts() {
	assert_eq!(i64::from_tag_value(&TagValue::from("12")), Some(12));
	assert_eq!(bool::from_tag_value(&TagValue::from("off")), Some(false));
	assert_eq!(String::from_tag_value(&TagValue::Int(5)).as_deref(), Some("5"));
	assert_eq!(
		Vec::<TagValue>::from_tag_value(&TagValue::Int(5)),
		Some(vec![TagValue::Int(5)])
	);
	assert_eq!(f64::from_tag_value(&TagValue::Bool(true)), None);
}

#[test]
fn test_from_tag_value_reports_target_type() {
	assert_eq!(i64::value_type(), ValueType::Int);
	assert_eq!(bool::value_type(), ValueType::Bool);
	assert_eq!(f64::value_type(), ValueType::Float);
	assert_eq!(<String as FromTagValue>::value_type(), ValueType::String);
	assert_eq!(<Vec<TagValue>>::value_type(), ValueType::List);
}

#[test]
fn test_as_list() {
	let list = TagValue::from(vec![1_i64, 2]);
	assert_eq!(list.as_list(), Some(&[TagValue::Int(1), TagValue::Int(2)][..]));
	assert_eq!(TagValue::Int(1).as_list(), None);
}

#[test]
fn test_literal_display() {
	let list = TagValue::from(vec![TagValue::from("a"), TagValue::Int(2)]);
	assert_eq!(list.to_string(), r#"["a", 2]"#);
}

fn arb_scalar() -> impl Strategy<Value = TagValue> {
	prop_oneof![
		any::<bool>().prop_map(TagValue::Bool),
		any::<i64>().prop_map(TagValue::Int),
		(-1.0e9_f64..1.0e9).prop_map(TagValue::Float),
		"[a-z0-9 ]{0,12}".prop_map(TagValue::String),
	]
}

proptest! {
	/// Every value converts to its own type unchanged.
	#[test]
	fn prop_convert_to_own_type_is_identity(value in arb_scalar()) {
		prop_assert_eq!(value.convert(value.value_type()), Some(value.clone()));
	}

	/// Int -> Float either succeeds exactly or not at all.
	#[test]
	fn prop_int_to_float_never_rounds(v in any::<i64>()) {
		if let Some(TagValue::Float(f)) = TagValue::Int(v).convert(ValueType::Float) {
			prop_assert_eq!(TagValue::Float(f).convert(ValueType::Int), Some(TagValue::Int(v)));
		}
	}

	/// Integers survive a trip through their string form.
	#[test]
	fn prop_int_string_form_parses_back(v in any::<i64>()) {
		let as_string = TagValue::Int(v).convert(ValueType::String).unwrap();
		prop_assert_eq!(as_string.convert(ValueType::Int), Some(TagValue::Int(v)));
	}
}
