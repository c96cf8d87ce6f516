use std::sync::{Arc, LazyLock};

use sigil_schema::{EmptyValues, TagType, ValueMap, ValueType};

use crate::{SynthesisError, Tag, TagBuilder, TagInstance};

#[derive(Debug, PartialEq)]
struct Scheduled {
	fixed_rate: i64,
	initial_delay: i64,
	cron: Option<String>,
}

static SCHEDULED: LazyLock<Arc<TagType>> = LazyLock::new(|| {
	TagType::builder("Scheduled")
		.attribute_with_default("fixedRate", ValueType::Int, 1000_i64)
		.attribute_with_default("initialDelay", ValueType::Int, 0_i64)
		.attribute("cron", ValueType::String)
		.build_arc()
});

impl Tag for Scheduled {
	fn tag_type() -> Arc<TagType> {
		SCHEDULED.clone()
	}

	fn from_instance(instance: &TagInstance<'_>) -> Option<Self> {
		Some(Self {
			fixed_rate: instance.get_as("fixedRate")?,
			initial_delay: instance.get_as("initialDelay")?,
			cron: instance.get_as("cron"),
		})
	}
}

#[derive(Debug)]
struct Named {
	#[allow(dead_code)]
	value: String,
}

impl Tag for Named {
	fn tag_type() -> Arc<TagType> {
		static NAMED: LazyLock<Arc<TagType>> = LazyLock::new(|| {
			TagType::builder("Named")
				.attribute("value", ValueType::String)
				.build_arc()
		});
		NAMED.clone()
	}

	fn from_instance(instance: &TagInstance<'_>) -> Option<Self> {
		Some(Self {
			value: instance.get_as("value")?,
		})
	}
}

#[test]
fn test_scheduled_example() {
	let builder = TagBuilder::default();
	let values = ValueMap::new().with("fixedRate", 5000_i64);

	let scheduled: Scheduled = builder.build_typed(&values).unwrap();
	assert_eq!(
		scheduled,
		Scheduled {
			fixed_rate: 5000,
			initial_delay: 0,
			cron: None,
		}
	);
}

#[test]
fn test_required_attribute_missing_is_incomplete() {
	let builder = TagBuilder::default();
	let err = builder.build_typed::<Named, _>(&EmptyValues).unwrap_err();
	assert_eq!(
		err,
		SynthesisError::Incomplete {
			tag: sigil_schema::intern("Named")
		}
	);
	assert!(builder.build_typed::<Named, _>(&ValueMap::new().with("value", "db")).is_ok());
}

#[test]
fn test_global_builder_is_shared() {
	let values = ValueMap::new().with("initialDelay", "30");
	let scheduled: Scheduled = crate::global().build_typed(&values).unwrap();
	assert_eq!(scheduled.initial_delay, 30);
	assert!(std::ptr::eq(crate::global(), crate::global()));
	assert!(crate::global().defaults().cached("Scheduled").is_some());
}
