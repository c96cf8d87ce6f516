//! Statically typed tags.
//!
//! A [`Tag`] is a plain struct generated (or hand-written) for one known tag
//! type. It reads its fields back out of a synthesized [`TagInstance`], so the
//! usual resolution order still applies.

use std::sync::Arc;

use sigil_schema::{ConvertibleValues, TagType};

use crate::builder::TagBuilder;
use crate::error::SynthesisError;
use crate::instance::TagInstance;

/// A struct that mirrors one tag type.
pub trait Tag: Sized {
	/// The schema this struct mirrors.
	fn tag_type() -> Arc<TagType>;

	/// Reads the struct from a resolved instance; `None` if a field is unresolved.
	fn from_instance(instance: &TagInstance<'_>) -> Option<Self>;
}

impl TagBuilder {
	/// Synthesizes `T` from `values`.
	///
	/// # Errors
	///
	/// As [`TagBuilder::build`], plus [`SynthesisError::Incomplete`] when `T`
	/// cannot be read from the resolved attributes.
	pub fn build_typed<T, V>(&self, values: &V) -> Result<T, SynthesisError>
	where
		T: Tag,
		V: ConvertibleValues + ?Sized,
	{
		let tag = T::tag_type();
		let instance = self.build(&tag, values)?;
		T::from_instance(&instance).ok_or_else(|| SynthesisError::Incomplete {
			tag: tag.name_arc().clone(),
		})
	}
}
