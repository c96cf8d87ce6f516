//! Synthesized tag instances.

use std::sync::Arc;

use indexmap::IndexMap;
use sigil_schema::{FromTagValue, TagType, TagValue};

use crate::capability::{InstantiationHandle, Resolver};

/// Read-only view of a tag whose attributes are resolved on every access.
///
/// The instance stores no attribute values. Each [`get`](Self::get) asks the
/// resolver it was created with, so stores whose values change or are
/// computed lazily are always observed fresh. The `'v` lifetime ties the
/// instance to the supplied values it reads from.
pub struct TagInstance<'v> {
	handle: Arc<InstantiationHandle>,
	resolver: Resolver<'v>,
}

impl<'v> TagInstance<'v> {
	pub(crate) fn new(handle: Arc<InstantiationHandle>, resolver: Resolver<'v>) -> Self {
		Self { handle, resolver }
	}

	pub fn tag_type(&self) -> &Arc<TagType> {
		self.handle.tag_type()
	}

	pub fn name(&self) -> &str {
		self.tag_type().name()
	}

	/// Resolves attribute `name`.
	///
	/// Returns `None` for undeclared attributes and for declared attributes
	/// with neither a supplied value nor a default.
	pub fn get(&self, name: &str) -> Option<TagValue> {
		let attr = self.handle.attribute(name)?;
		(self.resolver)(attr)
	}

	/// Resolves attribute `name` and converts it to `T`.
	pub fn get_as<T: FromTagValue>(&self, name: &str) -> Option<T> {
		T::from_tag_value(&self.get(name)?)
	}

	/// Declared attribute names, in declaration order.
	pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
		self.tag_type().attributes().iter().map(|a| &*a.name)
	}

	/// Resolves every attribute once into an owned, comparable value.
	pub fn snapshot(&self) -> ResolvedTag {
		let tag = self.tag_type();
		let mut values = IndexMap::with_capacity(tag.attributes().len());
		for attr in tag.attributes() {
			values
				.entry(attr.name.clone())
				.or_insert_with(|| (self.resolver)(attr));
		}
		ResolvedTag {
			name: tag.name_arc().clone(),
			values,
		}
	}
}

impl core::fmt::Debug for TagInstance<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("TagInstance")
			.field("tag", &self.name())
			.finish_non_exhaustive()
	}
}

impl core::fmt::Display for TagInstance<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		core::fmt::Display::fmt(&self.snapshot(), f)
	}
}

/// Fully resolved attribute values of a tag, detached from any store.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTag {
	name: Arc<str>,
	values: IndexMap<Arc<str>, Option<TagValue>>,
}

impl ResolvedTag {
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the resolved value of `name`, `None` if absent or undeclared.
	pub fn get(&self, name: &str) -> Option<&TagValue> {
		self.values.get(name)?.as_ref()
	}

	/// All declared attributes with their resolved values.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&TagValue>)> {
		self.values.iter().map(|(k, v)| (&**k, v.as_ref()))
	}
}

impl core::fmt::Display for ResolvedTag {
	/// Annotation form, skipping attributes without a value: `@Scheduled(fixedRate=5000, zone="UTC")`.
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "@{}(", self.name)?;
		let mut first = true;
		for (name, value) in self.values.iter() {
			let Some(value) = value else { continue };
			if !first {
				f.write_str(", ")?;
			}
			first = false;
			write!(f, "{name}=")?;
			value.fmt_literal(f)?;
		}
		f.write_str(")")
	}
}
