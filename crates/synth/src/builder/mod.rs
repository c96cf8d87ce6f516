//! Tag synthesis.
//!
//! The [`TagBuilder`] turns a tag type plus caller-supplied values into a
//! [`TagInstance`]. Attribute resolution is lazy and happens per access:
//!
//! 1. Supplied value, converted to the attribute's declared type
//! 2. Cached declared default
//! 3. No value

use std::sync::Arc;

use sigil_schema::{AttributeDecl, ConvertibleValues, TagType, TagValue, TypeLoader};

use crate::capability::CapabilityCache;
use crate::config::SynthConfig;
use crate::defaults::{DefaultValueCache, DefaultValues};
use crate::error::SynthesisError;
use crate::instance::TagInstance;


/// Builds tag instances from cached defaults and synthesis capabilities.
///
/// Both caches are explicit dependencies, so several builders can share one
/// pair of caches or keep isolated ones.
#[derive(Clone)]
pub struct TagBuilder {
	defaults: Arc<DefaultValueCache>,
	capabilities: Arc<CapabilityCache>,
}

impl Default for TagBuilder {
	fn default() -> Self {
		Self::new(&SynthConfig::default())
	}
}

impl TagBuilder {
	/// Creates a builder with fresh caches sized and validated per `config`.
	pub fn new(config: &SynthConfig) -> Self {
		Self::with_caches(
			Arc::new(DefaultValueCache::with_capacity(config.initial_capacity)),
			Arc::new(CapabilityCache::new(
				config.initial_capacity,
				config.strict_defaults,
			)),
		)
	}

	pub fn with_caches(
		defaults: Arc<DefaultValueCache>,
		capabilities: Arc<CapabilityCache>,
	) -> Self {
		Self {
			defaults,
			capabilities,
		}
	}

	pub fn defaults(&self) -> &Arc<DefaultValueCache> {
		&self.defaults
	}

	pub fn capabilities(&self) -> &Arc<CapabilityCache> {
		&self.capabilities
	}

	/// Declared defaults of `tag`. Never fails.
	pub fn default_values(&self, tag: &Arc<TagType>) -> Arc<DefaultValues> {
		self.defaults.get(tag)
	}

	/// Declared defaults of the tag type named `name`; empty when unknown.
	pub fn default_values_by_name(
		&self,
		name: &str,
		loader: &dyn TypeLoader,
	) -> Arc<DefaultValues> {
		self.defaults.get_by_name(name, loader)
	}

	/// Synthesizes an instance of `tag` backed by `values`.
	///
	/// # Errors
	///
	/// Returns [`SynthesisError::Unsupported`] when `tag` has no instantiation
	/// handle (opaque or malformed schema), or when the caches hold a different
	/// schema under the same name.
	pub fn build<'v, V>(
		&self,
		tag: &Arc<TagType>,
		values: &'v V,
	) -> Result<TagInstance<'v>, SynthesisError>
	where
		V: ConvertibleValues + ?Sized,
	{
		let unsupported = || SynthesisError::Unsupported {
			tag: tag.name_arc().clone(),
		};
		let Some(handle) = self.capabilities.get(tag) else {
			return Err(unsupported());
		};
		let schema = handle.tag_type();
		let defaults = self.defaults.get(schema);

		// Both caches are keyed by name; a second schema under a cached name
		// must not be resolved against the first one's attributes or defaults.
		if !(defaults.is_from(schema) && defaults.is_from(tag)) {
			tracing::warn!(
				domain = "tags",
				tag = tag.name(),
				"cached schema differs from requested tag type",
			);
			return Err(unsupported());
		}

		Ok(handle.instantiate(Box::new(move |attr: &AttributeDecl| {
			resolve_attribute(values, &defaults, attr)
		})))
	}

	/// Resolves `name` through `loader` and synthesizes an instance of it.
	///
	/// # Errors
	///
	/// [`SynthesisError::UnknownType`] when the loader cannot resolve `name`,
	/// otherwise as [`build`](Self::build).
	pub fn build_by_name<'v, V>(
		&self,
		name: &str,
		loader: &dyn TypeLoader,
		values: &'v V,
	) -> Result<TagInstance<'v>, SynthesisError>
	where
		V: ConvertibleValues + ?Sized,
	{
		let tag = loader
			.resolve_type(name)
			.ok_or_else(|| SynthesisError::UnknownType {
				// Unknown names stay out of the interner; it only ever grows.
				tag: Arc::from(name),
			})?;
		self.build(&tag, values)
	}
}

fn resolve_attribute<V>(
	values: &V,
	defaults: &DefaultValues,
	attr: &AttributeDecl,
) -> Option<TagValue>
where
	V: ConvertibleValues + ?Sized,
{
	if values.contains(&attr.name) {
		if let Some(value) = values.get(&attr.name, attr.value_type) {
			return Some(value);
		}
		tracing::trace!(
			domain = "tags",
			attribute = &*attr.name,
			expected = %attr.value_type,
			"supplied value not convertible; falling back to default",
		);
	}
	// Defaults are type-checked at derivation; the conversion only matters
	// when strict defaults are off.
	defaults.get(&attr.name)?.convert(attr.value_type)
}
