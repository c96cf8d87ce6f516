//! Per-tag-type cache of synthesis capability.
//!
//! Deriving an [`InstantiationHandle`] validates a tag type's schema once and
//! precomputes its attribute slot table. Both outcomes are memoized: a tag type
//! that cannot be synthesized is remembered as unsupported and never derived
//! again.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;
use sigil_schema::{AttributeDecl, TagType, TagValue, ValueType};

use crate::instance::TagInstance;


/// Per-attribute resolution function backing a [`TagInstance`].
pub type Resolver<'v> = Box<dyn Fn(&AttributeDecl) -> Option<TagValue> + Send + Sync + 'v>;

/// Reasons a tag type cannot be synthesized.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeriveError {
	/// The tag type is declared opaque.
	#[error("tag type {tag} is opaque")]
	Opaque { tag: Arc<str> },
	/// Two attributes share a name.
	#[error("attribute {attribute:?} declared twice on {tag}")]
	DuplicateAttribute { tag: Arc<str>, attribute: Arc<str> },
	/// An attribute has an empty name.
	#[error("empty attribute name on {tag}")]
	EmptyAttributeName { tag: Arc<str> },
	/// A declared default does not fit the attribute type.
	#[error("default for {tag}.{attribute} is {got}, expected {expected}")]
	DefaultTypeMismatch {
		tag: Arc<str>,
		attribute: Arc<str>,
		expected: ValueType,
		got: &'static str,
	},
}

/// Cached capability to synthesize instances of one tag type.
#[derive(Debug)]
pub struct InstantiationHandle {
	tag: Arc<TagType>,
	slots: HashMap<Arc<str>, usize>,
}

impl InstantiationHandle {
	/// Validates `tag` and builds its slot table.
	///
	/// With `strict_defaults` a default must already have the attribute's type;
	/// otherwise it only has to be convertible to it.
	pub fn derive(tag: &Arc<TagType>, strict_defaults: bool) -> Result<Self, DeriveError> {
		let tag_name = tag.name_arc();
		if !tag.is_synthesizable() {
			return Err(DeriveError::Opaque {
				tag: tag_name.clone(),
			});
		}

		let mut slots =
			HashMap::with_capacity_and_hasher(tag.attributes().len(), Default::default());
		for (slot, attr) in tag.attributes().iter().enumerate() {
			if attr.name.is_empty() {
				return Err(DeriveError::EmptyAttributeName {
					tag: tag_name.clone(),
				});
			}
			if let Some(default) = &attr.default {
				let fits = if strict_defaults {
					default.matches_type(attr.value_type)
				} else {
					default.convert(attr.value_type).is_some()
				};
				if !fits {
					return Err(DeriveError::DefaultTypeMismatch {
						tag: tag_name.clone(),
						attribute: attr.name.clone(),
						expected: attr.value_type,
						got: default.type_name(),
					});
				}
			}
			if slots.insert(attr.name.clone(), slot).is_some() {
				return Err(DeriveError::DuplicateAttribute {
					tag: tag_name.clone(),
					attribute: attr.name.clone(),
				});
			}
		}

		Ok(Self {
			tag: tag.clone(),
			slots,
		})
	}

	pub fn tag_type(&self) -> &Arc<TagType> {
		&self.tag
	}

	/// Returns the declaration of `name`, or `None` for undeclared attributes.
	pub fn attribute(&self, name: &str) -> Option<&AttributeDecl> {
		let slot = *self.slots.get(name)?;
		self.tag.attributes().get(slot)
	}

	/// Creates an instance whose attributes are answered by `resolver`.
	///
	/// Nothing is resolved here; every attribute access calls `resolver` anew.
	pub fn instantiate<'v>(self: &Arc<Self>, resolver: Resolver<'v>) -> TagInstance<'v> {
		TagInstance::new(self.clone(), resolver)
	}
}

type Entries = HashMap<Arc<str>, Option<Arc<InstantiationHandle>>>;

/// Append-only cache of [`InstantiationHandle`]s keyed by interned tag type name.
///
/// Derivation runs outside the lock. When several threads derive the same tag
/// type concurrently, the first insert wins and the others adopt it.
pub struct CapabilityCache {
	entries: RwLock<Entries>,
	strict_defaults: bool,
}

impl Default for CapabilityCache {
	fn default() -> Self {
		Self::new(0, true)
	}
}

impl CapabilityCache {
	pub fn new(capacity: usize, strict_defaults: bool) -> Self {
		Self {
			entries: RwLock::new(Entries::with_capacity_and_hasher(
				capacity,
				Default::default(),
			)),
			strict_defaults,
		}
	}

	/// Returns the handle for `tag`, or `None` if it cannot be synthesized.
	pub fn get(&self, tag: &Arc<TagType>) -> Option<Arc<InstantiationHandle>> {
		if let Some(cached) = self.entries.read().get(tag.name()) {
			return cached.clone();
		}

		let derived = match InstantiationHandle::derive(tag, self.strict_defaults) {
			Ok(handle) => {
				tracing::debug!(domain = "tags", tag = tag.name(), "derived instantiation handle");
				Some(Arc::new(handle))
			}
			Err(error) => {
				tracing::warn!(
					domain = "tags",
					tag = tag.name(),
					%error,
					"tag type cannot be synthesized",
				);
				None
			}
		};

		self.entries
			.write()
			.entry(tag.name_arc().clone())
			.or_insert(derived)
			.clone()
	}

	/// Whether instances of `tag` can be synthesized.
	pub fn is_supported(&self, tag: &Arc<TagType>) -> bool {
		self.get(tag).is_some()
	}

	/// Returns the memoized outcome for `name` without deriving anything.
	///
	/// `None` means nothing is cached yet; `Some(None)` is a cached "unsupported".
	pub fn cached(&self, name: &str) -> Option<Option<Arc<InstantiationHandle>>> {
		self.entries.read().get(name).cloned()
	}

	/// Number of memoized outcomes, supported or not.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
