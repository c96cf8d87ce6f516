//! Resolution of tag type names to their schemas.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use crate::error::RegistryError;
use crate::schema::TagType;

/// Resolves a tag type name to its declared schema.
pub trait TypeLoader: Send + Sync {
	/// Returns the schema registered under `name`, if any.
	fn resolve_type(&self, name: &str) -> Option<Arc<TagType>>;
}

impl<F> TypeLoader for F
where
	F: Fn(&str) -> Option<Arc<TagType>> + Send + Sync,
{
	fn resolve_type(&self, name: &str) -> Option<Arc<TagType>> {
		self(name)
	}
}

/// Append-only, thread-safe registry of tag types.
#[derive(Default)]
pub struct TagTypeRegistry {
	types: RwLock<HashMap<Arc<str>, Arc<TagType>>>,
}

impl TagTypeRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `tag` under its name.
	///
	/// Registering the same `Arc` twice is a no-op. A different definition
	/// under an already registered name is rejected.
	pub fn register(&self, tag: Arc<TagType>) -> Result<(), RegistryError> {
		let mut types = self.types.write();
		if let Some(existing) = types.get(tag.name()) {
			if Arc::ptr_eq(existing, &tag) {
				return Ok(());
			}
			return Err(RegistryError::Duplicate {
				name: tag.name().to_string(),
			});
		}
		tracing::debug!(domain = "tags", tag = tag.name(), "registered tag type");
		types.insert(tag.name_arc().clone(), tag);
		Ok(())
	}

	pub fn get(&self, name: &str) -> Option<Arc<TagType>> {
		self.types.read().get(name).cloned()
	}

	pub fn len(&self) -> usize {
		self.types.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Registered names, sorted.
	pub fn names(&self) -> Vec<Arc<str>> {
		let mut names: Vec<_> = self.types.read().keys().cloned().collect();
		names.sort();
		names
	}
}

impl TypeLoader for TagTypeRegistry {
	fn resolve_type(&self, name: &str) -> Option<Arc<TagType>> {
		self.get(name)
	}
}

impl FromIterator<Arc<TagType>> for TagTypeRegistry {
	/// Collects tag types; later duplicates of a name are ignored.
	fn from_iter<I: IntoIterator<Item = Arc<TagType>>>(iter: I) -> Self {
		let mut types = HashMap::default();
		for tag in iter {
			types.entry(tag.name_arc().clone()).or_insert(tag);
		}
		Self {
			types: RwLock::new(types),
		}
	}
}
