//! Per-tag-type cache of declared default values.
//!
//! # Invariants
//!
//! - An entry is published at most once per tag type name and never replaced.
//! - Readers only ever see fully built [`DefaultValues`]; a map is complete
//!   before it is published.
//! - Concurrent first requests may extract defaults redundantly, but every
//!   caller returns the single published entry.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use rustc_hash::FxHashMap as HashMap;
use sigil_schema::{TagType, TagValue, TypeLoader};


/// Immutable mapping from attribute name to declared default, in declaration order.
///
/// Remembers the schema it was extracted from, so consumers holding another
/// cache's view of the same name can check they agree.
#[derive(Debug, Default, PartialEq)]
pub struct DefaultValues {
	source: Option<Arc<TagType>>,
	values: IndexMap<Arc<str>, TagValue>,
}

static EMPTY: LazyLock<Arc<DefaultValues>> = LazyLock::new(|| Arc::new(DefaultValues::default()));

impl DefaultValues {
	/// Shared empty mapping, returned for unknown tag types.
	pub fn empty() -> Arc<DefaultValues> {
		EMPTY.clone()
	}

	/// Collects every declared default of `tag`.
	///
	/// Attributes without a default are skipped. If a name is declared twice
	/// the first declaration wins, matching [`TagType::attribute`].
	pub fn extract(tag: &Arc<TagType>) -> Self {
		let mut values = IndexMap::with_capacity(tag.attributes().len());
		for attr in tag.attributes() {
			if let Some(default) = &attr.default {
				values
					.entry(attr.name.clone())
					.or_insert_with(|| default.clone());
			}
		}
		Self {
			source: Some(tag.clone()),
			values,
		}
	}

	/// The schema these defaults were extracted from; `None` for [`DefaultValues::empty`].
	pub fn source(&self) -> Option<&Arc<TagType>> {
		self.source.as_ref()
	}

	/// Whether these defaults were extracted from a schema equal to `tag`.
	pub fn is_from(&self, tag: &Arc<TagType>) -> bool {
		self.source
			.as_ref()
			.is_some_and(|source| Arc::ptr_eq(source, tag) || **source == **tag)
	}

	/// Returns the default for `name`, or `None` if none was declared.
	pub fn get(&self, name: &str) -> Option<&TagValue> {
		self.values.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
		self.values.iter().map(|(k, v)| (&**k, v))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

type Entries = HashMap<Arc<str>, Arc<DefaultValues>>;

/// Append-only cache of [`DefaultValues`] keyed by interned tag type name.
///
/// Lookups are lock-free snapshot reads. Publication clones the snapshot and
/// installs it with a compare-and-swap, retrying when another writer got there
/// first.
pub struct DefaultValueCache {
	entries: ArcSwap<Entries>,
}

impl Default for DefaultValueCache {
	fn default() -> Self {
		Self::new()
	}
}

impl DefaultValueCache {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: ArcSwap::from_pointee(Entries::with_capacity_and_hasher(
				capacity,
				Default::default(),
			)),
		}
	}

	/// Returns the defaults of `tag`, extracting them on first request.
	pub fn get(&self, tag: &Arc<TagType>) -> Arc<DefaultValues> {
		if let Some(found) = self.entries.load().get(tag.name()) {
			return found.clone();
		}
		let computed = Arc::new(DefaultValues::extract(tag));
		self.publish(tag.name_arc(), computed)
	}

	/// Returns the defaults of the tag type registered under `name`.
	///
	/// Names the loader cannot resolve yield the shared empty mapping and are
	/// not cached, so a later registration is still picked up.
	pub fn get_by_name(&self, name: &str, loader: &dyn TypeLoader) -> Arc<DefaultValues> {
		if let Some(found) = self.entries.load().get(name) {
			return found.clone();
		}
		match loader.resolve_type(name) {
			Some(tag) => self.get(&tag),
			None => {
				tracing::trace!(domain = "tags", tag = name, "unknown tag type; no defaults");
				DefaultValues::empty()
			}
		}
	}

	/// Returns the cached entry for `name` without computing anything.
	pub fn cached(&self, name: &str) -> Option<Arc<DefaultValues>> {
		self.entries.load().get(name).cloned()
	}

	/// Number of tag types with a published entry.
	pub fn len(&self) -> usize {
		self.entries.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn publish(&self, name: &Arc<str>, computed: Arc<DefaultValues>) -> Arc<DefaultValues> {
		loop {
			let cur = self.entries.load_full();
			if let Some(existing) = cur.get(name) {
				// Lost the race; the first published entry is authoritative.
				return existing.clone();
			}

			let mut next = (*cur).clone();
			next.insert(name.clone(), computed.clone());

			let prev = self.entries.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				tracing::debug!(
					domain = "tags",
					tag = &**name,
					defaults = computed.len(),
					"cached tag defaults",
				);
				return computed;
			}
			// CAS failed, retry with updated snapshot
		}
	}
}
