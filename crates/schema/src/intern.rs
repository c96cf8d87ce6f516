//! Canonical shared names for tag types and attributes.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use rustc_hash::FxHashSet as HashSet;

/// Append-only string interner handing out shared `Arc<str>` names.
///
/// Equal inputs always return pointer-equal names, so interned names can be
/// compared with [`Arc::ptr_eq`] as well as by value.
#[derive(Default)]
pub struct NameInterner {
	names: RwLock<HashSet<Arc<str>>>,
}

impl NameInterner {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the canonical name for `name`, inserting it on first use.
	pub fn intern(&self, name: &str) -> Arc<str> {
		if let Some(existing) = self.names.read().get(name) {
			return existing.clone();
		}
		let mut names = self.names.write();
		// Another writer may have won between the read and write lock.
		if let Some(existing) = names.get(name) {
			return existing.clone();
		}
		let interned: Arc<str> = Arc::from(name);
		names.insert(interned.clone());
		interned
	}

	/// Returns the canonical name if `name` has been interned.
	pub fn get(&self, name: &str) -> Option<Arc<str>> {
		self.names.read().get(name).cloned()
	}

	pub fn len(&self) -> usize {
		self.names.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

static NAMES: LazyLock<NameInterner> = LazyLock::new(NameInterner::new);

/// Interns `name` in the process-wide interner.
pub fn intern(name: &str) -> Arc<str> {
	NAMES.intern(name)
}

/// Returns the canonical name if `name` was interned process-wide.
pub fn lookup(name: &str) -> Option<Arc<str>> {
	NAMES.get(name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_intern_returns_shared_name() {
		let interner = NameInterner::new();
		let a = interner.intern("Scheduled");
		let b = interner.intern(&String::from("Scheduled"));
		assert!(Arc::ptr_eq(&a, &b));
		assert_eq!(interner.len(), 1);
	}

	#[test]
	fn test_get_does_not_insert() {
		let interner = NameInterner::new();
		assert!(interner.get("missing").is_none());
		assert!(interner.is_empty());
	}

	#[test]
	fn test_global_lookup() {
		let name = intern("GlobalLookupTag");
		assert!(Arc::ptr_eq(&lookup("GlobalLookupTag").unwrap(), &name));
		assert!(lookup("NeverInternedAnywhere").is_none());
	}

	#[test]
	fn test_concurrent_intern_converges() {
		let interner = NameInterner::new();
		let names: Vec<Arc<str>> = std::thread::scope(|s| {
			let handles: Vec<_> = (0..8)
				.map(|_| s.spawn(|| interner.intern("Retryable")))
				.collect();
			handles.into_iter().map(|h| h.join().unwrap()).collect()
		});
		assert!(names.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
	}
}
