//! Declarative tag resolution and synthesis.
//!
//! Given a [`TagType`](sigil_schema::TagType) and a store of supplied values,
//! [`TagBuilder::build`] produces a [`TagInstance`] whose attributes resolve
//! lazily: supplied value first, then the declared default, then nothing.
//!
//! Two process-scoped, append-only caches back the builder:
//!
//! - [`DefaultValueCache`] - declared defaults per tag type
//! - [`CapabilityCache`] - whether and how a tag type can be synthesized
//!
//! Entries are computed at most once per tag type name as far as any caller
//! can observe, and are never evicted.

use std::sync::LazyLock;

pub mod builder;
pub mod capability;
pub mod config;
pub mod defaults;
pub mod error;
pub mod instance;
pub mod typed;

#[cfg(test)]
mod tests;

pub use builder::TagBuilder;
pub use capability::{CapabilityCache, DeriveError, InstantiationHandle, Resolver};
pub use config::{ConfigError, SynthConfig};
pub use defaults::{DefaultValueCache, DefaultValues};
pub use error::SynthesisError;
pub use instance::{ResolvedTag, TagInstance};
pub use typed::Tag;

static GLOBAL: LazyLock<TagBuilder> = LazyLock::new(TagBuilder::default);

/// Process-wide builder with default configuration.
///
/// Containers that manage their own caches should construct a [`TagBuilder`]
/// instead.
pub fn global() -> &'static TagBuilder {
	&GLOBAL
}
