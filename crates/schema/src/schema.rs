//! Tag type declarations.

use std::sync::Arc;

use crate::intern::intern;
use crate::value::{TagValue, ValueType};

/// A declared attribute of a tag type.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDecl {
	pub name: Arc<str>,
	pub value_type: ValueType,
	pub default: Option<TagValue>,
}

impl AttributeDecl {
	pub fn new(name: &str, value_type: ValueType) -> Self {
		Self {
			name: intern(name),
			value_type,
			default: None,
		}
	}

	pub fn with_default(mut self, default: impl Into<TagValue>) -> Self {
		self.default = Some(default.into());
		self
	}
}

/// A named schema of attributes.
///
/// Tag types are immutable once built and are shared as `Arc<TagType>`. The
/// name is interned and identifies the type in every cache.
#[derive(Debug, PartialEq)]
pub struct TagType {
	name: Arc<str>,
	attributes: Vec<AttributeDecl>,
	synthesizable: bool,
}

impl TagType {
	pub fn builder(name: &str) -> TagTypeBuilder {
		TagTypeBuilder {
			name: intern(name),
			attributes: Vec::new(),
			synthesizable: true,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the interned name.
	pub fn name_arc(&self) -> &Arc<str> {
		&self.name
	}

	/// Declared attributes, in declaration order.
	pub fn attributes(&self) -> &[AttributeDecl] {
		&self.attributes
	}

	/// Returns the first attribute declared under `name`.
	pub fn attribute(&self, name: &str) -> Option<&AttributeDecl> {
		self.attributes.iter().find(|a| &*a.name == name)
	}

	/// Whether instances of this type may be synthesized at all.
	pub fn is_synthesizable(&self) -> bool {
		self.synthesizable
	}
}

/// Builder for [`TagType`].
#[derive(Debug)]
pub struct TagTypeBuilder {
	name: Arc<str>,
	attributes: Vec<AttributeDecl>,
	synthesizable: bool,
}

impl TagTypeBuilder {
	/// Declares an attribute without a default.
	pub fn attribute(mut self, name: &str, value_type: ValueType) -> Self {
		self.attributes.push(AttributeDecl::new(name, value_type));
		self
	}

	/// Declares an attribute with a default value.
	pub fn attribute_with_default(
		mut self,
		name: &str,
		value_type: ValueType,
		default: impl Into<TagValue>,
	) -> Self {
		self.attributes
			.push(AttributeDecl::new(name, value_type).with_default(default));
		self
	}

	pub fn declare(mut self, decl: AttributeDecl) -> Self {
		self.attributes.push(decl);
		self
	}

	/// Marks the type as one that can never be synthesized.
	pub fn opaque(mut self) -> Self {
		self.synthesizable = false;
		self
	}

	pub fn build(self) -> TagType {
		TagType {
			name: self.name,
			attributes: self.attributes,
			synthesizable: self.synthesizable,
		}
	}

	pub fn build_arc(self) -> Arc<TagType> {
		Arc::new(self.build())
	}
}
