//! Tag type schemas and attribute values.
//!
//! This crate holds the data model shared by the synthesis engine and the
//! seams it consumes:
//!
//! - [`TagType`] / [`AttributeDecl`] - named attribute schemas with optional defaults
//! - [`TagValue`] / [`ValueType`] - attribute values and their conversion rules
//! - [`TypeLoader`] - resolves a tag type name to its schema ([`TagTypeRegistry`])
//! - [`ConvertibleValues`] - caller-supplied attribute values ([`ValueMap`])

pub mod error;
pub mod intern;
pub mod loader;
pub mod parse;
pub mod schema;
pub mod value;
pub mod values;

pub use error::RegistryError;
pub use intern::{NameInterner, intern, lookup};
pub use loader::{TagTypeRegistry, TypeLoader};
pub use schema::{AttributeDecl, TagType, TagTypeBuilder};
pub use value::{FromTagValue, TagValue, ValueType};
pub use values::{ConvertibleValues, EmptyValues, ValueMap};
