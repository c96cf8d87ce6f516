/// Tag type registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// A different definition is already registered under this name.
	#[error("duplicate tag type: {name}")]
	Duplicate { name: String },
}
