use std::sync::Arc;

/// Failure to synthesize a tag instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthesisError {
	/// No instantiation handle exists for the tag type.
	#[error("failed to build tag for type: {tag}")]
	Unsupported { tag: Arc<str> },
	/// The type loader does not know the requested name.
	#[error("unknown tag type: {tag}")]
	UnknownType { tag: Arc<str> },
	/// A typed tag could not be read back from its resolved attributes.
	#[error("tag {tag} is missing a required attribute")]
	Incomplete { tag: Arc<str> },
}

impl SynthesisError {
	/// Name of the tag type the failure concerns.
	pub fn tag(&self) -> &str {
		match self {
			Self::Unsupported { tag } | Self::UnknownType { tag } | Self::Incomplete { tag } => tag,
		}
	}
}
