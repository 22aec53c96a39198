use thiserror::Error;

use crate::dump::{DumpType, Inspect, PropertyInfo, Raw};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DumpError>;

/// Errors produced while constructing or navigating a dump.
#[derive(Debug, Error)]
pub enum DumpError {
	/// Root value passed to [`crate::dump::dump`] was absent.
	#[error("cannot dump an absent root value (name={name})")]
	NullRoot {
		/// Display name requested for the root.
		name: String,
	},
	/// Member path expression syntax is invalid.
	#[error("invalid member path: {path}")]
	InvalidMemberPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Path step did not match any member of the current node.
	#[error("member not found: {step} (path={path})")]
	MemberNotFound {
		/// Rendered step that failed to resolve.
		step: String,
		/// Full path being resolved.
		path: String,
	},
	/// Container iteration failed while resolving a path.
	#[error("enumeration failed: {0}")]
	Enumeration(#[from] InspectError),
}

/// Failure raised by describe, getter, or element code of an [`Inspect`] impl.
///
/// A failing property getter does not abort the dump: the error is dumped in
/// place of the property value, which is why this type implements [`Inspect`].
#[derive(Debug, Error)]
pub enum InspectError {
	/// Free-form failure reported by an impl.
	#[error("{message}")]
	Failed {
		/// Human-readable failure text.
		message: String,
	},
	/// Impl code panicked and the panic was contained.
	#[error("panicked: {message}")]
	Panicked {
		/// Panic payload text.
		message: String,
	},
	/// Getter requested for a property the type does not expose.
	#[error("{type_name} has no property {name}")]
	UnknownProperty {
		/// Runtime type of the inspected value.
		type_name: String,
		/// Requested property name.
		name: String,
	},
	/// Indexed property read without index arguments.
	#[error("{type_name}.{name} is indexed and cannot be read without arguments")]
	IndexedProperty {
		/// Runtime type of the inspected value.
		type_name: String,
		/// Requested property name.
		name: String,
	},
	/// Error raised by a foreign library.
	#[error(transparent)]
	Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl InspectError {
	/// Build a free-form failure.
	pub fn msg(message: impl Into<String>) -> Self {
		Self::Failed { message: message.into() }
	}

	/// Build an unknown-property failure for `owner`.
	pub fn unknown_property<T: Inspect + ?Sized>(owner: &T, name: &str) -> Self {
		Self::UnknownProperty {
			type_name: owner.runtime_type().to_string(),
			name: name.to_owned(),
		}
	}

	/// Build an indexed-property failure for `owner`.
	pub fn indexed_property<T: Inspect + ?Sized>(owner: &T, name: &str) -> Self {
		Self::IndexedProperty {
			type_name: owner.runtime_type().to_string(),
			name: name.to_owned(),
		}
	}

	/// Stable lowercase label of the failure kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Failed { .. } => "failed",
			Self::Panicked { .. } => "panicked",
			Self::UnknownProperty { .. } => "unknown_property",
			Self::IndexedProperty { .. } => "indexed_property",
			Self::Source(_) => "source",
		}
	}
}

impl Inspect for InspectError {
	fn runtime_type(&self) -> DumpType {
		DumpType::of::<Self>()
	}

	fn describe(&self) -> std::result::Result<String, InspectError> {
		Ok(self.to_string())
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		vec![PropertyInfo::of::<&str>("kind"), PropertyInfo::of::<String>("message")]
	}

	fn property(&self, name: &str) -> std::result::Result<Option<Raw<'_>>, InspectError> {
		match name {
			"kind" => Ok(Some(Raw::owned(self.kind()))),
			"message" => Ok(Some(Raw::owned(self.to_string()))),
			_ => Err(InspectError::unknown_property(self, name)),
		}
	}
}
