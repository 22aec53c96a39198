use std::borrow::Cow;
use std::fmt;

/// Type descriptor attached to every dump node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DumpType {
	/// Sentinel actual type of an absent value.
	Null,
	/// Universal top type, used for elements of untyped iterables.
	Any,
	/// Concrete named type.
	Named(Cow<'static, str>),
}

impl DumpType {
	/// Descriptor for the static type `T`.
	pub fn of<T: ?Sized>() -> Self {
		Self::Named(Cow::Borrowed(std::any::type_name::<T>()))
	}

	/// Descriptor for a type identified by a static label.
	pub const fn named(name: &'static str) -> Self {
		Self::Named(Cow::Borrowed(name))
	}

	/// Render the descriptor as a stable label.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Null => "null",
			Self::Any => "any",
			Self::Named(name) => name,
		}
	}

	/// Whether this is the absent-value sentinel.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl fmt::Display for DumpType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
