use std::borrow::Cow;

use crate::dump::{DumpError, DumpNode, DumpOptions, DumpType, Inspect, Raw, Result};

/// Dump `value` under the display name `name`.
///
/// The root's declared type is the static type `T`; its actual type comes
/// from [`Inspect::runtime_type`].
///
/// # Errors
///
/// Returns [`DumpError::NullRoot`] when `value` is absent (`Option::None`,
/// JSON `null`, ...). Absent *members* are dumped as `<null>` nodes instead.
pub fn dump<'a, T: Inspect>(value: &'a T, name: impl Into<Cow<'static, str>>, options: DumpOptions) -> Result<DumpNode<'a>> {
	let name = name.into();
	if value.is_null() {
		return Err(DumpError::NullRoot { name: name.into_owned() });
	}

	tracing::trace!(root = %name, ty = %value.runtime_type(), ?options, "dump root");
	Ok(DumpNode::new(Some(Raw::borrowed(value)), DumpType::of::<T>(), name, options))
}

/// Method-call form of [`dump`] for every inspectable type.
pub trait DumpExt: Inspect + Sized {
	/// Dump `self` under the display name `name`.
	///
	/// # Errors
	///
	/// Same as [`dump`].
	fn dump(&self, name: impl Into<Cow<'static, str>>, options: DumpOptions) -> Result<DumpNode<'_>> {
		dump(self, name, options)
	}
}

impl<T: Inspect> DumpExt for T {}
