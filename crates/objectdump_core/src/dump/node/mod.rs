use std::borrow::Cow;

use crate::dump::{DumpOptions, DumpType, EnumerableMembers, Inspect, Members, Raw, guard};

/// Value string of an absent value.
pub const NULL_VALUE: &str = "<null>";
/// Prefix of the value string when describing a value failed.
pub const EXCEPTION_PREFIX: &str = "<Exception>: ";
/// Default display name of a dump root.
pub const ROOT_NAME: &str = "Root";

/// One dumped member: name, declared/actual type, value string, and lazily
/// computed children.
///
/// Scalar parts are computed once, at construction. The three child
/// sequences are recomputed from the raw object on every call and borrow
/// from this node.
#[derive(Debug)]
pub struct DumpNode<'a> {
	raw: Option<Raw<'a>>,
	name: Cow<'static, str>,
	declared_type: DumpType,
	actual_type: DumpType,
	value: String,
	options: DumpOptions,
}

impl<'a> DumpNode<'a> {
	/// Construct a node for `value`, describing it eagerly.
	///
	/// `None` and values whose [`Inspect::is_null`] is true are treated as
	/// absent: the actual type becomes [`DumpType::Null`], the value string
	/// [`NULL_VALUE`], and every child sequence is empty.
	pub fn new(value: Option<Raw<'a>>, declared_type: DumpType, name: impl Into<Cow<'static, str>>, options: DumpOptions) -> Self {
		let raw = value.filter(|raw| !raw.is_null());
		let (actual_type, value) = match &raw {
			Some(raw) => (raw.runtime_type(), describe(&**raw)),
			None => (DumpType::Null, NULL_VALUE.to_owned()),
		};

		Self {
			raw,
			name: name.into(),
			declared_type,
			actual_type,
			value,
			options,
		}
	}

	/// Dumped value, `None` when absent.
	pub fn raw_object(&self) -> Option<&(dyn Inspect + 'a)> {
		self.raw.as_deref()
	}

	/// Display name of this member.
	pub fn object_name(&self) -> &str {
		&self.name
	}

	/// Statically known type at the point of access.
	pub fn declared_type(&self) -> &DumpType {
		&self.declared_type
	}

	/// Runtime type of the dumped value.
	pub fn actual_type(&self) -> &DumpType {
		&self.actual_type
	}

	/// Description of the dumped value.
	pub fn object_value(&self) -> &str {
		&self.value
	}

	/// Whether the dumped value is absent.
	pub fn is_null(&self) -> bool {
		self.raw.is_none()
	}

	/// Toggles inherited by this node's children.
	pub fn options(&self) -> DumpOptions {
		self.options
	}

	/// Public instance fields, sorted by name.
	pub fn public_fields(&self) -> Members<'_> {
		match self.raw.as_deref() {
			Some(owner) => Members::fields(owner, self.options),
			None => Members::empty(),
		}
	}

	/// Public non-indexed instance properties, sorted by name.
	///
	/// Empty unless [`DumpOptions::include_properties`] is set. A failing
	/// getter yields a child whose value is the [`crate::dump::InspectError`].
	pub fn properties(&self) -> Members<'_> {
		match self.raw.as_deref() {
			Some(owner) if self.options.include_properties => Members::properties(owner, self.options),
			_ => Members::empty(),
		}
	}

	/// Container elements in iteration order, named `[0]`, `[1]`, ...
	///
	/// Empty unless [`DumpOptions::include_enumerable`] is set and the value
	/// is iterable. Iteration failures are yielded as `Err`.
	pub fn enumerable_members(&self) -> EnumerableMembers<'_> {
		match self.raw.as_deref() {
			Some(owner) if self.options.include_enumerable => EnumerableMembers::new(owner, self.options),
			_ => EnumerableMembers::empty(),
		}
	}
}

fn describe(value: &dyn Inspect) -> String {
	match guard::contain(|| value.describe()) {
		Ok(text) => text,
		Err(err) => {
			tracing::debug!(ty = %value.runtime_type(), error = %err, "describe failed");
			format!("{EXCEPTION_PREFIX}{err}")
		}
	}
}

#[cfg(test)]
mod tests;
