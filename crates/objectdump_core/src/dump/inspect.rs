use std::borrow::Cow;
use std::ops::Deref;

use crate::dump::{DumpType, InspectError};

/// Runtime capability table for a dumpable type.
///
/// This trait stands in for runtime reflection: an impl lists the public
/// instance fields, the properties, and (for containers) the elements of a
/// value. Every method has a conservative default, so a minimal impl only
/// needs [`Inspect::describe`] or nothing at all.
///
/// All access is through `&self`. Getters and element iterators may still
/// have side effects through interior mutability; the dumper does not guard
/// against that.
pub trait Inspect {
	/// Runtime type of this value.
	///
	/// Wrapper impls (`Box`, `Option`, references) report their pointee's type.
	fn runtime_type(&self) -> DumpType {
		DumpType::of::<Self>()
	}

	/// Whether this value represents an absent value.
	fn is_null(&self) -> bool {
		false
	}

	/// Human-readable description of this value.
	///
	/// Defaults to the runtime type name.
	fn describe(&self) -> Result<String, InspectError> {
		Ok(self.runtime_type().to_string())
	}

	/// Field descriptors with their current values.
	fn fields(&self) -> Vec<Field<'_>> {
		Vec::new()
	}

	/// Property descriptors. Values are read through [`Inspect::property`].
	fn properties(&self) -> Vec<PropertyInfo> {
		Vec::new()
	}

	/// Invoke the getter of the named property.
	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		Err(InspectError::unknown_property(self, name))
	}

	/// Elements of this value when it is iterable.
	fn elements(&self) -> Option<Elements<'_>> {
		None
	}
}

/// Handle to a dumped value: a borrow into the inspected graph or an owned
/// value computed by a getter.
pub enum Raw<'a> {
	/// Value living in the inspected graph.
	Borrowed(&'a dyn Inspect),
	/// Value produced on demand.
	Owned(Box<dyn Inspect + 'a>),
}

impl<'a> Raw<'a> {
	/// Borrow a value from the inspected graph.
	pub fn borrowed<T: Inspect>(value: &'a T) -> Self {
		Self::Borrowed(value)
	}

	/// Take ownership of a computed value.
	pub fn owned<T: Inspect + 'a>(value: T) -> Self {
		Self::Owned(Box::new(value))
	}
}

impl<'a> Deref for Raw<'a> {
	type Target = dyn Inspect + 'a;

	fn deref(&self) -> &Self::Target {
		match self {
			Self::Borrowed(value) => *value,
			Self::Owned(value) => value.as_ref(),
		}
	}
}

impl std::fmt::Debug for Raw<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let kind = match self {
			Self::Borrowed(_) => "Borrowed",
			Self::Owned(_) => "Owned",
		};
		f.debug_tuple(kind).field(&self.runtime_type()).finish()
	}
}

/// Member visibility as reported by a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
	/// Reachable by the dumper.
	#[default]
	Public,
	/// Listed for completeness; never dumped.
	NonPublic,
}

/// Member binding as reported by a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Binding {
	/// Per-value member.
	#[default]
	Instance,
	/// Type-level member shared by all values; never dumped.
	Static,
}

/// Field descriptor paired with its current value.
#[derive(Debug)]
pub struct Field<'a> {
	/// Field identifier.
	pub name: Cow<'static, str>,
	/// Declared field type.
	pub ty: DumpType,
	/// Field visibility.
	pub visibility: Visibility,
	/// Field binding.
	pub binding: Binding,
	/// Current value, `None` when absent.
	pub value: Option<Raw<'a>>,
}

impl<'a> Field<'a> {
	/// Public instance field declared as `T`.
	pub fn of<T: Inspect>(name: impl Into<Cow<'static, str>>, value: &'a T) -> Self {
		Self::new(name, DumpType::of::<T>(), Some(Raw::borrowed(value)))
	}

	/// Public instance field with an explicit declared type.
	pub fn new(name: impl Into<Cow<'static, str>>, ty: DumpType, value: Option<Raw<'a>>) -> Self {
		Self {
			name: name.into(),
			ty,
			visibility: Visibility::Public,
			binding: Binding::Instance,
			value,
		}
	}

	/// Mark the field as non-public.
	pub fn non_public(mut self) -> Self {
		self.visibility = Visibility::NonPublic;
		self
	}

	/// Mark the field as static.
	pub fn static_binding(mut self) -> Self {
		self.binding = Binding::Static;
		self
	}

	pub(crate) fn is_dumpable(&self) -> bool {
		self.visibility == Visibility::Public && self.binding == Binding::Instance
	}
}

/// Property descriptor; the value is read through [`Inspect::property`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
	/// Property identifier.
	pub name: Cow<'static, str>,
	/// Declared property type.
	pub ty: DumpType,
	/// Number of index parameters; indexers are never dumped.
	pub index_arity: usize,
	/// Property visibility.
	pub visibility: Visibility,
	/// Property binding.
	pub binding: Binding,
}

impl PropertyInfo {
	/// Public, non-indexed instance property declared as `T`.
	pub fn of<T: ?Sized>(name: impl Into<Cow<'static, str>>) -> Self {
		Self::new(name, DumpType::of::<T>())
	}

	/// Public, non-indexed instance property with an explicit declared type.
	pub fn new(name: impl Into<Cow<'static, str>>, ty: DumpType) -> Self {
		Self {
			name: name.into(),
			ty,
			index_arity: 0,
			visibility: Visibility::Public,
			binding: Binding::Instance,
		}
	}

	/// Mark the property as an indexer taking `arity` arguments.
	pub fn indexed(mut self, arity: usize) -> Self {
		self.index_arity = arity;
		self
	}

	/// Mark the property as non-public.
	pub fn non_public(mut self) -> Self {
		self.visibility = Visibility::NonPublic;
		self
	}

	/// Mark the property as static.
	pub fn static_binding(mut self) -> Self {
		self.binding = Binding::Static;
		self
	}

	pub(crate) fn is_dumpable(&self) -> bool {
		self.index_arity == 0 && self.visibility == Visibility::Public && self.binding == Binding::Instance
	}
}

/// Boxed element iterator. An `Err` item aborts the enumeration.
pub type ElementIter<'a> = Box<dyn Iterator<Item = Result<Option<Raw<'a>>, InspectError>> + 'a>;

/// Element source of an iterable value.
pub struct Elements<'a> {
	/// `T` of the first iterable-of-`T` capability; `None` for untyped iterables.
	pub element_type: Option<DumpType>,
	/// Fresh iterator over the elements.
	pub iter: ElementIter<'a>,
}

impl<'a> Elements<'a> {
	/// Typed iterable over borrowed elements.
	pub fn of<T: Inspect + 'a>(iter: impl Iterator<Item = &'a T> + 'a) -> Self {
		Self {
			element_type: Some(DumpType::of::<T>()),
			iter: Box::new(iter.map(|item| Ok::<_, InspectError>(Some(Raw::borrowed(item))))),
		}
	}

	/// Typed iterable over elements computed during iteration.
	pub fn owned<T: Inspect + 'a>(iter: impl Iterator<Item = T> + 'a) -> Self {
		Self {
			element_type: Some(DumpType::of::<T>()),
			iter: Box::new(iter.map(|item| Ok::<_, InspectError>(Some(Raw::owned(item))))),
		}
	}

	/// Untyped iterable; element declared type falls back to [`DumpType::Any`].
	pub fn untyped(iter: impl Iterator<Item = Result<Option<Raw<'a>>, InspectError>> + 'a) -> Self {
		Self {
			element_type: None,
			iter: Box::new(iter),
		}
	}

	/// Iterable with an explicit element type whose iteration may fail.
	pub fn fallible(element_type: DumpType, iter: impl Iterator<Item = Result<Option<Raw<'a>>, InspectError>> + 'a) -> Self {
		Self {
			element_type: Some(element_type),
			iter: Box::new(iter),
		}
	}
}
