use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use crate::dump::impls::{Entry, describe_member};
use crate::dump::{Elements, Field, Inspect, InspectError, PropertyInfo, Raw};

fn len_properties(indexer: Option<PropertyInfo>) -> Vec<PropertyInfo> {
	let mut props = vec![PropertyInfo::of::<usize>("len"), PropertyInfo::of::<bool>("is_empty")];
	props.extend(indexer);
	props
}

fn len_property<'a, T: Inspect + ?Sized>(owner: &T, len: usize, name: &str) -> Result<Option<Raw<'a>>, InspectError> {
	match name {
		"len" => Ok(Some(Raw::owned(len))),
		"is_empty" => Ok(Some(Raw::owned(len == 0))),
		"get" => Err(InspectError::indexed_property(owner, name)),
		_ => Err(InspectError::unknown_property(owner, name)),
	}
}

macro_rules! sequence {
	($($ty:ty, indexed = $indexed:expr);* $(;)?) => {
		$(
			impl<T: Inspect> Inspect for $ty {
				fn properties(&self) -> Vec<PropertyInfo> {
					len_properties($indexed.then(|| PropertyInfo::of::<T>("get").indexed(1)))
				}

				fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
					len_property(self, self.len(), name)
				}

				fn elements(&self) -> Option<Elements<'_>> {
					Some(Elements::of(self.iter()))
				}
			}
		)*
	};
}

sequence! {
	[T], indexed = true;
	VecDeque<T>, indexed = true;
	LinkedList<T>, indexed = false;
	BTreeSet<T>, indexed = false;
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
	fn properties(&self) -> Vec<PropertyInfo> {
		len_properties(None)
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		len_property(self, self.len(), name)
	}

	fn elements(&self) -> Option<Elements<'_>> {
		Some(Elements::of(self.iter()))
	}
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
	fn properties(&self) -> Vec<PropertyInfo> {
		self.as_slice().properties()
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		len_property(self, N, name)
	}

	fn elements(&self) -> Option<Elements<'_>> {
		Some(Elements::of(self.iter()))
	}
}

impl<T: Inspect> Inspect for Vec<T> {
	fn properties(&self) -> Vec<PropertyInfo> {
		let mut props = self.as_slice().properties();
		props.push(PropertyInfo::of::<usize>("capacity"));
		props
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		match name {
			"capacity" => Ok(Some(Raw::owned(self.capacity()))),
			_ => len_property(self, self.len(), name),
		}
	}

	fn elements(&self) -> Option<Elements<'_>> {
		Some(Elements::of(self.iter()))
	}
}

macro_rules! map {
	($($ty:ident $(, $bound:ident)?);* $(;)?) => {
		$(
			impl<K: Inspect, V: Inspect $(, $bound)?> Inspect for $ty<K, V $(, $bound)?> {
				fn properties(&self) -> Vec<PropertyInfo> {
					len_properties(Some(PropertyInfo::of::<V>("get").indexed(1)))
				}

				fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
					len_property(self, self.len(), name)
				}

				fn elements(&self) -> Option<Elements<'_>> {
					Some(Elements::owned(self.iter().map(|(key, value)| Entry { key, value })))
				}
			}
		)*
	};
}

map! {
	HashMap, S;
	BTreeMap;
}

macro_rules! tuple {
	($(($($idx:tt $name:ident),+)),+ $(,)?) => {
		$(
			impl<$($name: Inspect),+> Inspect for ($($name,)+) {
				fn describe(&self) -> Result<String, InspectError> {
					let parts = [$(describe_member(&self.$idx)?),+];
					Ok(format!("({})", parts.join(", ")))
				}

				fn fields(&self) -> Vec<Field<'_>> {
					vec![$(Field::of(stringify!($idx), &self.$idx)),+]
				}
			}
		)+
	};
}

tuple! {
	(0 A),
	(0 A, 1 B),
	(0 A, 1 B, 2 C),
	(0 A, 1 B, 2 C, 3 D),
	(0 A, 1 B, 2 C, 3 D, 4 E),
	(0 A, 1 B, 2 C, 3 D, 4 E, 5 F),
}
