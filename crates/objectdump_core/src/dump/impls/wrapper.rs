use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::dump::{DumpType, Elements, Field, Inspect, InspectError, PropertyInfo, Raw};

// Pointers are transparent: the runtime identity is the pointee's.
macro_rules! transparent_pointer {
	($($ptr:ident),* $(,)?) => {
		$(
			impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
				fn runtime_type(&self) -> DumpType {
					(**self).runtime_type()
				}

				fn is_null(&self) -> bool {
					(**self).is_null()
				}

				fn describe(&self) -> Result<String, InspectError> {
					(**self).describe()
				}

				fn fields(&self) -> Vec<Field<'_>> {
					(**self).fields()
				}

				fn properties(&self) -> Vec<PropertyInfo> {
					(**self).properties()
				}

				fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
					(**self).property(name)
				}

				fn elements(&self) -> Option<Elements<'_>> {
					(**self).elements()
				}
			}
		)*
	};
}

transparent_pointer!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
	fn runtime_type(&self) -> DumpType {
		(**self).runtime_type()
	}

	fn is_null(&self) -> bool {
		(**self).is_null()
	}

	fn describe(&self) -> Result<String, InspectError> {
		(**self).describe()
	}

	fn fields(&self) -> Vec<Field<'_>> {
		(**self).fields()
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		(**self).properties()
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		(**self).property(name)
	}

	fn elements(&self) -> Option<Elements<'_>> {
		(**self).elements()
	}
}

impl<T: Inspect> Inspect for Option<T> {
	fn runtime_type(&self) -> DumpType {
		match self {
			Some(value) => value.runtime_type(),
			None => DumpType::Null,
		}
	}

	fn is_null(&self) -> bool {
		self.as_ref().is_none_or(Inspect::is_null)
	}

	fn describe(&self) -> Result<String, InspectError> {
		match self {
			Some(value) => value.describe(),
			None => Ok(String::new()),
		}
	}

	fn fields(&self) -> Vec<Field<'_>> {
		self.as_ref().map(Inspect::fields).unwrap_or_default()
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		self.as_ref().map(Inspect::properties).unwrap_or_default()
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		match self {
			Some(value) => value.property(name),
			None => Ok(None),
		}
	}

	fn elements(&self) -> Option<Elements<'_>> {
		self.as_ref().and_then(Inspect::elements)
	}
}

// Only the description: members would outlive the borrow guard.
impl<T: Inspect> Inspect for RefCell<T> {
	fn describe(&self) -> Result<String, InspectError> {
		let inner = self.try_borrow().map_err(|err| InspectError::msg(err.to_string()))?;
		inner.describe()
	}
}
