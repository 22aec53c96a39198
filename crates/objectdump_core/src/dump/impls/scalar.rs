use std::time::Duration;

use crate::dump::{Elements, Inspect, InspectError, PropertyInfo, Raw};

macro_rules! display_scalar {
	($($ty:ty),* $(,)?) => {
		$(
			impl Inspect for $ty {
				fn describe(&self) -> Result<String, InspectError> {
					Ok(self.to_string())
				}
			}
		)*
	};
}

display_scalar!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Inspect for () {
	fn describe(&self) -> Result<String, InspectError> {
		Ok("()".to_owned())
	}
}

impl Inspect for str {
	fn describe(&self) -> Result<String, InspectError> {
		Ok(self.to_owned())
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		text_properties()
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		text_property(self, self, name)
	}

	fn elements(&self) -> Option<Elements<'_>> {
		Some(Elements::owned(self.chars()))
	}
}

impl Inspect for String {
	fn describe(&self) -> Result<String, InspectError> {
		Ok(self.clone())
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		let mut props = text_properties();
		props.push(PropertyInfo::of::<usize>("capacity"));
		props
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		match name {
			"capacity" => Ok(Some(Raw::owned(self.capacity()))),
			_ => text_property(self, self, name),
		}
	}

	fn elements(&self) -> Option<Elements<'_>> {
		Some(Elements::owned(self.chars()))
	}
}

fn text_properties() -> Vec<PropertyInfo> {
	vec![
		PropertyInfo::of::<usize>("len"),
		PropertyInfo::of::<bool>("is_empty"),
		PropertyInfo::of::<char>("get").indexed(1),
	]
}

fn text_property<'a, T: Inspect + ?Sized>(owner: &T, text: &str, name: &str) -> Result<Option<Raw<'a>>, InspectError> {
	match name {
		"len" => Ok(Some(Raw::owned(text.len()))),
		"is_empty" => Ok(Some(Raw::owned(text.is_empty()))),
		"get" => Err(InspectError::indexed_property(owner, name)),
		_ => Err(InspectError::unknown_property(owner, name)),
	}
}

impl Inspect for Duration {
	fn describe(&self) -> Result<String, InspectError> {
		Ok(format!("{self:?}"))
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		vec![
			PropertyInfo::of::<u64>("as_secs"),
			PropertyInfo::of::<f64>("as_secs_f64"),
			PropertyInfo::of::<bool>("is_zero"),
			PropertyInfo::of::<u32>("subsec_nanos"),
		]
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		match name {
			"as_secs" => Ok(Some(Raw::owned(self.as_secs()))),
			"as_secs_f64" => Ok(Some(Raw::owned(self.as_secs_f64()))),
			"is_zero" => Ok(Some(Raw::owned(self.is_zero()))),
			"subsec_nanos" => Ok(Some(Raw::owned(self.subsec_nanos()))),
			_ => Err(InspectError::unknown_property(self, name)),
		}
	}
}
