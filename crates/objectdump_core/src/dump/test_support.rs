use std::cell::Cell;

use crate::dump::{DumpType, Elements, Field, Inspect, InspectError, PropertyInfo, Raw};

/// Record with one public field and one property.
pub(crate) struct Record {
	pub(crate) count: i32,
	pub(crate) name: String,
	pub(crate) secret: u8,
}

impl Record {
	pub(crate) fn sample() -> Self {
		Self {
			count: 3,
			name: "abc".to_owned(),
			secret: 9,
		}
	}
}

impl Inspect for Record {
	fn fields(&self) -> Vec<Field<'_>> {
		vec![
			Field::of("Count", &self.count),
			Field::of("secret", &self.secret).non_public(),
			Field::new("INSTANCES", DumpType::of::<u32>(), Some(Raw::owned(1_u32))).static_binding(),
		]
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		vec![
			PropertyInfo::of::<String>("Name"),
			PropertyInfo::of::<u8>("Secret").non_public(),
			PropertyInfo::of::<u32>("Created").static_binding(),
		]
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		match name {
			"Name" => Ok(Some(Raw::borrowed(&self.name))),
			"Secret" => Ok(Some(Raw::borrowed(&self.secret))),
			"Created" => Ok(Some(Raw::owned(0_u32))),
			_ => Err(InspectError::unknown_property(self, name)),
		}
	}
}

/// Value whose describe and some getters fail, counting getter calls.
#[derive(Default)]
pub(crate) struct Faulty {
	pub(crate) getter_calls: Cell<usize>,
}

impl Inspect for Faulty {
	fn describe(&self) -> Result<String, InspectError> {
		Err(InspectError::msg("describe exploded"))
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		vec![
			PropertyInfo::of::<i32>("Panicky"),
			PropertyInfo::of::<i32>("Fine"),
			PropertyInfo::of::<i32>("Broken"),
			PropertyInfo::of::<i32>("Item").indexed(1),
		]
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		self.getter_calls.set(self.getter_calls.get() + 1);
		match name {
			"Fine" => Ok(Some(Raw::owned(1_i32))),
			"Broken" => Err(InspectError::msg("getter exploded")),
			"Panicky" => panic!("getter panicked"),
			"Item" => panic!("indexers must not be read"),
			_ => Err(InspectError::unknown_property(self, name)),
		}
	}
}

/// Container whose iteration fails at a given position.
pub(crate) struct Flaky {
	pub(crate) items: Vec<i32>,
	pub(crate) fail_at: usize,
}

impl Inspect for Flaky {
	fn elements(&self) -> Option<Elements<'_>> {
		let fail_at = self.fail_at;
		let iter = self.items.iter().enumerate().map(move |(index, item)| {
			if index == fail_at {
				Err(InspectError::msg(format!("element {index} unreadable")))
			} else {
				Ok(Some(Raw::borrowed(item)))
			}
		});
		Some(Elements::fallible(DumpType::of::<i32>(), iter))
	}
}

/// Untyped container mixing absent and present elements.
pub(crate) struct Bag {
	pub(crate) items: Vec<Option<String>>,
}

impl Inspect for Bag {
	fn elements(&self) -> Option<Elements<'_>> {
		Some(Elements::untyped(self.items.iter().map(|item| Ok::<_, InspectError>(item.as_ref().map(Raw::borrowed)))))
	}
}
