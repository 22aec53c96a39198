mod collections;
#[cfg(feature = "chrono")]
mod datetime;
#[cfg(feature = "json")]
mod json;
mod scalar;
mod wrapper;

use crate::dump::{Field, Inspect, InspectError};

/// Key/value pair yielded when iterating a map.
///
/// Described as `[key, value]`; exposes `key` and `value` as public fields.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a, K, V> {
	/// Entry key.
	pub key: &'a K,
	/// Entry value.
	pub value: &'a V,
}

impl<K: Inspect, V: Inspect> Inspect for Entry<'_, K, V> {
	fn describe(&self) -> Result<String, InspectError> {
		Ok(format!("[{}, {}]", describe_member(self.key)?, describe_member(self.value)?))
	}

	fn fields(&self) -> Vec<Field<'_>> {
		vec![Field::of("key", self.key), Field::of("value", self.value)]
	}
}

/// Describe a nested value, rendering absent values as empty text.
pub(crate) fn describe_member(value: &dyn Inspect) -> Result<String, InspectError> {
	if value.is_null() { Ok(String::new()) } else { value.describe() }
}
