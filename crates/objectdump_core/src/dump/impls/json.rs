use serde_json::Value;

use crate::dump::{DumpType, Elements, Field, Inspect, InspectError, PropertyInfo, Raw};

impl Inspect for Value {
	fn runtime_type(&self) -> DumpType {
		match self {
			Value::Null => DumpType::Null,
			Value::Bool(_) => DumpType::named("json::Bool"),
			Value::Number(_) => DumpType::named("json::Number"),
			Value::String(_) => DumpType::named("json::String"),
			Value::Array(_) => DumpType::named("json::Array"),
			Value::Object(_) => DumpType::named("json::Object"),
		}
	}

	fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	fn describe(&self) -> Result<String, InspectError> {
		match self {
			Value::String(text) => Ok(text.clone()),
			other => Ok(other.to_string()),
		}
	}

	fn fields(&self) -> Vec<Field<'_>> {
		let Value::Object(map) = self else {
			return Vec::new();
		};
		map.iter()
			.map(|(key, value)| Field::new(key.clone(), DumpType::of::<Value>(), Some(Raw::borrowed(value))))
			.collect()
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		match self {
			Value::String(_) | Value::Array(_) | Value::Object(_) => {
				vec![PropertyInfo::of::<usize>("len"), PropertyInfo::of::<bool>("is_empty")]
			}
			_ => Vec::new(),
		}
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		let len = match self {
			Value::String(text) => text.len(),
			Value::Array(items) => items.len(),
			Value::Object(map) => map.len(),
			_ => return Err(InspectError::unknown_property(self, name)),
		};
		match name {
			"len" => Ok(Some(Raw::owned(len))),
			"is_empty" => Ok(Some(Raw::owned(len == 0))),
			_ => Err(InspectError::unknown_property(self, name)),
		}
	}

	fn elements(&self) -> Option<Elements<'_>> {
		match self {
			Value::Array(items) => Some(Elements::of(items.iter())),
			_ => None,
		}
	}
}
