use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Weekday};

use crate::dump::{Inspect, InspectError, PropertyInfo, Raw};

fn date_properties() -> Vec<PropertyInfo> {
	vec![
		PropertyInfo::of::<u32>("day"),
		PropertyInfo::of::<u32>("month"),
		PropertyInfo::of::<u32>("ordinal"),
		PropertyInfo::of::<Weekday>("weekday"),
		PropertyInfo::of::<i32>("year"),
	]
}

fn date_property<'a>(date: &impl Datelike, name: &str) -> Option<Raw<'a>> {
	let value = match name {
		"day" => Raw::owned(date.day()),
		"month" => Raw::owned(date.month()),
		"ordinal" => Raw::owned(date.ordinal()),
		"weekday" => Raw::owned(date.weekday()),
		"year" => Raw::owned(date.year()),
		_ => return None,
	};
	Some(value)
}

fn time_properties() -> Vec<PropertyInfo> {
	vec![
		PropertyInfo::of::<u32>("hour"),
		PropertyInfo::of::<u32>("minute"),
		PropertyInfo::of::<u32>("nanosecond"),
		PropertyInfo::of::<u32>("second"),
	]
}

fn time_property<'a>(time: &impl Timelike, name: &str) -> Option<Raw<'a>> {
	let value = match name {
		"hour" => Raw::owned(time.hour()),
		"minute" => Raw::owned(time.minute()),
		"nanosecond" => Raw::owned(time.nanosecond()),
		"second" => Raw::owned(time.second()),
		_ => return None,
	};
	Some(value)
}

impl<Tz: TimeZone> Inspect for DateTime<Tz>
where
	Tz::Offset: Display,
{
	fn describe(&self) -> Result<String, InspectError> {
		Ok(self.to_rfc3339())
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		let mut props = date_properties();
		props.extend(time_properties());
		props.push(PropertyInfo::of::<NaiveDate>("date_naive"));
		props.push(PropertyInfo::of::<String>("offset"));
		props.push(PropertyInfo::of::<NaiveTime>("time"));
		props.push(PropertyInfo::of::<i64>("timestamp"));
		props
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		let value = match name {
			"date_naive" => Raw::owned(self.date_naive()),
			"offset" => Raw::owned(self.offset().to_string()),
			"time" => Raw::owned(self.time()),
			"timestamp" => Raw::owned(self.timestamp()),
			_ => date_property(self, name)
				.or_else(|| time_property(self, name))
				.ok_or_else(|| InspectError::unknown_property(self, name))?,
		};
		Ok(Some(value))
	}
}

impl Inspect for NaiveDateTime {
	fn describe(&self) -> Result<String, InspectError> {
		Ok(self.to_string())
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		vec![PropertyInfo::of::<NaiveDate>("date"), PropertyInfo::of::<NaiveTime>("time")]
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		match name {
			"date" => Ok(Some(Raw::owned(self.date()))),
			"time" => Ok(Some(Raw::owned(self.time()))),
			_ => Err(InspectError::unknown_property(self, name)),
		}
	}
}

impl Inspect for NaiveDate {
	fn describe(&self) -> Result<String, InspectError> {
		Ok(self.to_string())
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		date_properties()
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		date_property(self, name).map(Some).ok_or_else(|| InspectError::unknown_property(self, name))
	}
}

impl Inspect for NaiveTime {
	fn describe(&self) -> Result<String, InspectError> {
		Ok(self.to_string())
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		time_properties()
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		time_property(self, name).map(Some).ok_or_else(|| InspectError::unknown_property(self, name))
	}
}

impl Inspect for Weekday {
	fn describe(&self) -> Result<String, InspectError> {
		Ok(self.to_string())
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		vec![PropertyInfo::of::<u32>("number_from_monday")]
	}

	fn property(&self, name: &str) -> Result<Option<Raw<'_>>, InspectError> {
		match name {
			"number_from_monday" => Ok(Some(Raw::owned(self.number_from_monday()))),
			_ => Err(InspectError::unknown_property(self, name)),
		}
	}
}
