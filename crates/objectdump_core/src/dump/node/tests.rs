use crate::dump::test_support::{Faulty, Record};
use crate::dump::{DumpNode, DumpOptions, DumpType, EXCEPTION_PREFIX, NULL_VALUE, Raw};

#[test]
fn absent_value_uses_null_sentinel_and_has_no_children() {
	let node = DumpNode::new(None, DumpType::of::<String>(), "missing", DumpOptions::all());

	assert!(node.is_null());
	assert!(node.raw_object().is_none());
	assert_eq!(node.object_name(), "missing");
	assert_eq!(node.declared_type(), &DumpType::of::<String>());
	assert_eq!(node.actual_type(), &DumpType::Null);
	assert_eq!(node.object_value(), NULL_VALUE);
	assert_eq!(node.public_fields().count(), 0);
	assert_eq!(node.properties().count(), 0);
	assert_eq!(node.enumerable_members().count(), 0);
}

#[test]
fn null_reporting_value_is_treated_as_absent() {
	let value: Option<i32> = None;
	let node = DumpNode::new(Some(Raw::borrowed(&value)), DumpType::of::<Option<i32>>(), "opt", DumpOptions::default());

	assert!(node.is_null());
	assert_eq!(node.actual_type(), &DumpType::Null);
	assert_eq!(node.object_value(), "<null>");
}

#[test]
fn actual_type_comes_from_value_not_declaration() {
	let value = Some(5_u16);
	let node = DumpNode::new(Some(Raw::borrowed(&value)), DumpType::Any, "n", DumpOptions::default());

	assert_eq!(node.declared_type(), &DumpType::Any);
	assert_eq!(node.actual_type(), &DumpType::of::<u16>());
	assert_eq!(node.object_value(), "5");
}

#[test]
fn failing_describe_is_reported_not_propagated() {
	let value = Faulty::default();
	let node = DumpNode::new(Some(Raw::borrowed(&value)), DumpType::of::<Faulty>(), "faulty", DumpOptions::default());

	assert!(node.object_value().starts_with(EXCEPTION_PREFIX), "got {}", node.object_value());
	assert_eq!(node.object_value(), "<Exception>: describe exploded");
	assert_eq!(node.actual_type(), &DumpType::of::<Faulty>());
}

#[test]
fn panicking_describe_is_reported_not_propagated() {
	struct Loud;
	impl crate::dump::Inspect for Loud {
		fn describe(&self) -> Result<String, crate::dump::InspectError> {
			panic!("display blew up")
		}
	}

	let node = DumpNode::new(Some(Raw::owned(Loud)), DumpType::Any, "loud", DumpOptions::default());
	assert_eq!(node.object_value(), "<Exception>: panicked: display blew up");
}

#[test]
fn default_describe_is_runtime_type_name() {
	let value = Record::sample();
	let node = DumpNode::new(Some(Raw::borrowed(&value)), DumpType::Any, "rec", DumpOptions::default());

	assert_eq!(node.object_value(), DumpType::of::<Record>().as_str());
}

#[test]
fn toggles_are_inherited_by_children() {
	let value = vec![Record::sample()];
	let options = DumpOptions::default().with_enumerable(true);
	let node = DumpNode::new(Some(Raw::borrowed(&value)), DumpType::of::<Vec<Record>>(), "records", options);

	let child = node.enumerable_members().next().expect("one element").expect("iteration succeeds");
	assert_eq!(child.options(), options);
	assert_eq!(child.properties().count(), 0, "properties stay disabled on descendants");
}
