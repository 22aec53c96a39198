use crate::dump::test_support::{Bag, Flaky};
use crate::dump::{DumpNode, DumpOptions, DumpType, Raw};

fn enumerable_root<'a, T: crate::dump::Inspect>(value: &'a T) -> DumpNode<'a> {
	DumpNode::new(Some(Raw::borrowed(value)), DumpType::of::<T>(), "Root", DumpOptions::default().with_enumerable(true))
}

#[test]
fn sequence_elements_are_named_by_position() {
	let value = vec!["a".to_owned(), "b".to_owned()];
	let node = enumerable_root(&value);

	let members: Vec<(String, String)> = node
		.enumerable_members()
		.map(|item| item.expect("vec iteration never fails"))
		.map(|child| (child.object_name().to_owned(), child.object_value().to_owned()))
		.collect();
	assert_eq!(members, [("[0]".to_owned(), "a".to_owned()), ("[1]".to_owned(), "b".to_owned())]);

	let first = node.enumerable_members().next().expect("element").expect("ok");
	assert_eq!(first.declared_type(), &DumpType::of::<String>());
}

#[test]
fn re_iteration_yields_identical_members() {
	let value = [10_u8, 20, 30];
	let node = enumerable_root(&value);

	let collect = || -> Vec<(String, String)> {
		node.enumerable_members()
			.map(|item| item.expect("array iteration never fails"))
			.map(|child| (child.object_name().to_owned(), child.object_value().to_owned()))
			.collect()
	};
	assert_eq!(collect(), collect());
	assert_eq!(collect().len(), 3);
}

#[test]
fn enumerable_members_are_empty_when_disabled() {
	let value = vec![1, 2, 3];
	let node = DumpNode::new(Some(Raw::borrowed(&value)), DumpType::Any, "Root", DumpOptions::default().with_properties(true));

	assert_eq!(node.enumerable_members().count(), 0);
}

#[test]
fn non_iterable_values_have_no_members() {
	let value = 42_i64;
	let node = enumerable_root(&value);

	assert_eq!(node.enumerable_members().count(), 0);
}

#[test]
fn untyped_elements_fall_back_to_any() {
	let value = Bag {
		items: vec![Some("x".to_owned()), None],
	};
	let node = enumerable_root(&value);

	let members: Vec<DumpNode<'_>> = node.enumerable_members().map(|item| item.expect("bag iteration never fails")).collect();
	assert_eq!(members.len(), 2);
	assert_eq!(members[0].declared_type(), &DumpType::Any);
	assert_eq!(members[0].actual_type(), &DumpType::of::<String>());
	assert!(members[1].is_null());
	assert_eq!(members[1].object_name(), "[1]");
	assert_eq!(members[1].object_value(), "<null>");
}

#[test]
fn iteration_failure_propagates_and_ends_the_sequence() {
	let value = Flaky {
		items: vec![1, 2, 3, 4],
		fail_at: 2,
	};
	let node = enumerable_root(&value);

	let mut members = node.enumerable_members();
	assert_eq!(members.next().expect("first").expect("ok").object_name(), "[0]");
	assert_eq!(members.next().expect("second").expect("ok").object_name(), "[1]");

	let err = members.next().expect("third item present").expect_err("third fails");
	assert_eq!(err.to_string(), "element 2 unreadable");
	assert!(members.next().is_none(), "sequence ends after a failure");
}

#[test]
fn map_entries_expose_key_and_value() {
	let value = std::collections::BTreeMap::from([("one", 1_i32), ("two", 2)]);
	let node = enumerable_root(&value);

	let entries: Vec<DumpNode<'_>> = node.enumerable_members().map(|item| item.expect("map iteration never fails")).collect();
	assert_eq!(entries.len(), 2);
	assert_eq!(entries[0].object_value(), "[one, 1]");
	assert_eq!(entries[1].object_name(), "[1]");

	let fields: Vec<(String, String)> = entries[1]
		.public_fields()
		.map(|child| (child.object_name().to_owned(), child.object_value().to_owned()))
		.collect();
	assert_eq!(fields, [("key".to_owned(), "two".to_owned()), ("value".to_owned(), "2".to_owned())]);
}
