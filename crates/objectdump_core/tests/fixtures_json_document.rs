#![allow(missing_docs)]

use objectdump::dump::{DumpNode, DumpOptions, DumpType, MemberPath, dump};
use objectdump_testkit::fixture_bytes;
use serde_json::Value;

fn document() -> Value {
	serde_json::from_slice(&fixture_bytes("document.json")).expect("fixture is valid json")
}

fn summary(node: &DumpNode<'_>) -> (String, String, String) {
	(node.object_name().to_owned(), node.actual_type().to_string(), node.object_value().to_owned())
}

#[test]
fn object_keys_are_sorted_public_fields() {
	let doc = document();
	let root = dump(&doc, "document", DumpOptions::default()).expect("object root");

	assert_eq!(root.actual_type(), &DumpType::named("json::Object"));
	let names: Vec<String> = root.public_fields().map(|node| node.object_name().to_owned()).collect();
	assert_eq!(names, ["homepage", "name", "owner", "stable", "tags", "version"]);

	let fields: Vec<_> = root.public_fields().map(|node| summary(&node)).collect();
	assert_eq!(fields[0], ("homepage".to_owned(), "null".to_owned(), "<null>".to_owned()));
	assert_eq!(fields[1], ("name".to_owned(), "json::String".to_owned(), "objectdump".to_owned()));
	assert_eq!(fields[3], ("stable".to_owned(), "json::Bool".to_owned(), "true".to_owned()));
	assert_eq!(fields[5], ("version".to_owned(), "json::Number".to_owned(), "3".to_owned()));
}

#[test]
fn arrays_are_typed_enumerables() {
	let doc = document();
	let root = dump(&doc, "document", DumpOptions::all()).expect("object root");

	let tags = root
		.visit_path(&MemberPath::parse("tags").expect("path"), |node| {
			node.enumerable_members()
				.map(|item| item.expect("json arrays never fail"))
				.map(|child| (child.object_name().to_owned(), child.declared_type().to_string(), child.object_value().to_owned()))
				.collect::<Vec<_>>()
		})
		.expect("tags field");

	let value_type = DumpType::of::<Value>().to_string();
	assert_eq!(
		tags,
		[
			("[0]".to_owned(), value_type.clone(), "debugging".to_owned()),
			("[1]".to_owned(), value_type, "inspect".to_owned()),
		]
	);
}

#[test]
fn nested_objects_resolve_through_paths() {
	let doc = document();
	let root = dump(&doc, "document", DumpOptions::all()).expect("object root");

	let id = root
		.visit_path(&MemberPath::parse("owner.id").expect("path"), |node| node.object_value().to_owned())
		.expect("nested field");
	assert_eq!(id, "4021");

	let len = root
		.visit_path(&MemberPath::parse("owner.len").expect("path"), |node| node.object_value().to_owned())
		.expect("object len property");
	assert_eq!(len, "2");
}

#[test]
fn objects_describe_as_compact_json() {
	let doc = document();
	let root = dump(&doc, "document", DumpOptions::default()).expect("object root");

	let owner = root
		.visit_path(&MemberPath::parse("owner").expect("path"), |node| node.object_value().to_owned())
		.expect("owner field");
	assert_eq!(owner, r#"{"id":4021,"login":"dumper"}"#);
}
