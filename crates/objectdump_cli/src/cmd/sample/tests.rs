use objectdump::dump::{DumpOptions, DumpType, InspectError, MemberPath, dump};
use objectdump_testkit::fixture_bytes;

use super::{Inventory, Item};
use crate::cmd::view::{ViewArgs, render};

fn small() -> Inventory {
	Inventory {
		owner: "shed".to_owned(),
		items: vec![Item::new("A", 2, 0.5), Item::new("B", 0, 1.5)],
		tags: Default::default(),
		note: None,
	}
}

fn view(path_expr: Option<&str>) -> ViewArgs {
	ViewArgs {
		properties: true,
		enumerable: true,
		path_expr: path_expr.map(str::to_owned),
		compact: false,
		max_depth: None,
		max_items: None,
		max_value_len: None,
	}
}

fn value_at(inventory: &Inventory, path: &str) -> String {
	let root = dump(inventory, "inventory", DumpOptions::all()).expect("present root");
	root.visit_path(&MemberPath::parse(path).expect("path"), |node| node.object_value().to_owned())
		.expect("member exists")
}

#[test]
fn computed_properties_are_sorted_and_evaluated() {
	let inventory = small();
	let root = dump(&inventory, "inventory", DumpOptions::all()).expect("present root");

	let props: Vec<(String, String)> = root
		.properties()
		.map(|node| (node.object_name().to_owned(), node.object_value().to_owned()))
		.collect();
	assert_eq!(
		props,
		[
			("average_price".to_owned(), "1".to_owned()),
			("item_count".to_owned(), "2".to_owned()),
			("total_value".to_owned(), "1".to_owned()),
		]
	);

	let fields: Vec<String> = root.public_fields().map(|node| node.object_name().to_owned()).collect();
	assert_eq!(fields, ["items", "note", "owner", "tags"]);
}

#[test]
fn empty_inventory_surfaces_getter_failure() {
	let inventory = Inventory::from_json(&fixture_bytes("empty_inventory.json")).expect("fixture parses");
	let root = dump(&inventory, "inventory", DumpOptions::all()).expect("present root");

	let average = root.properties().next().expect("average_price is first");
	assert_eq!(average.object_value(), "inventory has no items");
	assert_eq!(average.actual_type(), &DumpType::of::<InspectError>());
	assert_eq!(value_at(&inventory, "note"), "closed for audit");
}

#[test]
fn fixture_items_resolve_through_paths() {
	let inventory = Inventory::from_json(&fixture_bytes("inventory.json")).expect("fixture parses");

	assert_eq!(value_at(&inventory, "owner"), "north warehouse");
	assert_eq!(value_at(&inventory, "items[0].sku"), "BOLT-10");
	assert_eq!(value_at(&inventory, "items[2].in_stock"), "false");
	assert_eq!(value_at(&inventory, "items.len"), "3");
}

#[test]
fn path_selection_renders_only_the_selected_subtree() {
	let out = render(&Inventory::builtin(), "inventory", DumpOptions::all(), &view(Some("items[1]"))).expect("render succeeds");
	let first = out.lines().next().expect("at least one line");
	assert!(first.starts_with("[1]: "), "got {first}");
	assert!(first.ends_with(" = BELT-2 x3"), "got {first}");
	assert!(out.lines().any(|line| line == "  in_stock: bool = true"));
}

#[test]
fn unknown_path_is_an_error() {
	let err = render(&small(), "inventory", DumpOptions::all(), &view(Some("missing"))).expect_err("no such member");
	assert!(err.to_string().contains("missing"), "got {err}");
}
