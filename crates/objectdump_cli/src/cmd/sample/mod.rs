use std::collections::BTreeSet;
use std::path::PathBuf;

use objectdump::dump::{Field, Inspect, InspectError, PropertyInfo, Raw};
use serde::Deserialize;

use crate::cmd::Result;
use crate::cmd::input::read_input;
use crate::cmd::view::{ViewArgs, show};

#[derive(clap::Args)]
pub struct Args {
	/// Inventory JSON file to load instead of the built-in sample.
	#[arg(long)]
	pub file: Option<PathBuf>,
	#[command(flatten)]
	pub view: ViewArgs,
}

/// Dump an inventory, loaded from `--file` or built in.
pub fn run(args: Args) -> Result<()> {
	let Args { file, view } = args;

	let inventory = match file {
		Some(path) => Inventory::from_json(&read_input(&path)?)?,
		None => Inventory::builtin(),
	};
	show(&inventory, "inventory", view.dump_options(), &view)
}

/// Stock listing for one location.
#[derive(Debug, Clone, Deserialize)]
pub struct Inventory {
	pub owner: String,
	pub items: Vec<Item>,
	#[serde(default)]
	pub tags: BTreeSet<String>,
	#[serde(default)]
	pub note: Option<String>,
}

/// One stocked article.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
	pub sku: String,
	pub quantity: u32,
	pub unit_price: f64,
}

impl Inventory {
	/// Parse an inventory from JSON bytes.
	pub fn from_json(bytes: &[u8]) -> Result<Self> {
		Ok(serde_json::from_slice(bytes)?)
	}

	/// Small fixed inventory used when no file is given.
	pub fn builtin() -> Self {
		Self {
			owner: "demo depot".to_owned(),
			items: vec![Item::new("GEAR-1", 12, 4.5), Item::new("BELT-2", 3, 12.25), Item::new("CHAIN-3", 0, 30.0)],
			tags: ["demo", "mechanical"].into_iter().map(str::to_owned).collect(),
			note: None,
		}
	}

	/// Sum of all item subtotals.
	pub fn total_value(&self) -> f64 {
		self.items.iter().map(Item::subtotal).sum()
	}

	/// Mean unit price; fails for an empty inventory.
	pub fn average_price(&self) -> std::result::Result<f64, InspectError> {
		if self.items.is_empty() {
			return Err(InspectError::msg("inventory has no items"));
		}
		Ok(self.items.iter().map(|item| item.unit_price).sum::<f64>() / self.items.len() as f64)
	}
}

impl Item {
	pub fn new(sku: &str, quantity: u32, unit_price: f64) -> Self {
		Self {
			sku: sku.to_owned(),
			quantity,
			unit_price,
		}
	}

	pub fn subtotal(&self) -> f64 {
		f64::from(self.quantity) * self.unit_price
	}

	pub fn in_stock(&self) -> bool {
		self.quantity > 0
	}
}

impl Inspect for Inventory {
	fn describe(&self) -> std::result::Result<String, InspectError> {
		Ok(format!("{} ({} items)", self.owner, self.items.len()))
	}

	fn fields(&self) -> Vec<Field<'_>> {
		vec![
			Field::of("owner", &self.owner),
			Field::of("items", &self.items),
			Field::of("tags", &self.tags),
			Field::of("note", &self.note),
		]
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		vec![
			PropertyInfo::of::<f64>("total_value"),
			PropertyInfo::of::<f64>("average_price"),
			PropertyInfo::of::<usize>("item_count"),
		]
	}

	fn property(&self, name: &str) -> std::result::Result<Option<Raw<'_>>, InspectError> {
		match name {
			"total_value" => Ok(Some(Raw::owned(self.total_value()))),
			"average_price" => Ok(Some(Raw::owned(self.average_price()?))),
			"item_count" => Ok(Some(Raw::owned(self.items.len()))),
			_ => Err(InspectError::unknown_property(self, name)),
		}
	}
}

impl Inspect for Item {
	fn describe(&self) -> std::result::Result<String, InspectError> {
		Ok(format!("{} x{}", self.sku, self.quantity))
	}

	fn fields(&self) -> Vec<Field<'_>> {
		vec![
			Field::of("sku", &self.sku),
			Field::of("quantity", &self.quantity),
			Field::of("unit_price", &self.unit_price),
		]
	}

	fn properties(&self) -> Vec<PropertyInfo> {
		vec![PropertyInfo::of::<f64>("subtotal"), PropertyInfo::of::<bool>("in_stock")]
	}

	fn property(&self, name: &str) -> std::result::Result<Option<Raw<'_>>, InspectError> {
		match name {
			"subtotal" => Ok(Some(Raw::owned(self.subtotal()))),
			"in_stock" => Ok(Some(Raw::owned(self.in_stock()))),
			_ => Err(InspectError::unknown_property(self, name)),
		}
	}
}

#[cfg(test)]
mod tests;
