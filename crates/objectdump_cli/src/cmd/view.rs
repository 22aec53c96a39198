use objectdump::dump::{DumpOptions, Inspect, MemberPath, dump};

use crate::cmd::Result;
use crate::cmd::render::{RenderOptions, render_tree};

/// Flags shared by every dump command.
#[derive(clap::Args, Debug, Clone)]
pub struct ViewArgs {
	/// Include computed properties.
	#[arg(long)]
	pub properties: bool,
	/// Include enumerable members.
	#[arg(long)]
	pub enumerable: bool,
	/// Render only the node selected by a member path, e.g. `items[0].sku`.
	#[arg(long = "path")]
	pub path_expr: Option<String>,
	/// Start from the shallow preset instead of the default limits.
	#[arg(long)]
	pub compact: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-items")]
	pub max_items: Option<usize>,
	#[arg(long = "max-value-len")]
	pub max_value_len: Option<usize>,
}

impl ViewArgs {
	/// Traversal toggles selected on the command line.
	pub fn dump_options(&self) -> DumpOptions {
		DumpOptions::default().with_properties(self.properties).with_enumerable(self.enumerable)
	}

	/// Rendering limits selected on the command line.
	pub fn render_options(&self) -> RenderOptions {
		let base = if self.compact { RenderOptions::compact() } else { RenderOptions::default() };
		RenderOptions {
			max_depth: self.max_depth.unwrap_or(base.max_depth),
			max_items: self.max_items.unwrap_or(base.max_items),
			max_value_len: self.max_value_len.unwrap_or(base.max_value_len),
		}
	}
}

/// Dump `value` and render it (or the node `--path` selects) to a string.
pub fn render<T: Inspect>(value: &T, name: &str, options: DumpOptions, view: &ViewArgs) -> Result<String> {
	let root = dump(value, name.to_owned(), options)?;
	let render_options = view.render_options();

	let mut out = String::new();
	match &view.path_expr {
		Some(path_expr) => {
			let path = MemberPath::parse(path_expr)?;
			tracing::debug!(path = %path, "rendering selected member");
			root.visit_path(&path, |node| render_tree(node, render_options, &mut out))??;
		}
		None => render_tree(&root, render_options, &mut out)?,
	}
	Ok(out)
}

/// Render and print to stdout.
pub fn show<T: Inspect>(value: &T, name: &str, options: DumpOptions, view: &ViewArgs) -> Result<()> {
	print!("{}", render(value, name, options, view)?);
	Ok(())
}
