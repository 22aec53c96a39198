use std::fmt::{self, Write};

use objectdump::dump::{DumpNode, InspectError};

/// Output truncation limits for rendered dump trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
	/// Depth below which nodes are listed but not expanded.
	pub max_depth: u32,
	/// Maximum number of children rendered per member sequence.
	pub max_items: usize,
	/// Maximum number of Unicode scalar values printed for value strings.
	pub max_value_len: usize,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			max_depth: 4,
			max_items: 32,
			max_value_len: 120,
		}
	}
}

impl RenderOptions {
	/// Preset for quick, shallow overviews.
	pub fn compact() -> Self {
		Self {
			max_depth: 2,
			max_items: 8,
			max_value_len: 60,
		}
	}
}

/// Render `node` and its children as indented lines.
///
/// Children are pulled lazily in the order public fields, properties,
/// enumerable members; nothing below `max_depth` is evaluated.
pub fn render_tree(node: &DumpNode<'_>, options: RenderOptions, out: &mut impl Write) -> fmt::Result {
	render_node(node, 0, options, out)
}

fn render_node(node: &DumpNode<'_>, depth: u32, options: RenderOptions, out: &mut impl Write) -> fmt::Result {
	write_line(node, depth, options, out)?;
	if depth >= options.max_depth {
		return Ok(());
	}

	render_members(node.public_fields().map(Ok), depth + 1, options, out)?;
	render_members(node.properties().map(Ok), depth + 1, options, out)?;
	render_members(node.enumerable_members(), depth + 1, options, out)
}

fn render_members<'n>(
	members: impl Iterator<Item = Result<DumpNode<'n>, InspectError>>,
	depth: u32,
	options: RenderOptions,
	out: &mut impl Write,
) -> fmt::Result {
	let pad = indent(depth);
	for (count, item) in members.enumerate() {
		if count >= options.max_items {
			writeln!(out, "{pad}... (more)")?;
			break;
		}
		match item {
			Ok(child) => render_node(&child, depth, options, out)?,
			Err(err) => {
				writeln!(out, "{pad}! enumeration failed: {err}")?;
				break;
			}
		}
	}
	Ok(())
}

fn write_line(node: &DumpNode<'_>, depth: u32, options: RenderOptions, out: &mut impl Write) -> fmt::Result {
	write!(
		out,
		"{}{}: {} = {}",
		indent(depth),
		node.object_name(),
		node.declared_type(),
		one_line(node.object_value(), options.max_value_len)
	)?;
	if node.actual_type() != node.declared_type() {
		write!(out, " ({})", node.actual_type())?;
	}
	writeln!(out)
}

fn indent(depth: u32) -> String {
	"  ".repeat(depth as usize)
}

fn one_line(input: &str, max_len: usize) -> String {
	let mut out = String::new();
	for (count, ch) in input.chars().enumerate() {
		if count >= max_len {
			out.push_str("...");
			break;
		}
		match ch {
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c => out.push(c),
		}
	}
	out
}
