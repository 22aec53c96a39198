use std::fmt;

use crate::dump::{DumpError, DumpNode, Result};

/// One parsed operation in a member path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a public field, or failing that a property, by name.
	Member(String),
	/// Select an enumerable member by zero-based index.
	Index(usize),
}

impl fmt::Display for PathStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Member(name) => f.write_str(name),
			Self::Index(index) => write!(f, "[{index}]"),
		}
	}
}

/// Parsed member path expression such as `items[2].name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
	source: String,
}

impl MemberPath {
	/// Parse dotted member syntax with optional `[index]` selectors.
	///
	/// A path may start with an index selector (`[0].name`) to address
	/// elements of an iterable root.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || DumpError::InvalidMemberPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && is_member_byte(bytes[idx]) {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Member(input[start..idx].to_owned()));
			} else if bytes[idx] != b'[' || (idx > 0 && bytes[idx - 1] == b'.') {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self {
			steps,
			source: input.to_owned(),
		})
	}

	/// Original expression text.
	pub fn as_str(&self) -> &str {
		&self.source
	}
}

impl fmt::Display for MemberPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

fn is_member_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

impl DumpNode<'_> {
	/// Resolve `path` below this node and call `visit` with the target.
	///
	/// Child nodes borrow from their parent, so the target is only reachable
	/// inside `visit`. Named steps search public fields first, then
	/// properties; index steps pull enumerable members until the position is
	/// reached.
	///
	/// # Errors
	///
	/// [`DumpError::MemberNotFound`] when a step matches nothing, and
	/// [`DumpError::Enumeration`] when iterating a container fails on the way.
	pub fn visit_path<R>(&self, path: &MemberPath, visit: impl FnOnce(&DumpNode<'_>) -> R) -> Result<R> {
		visit_steps(self, &path.steps, path, visit)
	}

	/// Child selected by a single path step, if any.
	///
	/// # Errors
	///
	/// [`DumpError::Enumeration`] when iterating a container fails before
	/// the requested index is reached.
	pub fn child(&self, step: &PathStep) -> Result<Option<DumpNode<'_>>> {
		match step {
			PathStep::Member(name) => Ok(self
				.public_fields()
				.find(|child| child.object_name() == name.as_str())
				.or_else(|| self.properties().find(|child| child.object_name() == name.as_str()))),
			PathStep::Index(target) => {
				for (position, item) in self.enumerable_members().enumerate() {
					let child = item?;
					if position == *target {
						return Ok(Some(child));
					}
				}
				Ok(None)
			}
		}
	}
}

fn visit_steps<R>(node: &DumpNode<'_>, steps: &[PathStep], path: &MemberPath, visit: impl FnOnce(&DumpNode<'_>) -> R) -> Result<R> {
	let Some((step, rest)) = steps.split_first() else {
		return Ok(visit(node));
	};

	let child = node.child(step)?.ok_or_else(|| DumpError::MemberNotFound {
		step: step.to_string(),
		path: path.to_string(),
	})?;
	visit_steps(&child, rest, path, visit)
}
