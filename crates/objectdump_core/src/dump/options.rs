/// Traversal toggles propagated unchanged from a root to every descendant.
///
/// Both toggles default to off: property getters and container iteration
/// run user code that may have side effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpOptions {
	/// Whether [`crate::dump::DumpNode::properties`] invokes property getters.
	pub include_properties: bool,
	/// Whether [`crate::dump::DumpNode::enumerable_members`] iterates containers.
	pub include_enumerable: bool,
}

impl DumpOptions {
	/// Preset with properties and enumerable members enabled.
	pub fn all() -> Self {
		Self {
			include_properties: true,
			include_enumerable: true,
		}
	}

	/// Toggle property inclusion.
	pub fn with_properties(mut self, include: bool) -> Self {
		self.include_properties = include;
		self
	}

	/// Toggle enumerable-member inclusion.
	pub fn with_enumerable(mut self, include: bool) -> Self {
		self.include_enumerable = include;
		self
	}
}
