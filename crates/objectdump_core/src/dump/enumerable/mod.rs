use crate::dump::{DumpNode, DumpOptions, DumpType, ElementIter, Inspect, InspectError};

/// Lazy sequence of element dumps in container order.
///
/// Unlike field and property reads, a failure while iterating the container
/// is not turned into data: it is yielded as `Err`, and the sequence ends.
pub struct EnumerableMembers<'n> {
	state: State<'n>,
}

enum State<'n> {
	Done,
	Pending { owner: &'n dyn Inspect, options: DumpOptions },
	Running { iter: ElementIter<'n>, element_type: DumpType, index: usize, options: DumpOptions },
}

impl<'n> EnumerableMembers<'n> {
	pub(crate) fn empty() -> Self {
		Self { state: State::Done }
	}

	pub(crate) fn new(owner: &'n dyn Inspect, options: DumpOptions) -> Self {
		Self {
			state: State::Pending { owner, options },
		}
	}
}

impl<'n> Iterator for EnumerableMembers<'n> {
	type Item = Result<DumpNode<'n>, InspectError>;

	fn next(&mut self) -> Option<Self::Item> {
		if let State::Pending { owner, options } = self.state {
			self.state = match owner.elements() {
				Some(elements) => State::Running {
					iter: elements.iter,
					element_type: elements.element_type.unwrap_or(DumpType::Any),
					index: 0,
					options,
				},
				None => State::Done,
			};
		}

		let State::Running {
			iter,
			element_type,
			index,
			options,
		} = &mut self.state
		else {
			return None;
		};

		match iter.next() {
			Some(Ok(value)) => {
				let node = DumpNode::new(value, element_type.clone(), format!("[{index}]"), *options);
				*index += 1;
				Some(Ok(node))
			}
			Some(Err(err)) => {
				tracing::debug!(index = *index, error = %err, "enumeration failed");
				self.state = State::Done;
				Some(Err(err))
			}
			None => {
				self.state = State::Done;
				None
			}
		}
	}
}

#[cfg(test)]
mod tests;
