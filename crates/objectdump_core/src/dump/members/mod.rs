use std::vec;

use crate::dump::{DumpNode, DumpOptions, Field, Inspect, PropertyInfo, Raw, guard};

/// Lazy sequence of field or property dumps, ordered by member name.
///
/// Nothing is read from the owner until the first call to `next`. Field
/// values are read in one pass; property getters run one at a time, as
/// their node is pulled.
pub struct Members<'n> {
	state: State<'n>,
}

enum State<'n> {
	Done,
	Pending { owner: &'n dyn Inspect, kind: Kind, options: DumpOptions },
	Fields { fields: vec::IntoIter<Field<'n>>, options: DumpOptions },
	Properties { owner: &'n dyn Inspect, props: vec::IntoIter<PropertyInfo>, options: DumpOptions },
}

#[derive(Clone, Copy)]
enum Kind {
	Fields,
	Properties,
}

impl<'n> Members<'n> {
	pub(crate) fn empty() -> Self {
		Self { state: State::Done }
	}

	pub(crate) fn fields(owner: &'n dyn Inspect, options: DumpOptions) -> Self {
		Self {
			state: State::Pending {
				owner,
				kind: Kind::Fields,
				options,
			},
		}
	}

	pub(crate) fn properties(owner: &'n dyn Inspect, options: DumpOptions) -> Self {
		Self {
			state: State::Pending {
				owner,
				kind: Kind::Properties,
				options,
			},
		}
	}

	fn start(owner: &'n dyn Inspect, kind: Kind, options: DumpOptions) -> State<'n> {
		match kind {
			Kind::Fields => {
				let mut fields: Vec<Field<'n>> = owner.fields().into_iter().filter(Field::is_dumpable).collect();
				fields.sort_by(|a, b| a.name.cmp(&b.name));
				tracing::trace!(ty = %owner.runtime_type(), count = fields.len(), "fields materialized");
				State::Fields {
					fields: fields.into_iter(),
					options,
				}
			}
			Kind::Properties => {
				let mut props: Vec<PropertyInfo> = owner.properties().into_iter().filter(PropertyInfo::is_dumpable).collect();
				props.sort_by(|a, b| a.name.cmp(&b.name));
				tracing::trace!(ty = %owner.runtime_type(), count = props.len(), "properties materialized");
				State::Properties {
					owner,
					props: props.into_iter(),
					options,
				}
			}
		}
	}
}

impl<'n> Iterator for Members<'n> {
	type Item = DumpNode<'n>;

	fn next(&mut self) -> Option<Self::Item> {
		if let State::Pending { owner, kind, options } = self.state {
			self.state = Self::start(owner, kind, options);
		}

		match &mut self.state {
			State::Done | State::Pending { .. } => None,
			State::Fields { fields, options } => {
				let field = fields.next()?;
				Some(DumpNode::new(field.value, field.ty, field.name, *options))
			}
			State::Properties { owner, props, options } => {
				let prop = props.next()?;
				let value = read_property(*owner, &prop);
				Some(DumpNode::new(value, prop.ty, prop.name, *options))
			}
		}
	}
}

fn read_property<'n>(owner: &'n dyn Inspect, prop: &PropertyInfo) -> Option<Raw<'n>> {
	match guard::contain(|| owner.property(&prop.name)) {
		Ok(value) => value,
		Err(err) => {
			tracing::debug!(ty = %owner.runtime_type(), property = %prop.name, error = %err, "property getter failed");
			Some(Raw::owned(err))
		}
	}
}
