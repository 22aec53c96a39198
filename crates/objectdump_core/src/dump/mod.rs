mod entry;
mod enumerable;
mod error;
mod guard;
mod impls;
mod inspect;
mod members;
mod node;
mod options;
mod path;
#[cfg(test)]
mod test_support;
mod types;

/// Root construction entry points.
pub use entry::{DumpExt, dump};
/// Lazy enumerable-member sequence.
pub use enumerable::EnumerableMembers;
/// Error and result aliases.
pub use error::{DumpError, InspectError, Result};
/// Built-in descriptor helper types.
pub use impls::Entry;
/// Capability trait and member descriptors.
pub use inspect::{Binding, ElementIter, Elements, Field, Inspect, PropertyInfo, Raw, Visibility};
/// Lazy field and property sequences.
pub use members::Members;
/// Dump tree node and its fixed value strings.
pub use node::{DumpNode, EXCEPTION_PREFIX, NULL_VALUE, ROOT_NAME};
/// Traversal toggles.
pub use options::DumpOptions;
/// Member path parser types.
pub use path::{MemberPath, PathStep};
/// Declared/actual type descriptor.
pub use types::DumpType;
