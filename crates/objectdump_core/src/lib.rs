//! Lazy, fault-tolerant hierarchical dumps of in-memory object graphs.
//!
//! Types opt in by implementing [`dump::Inspect`], a per-type descriptor table
//! listing public fields, properties, and iterable elements. [`dump::dump`]
//! turns any such value into a [`dump::DumpNode`] whose children are computed
//! only when a consumer iterates them.

/// Dump construction, member descriptors, and built-in descriptor tables.
pub mod dump;
