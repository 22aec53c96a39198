/// Current-time dump command.
pub mod clock;
/// CLI error types.
pub mod error;
/// Input loading with transparent zstd decompression.
pub mod input;
/// JSON document dump command.
pub mod json;
/// Indented text rendering of dump trees.
pub mod render;
/// Built-in inventory sample command.
pub mod sample;
/// Shared dump and render flags.
pub mod view;

pub use error::{CliError, Result};
