pub mod chunks;
pub mod convert;
pub mod error;
pub mod io;
pub mod markers;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use chunks::{ChunkSource, split_sections};
pub use convert::{Converter, ConverterOptions, DEFAULT_MAX_LIST_DEPTH};
pub use error::{ConvertError, MalformedContent};
pub use io::*;
pub use markers::{MarkerTable, WrapperKind};
pub use parsing::{ChunkParser, ParsedChunk};
