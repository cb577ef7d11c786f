use thiserror::Error;

/// Fatal conversion errors, raised before any parsing happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error("No RTF source text provided")]
    MissingInput,
}

/// A content-begin marker with no closing `}` before the chunk ran out.
///
/// Non-fatal: the parser stops at this block and keeps the fragment it
/// has built so far.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Content starting at byte {offset} has no closing `}}`")]
pub struct MalformedContent {
    /// Byte offset of the unterminated begin marker within the chunk.
    pub offset: usize,
}
