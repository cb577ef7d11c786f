/// A cursor over the residual part of a chunk that is still to be parsed.
///
/// Tracks the absolute byte position in the original chunk (via `base`) so
/// diagnostics can point at the source.
#[derive(Debug, Clone, Copy)]
pub struct ParseCursor<'a> {
    /// The residual chunk.
    rest: &'a str,
    /// Offset of `rest` within the original chunk.
    base: usize,
}

impl<'a> ParseCursor<'a> {
    /// Creates a cursor at the start of `chunk`.
    pub fn new(chunk: &'a str) -> Self {
        Self {
            rest: chunk,
            base: 0,
        }
    }

    /// The residual chunk.
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    /// Absolute byte position of the residual start.
    pub fn pos(&self) -> usize {
        self.base
    }

    /// Returns true when nothing is left to parse.
    pub fn eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// Drops `n` bytes from the front of the residual.
    ///
    /// `n` must fall on a char boundary; callers pass offsets derived from
    /// ASCII marker matches.
    pub fn advance(&mut self, n: usize) {
        let n = n.min(self.rest.len());
        self.rest = &self.rest[n..];
        self.base += n;
    }
}
