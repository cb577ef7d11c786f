/// Closing brace that ends a textual payload.
pub struct ContentEnd;

impl ContentEnd {
    pub const MARKER: &'static str = "}";
}

/// Paragraph reset sequence that opens the control run scanned for style and
/// list cues.
pub struct SymbolControl;

impl SymbolControl {
    pub const MARKER: &'static str = r"\par \pard\plain";
}

/// Tab control word inside extracted text.
pub struct TabControl;

impl TabControl {
    pub const MARKER: &'static str = r"\tab";
}

/// Raw line separator used to tell hard breaks from formatting breaks.
pub struct LineSeparator;

impl LineSeparator {
    pub const NEWLINE: char = '\n';
    pub const CRLF: &'static str = "\r\n";

    /// Strips exactly one leading line terminator (`\r\n` or `\n`), if any.
    pub fn strip_leading(s: &str) -> &str {
        s.strip_prefix(Self::CRLF)
            .or_else(|| s.strip_prefix(Self::NEWLINE))
            .unwrap_or(s)
    }
}
