use crate::error::MalformedContent;
use crate::markers::MarkerTable;

use super::{cursor::ParseCursor, scanner::BeginMatch};

/// One textual block sliced out of the residual chunk.
///
/// All fields borrow from the chunk; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted<'a> {
    /// Payload between the begin marker and the next `}`.
    pub text: &'a str,
    /// Control text scanned for style and list cues.
    pub symbol_run: &'a str,
    /// The chunk from the consumed `}` (inclusive) onwards. Input to the
    /// line-break lookahead.
    pub after_content: &'a str,
    /// Everything strictly after the consumed `}`.
    pub residual: &'a str,
    /// Bytes of the residual chunk consumed by this block.
    pub consumed: usize,
}

/// Slices the payload that starts at `found` and computes the symbol run and
/// the residual chunk.
///
/// The symbol run starts at the first symbol-control marker in the residual
/// chunk and ends at the payload start. Without such a marker it starts at
/// the chunk start; when the first marker only appears after the payload,
/// the run is empty.
///
/// # Errors
/// [`MalformedContent`] when no `}` follows the begin marker.
pub fn extract<'a>(
    table: &MarkerTable,
    cursor: &ParseCursor<'a>,
    found: &BeginMatch<'_>,
) -> Result<Extracted<'a>, MalformedContent> {
    let chunk = cursor.rest();
    let content_start = found.content_start();
    let body = &chunk[content_start..];

    let Some(end) = body.find(table.content_end()) else {
        return Err(MalformedContent {
            offset: cursor.pos() + found.position,
        });
    };
    let after_end = end + table.content_end().len();

    let run_start = match chunk.find(table.symbol_control()) {
        Some(at) if at <= content_start => at,
        Some(_) => content_start,
        None => 0,
    };

    Ok(Extracted {
        text: &body[..end],
        symbol_run: &chunk[run_start..content_start],
        after_content: &body[end..],
        residual: &body[after_end..],
        consumed: content_start + after_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::scanner::scan;

    fn extract_first(chunk: &str) -> Result<Extracted<'_>, MalformedContent> {
        let table = MarkerTable::rtf();
        let cursor = ParseCursor::new(chunk);
        let found = scan(&table, chunk).expect("begin marker");
        extract(&table, &cursor, &found)
    }

    #[test]
    fn slices_text_and_residual() {
        let chunk = r"\par \pard\plain {\b\ab\rtlch \ltrch\loch Hello}{\rtlch \ltrch\loch next}";
        let block = extract_first(chunk).unwrap();

        assert_eq!(block.text, " Hello");
        assert_eq!(block.symbol_run, r"\par \pard\plain {\b\ab\rtlch \ltrch\loch");
        assert_eq!(block.after_content, r"}{\rtlch \ltrch\loch next}");
        assert_eq!(block.residual, r"{\rtlch \ltrch\loch next}");
        assert_eq!(&chunk[block.consumed..], block.residual);
    }

    #[test]
    fn run_starts_at_chunk_start_without_symbol_control() {
        let block = extract_first(r"{\i\ai\rtlch \ltrch\loch slanted}").unwrap();
        assert_eq!(block.symbol_run, r"{\i\ai\rtlch \ltrch\loch");
    }

    #[test]
    fn run_is_empty_when_symbol_control_comes_later() {
        let chunk = "{\\b\\ab\\rtlch \\ltrch\\loch bold}\n\\par \\pard\\plain {\\rtlch \\ltrch\\loch x}";
        let block = extract_first(chunk).unwrap();
        assert_eq!(block.text, " bold");
        assert_eq!(block.symbol_run, "");
    }

    #[test]
    fn empty_payload() {
        let block = extract_first(r"{\rtlch \ltrch\loch}").unwrap();
        assert_eq!(block.text, "");
        assert_eq!(block.residual, "");
    }

    #[test]
    fn missing_end_marker_is_malformed() {
        let chunk = r"\par \pard\plain {\rtlch \ltrch\loch never closed";
        let err = extract_first(chunk).unwrap_err();
        assert_eq!(err.offset, chunk.find(r"\rtlch").unwrap());
    }

    #[test]
    fn malformed_offset_is_absolute() {
        let chunk = r"{\rtlch \ltrch\loch a}{\rtlch \ltrch\loch b";
        let table = MarkerTable::rtf();
        let mut cursor = ParseCursor::new(chunk);
        let first = scan(&table, cursor.rest()).unwrap();
        let block = extract(&table, &cursor, &first).unwrap();
        cursor.advance(block.consumed);

        let second = scan(&table, cursor.rest()).unwrap();
        let err = extract(&table, &cursor, &second).unwrap_err();
        assert_eq!(err.offset, chunk.rfind(r"\rtlch").unwrap());
    }
}
