use crate::markers::{LineSeparator, MarkerTable};

use super::{scanner::scan, style::resolve_classes};

/// What the next block looks like, decided one block ahead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictedBlock<'t> {
    /// A real line separator comes before the next payload.
    pub forces_line_break: bool,
    /// Classes picked up from formatting between this payload and the next.
    pub pending_classes: Vec<&'t str>,
    /// Hanging indentation captured from a blank block.
    pub pending_indent: String,
}

/// Predicts the break and formatting state of the block after the one that
/// ended at the start of `after_content`.
///
/// A newline that comes strictly before the next begin marker is a hard
/// break. Anything else is a false break caused by a formatting group: the
/// text up to the first `}` past offset 1 is scanned for style markers
/// instead. A missing newline or a missing begin marker counts as infinitely
/// far away.
pub fn predict<'t>(table: &'t MarkerTable, after_content: &str) -> PredictedBlock<'t> {
    let newline = after_content.find(LineSeparator::NEWLINE);
    let next_begin = scan(table, after_content).map(|found| found.position);

    let hard_break = match (newline, next_begin) {
        (Some(newline), Some(begin)) => newline < begin,
        (Some(_), None) => true,
        (None, _) => false,
    };
    if hard_break {
        return PredictedBlock {
            forces_line_break: true,
            ..PredictedBlock::default()
        };
    }

    // The gap usually opens with the closing brace of the current payload.
    let analyzer = after_content
        .get(1..)
        .and_then(|tail| tail.find(table.content_end()))
        .map_or("", |end| &after_content[..end + 1]);

    let mut pending_classes = vec![];
    resolve_classes(table, analyzer, &mut pending_classes);

    PredictedBlock {
        forces_line_break: false,
        pending_classes,
        pending_indent: String::new(),
    }
}

/// Indentation captured from a blank block.
///
/// After one leading line terminator, a remainder without further line
/// breaks is literal indentation for the next non-blank block. Otherwise
/// there is none.
pub fn hanging_indent(blank: &str) -> String {
    let rest = LineSeparator::strip_leading(blank);
    if rest.contains(LineSeparator::NEWLINE) {
        String::new()
    } else {
        rest.to_string()
    }
}

/// Whitespace that does not count as inline content. Non-breaking and other
/// Unicode spaces are content.
const BLANK_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Whether a payload carries no inline content and marks a paragraph boundary.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(BLANK_CHARS).is_empty()
}
