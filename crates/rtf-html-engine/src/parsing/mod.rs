//! # Chunk Parsing
//!
//! Streaming pattern-matching parser that turns one RTF chunk into an HTML
//! fragment.
//!
//! ## Parsing Loop
//!
//! Per block, over a shrinking residual chunk:
//!
//! 1. **Scan** (`scanner`): find the next content-begin marker and its most
//!    specific variant; none left ends the chunk
//! 2. **Extract** (`extract`): slice the payload up to `}`, the symbol run in
//!    front of it and the residual after it
//! 3. **Resolve** (`style`): classes from the symbol run, added to the ones
//!    predicted by the previous block
//! 4. **Commit**: list blocks go to the `ListAccumulator` (`list`); blank
//!    blocks close a paragraph; anything else is emitted as a span
//! 5. **Predict** (`linebreak`): one block of lookahead decides whether the
//!    next block starts after a hard break or continues the line
//!
//! ## Modules
//!
//! - **`cursor`**: `ParseCursor` over the residual chunk
//! - **`scanner`**: `scan` for begin markers
//! - **`extract`**: `extract` payload, symbol run and residual
//! - **`style`**: `resolve_classes` from style markers
//! - **`list`**: `ListAccumulator` state machine and `ListNode` tree
//! - **`linebreak`**: `PredictedBlock`, `predict`, hanging indentation
//!
//! ## Key Invariants
//!
//! - Chunks are independent; nothing but the marker table is shared
//! - Style classes accumulate and are never deduplicated
//! - A list stays open until a hard-broken non-list block, a blank block, or
//!   the end of the chunk

pub mod cursor;
pub mod extract;
pub mod linebreak;
pub mod list;
pub mod scanner;
pub mod style;

use std::borrow::Cow;

use crate::convert::ConverterOptions;
use crate::error::MalformedContent;
use crate::markers::MarkerTable;
use crate::render::{Html, indent_to_html, render_list, replace_tabs, span, wrap_paragraph};

use cursor::ParseCursor;
use extract::{Extracted, extract};
use linebreak::{PredictedBlock, hanging_indent, is_blank, predict};
use list::ListAccumulator;
use scanner::scan;
use style::resolve_classes;

/// The HTML fragment of one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChunk {
    pub html: String,
    /// Set when parsing stopped early at an unterminated payload.
    pub malformed: Option<MalformedContent>,
}

/// Parses chunks against a shared marker table.
pub struct ChunkParser<'t> {
    table: &'t MarkerTable,
    escape_html: bool,
    max_list_depth: usize,
}

impl<'t> ChunkParser<'t> {
    pub fn new(table: &'t MarkerTable, options: &ConverterOptions) -> Self {
        Self {
            table,
            escape_html: options.escape_html,
            max_list_depth: options.max_list_depth,
        }
    }

    /// Converts one chunk into an HTML fragment.
    ///
    /// A chunk without any begin marker yields an empty fragment. An
    /// unterminated payload stops the loop; the fragment built so far is
    /// kept and the problem is reported in [`ParsedChunk::malformed`].
    pub fn parse(&self, chunk: &str) -> ParsedChunk {
        let mut cursor = ParseCursor::new(chunk);
        let mut result = String::new();
        let mut list = ListAccumulator::new(self.table.list_markers(), self.max_list_depth);
        let mut predicted = PredictedBlock::default();
        let mut malformed = None;

        while !cursor.eof() {
            let Some(found) = scan(self.table, cursor.rest()) else {
                break;
            };
            let block = match extract(self.table, &cursor, &found) {
                Ok(block) => block,
                Err(err) => {
                    log::warn!("{err}; keeping the fragment parsed so far");
                    malformed = Some(err);
                    break;
                }
            };
            log::debug!(
                "block at byte {}: {} payload bytes, line break: {}",
                cursor.pos() + found.position,
                block.text.len(),
                predicted.forces_line_break
            );

            predicted = if is_blank(block.text) {
                self.commit_paragraph(&mut result, &mut list, &block)
            } else {
                self.commit_text(&mut result, &mut list, &block, predicted)
            };
            cursor.advance(block.consumed);
        }

        if let Some((kind, items)) = list.take() {
            log::debug!("flushing {} list item(s) open at end of chunk", items.len());
            render_list(&mut result, kind, &items);
        }

        ParsedChunk {
            html: result,
            malformed,
        }
    }

    fn commit_text(
        &self,
        result: &mut String,
        list: &mut ListAccumulator<'_>,
        block: &Extracted<'_>,
        predicted: PredictedBlock<'t>,
    ) -> PredictedBlock<'t> {
        let payload = if self.escape_html {
            html_escape::encode_text(block.text)
        } else {
            Cow::Borrowed(block.text)
        };
        let indented = format!("{}{payload}", indent_to_html(&predicted.pending_indent));
        let text = replace_tabs(&indented, self.table.tab());

        let mut classes = predicted.pending_classes;
        resolve_classes(self.table, block.symbol_run, &mut classes);

        if list.is_list_block(block.symbol_run) {
            list.push(block.symbol_run, text);
        } else {
            if predicted.forces_line_break
                && let Some((kind, items)) = list.take()
            {
                log::debug!("list of {} item(s) ended by a line break", items.len());
                render_list(result, kind, &items);
            }

            if list.is_active() {
                list.append_to_last(&span(&classes, &text));
            } else {
                if predicted.forces_line_break {
                    result.push_str(Html::BREAK);
                    result.push('\n');
                }
                result.push_str(&span(&classes, &text));
            }
        }

        predict(self.table, block.after_content)
    }

    fn commit_paragraph(
        &self,
        result: &mut String,
        list: &mut ListAccumulator<'_>,
        block: &Extracted<'_>,
    ) -> PredictedBlock<'t> {
        let pending_indent = hanging_indent(block.text);

        if let Some((kind, items)) = list.take() {
            log::debug!("list of {} item(s) ended by a paragraph", items.len());
            render_list(result, kind, &items);
        }
        wrap_paragraph(result);

        PredictedBlock {
            pending_indent,
            ..predict(self.table, block.after_content)
        }
    }
}
