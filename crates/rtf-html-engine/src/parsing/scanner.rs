use crate::markers::{BeginMarker, MarkerTable};

/// The earliest content-begin marker in a residual chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeginMatch<'t> {
    /// The most specific variant that matched at `position`.
    pub marker: &'t BeginMarker,
    /// Byte offset of the match in the scanned string.
    pub position: usize,
}

impl BeginMatch<'_> {
    /// Byte offset where the payload starts (right after the marker).
    pub fn content_start(&self) -> usize {
        self.position + self.marker.pattern().len()
    }
}

/// Finds the next content-begin marker and its most specific variant.
///
/// Starts from the least specific variant and keeps moving to the next one
/// while it matches at the same offset. The first variant that matches later,
/// or not at all, stops the walk and the last coinciding variant wins.
///
/// Returns `None` when even the least specific variant is absent, which ends
/// the parse loop for the chunk.
pub fn scan<'t>(table: &'t MarkerTable, haystack: &str) -> Option<BeginMatch<'t>> {
    let mut variants = table.begin_markers().iter();
    let mut marker = variants.next()?;
    let position = haystack.find(marker.pattern())?;

    for candidate in variants {
        if haystack.find(candidate.pattern()) != Some(position) {
            break;
        }
        marker = candidate;
    }

    Some(BeginMatch { marker, position })
}
