//! Splitting raw input into independently converted chunks.

/// Hands the parser its chunks: the whole input, or the sections between
/// delimiter lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSource<'d> {
    delimiter: Option<&'d str>,
}

impl<'d> ChunkSource<'d> {
    pub fn new(delimiter: Option<&'d str>) -> Self {
        Self { delimiter }
    }

    pub fn chunks<'s>(&self, source: &'s str) -> Vec<&'s str> {
        match self.delimiter {
            Some(delimiter) => split_sections(source, delimiter),
            None => vec![source],
        }
    }
}

/// Splits `source` into the sections found between delimiter lines.
///
/// A line containing `delimiter` opens a section; the next such line closes
/// it and opens the following one. Text before the first delimiter line and
/// after the last one belongs to no section and is dropped. Sections keep
/// their line terminators.
///
/// An empty delimiter matches nothing special and yields the whole input.
pub fn split_sections<'s>(source: &'s str, delimiter: &str) -> Vec<&'s str> {
    if delimiter.is_empty() {
        return vec![source];
    }

    let mut sections = vec![];
    let mut open: Option<usize> = None;
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let line_end = offset + line.len();
        if line.contains(delimiter) {
            if let Some(start) = open {
                sections.push(&source[start..offset]);
            }
            open = Some(line_end);
        }
        offset = line_end;
    }

    sections
}
