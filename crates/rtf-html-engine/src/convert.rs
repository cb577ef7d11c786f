use crate::chunks::ChunkSource;
use crate::error::ConvertError;
use crate::markers::MarkerTable;
use crate::parsing::{ChunkParser, ParsedChunk};

/// One extra nesting level below top-level list items.
pub const DEFAULT_MAX_LIST_DEPTH: usize = 1;

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Splits the raw input into sections between delimiter lines. `None`
    /// converts the whole input as one chunk.
    pub section_delimiter: Option<String>,
    /// HTML-escape extracted text before rendering.
    pub escape_html: bool,
    /// Deepest list nesting level kept.
    pub max_list_depth: usize,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            section_delimiter: None,
            escape_html: false,
            max_list_depth: DEFAULT_MAX_LIST_DEPTH,
        }
    }
}

/// RTF to HTML converter.
///
/// Holds the marker table, built once and shared by reference with every
/// chunk parse.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    table: MarkerTable,
    options: ConverterOptions,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        Self {
            table: MarkerTable::rtf(),
            options,
        }
    }

    /// Replaces the conversion settings.
    pub fn configure(&mut self, options: ConverterOptions) {
        self.options = options;
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub fn table(&self) -> &MarkerTable {
        &self.table
    }

    /// Parses one chunk, keeping the malformed-content diagnostic.
    pub fn parse_chunk(&self, chunk: &str) -> ParsedChunk {
        ChunkParser::new(&self.table, &self.options).parse(chunk)
    }

    /// Converts each chunk into one HTML fragment, in input order.
    pub fn convert<I, S>(&self, chunks: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        chunks
            .into_iter()
            .map(|chunk| self.parse_chunk(chunk.as_ref()).html)
            .collect()
    }

    /// Splits raw input into chunks per the configured section delimiter and
    /// converts every chunk.
    ///
    /// # Errors
    /// [`ConvertError::MissingInput`] when `source` is empty.
    pub fn convert_source(&self, source: &str) -> Result<Vec<String>, ConvertError> {
        if source.is_empty() {
            return Err(ConvertError::MissingInput);
        }

        let chunks = ChunkSource::new(self.options.section_delimiter.as_deref()).chunks(source);
        log::info!("converting {} chunk(s)", chunks.len());
        Ok(self.convert(chunks))
    }
}
