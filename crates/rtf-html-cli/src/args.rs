use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use rtf_html_config::Config;
use rtf_html_engine::ConverterOptions;

/// Converts RTF exports into HTML fragments.
#[derive(Debug, Clone, Parser)]
#[clap(name = "rtf-html", version, author)]
pub struct CliArguments {
    /// Path to the RTF input file
    pub input: PathBuf,

    /// Writes the fragments to this file instead of stdout
    #[clap(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Converts each section between lines containing this text separately
    #[clap(
        short = 'd',
        long = "delimiter",
        value_name = "DELIMITER",
        allow_hyphen_values = true
    )]
    pub section_delimiter: Option<String>,

    /// Config file to read instead of the default one
    #[clap(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// HTML-escapes extracted text
    #[clap(long = "escape-html")]
    pub escape_html: bool,

    /// Deepest list nesting level kept
    #[clap(long = "max-list-depth", value_name = "N")]
    pub max_list_depth: Option<usize>,

    /// Sets the level of logging verbosity:
    /// -v = info, -vv = debug, -vvv = trace
    #[clap(short, long, action = ArgAction::Count)]
    pub verbosity: u8,
}

impl CliArguments {
    /// Log level for the `-v` count. Warnings and errors always show.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// The config file to load.
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => Config::expand_path(path),
            None => Config::config_path(),
        }
    }

    /// Conversion settings: the loaded config with flags given on the
    /// command line taking precedence.
    pub fn converter_options(&self, config: Option<Config>) -> ConverterOptions {
        let mut options = config.map(ConverterOptions::from).unwrap_or_default();
        if let Some(delimiter) = &self.section_delimiter {
            options.section_delimiter = Some(delimiter.clone());
        }
        if self.escape_html {
            options.escape_html = true;
        }
        if let Some(depth) = self.max_list_depth {
            options.max_list_depth = depth;
        }
        options
    }
}
