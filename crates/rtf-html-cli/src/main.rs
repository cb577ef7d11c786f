mod args;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rtf_html_config::Config;
use rtf_html_engine::{Converter, io};

use crate::args::CliArguments;

fn main() {
    let args = CliArguments::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level())
        .init();

    if let Err(err) = run(&args) {
        eprintln!("rtf-html: {err:#}");
        process::exit(1);
    }
}

fn run(args: &CliArguments) -> Result<()> {
    let config_path = args.config_path();
    log::info!("Config path: {}", config_path.display());

    let config = Config::load_from_path(&config_path)?;
    if config.is_none() {
        log::info!("No config file found, using defaults");
    }

    let converter = Converter::new(args.converter_options(config));
    log::debug!("Converter options: {:?}", converter.options());

    let source = io::read_source(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let fragments = converter.convert_source(&source)?;
    log::info!(
        "Converted {} into {} fragment(s)",
        args.input.display(),
        fragments.len()
    );

    match &args.output {
        Some(output) => {
            io::write_fragments(output, &fragments)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            log::info!("Wrote {}", output.display());
        }
        None => println!("{}", io::join_fragments(&fragments)),
    }

    Ok(())
}
