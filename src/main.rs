//! markdown2html - convert a markdown file to HTML.
//!
//! This binary provides the CLI interface to the markdown2html library
//! crates: it checks the arguments and input path, then streams the input
//! file line by line through the parser and renderer into the output file.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{LevelFilter, debug, info, trace, warn};
use markdown2html_config::Config;
use markdown2html_core::{Markdown2HtmlError, Result};
use markdown2html_parser::Parser as MarkdownParser;
use markdown2html_render::HtmlRenderer;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn main() {
    let cli = match <Cli as ClapParser>::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version go to stdout and succeed
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    if let Err(e) = run(&cli) {
        debug!("exiting on error: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    // Usage is checked before anything touches the filesystem
    let (input, output) = cli.paths()?;

    let config = Config::load_with_override(cli.config.as_deref())?;
    setup_logging(cli.log_level.as_deref().unwrap_or(&config.logging.level));
    info!("markdown2html v{}", env!("CARGO_PKG_VERSION"));
    if cli.log_level.is_none() && !config.logging.is_known_level() {
        warn!(
            "Unknown log level {:?} in config, using warn",
            config.logging.level
        );
    }
    debug!("Loaded config: {:?}", config);

    if !cli.extra.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.extra);
    }

    if !input.exists() {
        return Err(Markdown2HtmlError::MissingInput(input.to_path_buf()));
    }

    convert_file(input, output, &config)
}

/// Convert `input` into `output` according to the output settings.
fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<()> {
    if output.exists() && !config.output.overwrite {
        return Err(Markdown2HtmlError::Usage(format!(
            "Refusing to overwrite {}",
            output.display()
        )));
    }

    if config.output.create_dirs {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            debug!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    info!("Processing file: {}", input.display());

    // The output is only created once the input is known to be a readable file
    let input_file = File::open(input)?;
    if !input_file.metadata()?.is_file() {
        return Err(Markdown2HtmlError::NotAFile(input.to_path_buf()));
    }
    let reader = BufReader::new(input_file);
    let mut renderer = HtmlRenderer::new(BufWriter::new(File::create(output)?));
    let mut parser = MarkdownParser::new();

    for line in reader.lines() {
        let line = line?;
        trace!("Input line: {}", line);
        renderer.render_events(&parser.parse_line(&line))?;
    }
    renderer.render_events(&parser.finalize())?;
    renderer.flush()?;

    info!(
        "Wrote {} line(s) to {}",
        renderer.lines_written(),
        output.display()
    );
    Ok(())
}
