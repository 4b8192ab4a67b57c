//! Command-line interface for markdown2html.

use clap::Parser;
use markdown2html_core::{Markdown2HtmlError, Result};
use std::path::{Path, PathBuf};

/// Message printed when the input or output path is missing.
pub const USAGE: &str = "Usage: markdown2html README.md README.html";

/// markdown2html - convert a markdown file to HTML.
///
/// Understands headings, `- ` and `* ` lists, **bold**, __emphasis__
/// and paragraphs.
#[derive(Parser, Debug)]
#[command(
    name = "markdown2html",
    version,
    about = "Convert a markdown file to HTML",
    after_help = "Examples:\n  \
                  markdown2html README.md README.html\n  \
                  markdown2html -l debug notes.md notes.html"
)]
pub struct Cli {
    /// Markdown file to read
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// HTML file to write
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel")]
    pub log_level: Option<String>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// The input and output paths, or a usage error if either is missing.
    pub fn paths(&self) -> Result<(&Path, &Path)> {
        match (&self.input, &self.output) {
            (Some(input), Some(output)) => Ok((input, output)),
            _ => Err(Markdown2HtmlError::Usage(USAGE.to_string())),
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    use markdown2html_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
