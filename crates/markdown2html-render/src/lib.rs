//! markdown2html Render
//!
//! This crate provides the HTML rendering engine for markdown2html,
//! converting parsed block events into HTML text.
//!
//! Every event becomes one or more whole output lines, so output can be
//! written as soon as the parser emits it.
//!
//! # Example
//!
//! ```
//! use markdown2html_render::convert;
//!
//! let html = convert(["# Title", "- one", "- two"]).concat();
//! assert_eq!(html, "<h1>Title</h1>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n");
//! ```

pub mod heading;
pub mod list;
pub mod paragraph;

pub use heading::render_heading;
pub use list::{render_list_end, render_list_item, render_list_start};
pub use paragraph::{LINE_BREAK, render_paragraph};

use log::debug;
use markdown2html_parser::{ParseEvent, Parser};
use std::io::Write;

/// The HTML lines for one event, without line terminators.
pub fn event_lines(event: &ParseEvent) -> Vec<String> {
    match event {
        ParseEvent::Heading { level, content } => vec![render_heading(*level, content)],
        ParseEvent::ListStart(kind) => vec![render_list_start(*kind)],
        ParseEvent::ListItem(content) => vec![render_list_item(content)],
        ParseEvent::ListEnd(kind) => vec![render_list_end(*kind)],
        ParseEvent::Paragraph(lines) => render_paragraph(lines),
    }
}

/// HTML renderer for markdown events.
pub struct HtmlRenderer<W: Write> {
    /// Output writer
    writer: W,
    /// Lines written so far
    lines_written: usize,
}

impl<W: Write> HtmlRenderer<W> {
    /// Create a new renderer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Number of output lines written.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Write a line to the output.
    fn writeln(&mut self, s: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", s)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Render a single parse event.
    pub fn render_event(&mut self, event: &ParseEvent) -> std::io::Result<()> {
        for line in event_lines(event) {
            self.writeln(&line)?;
        }
        Ok(())
    }

    /// Render a batch of events in order.
    pub fn render_events(&mut self, events: &[ParseEvent]) -> std::io::Result<()> {
        for event in events {
            self.render_event(event)?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// Convert a document, given as lines, into HTML chunks.
///
/// Each chunk is one output line ending in `\n`; concatenating them gives
/// the full document. Any block still open after the last line is closed.
pub fn convert<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    let mut chunks = Vec::new();

    for line in lines {
        for event in parser.parse_line(line.as_ref()) {
            chunks.extend(event_lines(&event).into_iter().map(|l| l + "\n"));
        }
    }
    for event in parser.finalize() {
        chunks.extend(event_lines(&event).into_iter().map(|l| l + "\n"));
    }

    debug!(
        "converted {} line(s) into {} chunk(s)",
        parser.state().line_number,
        chunks.len()
    );
    chunks
}

/// Convert a whole markdown string to an HTML string.
pub fn render_to_string(content: &str) -> String {
    convert(content.lines()).concat()
}
