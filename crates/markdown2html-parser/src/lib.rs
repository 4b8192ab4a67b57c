//! markdown2html Parser
//!
//! A line-oriented markdown parser. Each input line is classified, the
//! single open block (paragraph or list) is tracked in a
//! [`ParseState`], and block events are emitted in output order with
//! their text already inline-formatted.
//!
//! # Example
//!
//! ```
//! use markdown2html_parser::{Parser, ParseEvent};
//!
//! let mut parser = Parser::new();
//!
//! // Feed lines and get events
//! for event in parser.parse_line("# Hello **World**") {
//!     match event {
//!         ParseEvent::Heading { level, content } => {
//!             assert_eq!(level, 1);
//!             assert_eq!(content, "Hello <b>World</b>");
//!         }
//!         _ => {}
//!     }
//! }
//! ```

pub mod inline;

pub use inline::{InlineSpan, format_inline, replace_spans};

use log::trace;
use markdown2html_core::{ListKind, ParseState};
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Regex for headings: 1-6 hashes, then something that is not a hash
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})([^#].*)$").unwrap());

// =============================================================================
// Types
// =============================================================================

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`..`######` heading, text trimmed but not yet formatted
    Heading { level: u8, text: &'a str },
    /// `- ` or `* ` item, text trimmed but not yet formatted
    ListItem { kind: ListKind, text: &'a str },
    /// Whitespace only
    Blank,
    /// Anything else
    Text,
}

impl<'a> LineKind<'a> {
    /// Classify a line. Checks run in precedence order:
    /// heading, unordered item, ordered item, blank, text.
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = HEADING_RE.captures(line) {
            let hashes = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let text = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            if !text.is_empty() {
                return LineKind::Heading {
                    level: hashes.len() as u8,
                    text,
                };
            }
        }

        if let Some(kind) = line.get(..2).and_then(ListKind::from_prefix) {
            return LineKind::ListItem {
                kind,
                text: line[2..].trim(),
            };
        }

        if line.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Text
        }
    }
}

/// Events emitted by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Heading { level: u8, content: String },
    ListStart(ListKind),
    ListItem(String),
    ListEnd(ListKind),
    /// A flushed paragraph, one formatted entry per source line
    Paragraph(Vec<String>),
}

// =============================================================================
// Parser
// =============================================================================

/// Line-oriented markdown parser.
#[derive(Debug, Default)]
pub struct Parser {
    state: ParseState,
    events: Vec<ParseEvent>,
}

impl Parser {
    /// Create a new parser with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// Parse a single line (terminator already stripped) and return events.
    pub fn parse_line(&mut self, line: &str) -> Vec<ParseEvent> {
        self.events.clear();
        self.state.line_number += 1;

        let kind = LineKind::classify(line);
        trace!(
            "line {}: {:?} (open: {})",
            self.state.line_number, kind, self.state.block_mode
        );

        match kind {
            LineKind::Heading { level, text } => {
                self.close_blocks();
                self.events.push(ParseEvent::Heading {
                    level,
                    content: format_inline(text),
                });
            }
            LineKind::ListItem { kind, text } => {
                self.flush_paragraph();
                if self.state.block_mode.list_kind() != Some(kind) {
                    self.close_list();
                    self.state.open_list(kind);
                    self.events.push(ParseEvent::ListStart(kind));
                }
                self.events.push(ParseEvent::ListItem(format_inline(text)));
            }
            LineKind::Blank => {
                self.close_blocks();
            }
            LineKind::Text => {
                self.close_list();
                self.state.push_paragraph_line(line);
            }
        }

        self.take_events()
    }

    fn take_events(&mut self) -> Vec<ParseEvent> {
        std::mem::take(&mut self.events)
    }

    /// Close the paragraph, then the list. Only one can be open.
    fn close_blocks(&mut self) {
        self.flush_paragraph();
        self.close_list();
    }

    /// Emit the buffered paragraph, formatting each line now.
    fn flush_paragraph(&mut self) {
        if let Some(lines) = self.state.take_paragraph() {
            trace!("flush paragraph of {} line(s)", lines.len());
            let formatted = lines.iter().map(|l| format_inline(l)).collect();
            self.events.push(ParseEvent::Paragraph(formatted));
        }
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.state.close_list() {
            trace!("close {} list", kind);
            self.events.push(ParseEvent::ListEnd(kind));
        }
    }

    /// Parse a complete document.
    pub fn parse_document(&mut self, content: &str) -> Vec<ParseEvent> {
        let mut all_events = Vec::new();
        for line in content.lines() {
            all_events.extend(self.parse_line(line));
        }
        all_events.extend(self.finalize());
        all_events
    }

    /// Finalize parsing, closing any open blocks.
    pub fn finalize(&mut self) -> Vec<ParseEvent> {
        self.events.clear();
        self.close_blocks();
        self.take_events()
    }

    /// Reset the parser to initial state.
    pub fn reset(&mut self) {
        self.state = ParseState::new();
        self.events.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use markdown2html_core::BlockMode;

    #[test]
    fn test_classify_heading_levels() {
        for level in 1..=6u8 {
            let line = format!("{} Title", "#".repeat(level as usize));
            assert_eq!(
                LineKind::classify(&line),
                LineKind::Heading {
                    level,
                    text: "Title"
                }
            );
        }
    }

    #[test]
    fn test_classify_seven_hashes_is_text() {
        assert_eq!(LineKind::classify("####### Title"), LineKind::Text);
    }

    #[test]
    fn test_classify_heading_without_space() {
        assert_eq!(
            LineKind::classify("##Title  "),
            LineKind::Heading {
                level: 2,
                text: "Title"
            }
        );
    }

    #[test]
    fn test_classify_bare_hashes_is_text() {
        assert_eq!(LineKind::classify("###"), LineKind::Text);
        assert_eq!(LineKind::classify("#   "), LineKind::Text);
    }

    #[test]
    fn test_classify_list_items() {
        assert_eq!(
            LineKind::classify("- one "),
            LineKind::ListItem {
                kind: ListKind::Unordered,
                text: "one"
            }
        );
        assert_eq!(
            LineKind::classify("* two"),
            LineKind::ListItem {
                kind: ListKind::Ordered,
                text: "two"
            }
        );
    }

    #[test]
    fn test_classify_not_list_items() {
        assert_eq!(LineKind::classify("-one"), LineKind::Text);
        assert_eq!(LineKind::classify(" - one"), LineKind::Text);
        assert_eq!(LineKind::classify("+ one"), LineKind::Text);
        assert_eq!(LineKind::classify("1. one"), LineKind::Text);
    }

    #[test]
    fn test_classify_bare_marker_is_empty_item() {
        assert_eq!(
            LineKind::classify("- "),
            LineKind::ListItem {
                kind: ListKind::Unordered,
                text: ""
            }
        );
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(LineKind::classify("  \t "), LineKind::Blank);
    }

    #[test]
    fn test_classify_multibyte_prefix() {
        assert_eq!(LineKind::classify("é"), LineKind::Text);
        assert_eq!(LineKind::classify("—x"), LineKind::Text);
    }

    #[test]
    fn test_parse_heading() {
        let mut parser = Parser::new();
        let events = parser.parse_line("# Hello __World__");
        assert_eq!(
            events,
            vec![ParseEvent::Heading {
                level: 1,
                content: "Hello <em>World</em>".to_string()
            }]
        );
        assert_eq!(parser.state().block_mode, BlockMode::None);
    }

    #[test]
    fn test_parse_list() {
        let mut parser = Parser::new();
        let e1 = parser.parse_line("- Item **one**");
        assert_eq!(
            e1,
            vec![
                ParseEvent::ListStart(ListKind::Unordered),
                ParseEvent::ListItem("Item <b>one</b>".to_string()),
            ]
        );
        let e2 = parser.parse_line("- Item two");
        assert_eq!(e2, vec![ParseEvent::ListItem("Item two".to_string())]);
        assert_eq!(parser.finalize(), vec![ParseEvent::ListEnd(ListKind::Unordered)]);
    }

    #[test]
    fn test_switching_list_kind() {
        let mut parser = Parser::new();
        parser.parse_line("- a");
        let events = parser.parse_line("* b");
        assert_eq!(
            events,
            vec![
                ParseEvent::ListEnd(ListKind::Unordered),
                ParseEvent::ListStart(ListKind::Ordered),
                ParseEvent::ListItem("b".to_string()),
            ]
        );
        assert_eq!(parser.state().block_mode, BlockMode::List(ListKind::Ordered));
    }

    #[test]
    fn test_paragraph_buffered_until_flush() {
        let mut parser = Parser::new();
        assert!(parser.parse_line("first **line**").is_empty());
        assert!(parser.parse_line("second").is_empty());
        assert_eq!(parser.state().paragraph_buffer, vec!["first **line**", "second"]);

        let events = parser.parse_line("");
        assert_eq!(
            events,
            vec![ParseEvent::Paragraph(vec![
                "first <b>line</b>".to_string(),
                "second".to_string()
            ])]
        );
        assert!(parser.state().paragraph_buffer.is_empty());
    }

    #[test]
    fn test_text_closes_list() {
        let mut parser = Parser::new();
        parser.parse_line("* item");
        let events = parser.parse_line("text");
        assert_eq!(events, vec![ParseEvent::ListEnd(ListKind::Ordered)]);
        assert!(parser.state().is_in_paragraph());
    }

    #[test]
    fn test_list_item_flushes_paragraph() {
        let mut parser = Parser::new();
        parser.parse_line("text");
        let events = parser.parse_line("- item");
        assert_eq!(
            events,
            vec![
                ParseEvent::Paragraph(vec!["text".to_string()]),
                ParseEvent::ListStart(ListKind::Unordered),
                ParseEvent::ListItem("item".to_string()),
            ]
        );
    }

    #[test]
    fn test_heading_closes_open_blocks() {
        let mut parser = Parser::new();
        parser.parse_line("- item");
        let events = parser.parse_line("## Next");
        assert_eq!(
            events,
            vec![
                ParseEvent::ListEnd(ListKind::Unordered),
                ParseEvent::Heading {
                    level: 2,
                    content: "Next".to_string()
                },
            ]
        );

        parser.parse_line("para");
        let events = parser.parse_line("### After");
        assert_eq!(events[0], ParseEvent::Paragraph(vec!["para".to_string()]));
    }

    #[test]
    fn test_blank_lines_emit_nothing_when_idle() {
        let mut parser = Parser::new();
        assert!(parser.parse_line("").is_empty());
        assert!(parser.parse_line("   ").is_empty());
    }

    #[test]
    fn test_paragraph_keeps_raw_indentation() {
        let mut parser = Parser::new();
        parser.parse_line("  indented");
        assert_eq!(
            parser.finalize(),
            vec![ParseEvent::Paragraph(vec!["  indented".to_string()])]
        );
    }

    #[test]
    fn test_parse_document() {
        let mut parser = Parser::new();
        let doc = "# Title\nSome **bold** text.\n\n- one\n- two";
        let events = parser.parse_document(doc);
        assert_eq!(
            events,
            vec![
                ParseEvent::Heading {
                    level: 1,
                    content: "Title".to_string()
                },
                ParseEvent::Paragraph(vec!["Some <b>bold</b> text.".to_string()]),
                ParseEvent::ListStart(ListKind::Unordered),
                ParseEvent::ListItem("one".to_string()),
                ParseEvent::ListItem("two".to_string()),
                ParseEvent::ListEnd(ListKind::Unordered),
            ]
        );
    }

    #[test]
    fn test_finalize_closes_paragraph() {
        let mut parser = Parser::new();
        parser.parse_line("dangling");
        let events = parser.finalize();
        assert_eq!(events, vec![ParseEvent::Paragraph(vec!["dangling".to_string()])]);
        assert!(parser.finalize().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut parser = Parser::new();
        parser.parse_line("- item");
        parser.reset();
        assert_eq!(parser.state().block_mode, BlockMode::None);
        assert_eq!(parser.state().line_number, 0);
        assert!(parser.finalize().is_empty());
    }

    #[test]
    fn test_line_number_tracking() {
        let mut parser = Parser::new();
        parser.parse_line("a");
        parser.parse_line("");
        assert_eq!(parser.state().line_number, 2);
    }
}
