//! Parse state for line-by-line markdown conversion.
//!
//! The [`ParseState`] struct holds the single open block and any
//! paragraph lines waiting to be flushed.

use crate::enums::{BlockMode, ListKind};

/// Main parse state for a conversion pass.
///
/// Invariant: `paragraph_buffer` is non-empty exactly when
/// `block_mode` is [`BlockMode::Paragraph`].
///
/// # Example
///
/// ```
/// use markdown2html_core::{BlockMode, ParseState};
///
/// let mut state = ParseState::new();
/// state.push_paragraph_line("hello");
/// assert_eq!(state.block_mode, BlockMode::Paragraph);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    /// Currently open block
    pub block_mode: BlockMode,
    /// Raw lines of the open paragraph
    pub paragraph_buffer: Vec<String>,
    /// Number of lines consumed so far (1-based once a line is seen)
    pub line_number: usize,
}

impl ParseState {
    /// Create a new ParseState with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a paragraph is open.
    pub fn is_in_paragraph(&self) -> bool {
        self.block_mode == BlockMode::Paragraph
    }

    /// Check if a list is open.
    pub fn is_in_list(&self) -> bool {
        matches!(self.block_mode, BlockMode::List(_))
    }

    /// Append a raw line to the paragraph, opening it if needed.
    pub fn push_paragraph_line(&mut self, line: &str) {
        self.block_mode = BlockMode::Paragraph;
        self.paragraph_buffer.push(line.to_string());
    }

    /// Take the buffered paragraph lines, closing the paragraph.
    ///
    /// Returns `None` when no paragraph is open.
    ///
    /// # Example
    ///
    /// ```
    /// use markdown2html_core::{BlockMode, ParseState};
    ///
    /// let mut state = ParseState::new();
    /// state.push_paragraph_line("a");
    /// state.push_paragraph_line("b");
    /// assert_eq!(state.take_paragraph(), Some(vec!["a".to_string(), "b".to_string()]));
    /// assert_eq!(state.block_mode, BlockMode::None);
    /// assert_eq!(state.take_paragraph(), None);
    /// ```
    pub fn take_paragraph(&mut self) -> Option<Vec<String>> {
        if !self.is_in_paragraph() {
            return None;
        }
        self.block_mode = BlockMode::None;
        Some(std::mem::take(&mut self.paragraph_buffer))
    }

    /// Open a list of the given kind.
    ///
    /// Callers close any other open block first.
    pub fn open_list(&mut self, kind: ListKind) {
        debug_assert!(self.paragraph_buffer.is_empty());
        self.block_mode = BlockMode::List(kind);
    }

    /// Close the open list, returning its kind.
    pub fn close_list(&mut self) -> Option<ListKind> {
        let kind = self.block_mode.list_kind()?;
        self.block_mode = BlockMode::None;
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = ParseState::new();
        assert_eq!(state.block_mode, BlockMode::None);
        assert!(state.paragraph_buffer.is_empty());
        assert_eq!(state.line_number, 0);
        assert!(!state.is_in_paragraph());
        assert!(!state.is_in_list());
    }

    #[test]
    fn test_paragraph_buffering() {
        let mut state = ParseState::new();
        state.push_paragraph_line("first");
        state.push_paragraph_line("second");
        assert!(state.is_in_paragraph());
        assert_eq!(state.paragraph_buffer.len(), 2);

        let lines = state.take_paragraph().unwrap();
        assert_eq!(lines, vec!["first", "second"]);
        assert!(state.paragraph_buffer.is_empty());
        assert!(!state.is_in_paragraph());
    }

    #[test]
    fn test_take_paragraph_when_in_list() {
        let mut state = ParseState::new();
        state.open_list(ListKind::Unordered);
        assert_eq!(state.take_paragraph(), None);
        assert!(state.is_in_list());
    }

    #[test]
    fn test_list_operations() {
        let mut state = ParseState::new();
        assert_eq!(state.close_list(), None);

        state.open_list(ListKind::Ordered);
        assert!(state.is_in_list());
        assert_eq!(state.block_mode.list_kind(), Some(ListKind::Ordered));

        assert_eq!(state.close_list(), Some(ListKind::Ordered));
        assert_eq!(state.block_mode, BlockMode::None);
    }
}
