//! Inline markdown formatter.
//!
//! This module handles the two inline spans the converter knows about:
//! `**bold**` and `__emphasis__`. Each span type is one forward pass over
//! the text, bold strictly before emphasis, so a bold span may still
//! carry `__` markers that the emphasis pass then picks up.

/// An inline span: its two-character delimiter and the HTML tags it becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineSpan {
    /// Delimiter searched for literally (no escaping)
    pub delimiter: &'static str,
    /// Opening tag
    pub open: &'static str,
    /// Closing tag
    pub close: &'static str,
}

/// `**text**` → `<b>text</b>`
pub const BOLD: InlineSpan = InlineSpan {
    delimiter: "**",
    open: "<b>",
    close: "</b>",
};

/// `__text__` → `<em>text</em>`
pub const EMPHASIS: InlineSpan = InlineSpan {
    delimiter: "__",
    open: "<em>",
    close: "</em>",
};

/// Passes applied by [`format_inline`], in order.
pub const SPANS: [InlineSpan; 2] = [BOLD, EMPHASIS];

/// Replace every delimited occurrence of `span` in `text`.
///
/// Walks the text once: finds the leftmost delimiter, then the next one
/// after it, and swaps the pair for the span's tags. Scanning resumes after
/// the closing delimiter. An opening delimiter without a partner ends the
/// walk and the rest of the text is kept as-is.
///
/// # Example
///
/// ```
/// use markdown2html_parser::inline::{replace_spans, BOLD};
///
/// assert_eq!(replace_spans("a **b** c", &BOLD), "a <b>b</b> c");
/// assert_eq!(replace_spans("a **b", &BOLD), "a **b");
/// ```
pub fn replace_spans(text: &str, span: &InlineSpan) -> String {
    let delimiter = span.delimiter;
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delimiter) {
        let after_open = &rest[start + delimiter.len()..];
        let Some(inner_len) = after_open.find(delimiter) else {
            break;
        };

        result.push_str(&rest[..start]);
        result.push_str(span.open);
        result.push_str(&after_open[..inner_len]);
        result.push_str(span.close);

        rest = &after_open[inner_len + delimiter.len()..];
    }

    result.push_str(rest);
    result
}

/// Format a line with inline markdown.
///
/// Applies [`BOLD`] then [`EMPHASIS`]. Total: text without a closing
/// delimiter comes back unchanged.
///
/// # Example
///
/// ```
/// use markdown2html_parser::format_inline;
///
/// assert_eq!(
///     format_inline("Some **bold** and __em__ text."),
///     "Some <b>bold</b> and <em>em</em> text."
/// );
/// ```
pub fn format_inline(text: &str) -> String {
    SPANS
        .iter()
        .fold(text.to_string(), |acc, span| replace_spans(&acc, span))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(format_inline("Hello world"), "Hello world");
        assert_eq!(format_inline(""), "");
    }

    #[test]
    fn test_bold() {
        assert_eq!(format_inline("Hello **bold** world"), "Hello <b>bold</b> world");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(format_inline("Hello __em__ world"), "Hello <em>em</em> world");
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(
            format_inline("**a** b **c** __d__ __e__"),
            "<b>a</b> b <b>c</b> <em>d</em> <em>e</em>"
        );
    }

    #[test]
    fn test_unmatched_opening_left_alone() {
        assert_eq!(format_inline("A**B"), "A**B");
        assert_eq!(format_inline("A__B"), "A__B");
    }

    #[test]
    fn test_unmatched_after_match() {
        assert_eq!(format_inline("**a** and **b"), "<b>a</b> and **b");
    }

    #[test]
    fn test_emphasis_inside_bold() {
        assert_eq!(format_inline("**a __b__ c**"), "<b>a <em>b</em> c</b>");
    }

    #[test]
    fn test_bold_inside_emphasis() {
        assert_eq!(format_inline("__a **b** c__"), "<em>a <b>b</b> c</em>");
    }

    #[test]
    fn test_overlapping_spans_follow_leftmost_match() {
        // bold pass: "**a __b** c__" -> "<b>a __b</b> c__"
        // emphasis pass then pairs across the bold tag
        assert_eq!(format_inline("**a __b** c__"), "<b>a <em>b</b> c</em>");
    }

    #[test]
    fn test_empty_span() {
        assert_eq!(format_inline("****"), "<b></b>");
        assert_eq!(format_inline("____"), "<em></em>");
    }

    #[test]
    fn test_triple_delimiters() {
        assert_eq!(format_inline("***a***"), "<b>*a</b>*");
    }

    #[test]
    fn test_single_delimiters_ignored() {
        assert_eq!(format_inline("*a* _b_"), "*a* _b_");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(format_inline("héllo **wörld** ✓"), "héllo <b>wörld</b> ✓");
    }

    #[test]
    fn test_replace_spans_single_pass() {
        assert_eq!(replace_spans("__x__ **y**", &EMPHASIS), "<em>x</em> **y**");
        assert_eq!(replace_spans("__x__ **y**", &BOLD), "__x__ <b>y</b>");
    }

    #[test]
    fn test_spans_order() {
        assert_eq!(SPANS, [BOLD, EMPHASIS]);
    }
}
