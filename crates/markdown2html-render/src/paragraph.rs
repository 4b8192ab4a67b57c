//! Paragraph rendering.

/// Line break emitted between consecutive paragraph lines.
pub const LINE_BREAK: &str = "<br/>";

/// Render a flushed paragraph.
///
/// Each returned entry is one output line: `<p>`, the content lines with
/// [`LINE_BREAK`] between them (never after the last), then `</p>`.
///
/// # Example
///
/// ```
/// use markdown2html_render::render_paragraph;
///
/// let lines = render_paragraph(&["a".to_string(), "b".to_string()]);
/// assert_eq!(lines, vec!["<p>", "a", "<br/>", "b", "</p>"]);
/// ```
pub fn render_paragraph(lines: &[String]) -> Vec<String> {
    let mut result = Vec::with_capacity(lines.len() * 2 + 1);
    result.push("<p>".to_string());

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            result.push(LINE_BREAK.to_string());
        }
        result.push(line.clone());
    }

    result.push("</p>".to_string());
    result
}
