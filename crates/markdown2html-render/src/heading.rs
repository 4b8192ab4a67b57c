//! Heading rendering.
//!
//! Renders `<h1>` through `<h6>`. The parser only produces levels 1-6;
//! anything outside that range is clamped.

/// Render a heading line.
///
/// # Arguments
/// * `level` - Heading level (1-6)
/// * `text` - The heading text (already inline-formatted)
pub fn render_heading(level: u8, text: &str) -> String {
    let level = level.clamp(1, 6);
    format!("<h{level}>{text}</h{level}>")
}
