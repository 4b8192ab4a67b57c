//! List rendering.
//!
//! `- ` items render inside `<ul>` and `* ` items inside `<ol>`.

use markdown2html_core::ListKind;

/// Opening tag for a list.
pub fn render_list_start(kind: ListKind) -> String {
    format!("<{}>", kind.tag())
}

/// A single list item (content already inline-formatted).
pub fn render_list_item(content: &str) -> String {
    format!("<li>{}</li>", content)
}

/// Closing tag for a list.
pub fn render_list_end(kind: ListKind) -> String {
    format!("</{}>", kind.tag())
}
