//! Core enums for the block state machine.
//!
//! These enums represent the block that is currently open while the
//! parser walks the document line by line.

use serde::{Deserialize, Serialize};

/// The kind of list being built.
///
/// Lines starting with `- ` produce unordered lists and lines starting
/// with `* ` produce ordered lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// `<ul>`, from `- ` items
    Unordered,
    /// `<ol>`, from `* ` items
    Ordered,
}

impl ListKind {
    /// Classify a list marker prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "- " => Some(ListKind::Unordered),
            "* " => Some(ListKind::Ordered),
            _ => None,
        }
    }

    /// HTML element name for this list.
    pub fn tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Unordered => write!(f, "unordered"),
            ListKind::Ordered => write!(f, "ordered"),
        }
    }
}

/// The block that is currently open.
///
/// At most one block is open at a time. Headings never stay open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockMode {
    /// Nothing open
    #[default]
    None,
    /// Collecting paragraph lines
    Paragraph,
    /// Inside a list of the given kind
    List(ListKind),
}

impl BlockMode {
    /// The open list kind, if a list is open.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            BlockMode::List(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlockMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockMode::None => write!(f, "none"),
            BlockMode::Paragraph => write!(f, "paragraph"),
            BlockMode::List(kind) => write!(f, "list({})", kind),
        }
    }
}
