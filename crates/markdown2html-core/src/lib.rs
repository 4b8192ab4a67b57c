//! markdown2html Core
//!
//! This crate provides core types and error definitions
//! for the markdown2html converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ParseState`] - The open-block state carried through a conversion
//! - [`BlockMode`], [`ListKind`] - State enums
//! - [`Markdown2HtmlError`] - Error types

pub mod enums;
pub mod error;
pub mod state;

pub use enums::{BlockMode, ListKind};
pub use error::{Markdown2HtmlError, Result};
pub use state::ParseState;
