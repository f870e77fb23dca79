//! # Inline Parsing
//!
//! Cursor-based inline parsing over a single content fragment (a paragraph,
//! list item, table cell, quote line, heading or footnote body).
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` and the opaque link/image/smiley payloads
//! - **`kinds`**: inline constructs with owned delimiters
//! - **`cursor`**: `Cursor` for char-boundary-safe scanning
//! - **`text`**: typography and emoticon substitution on plain text runs
//! - **`parser`**: `InlineParser` with its `try_parse_*` helpers
//!
//! ## Opaque Nodes
//!
//! Escapes, links, images, entities and embeds are resolved once into
//! final nodes. Nothing downstream re-reads their text as markup, so a
//! `//` in a URL or `**` in `%%…%%` can never turn into formatting.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod text;
pub mod types;

pub use parser::InlineParser;
pub use types::{Align, Image, ImageMode, InlineNode, Link, LinkKind, Smiley};
