use crate::parsing::inline::{Image, InlineNode};

use super::{kinds::CodeTag, lists::ListEvent, table::Table};

/// Consecutive quote lines at one depth, joined like a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLine {
    pub depth: u8,
    pub content: Vec<InlineNode>,
}

/// A `<code>`/`<file>` block, or an embed shown as code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub tag: CodeTag,
    pub lang: Option<String>,
    pub filename: Option<String>,
    /// Raw source, escaped at render time.
    pub content: String,
}

/// A structural unit of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Vec<InlineNode>),
    Heading {
        level: u8,
        /// Unique anchor id.
        id: String,
        content: Vec<InlineNode>,
    },
    /// List structure as a balanced event stream.
    List(Vec<ListEvent>),
    Table(Table),
    Quote(Vec<QuoteLine>),
    Code(CodeBlock),
    /// `<html>` content passed through verbatim.
    Html(String),
    /// Indented text, shown verbatim.
    Preformatted(String),
    Rule,
    Image(Image),
}

impl Block {
    pub fn name(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "Paragraph",
            Block::Heading { .. } => "Heading",
            Block::List(_) => "List",
            Block::Table(_) => "Table",
            Block::Quote(_) => "Quote",
            Block::Code(_) => "Code",
            Block::Html(_) => "Html",
            Block::Preformatted(_) => "Preformatted",
            Block::Rule => "Rule",
            Block::Image(_) => "Image",
        }
    }
}
