use crate::parsing::{
    inline::kinds::{Embed, Macro, Media},
    lines::LineRef,
};

use super::kinds::{BlockQuote, CodeOpen, Heading, Indent, ListItem, ListKind, Rule, TableRow};

/// What a line looks like on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `<html>`/`<php>` opening a block; the close tag is on a later line.
    EmbedOpen { embed: Embed, rest: &'a str },
    CodeOpen(CodeOpen<'a>),
    TableRow(&'a str),
    ListItem {
        depth: usize,
        kind: ListKind,
        content: &'a str,
    },
    /// Indented without a list marker: preformatted text.
    Indented,
    Quote { depth: u8, content: &'a str },
    Heading { level: u8, title: &'a str },
    Rule,
    /// A line that is a single `{{…}}`; holds the text between the braces.
    Image(&'a str),
    /// A line holding only a control macro.
    Macro(Macro),
    Text(&'a str),
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Whether the line is really
/// content of an open verbatim block is decided by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    pub number: usize,
    /// The full line without its terminator.
    pub text: &'a str,
    /// Leading indentation in columns.
    pub indent: usize,
    pub kind: LineKind<'a>,
}

impl LineClass<'_> {
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line, trying block openers in priority order.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let text = lr.text;
        let (indent, _) = Indent::measure(text);
        LineClass {
            number: lr.number,
            text,
            indent,
            kind: Self::kind(text, indent),
        }
    }

    fn kind(text: &str, indent: usize) -> LineKind<'_> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        let start = text.trim_start();
        if let Some(embed) = Embed::opening_at(start) {
            let rest = &start[embed.open.len()..];
            if !rest.contains(embed.close) {
                return LineKind::EmbedOpen { embed, rest };
            }
        }
        if let Some(open) = CodeOpen::parse(text) {
            return LineKind::CodeOpen(open);
        }
        if TableRow::matches(text) {
            return LineKind::TableRow(start);
        }
        if let Some(item) = ListItem::parse(text) {
            return LineKind::ListItem {
                depth: item.depth,
                kind: item.kind,
                content: item.content,
            };
        }
        if indent >= ListItem::MIN_INDENT {
            return LineKind::Indented;
        }

        let (depth, offset) = BlockQuote::strip_prefixes(text);
        if depth > 0 {
            return LineKind::Quote {
                depth,
                content: text[offset..].trim(),
            };
        }
        if let Some((level, title)) = Heading::parse(text) {
            return LineKind::Heading { level, title };
        }
        if Rule::matches(text) {
            return LineKind::Rule;
        }
        if let Some(inner) = standalone_image(trimmed) {
            return LineKind::Image(inner);
        }
        if let Some(found) = Macro::whole_line(text) {
            return LineKind::Macro(found);
        }
        LineKind::Text(trimmed)
    }
}

/// The inner text when `line` is exactly one `{{…}}`.
fn standalone_image(line: &str) -> Option<&str> {
    let inner = line.strip_prefix(Media::OPEN)?.strip_suffix(Media::CLOSE)?;
    (!inner.contains(Media::CLOSE) && !inner.contains(Media::OPEN)).then_some(inner)
}
