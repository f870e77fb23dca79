use std::fmt;

use serde::Serialize;

use crate::parsing::{
    ParsedDoc,
    blocks::{Block, ListEvent, Table},
    inline::{InlineNode, LinkKind},
};

/// A stable, serializable outline of a parsed document.
#[derive(Debug, Serialize)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
    pub footnotes: Vec<String>,
    pub diagnostics: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BlockSnap {
    pub kind: String,
    pub text: String,
}

pub fn normalize(doc: &ParsedDoc) -> Snap {
    let blocks = doc
        .blocks
        .iter()
        .map(|b| {
            let kind = match b {
                Block::Heading { level, id, .. } => format!("Heading({level} #{id})"),
                Block::Table(table) => format!("Table({})", table.columns),
                Block::Code(code) => {
                    let mut kind = format!("Code({}", code.tag.name());
                    if let Some(lang) = &code.lang {
                        kind.push(' ');
                        kind.push_str(lang);
                    }
                    if let Some(name) = &code.filename {
                        kind.push(' ');
                        kind.push_str(name);
                    }
                    kind.push(')');
                    kind
                }
                other => other.name().to_string(),
            };
            let text = match b {
                Block::Paragraph(nodes) | Block::Heading { content: nodes, .. } => outline(nodes),
                Block::List(events) => list_outline(events),
                Block::Table(table) => table_outline(table),
                Block::Quote(lines) => lines
                    .iter()
                    .map(|l| format!("{} {}", ">".repeat(l.depth as usize), outline(&l.content)))
                    .collect::<Vec<_>>()
                    .join(" / "),
                Block::Code(code) => format!("{:?}", code.content),
                Block::Html(s) | Block::Preformatted(s) => format!("{s:?}"),
                Block::Image(img) => format!("{} {:?}", img.src, img.align),
                Block::Rule => String::new(),
            };
            BlockSnap { kind, text }
        })
        .collect();

    let footnotes = doc
        .footnotes
        .iter()
        .map(|n| format!("{}x{}: {}", n.index, n.citations, outline(&n.content)))
        .collect();
    let diagnostics = doc.diagnostics.iter().map(|d| d.to_string()).collect();

    Snap {
        blocks,
        footnotes,
        diagnostics,
    }
}

/// One token per node: quoted text, `name[children]` for containers.
fn outline(nodes: &[InlineNode]) -> String {
    nodes.iter().map(node).collect::<Vec<_>>().join(" ")
}

fn node(n: &InlineNode) -> String {
    let wrap = |name: &str, children: &[InlineNode]| format!("{name}[{}]", outline(children));
    match n {
        InlineNode::Text(s) => format!("{s:?}"),
        InlineNode::Strong(c) => wrap("strong", c),
        InlineNode::Emphasis(c) => wrap("em", c),
        InlineNode::Underline(c) => wrap("u", c),
        InlineNode::Monospace(c) => wrap("mono", c),
        InlineNode::Subscript(c) => wrap("sub", c),
        InlineNode::Superscript(c) => wrap("sup", c),
        InlineNode::Deleted(c) => wrap("del", c),
        InlineNode::Link(link) => {
            let kind = match link.kind {
                LinkKind::Internal => "internal",
                LinkKind::Anchor => "anchor",
                LinkKind::Interwiki => "interwiki",
                LinkKind::External => "external",
                LinkKind::Email => "email",
            };
            format!("link:{kind}<{}>[{}]", link.href, outline(&link.children))
        }
        InlineNode::Image(img) => format!("image<{}>", img.src),
        InlineNode::Escape(s) => format!("escape{s:?}"),
        InlineNode::Html(s) => format!("html{s:?}"),
        InlineNode::Code { lang, source } => format!("code:{lang}{source:?}"),
        InlineNode::Entity(e) => e.to_string(),
        InlineNode::Smiley(s) => format!("smiley({})", s.token),
        InlineNode::LineBreak => "br".to_string(),
        InlineNode::FootnoteRef { index, occurrence } => format!("fn({index}.{occurrence})"),
    }
}

fn list_outline(events: &[ListEvent]) -> String {
    events
        .iter()
        .map(|e| match e {
            ListEvent::OpenList(kind) => format!("{}(", kind.tag()),
            ListEvent::CloseList(_) => ")".to_string(),
            ListEvent::OpenItem { level } => format!("li{level}["),
            ListEvent::CloseItem => "]".to_string(),
            ListEvent::Content(nodes) => outline(nodes),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn table_outline(table: &Table) -> String {
    table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|c| {
                    let mut cell = String::new();
                    if c.header {
                        cell.push('^');
                    }
                    cell.push_str(&outline(&c.content));
                    if c.colspan > 1 || c.rowspan > 1 {
                        cell.push_str(&format!(" {}x{}", c.colspan, c.rowspan));
                    }
                    cell
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            if block.text.is_empty() {
                writeln!(f, "{}", block.kind)?;
            } else {
                writeln!(f, "{}: {}", block.kind, block.text)?;
            }
        }
        for note in &self.footnotes {
            writeln!(f, "footnote {note}")?;
        }
        for diagnostic in &self.diagnostics {
            writeln!(f, "! {diagnostic}")?;
        }
        Ok(())
    }
}
