//! # HTML Rendering
//!
//! A stateless pass from a [`ParsedDoc`] to an HTML string.
//!
//! ## Output Shape
//!
//! Everything sits inside one `<div class="wikiweave">` container: the
//! table of contents (when enabled and not suppressed) first, then the
//! blocks in document order, then the footnote section.
//!
//! ## Modules
//!
//! - **`escape`**: text and attribute escaping
//! - **`inline`**: inline nodes, links, images and emoticons
//! - **`list`**: list event streams
//! - **`table`**: table grids with spans and alignment
//! - **`footnotes`**: the trailing footnote section
//! - **`toc`**: the table of contents

pub mod escape;
pub mod footnotes;
pub mod inline;
pub mod list;
pub mod table;
pub mod toc;

use crate::{
    config::ParserConfig,
    parsing::{
        ParsedDoc,
        blocks::{Block, CodeBlock, QuoteLine, kinds::CodeTag},
    },
};

use escape::{attr, escape_into};
use inline::{render_image, render_inline};

/// The class of the top-level container element.
pub const CONTAINER_CLASS: &str = "wikiweave";

/// Renders a parsed document as one HTML fragment.
pub fn render_document(doc: &ParsedDoc, config: &ParserConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("<div class=\"{CONTAINER_CLASS}\">\n"));
    if toc::wants_toc(doc, config) {
        toc::render_toc(&mut out, &doc.headings, config);
    }
    for block in &doc.blocks {
        render_block(&mut out, block, config);
    }
    footnotes::render_footnotes(&mut out, &doc.footnotes, config);
    out.push_str("</div>\n");
    out
}

pub fn render_block(out: &mut String, block: &Block, config: &ParserConfig) {
    match block {
        Block::Paragraph(nodes) => {
            out.push_str("<p>");
            render_inline(out, nodes, config);
            out.push_str("</p>\n");
        }
        Block::Heading { level, id, content } => {
            out.push_str(&format!("<h{level}"));
            attr(out, "id", id);
            out.push('>');
            render_inline(out, content, config);
            out.push_str(&format!("</h{level}>\n"));
        }
        Block::List(events) => list::render_list(out, events, None, config),
        Block::Table(table) => table::render_table(out, table, config),
        Block::Quote(lines) => render_quote(out, lines, config),
        Block::Code(code) => render_code(out, code),
        Block::Html(html) => {
            out.push_str(html);
            if !html.ends_with('\n') {
                out.push('\n');
            }
        }
        Block::Preformatted(text) => {
            out.push_str("<pre class=\"code\">");
            escape_into(out, text);
            out.push_str("</pre>\n");
        }
        Block::Rule => out.push_str("<hr />\n"),
        Block::Image(img) => {
            out.push_str("<p>");
            render_image(out, img);
            out.push_str("</p>\n");
        }
    }
}

/// Nests one `<blockquote>` per depth level and keeps it open across lines
/// of the same or greater depth.
fn render_quote(out: &mut String, lines: &[QuoteLine], config: &ParserConfig) {
    let mut open = 0u8;
    for line in lines {
        while open < line.depth {
            out.push_str("<blockquote>");
            open += 1;
        }
        while open > line.depth {
            out.push_str("</blockquote>\n");
            open -= 1;
        }
        out.push_str("<div class=\"no\">");
        render_inline(out, &line.content, config);
        out.push_str("</div>\n");
    }
    while open > 0 {
        out.push_str("</blockquote>\n");
        open -= 1;
    }
}

fn render_code(out: &mut String, code: &CodeBlock) {
    let pre_class = |tag: &str| match &code.lang {
        Some(lang) => format!("{tag} {lang}"),
        None => tag.to_string(),
    };
    let Some(filename) = &code.filename else {
        out.push_str("<pre");
        attr(out, "class", &pre_class(code.tag.name()));
        out.push('>');
        escape_into(out, &code.content);
        out.push_str("</pre>\n");
        return;
    };
    out.push_str("<dl class=\"file\">\n<dt>");
    escape_into(out, filename);
    out.push_str("</dt>\n<dd><pre");
    attr(out, "class", &pre_class(CodeTag::File.name()));
    out.push('>');
    escape_into(out, &code.content);
    out.push_str("</pre></dd>\n</dl>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::InlineNode;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Vec<InlineNode> {
        vec![InlineNode::Text(s.to_string())]
    }

    fn render(block: &Block) -> String {
        let mut out = String::new();
        render_block(&mut out, block, &ParserConfig::default());
        out
    }

    #[test]
    fn quote_depths_nest_and_unwind() {
        let block = Block::Quote(vec![
            QuoteLine {
                depth: 1,
                content: text("a"),
            },
            QuoteLine {
                depth: 2,
                content: text("b"),
            },
            QuoteLine {
                depth: 1,
                content: text("c"),
            },
        ]);
        assert_eq!(
            render(&block),
            "<blockquote><div class=\"no\">a</div>\n\
             <blockquote><div class=\"no\">b</div>\n\
             </blockquote>\n\
             <div class=\"no\">c</div>\n\
             </blockquote>\n"
        );
    }

    #[test]
    fn code_with_language() {
        let block = Block::Code(CodeBlock {
            tag: CodeTag::Code,
            lang: Some("rust".into()),
            filename: None,
            content: "let a = 1 < 2;".into(),
        });
        assert_eq!(
            render(&block),
            "<pre class=\"code rust\">let a = 1 &lt; 2;</pre>\n"
        );
    }

    #[test]
    fn file_with_name_gets_a_caption() {
        let block = Block::Code(CodeBlock {
            tag: CodeTag::File,
            lang: Some("toml".into()),
            filename: Some("Cargo.toml".into()),
            content: "[package]".into(),
        });
        assert_eq!(
            render(&block),
            "<dl class=\"file\">\n<dt>Cargo.toml</dt>\n\
             <dd><pre class=\"file toml\">[package]</pre></dd>\n</dl>\n"
        );
    }

    #[test]
    fn heading_carries_its_id() {
        let block = Block::Heading {
            level: 2,
            id: "intro".into(),
            content: text("Intro"),
        };
        assert_eq!(render(&block), "<h2 id=\"intro\">Intro</h2>\n");
    }

    #[test]
    fn preformatted_is_escaped() {
        assert_eq!(
            render(&Block::Preformatted("<b>\n  x".into())),
            "<pre class=\"code\">&lt;b&gt;\n  x</pre>\n"
        );
    }
}
