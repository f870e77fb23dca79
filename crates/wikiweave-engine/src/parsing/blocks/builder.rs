use crate::{
    config::ParserConfig,
    parsing::{
        context::{HeadingRef, ParseContext, Section},
        diagnostic::DiagnosticKind,
        inline::{
            InlineNode, InlineParser,
            kinds::{Embed, EmbedLang, Macro, Media},
        },
    },
};

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeOpen, CodeTag, Heading, Indent},
    lists::{ListEvent, ListStack},
    table::TableBuilder,
    types::{Block, CodeBlock, QuoteLine},
};

/// Fallback anchor for headings whose title has no letters or digits.
const EMPTY_SLUG: &str = "section";

/// An open block whose lines are taken verbatim.
#[derive(Debug)]
enum Verbatim {
    None,
    Code {
        tag: CodeTag,
        lang: Option<String>,
        filename: Option<String>,
        line: usize,
        lines: Vec<String>,
    },
    Embed {
        embed: Embed,
        line: usize,
        lines: Vec<String>,
    },
    Preformatted {
        indent: usize,
        lines: Vec<String>,
    },
}

impl Verbatim {
    fn close_tag(&self) -> Option<&'static str> {
        match self {
            Verbatim::Code { tag, .. } => Some(tag.close()),
            Verbatim::Embed { embed, .. } => Some(embed.close),
            Verbatim::None | Verbatim::Preformatted { .. } => None,
        }
    }

    fn push_line(&mut self, text: &str) {
        match self {
            Verbatim::Code { lines, .. }
            | Verbatim::Embed { lines, .. }
            | Verbatim::Preformatted { lines, .. } => lines.push(text.to_string()),
            Verbatim::None => {}
        }
    }

    /// Tag name and opening line of a block that needs a close tag.
    fn unterminated(&self) -> Option<(&'static str, usize)> {
        match self {
            Verbatim::Code { tag, line, .. } => Some((tag.name(), *line)),
            Verbatim::Embed { embed, line, .. } => Some((embed.lang.name(), *line)),
            Verbatim::None | Verbatim::Preformatted { .. } => None,
        }
    }
}

/// Line-driven block state machine.
///
/// Paragraph, list, table and quote lines are buffered separately; any line
/// that starts a different kind of block flushes the others first, in the
/// order list, table, quote, paragraph, verbatim. Verbatim blocks (code,
/// embeds, preformatted) see every line, blank ones included, until they
/// close.
pub struct BlockBuilder<'a> {
    config: &'a ParserConfig,
    ctx: ParseContext,
    verbatim: Verbatim,
    paragraph: Vec<String>,
    list: ListStack,
    list_events: Vec<ListEvent>,
    table: TableBuilder,
    quote: Vec<(u8, String)>,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(config: &'a ParserConfig) -> Self {
        Self {
            config,
            ctx: ParseContext::new(),
            verbatim: Verbatim::None,
            paragraph: vec![],
            list: ListStack::new(),
            list_events: vec![],
            table: TableBuilder::new(),
            quote: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        self.ctx.line = c.number;

        if self.consume_verbatim(c) {
            return;
        }

        match &c.kind {
            LineKind::Blank => self.flush_all(),
            LineKind::EmbedOpen { embed, rest } => {
                self.flush_all();
                log::debug!("line {}: {} block opened", c.number, embed.lang.name());
                self.verbatim = Verbatim::Embed {
                    embed: *embed,
                    line: c.number,
                    lines: vec![],
                };
                if !rest.trim().is_empty() {
                    self.verbatim.push_line(rest);
                }
            }
            LineKind::CodeOpen(open) => {
                self.flush_all();
                self.open_code(open, c.number);
            }
            LineKind::TableRow(row) => {
                self.flush_list();
                self.flush_quote();
                self.flush_paragraph();
                self.table.push(c.number, row);
            }
            LineKind::ListItem {
                depth,
                kind,
                content,
            } => {
                self.flush_table();
                self.flush_quote();
                self.flush_paragraph();
                let events = self.list.open_or_continue(*depth, *kind);
                self.list_events.extend(events);
                let content = self.inline(content);
                self.list_events.push(ListEvent::Content(content));
            }
            LineKind::Indented => {
                self.flush_all();
                self.verbatim = Verbatim::Preformatted {
                    indent: c.indent,
                    lines: vec![Indent::strip(c.text, c.indent).to_string()],
                };
            }
            LineKind::Quote { depth, content } => {
                self.flush_list();
                self.flush_table();
                self.flush_paragraph();
                self.quote.push((*depth, content.to_string()));
            }
            LineKind::Heading { level, title } => {
                self.flush_all();
                self.push_heading(*level, title);
            }
            LineKind::Rule => {
                self.flush_all();
                self.out.push(Block::Rule);
            }
            LineKind::Image(inner) => {
                self.flush_all();
                let image = InlineParser::new(self.config, &mut self.ctx).image(inner);
                self.out.push(match image {
                    Some(image) => Block::Image(image),
                    None => Block::Paragraph(vec![InlineNode::Text(format!(
                        "{}{inner}{}",
                        Media::OPEN,
                        Media::CLOSE
                    ))]),
                });
            }
            LineKind::Macro(found) => {
                if *found == Macro::NoToc {
                    self.ctx.notoc = true;
                }
            }
            LineKind::Text(text) => {
                self.flush_list();
                self.flush_table();
                self.flush_quote();
                self.paragraph.push(text.to_string());
            }
        }
    }

    /// Flushes everything, reporting verbatim blocks still waiting for a
    /// close tag, and hands back the blocks with the parse state.
    pub fn finish(mut self) -> (Vec<Block>, ParseContext) {
        // EOF flush
        if let Some((tag, line)) = self.verbatim.unterminated() {
            self.ctx.report_at(
                line,
                DiagnosticKind::UnterminatedBlock {
                    tag: tag.to_string(),
                },
            );
        }
        self.flush_all();
        (self.out, self.ctx)
    }

    /// Feeds `c` to an open verbatim block. Returns `false` when no block is
    /// open or the line ends an indented block and needs normal handling.
    fn consume_verbatim(&mut self, c: &LineClass<'_>) -> bool {
        if let Verbatim::Preformatted { indent, lines } = &mut self.verbatim {
            if c.is_blank() {
                lines.push(String::new());
                return true;
            }
            if c.kind == LineKind::Indented && c.indent >= *indent {
                lines.push(Indent::strip(c.text, *indent).to_string());
                return true;
            }
            self.flush_verbatim();
            return false;
        }

        let Some(close) = self.verbatim.close_tag() else {
            return false;
        };
        match c.text.find(close) {
            Some(at) => {
                let before = &c.text[..at];
                if !before.trim().is_empty() {
                    self.verbatim.push_line(before);
                }
                self.flush_verbatim();
                let after = c.text[at + close.len()..].trim();
                if !after.is_empty() {
                    self.paragraph.push(after.to_string());
                }
            }
            None => self.verbatim.push_line(c.text),
        }
        true
    }

    fn open_code(&mut self, open: &CodeOpen<'_>, line: usize) {
        let close = open.tag.close();
        let lang = open.lang.map(str::to_string);
        let filename = open.filename.map(str::to_string);

        if let Some(at) = open.rest.find(close) {
            self.out.push(Block::Code(CodeBlock {
                tag: open.tag,
                lang,
                filename,
                content: open.rest[..at].to_string(),
            }));
            let after = open.rest[at + close.len()..].trim();
            if !after.is_empty() {
                self.paragraph.push(after.to_string());
            }
            return;
        }

        log::debug!("line {line}: <{}> block opened", open.tag.name());
        self.verbatim = Verbatim::Code {
            tag: open.tag,
            lang,
            filename,
            line,
            lines: vec![],
        };
        if !open.rest.trim().is_empty() {
            self.verbatim.push_line(open.rest);
        }
    }

    fn push_heading(&mut self, level: u8, title: &str) {
        let content = InlineParser::new(self.config, &mut self.ctx).parse(title);
        let slug = match Heading::slug(title) {
            s if s.is_empty() => EMPTY_SLUG.to_string(),
            s => s,
        };
        let id = self.ctx.unique_id(&slug);

        self.ctx.headings.push(HeadingRef {
            level,
            id: id.clone(),
            title: InlineNode::plain_text(&content).trim().to_string(),
        });
        self.ctx.section = Some(Section {
            title: title.to_string(),
            level,
            literal: self.config.is_literal_section(title),
        });
        self.out.push(Block::Heading { level, id, content });
    }

    /// Inline-parses `text`, or keeps it literal inside a literal section.
    fn inline(&mut self, text: &str) -> Vec<InlineNode> {
        if self.ctx.in_literal_section() {
            if text.is_empty() {
                return vec![];
            }
            return vec![InlineNode::Text(text.to_string())];
        }
        InlineParser::new(self.config, &mut self.ctx).parse(text)
    }

    fn flush_all(&mut self) {
        self.flush_list();
        self.flush_table();
        self.flush_quote();
        self.flush_paragraph();
        self.flush_verbatim();
    }

    fn flush_list(&mut self) {
        if self.list.is_empty() {
            return;
        }
        let mut events = std::mem::take(&mut self.list_events);
        events.extend(self.list.close_all());
        self.out.push(Block::List(events));
    }

    fn flush_table(&mut self) {
        if self.table.is_empty() {
            return;
        }
        let table = std::mem::take(&mut self.table);
        let literal = self.ctx.in_literal_section();
        let mut parser = InlineParser::new(self.config, &mut self.ctx);
        let (table, diagnostics) = table.build(|cell| {
            if literal {
                vec![InlineNode::Text(cell.to_string())]
            } else {
                parser.parse(cell)
            }
        });
        for diagnostic in diagnostics {
            self.ctx.report_at(diagnostic.line, diagnostic.kind);
        }
        self.out.push(Block::Table(table));
    }

    fn flush_quote(&mut self) {
        if self.quote.is_empty() {
            return;
        }
        let mut groups: Vec<(u8, String)> = vec![];
        for (depth, text) in std::mem::take(&mut self.quote) {
            match groups.last_mut() {
                Some((d, joined)) if *d == depth => {
                    if !text.is_empty() {
                        if !joined.is_empty() {
                            joined.push(' ');
                        }
                        joined.push_str(&text);
                    }
                }
                _ => groups.push((depth, text)),
            }
        }
        let lines = groups
            .into_iter()
            .map(|(depth, text)| QuoteLine {
                depth,
                content: self.inline(&text),
            })
            .collect();
        self.out.push(Block::Quote(lines));
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.paragraph).join(" ");
        let content = self.inline(&text);
        if !content.is_empty() {
            self.out.push(Block::Paragraph(content));
        }
    }

    fn flush_verbatim(&mut self) {
        match std::mem::replace(&mut self.verbatim, Verbatim::None) {
            Verbatim::None => {}
            Verbatim::Code {
                tag,
                lang,
                filename,
                lines,
                ..
            } => self.out.push(Block::Code(CodeBlock {
                tag,
                lang,
                filename,
                content: lines.join("\n"),
            })),
            Verbatim::Embed { embed, lines, .. } => {
                let content = lines.join("\n");
                let block = match embed.lang {
                    EmbedLang::Html if self.config.html_embed_allowed => Block::Html(content),
                    lang => Block::Code(CodeBlock {
                        tag: CodeTag::Code,
                        lang: Some(lang.name().to_string()),
                        filename: None,
                        content,
                    }),
                };
                self.out.push(block);
            }
            Verbatim::Preformatted { mut lines, .. } => {
                while lines.last().is_some_and(|l| l.trim().is_empty()) {
                    lines.pop();
                }
                if !lines.is_empty() {
                    self.out.push(Block::Preformatted(lines.join("\n")));
                }
            }
        }
    }
}
