use std::collections::HashSet;

use crate::{
    config::ParserConfig,
    parsing::{
        blocks::kinds::Heading,
        context::ParseContext,
        diagnostic::DiagnosticKind,
        paths::{Paths, is_external, url_scheme},
    },
};

use super::{
    cursor::Cursor,
    kinds::{
        AutoLink, Embed, EmbedLang, FootnoteMark, Format, ImageSpec, LineBreak, LinkTarget, Macro,
        Media, NoWiki, Percent, WikiLink,
    },
    text::push_text,
    types::{Image, InlineNode, Link, LinkKind},
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// At every position the constructs are tried in a fixed order:
/// 1. escapes (`<nowiki>`, `%%`), which suppress everything inside them
/// 2. `[[links]]`, `{{images}}`, bare URLs and `<email>` addresses, so a
///    `//` inside a URL is never read as emphasis
/// 3. the closer of the innermost open format
/// 4. format openers, tried only when a matching closer exists further on
/// 5. inline `<html>`/`<php>`, `((footnotes))`, `\\` breaks, `~~MACROS~~`
///
/// A format that reaches the end of the fragment unclosed is rolled back:
/// the cursor returns to the opener, which becomes literal text, and any
/// footnotes cited inside it are forgotten. Failed scans are remembered per
/// fragment, so no position is rescanned under the same set of open formats
/// and run time stays linear in the fragment length.
pub struct InlineParser<'a> {
    config: &'a ParserConfig,
    ctx: &'a mut ParseContext,
    in_footnote: bool,
}

impl<'a> InlineParser<'a> {
    pub fn new(config: &'a ParserConfig, ctx: &'a mut ParseContext) -> Self {
        Self {
            config,
            ctx,
            in_footnote: false,
        }
    }

    pub fn parse(&mut self, s: &str) -> Vec<InlineNode> {
        let mut cur = Cursor::new(s);
        let mut attempts = Attempts::new(s);
        self.parse_seq(&mut cur, &mut vec![], &mut attempts)
            .unwrap_or_default()
    }

    /// Builds an image from the text between `{{` and `}}`, or reports and
    /// returns `None` when the target uses a disallowed URL scheme.
    pub fn image(&mut self, inner: &str) -> Option<Image> {
        let spec = ImageSpec::parse(inner);
        let src = if is_external(&spec.target) {
            spec.target.clone()
        } else if let Some(scheme) = url_scheme(&spec.target) {
            self.ctx.report(DiagnosticKind::DisallowedScheme {
                scheme: scheme.to_string(),
            });
            return None;
        } else {
            let paths = Paths::new(self.config);
            paths.media_src(&paths.resolve(&spec.target))
        };
        Some(Image {
            src,
            align: spec.align,
            width: spec.width,
            height: spec.height,
            title: spec.title,
            mode: spec.mode,
            target: spec.target,
        })
    }

    /// Parses until the closer of the innermost format in `open`, or to the
    /// end of the fragment when nothing is open. Returns `None` if an open
    /// format never closes.
    fn parse_seq(
        &mut self,
        cur: &mut Cursor<'_>,
        open: &mut Vec<Format>,
        attempts: &mut Attempts,
    ) -> Option<Vec<InlineNode>> {
        let closer = open.last().copied();
        let state = closer.map(|_| Attempts::state(open));
        let mut visited = vec![];
        let mut out = vec![];
        let mut text = String::new();

        while !cur.eof() {
            if let Some(state) = state {
                if attempts.failed.contains(&(cur.i, state)) {
                    break;
                }
                visited.push(cur.i);
            }

            let opaque = self
                .try_parse_escape(cur)
                .or_else(|| self.try_parse_link(cur))
                .or_else(|| self.try_parse_image(cur))
                .or_else(|| try_parse_url(cur))
                .or_else(|| try_parse_email(cur));
            if let Some(node) = opaque {
                self.flush_text(&mut out, &mut text);
                out.push(node);
                continue;
            }

            if let Some(format) = closer
                && cur.starts_with(format.close())
            {
                cur.bump_n(format.close().len());
                self.flush_text(&mut out, &mut text);
                return Some(out);
            }

            if let Some(node) = self.try_parse_format(cur, open, attempts) {
                self.flush_text(&mut out, &mut text);
                out.push(node);
                continue;
            }

            let node = self
                .try_parse_embed(cur)
                .or_else(|| self.try_parse_footnote(cur))
                .or_else(|| try_parse_line_break(cur));
            if let Some(node) = node {
                self.flush_text(&mut out, &mut text);
                out.push(node);
                continue;
            }

            if self.try_consume_macro(cur) {
                continue;
            }

            if let Some(c) = cur.bump_char() {
                text.push(c);
            }
        }

        if let Some(state) = state {
            attempts
                .failed
                .extend(visited.into_iter().map(|i| (i, state)));
            return None;
        }
        self.flush_text(&mut out, &mut text);
        Some(out)
    }

    fn flush_text(&self, out: &mut Vec<InlineNode>, text: &mut String) {
        push_text(out, text, self.config.typography_enabled);
        text.clear();
    }

    /// `<nowiki>…</nowiki>` or `%%…%%`.
    fn try_parse_escape(&mut self, cur: &mut Cursor<'_>) -> Option<InlineNode> {
        let (open, close) = if cur.starts_with(NoWiki::OPEN) {
            (NoWiki::OPEN, NoWiki::CLOSE)
        } else if cur.starts_with(Percent::DELIM) {
            (Percent::DELIM, Percent::DELIM)
        } else {
            return None;
        };

        let saved = cur.clone();
        cur.bump_n(open.len());
        match cur.take_until(close) {
            Some(content) => Some(InlineNode::Escape(content.to_string())),
            None => {
                *cur = saved;
                None
            }
        }
    }

    /// `[[target]]` or `[[target|text]]`.
    fn try_parse_link(&mut self, cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if !cur.starts_with(WikiLink::OPEN) {
            return None;
        }

        let saved = cur.clone();
        let start = cur.i;
        cur.bump_n(WikiLink::OPEN.len());
        let Some(inner) = cur.take_until(WikiLink::CLOSE) else {
            *cur = saved;
            return None;
        };
        let source = &cur.s[start..cur.i];

        let (target, text) = match inner.split_once(WikiLink::ALIAS) {
            Some((target, text)) => (target, Some(text)),
            None => (inner, None),
        };
        Some(self.build_link(target, text, source))
    }

    fn build_link(&mut self, target: &str, text: Option<&str>, source: &str) -> InlineNode {
        let paths = Paths::new(self.config);
        let (mut link, fallback) = match LinkTarget::classify(target) {
            LinkTarget::External(url) => {
                let href = if url.starts_with(WikiLink::WWW) {
                    format!("http://{url}")
                } else {
                    url.to_string()
                };
                (new_link(LinkKind::External, href.clone(), href, None), url)
            }
            LinkTarget::Disallowed { scheme } => {
                self.ctx.report(DiagnosticKind::DisallowedScheme {
                    scheme: scheme.to_string(),
                });
                return InlineNode::Text(source.to_string());
            }
            LinkTarget::Email(address) => (
                new_link(
                    LinkKind::Email,
                    format!("mailto:{address}"),
                    address.to_string(),
                    None,
                ),
                address,
            ),
            LinkTarget::Interwiki { prefix, page } => match self.config.interwiki.url(prefix, page)
            {
                Some(url) => (
                    new_link(
                        LinkKind::Interwiki,
                        url.clone(),
                        url,
                        Some(format!("iw_{}", prefix.to_ascii_lowercase())),
                    ),
                    page,
                ),
                None => {
                    self.ctx.report(DiagnosticKind::UnknownInterwiki {
                        prefix: prefix.to_string(),
                    });
                    return InlineNode::Text(source.to_string());
                }
            },
            LinkTarget::Internal { page, fragment } => {
                let fragment = fragment.map(Heading::slug);
                if page.trim().is_empty()
                    && let Some(fragment) = &fragment
                {
                    let href = format!("#{fragment}");
                    (new_link(LinkKind::Anchor, href.clone(), href, None), target.trim())
                } else {
                    let id = paths.resolve(page);
                    let href = paths.page_href(&id, fragment.as_deref());
                    (new_link(LinkKind::Internal, href, id, None), target.trim())
                }
            }
        };

        link.children = match text.map(str::trim).filter(|t| !t.is_empty()) {
            Some(text) => match text
                .strip_prefix(Media::OPEN)
                .and_then(|rest| rest.strip_suffix(Media::CLOSE))
            {
                Some(inner) => match self.image(inner) {
                    Some(image) => vec![InlineNode::Image(image)],
                    None => vec![InlineNode::Text(text.to_string())],
                },
                None => vec![InlineNode::Text(text.to_string())],
            },
            None => vec![InlineNode::Text(fallback.to_string())],
        };
        InlineNode::Link(link)
    }

    /// `{{media}}`.
    fn try_parse_image(&mut self, cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if !cur.starts_with(Media::OPEN) {
            return None;
        }

        let saved = cur.clone();
        let start = cur.i;
        cur.bump_n(Media::OPEN.len());
        let Some(inner) = cur.take_until(Media::CLOSE) else {
            *cur = saved;
            return None;
        };
        Some(match self.image(inner) {
            Some(image) => InlineNode::Image(image),
            None => InlineNode::Text(cur.s[start..cur.i].to_string()),
        })
    }

    fn try_parse_format(
        &mut self,
        cur: &mut Cursor<'_>,
        open: &mut Vec<Format>,
        attempts: &mut Attempts,
    ) -> Option<InlineNode> {
        let format = Format::opening_at(cur.rest())?;
        if open.contains(&format) || !attempts.closes_after(format, cur.i + format.open().len()) {
            return None;
        }

        let saved = cur.clone();
        let checkpoint = self.ctx.checkpoint();
        cur.bump_n(format.open().len());
        open.push(format);
        let children = self.parse_seq(cur, open, attempts);
        open.pop();

        match children {
            Some(children) if !children.is_empty() => Some(format.wrap(children)),
            _ => {
                *cur = saved;
                self.ctx.rollback(checkpoint);
                None
            }
        }
    }

    /// Inline `<html>…</html>` or `<php>…</php>`.
    fn try_parse_embed(&mut self, cur: &mut Cursor<'_>) -> Option<InlineNode> {
        let embed = Embed::opening_at(cur.rest())?;

        let saved = cur.clone();
        cur.bump_n(embed.open.len());
        let Some(source) = cur.take_until(embed.close) else {
            *cur = saved;
            return None;
        };

        Some(match embed.lang {
            EmbedLang::Html if self.config.html_embed_allowed => InlineNode::Html(source.to_string()),
            lang => InlineNode::Code {
                lang: lang.name(),
                source: source.to_string(),
            },
        })
    }

    /// `((text))`. Identical text anywhere in the document shares one
    /// footnote; the body is parsed only when first registered.
    fn try_parse_footnote(&mut self, cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if self.in_footnote || !cur.starts_with(FootnoteMark::OPEN) {
            return None;
        }

        let saved = cur.clone();
        cur.bump_n(FootnoteMark::OPEN.len());
        let source = match cur.take_until(FootnoteMark::CLOSE) {
            Some(source) if !source.trim().is_empty() => source,
            _ => {
                *cur = saved;
                return None;
            }
        };

        let citation = match self.ctx.footnotes.cite_existing(source) {
            Some(citation) => citation,
            None => {
                self.in_footnote = true;
                let content = self.parse(source.trim());
                self.in_footnote = false;
                self.ctx.footnotes.register(source, content)
            }
        };
        Some(InlineNode::FootnoteRef {
            index: citation.index,
            occurrence: citation.occurrence,
        })
    }

    /// Drops `~~NOTOC~~` / `~~NOCACHE~~`, recording the TOC flag.
    fn try_consume_macro(&mut self, cur: &mut Cursor<'_>) -> bool {
        let Some(found) = Macro::at_start(cur.rest()) else {
            return false;
        };
        if found == Macro::NoToc {
            self.ctx.notoc = true;
        }
        cur.bump_n(found.token().len());
        true
    }
}

/// Per-fragment memory of format scans.
///
/// A scan is fully determined by where it starts and which formats are
/// open, so once a scan reaches the end of the fragment unclosed, every
/// position it passed through fails the same way for that state.
struct Attempts {
    /// `(byte offset, state)` pairs known to end unclosed.
    failed: HashSet<(usize, u16)>,
    /// Offset of the last occurrence of each format's closer.
    last_close: [Option<usize>; Format::COUNT],
}

impl Attempts {
    fn new(s: &str) -> Self {
        Self {
            failed: HashSet::new(),
            last_close: Format::ALL.map(|format| s.rfind(format.close())),
        }
    }

    /// Packs the open formats and the innermost one into a key.
    fn state(open: &[Format]) -> u16 {
        let set = open.iter().fold(0u16, |set, f| set | (1u16 << f.index()));
        let innermost = open.last().map_or(0, |f| f.index() as u16);
        (set << 3) | innermost
    }

    /// Whether `format` has a closer starting at or after `from`.
    fn closes_after(&self, format: Format, from: usize) -> bool {
        self.last_close[format.index()].is_some_and(|at| at >= from)
    }
}

fn new_link(kind: LinkKind, href: String, title: String, class: Option<String>) -> Link {
    Link {
        kind,
        href,
        title,
        class,
        children: vec![],
    }
}

/// A bare URL not glued to a preceding word.
fn try_parse_url(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.prev_char().is_some_and(char::is_alphanumeric) {
        return None;
    }
    let len = AutoLink::url_len(cur.rest())?;
    let url = &cur.rest()[..len];
    cur.bump_n(len);

    let href = if url.len() >= WikiLink::WWW.len()
        && url[..WikiLink::WWW.len()].eq_ignore_ascii_case(WikiLink::WWW)
    {
        format!("http://{url}")
    } else {
        url.to_string()
    };
    Some(InlineNode::Link(Link {
        kind: LinkKind::External,
        href: href.clone(),
        title: href,
        class: None,
        children: vec![InlineNode::Text(url.to_string())],
    }))
}

/// `<user@host>`.
fn try_parse_email(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let (address, len) = AutoLink::email_at(cur.rest())?;
    cur.bump_n(len);
    Some(InlineNode::Link(Link {
        kind: LinkKind::Email,
        href: format!("mailto:{address}"),
        title: address.to_string(),
        class: None,
        children: vec![InlineNode::Text(address.to_string())],
    }))
}

fn try_parse_line_break(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let len = LineBreak::len_at(cur.rest())?;
    cur.bump_n(len);
    Some(InlineNode::LineBreak)
}
