/// A parsed inline node.
///
/// Links, images, escapes, entities and embedded HTML are opaque: their
/// content is final and the renderer emits it exactly once, so later rules
/// can never re-interpret it.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineNode {
    /// Plain text, escaped at render time.
    Text(String),
    Strong(Vec<InlineNode>),
    Emphasis(Vec<InlineNode>),
    Underline(Vec<InlineNode>),
    Monospace(Vec<InlineNode>),
    Subscript(Vec<InlineNode>),
    Superscript(Vec<InlineNode>),
    Deleted(Vec<InlineNode>),
    Link(Link),
    Image(Image),
    /// `<nowiki>` or `%%` content: escaped, never interpreted.
    Escape(String),
    /// Inline HTML passed through verbatim.
    Html(String),
    /// Embedded source shown as escaped code (`<php>`, or `<html>` when disallowed).
    Code { lang: &'static str, source: String },
    /// A named or numeric entity reference such as `&rarr;`, emitted verbatim.
    Entity(&'static str),
    Smiley(Smiley),
    LineBreak,
    FootnoteRef { index: usize, occurrence: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    /// A link to a heading on the same page.
    Anchor,
    Interwiki,
    External,
    Email,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub kind: LinkKind,
    pub href: String,
    /// `title` attribute: the resolved id or the URL.
    pub title: String,
    /// Extra class, e.g. `iw_wp` for interwiki links.
    pub class: Option<String>,
    pub children: Vec<InlineNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    /// Image wrapped in a link to the media file.
    Linked,
    /// Image without a surrounding link.
    NoLink,
    /// Only a link to the media file, no image.
    LinkOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub align: Align,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub title: Option<String>,
    pub mode: ImageMode,
    /// The target as written, used as fallback alt/link text.
    pub target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Smiley {
    pub token: &'static str,
    pub glyph: &'static str,
    pub image: &'static str,
}

impl InlineNode {
    /// Concatenated text content, used for alt text and tests.
    pub fn plain_text(nodes: &[InlineNode]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                InlineNode::Text(s) | InlineNode::Escape(s) => out.push_str(s),
                InlineNode::Strong(c)
                | InlineNode::Emphasis(c)
                | InlineNode::Underline(c)
                | InlineNode::Monospace(c)
                | InlineNode::Subscript(c)
                | InlineNode::Superscript(c)
                | InlineNode::Deleted(c) => out.push_str(&Self::plain_text(c)),
                InlineNode::Link(link) => out.push_str(&Self::plain_text(&link.children)),
                InlineNode::Image(img) => {
                    out.push_str(img.title.as_deref().unwrap_or(&img.target))
                }
                InlineNode::Smiley(s) => out.push_str(s.token),
                InlineNode::LineBreak => out.push(' '),
                InlineNode::Html(_)
                | InlineNode::Code { .. }
                | InlineNode::Entity(_)
                | InlineNode::FootnoteRef { .. } => {}
            }
        }
        out
    }
}
