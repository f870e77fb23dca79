use crate::{
    config::ParserConfig,
    parsing::{
        inline::{Align, Image, ImageMode, InlineNode, Link, LinkKind, Smiley},
        paths::Paths,
    },
};

use super::escape::{attr, escape_into};

/// Writes inline nodes as HTML.
///
/// Text is escaped here and nowhere else; entity and HTML nodes already
/// hold final markup and are copied through.
pub fn render_inline(out: &mut String, nodes: &[InlineNode], config: &ParserConfig) {
    for node in nodes {
        render_node(out, node, config);
    }
}

fn render_node(out: &mut String, node: &InlineNode, config: &ParserConfig) {
    match node {
        InlineNode::Text(s) | InlineNode::Escape(s) => escape_into(out, s),
        InlineNode::Strong(c) => wrap(out, "<strong>", c, "</strong>", config),
        InlineNode::Emphasis(c) => wrap(out, "<em>", c, "</em>", config),
        InlineNode::Underline(c) => wrap(out, "<em class=\"u\">", c, "</em>", config),
        InlineNode::Monospace(c) => wrap(out, "<code>", c, "</code>", config),
        InlineNode::Subscript(c) => wrap(out, "<sub>", c, "</sub>", config),
        InlineNode::Superscript(c) => wrap(out, "<sup>", c, "</sup>", config),
        InlineNode::Deleted(c) => wrap(out, "<del>", c, "</del>", config),
        InlineNode::Link(link) => render_link(out, link, config),
        InlineNode::Image(img) => render_image(out, img),
        InlineNode::Html(html) => out.push_str(html),
        InlineNode::Code { lang, source } => {
            out.push_str("<code");
            attr(out, "class", &format!("code {lang}"));
            out.push('>');
            escape_into(out, source);
            out.push_str("</code>");
        }
        InlineNode::Entity(entity) => out.push_str(entity),
        InlineNode::Smiley(smiley) => render_smiley(out, smiley, config),
        InlineNode::LineBreak => out.push_str("<br />\n"),
        InlineNode::FootnoteRef { index, occurrence } => {
            out.push_str(&format!(
                "<sup><a href=\"#fn__{index}\" id=\"{}\" class=\"fn_top\">{index})</a></sup>",
                citation_id(*index, *occurrence)
            ));
        }
    }
}

fn wrap(out: &mut String, open: &str, children: &[InlineNode], close: &str, config: &ParserConfig) {
    out.push_str(open);
    render_inline(out, children, config);
    out.push_str(close);
}

/// Anchor id of the `occurrence`-th citation of footnote `index`.
pub fn citation_id(index: usize, occurrence: usize) -> String {
    if occurrence <= 1 {
        format!("fnt__{index}")
    } else {
        format!("fnt__{index}_{occurrence}")
    }
}

fn link_class(link: &Link) -> String {
    let base = match link.kind {
        LinkKind::Internal | LinkKind::Anchor => "wikilink1",
        LinkKind::Interwiki => "interwiki",
        LinkKind::External => "urlextern",
        LinkKind::Email => "mail",
    };
    match &link.class {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

fn render_link(out: &mut String, link: &Link, config: &ParserConfig) {
    out.push_str("<a");
    attr(out, "href", &link.href);
    attr(out, "class", &link_class(link));
    attr(out, "title", &link.title);
    if link.kind == LinkKind::External {
        out.push_str(" rel=\"nofollow\"");
    }
    out.push('>');
    for child in &link.children {
        match child {
            // A linked image must not nest a second anchor.
            InlineNode::Image(img) => render_img_tag(out, img),
            other => render_node(out, other, config),
        }
    }
    out.push_str("</a>");
}

fn align_class(align: Align) -> &'static str {
    match align {
        Align::Left => "medialeft",
        Align::Right => "mediaright",
        Align::Center => "mediacenter",
    }
}

fn alt_text(img: &Image) -> &str {
    img.title.as_deref().unwrap_or(&img.target)
}

fn render_img_tag(out: &mut String, img: &Image) {
    out.push_str("<img");
    attr(out, "src", &img.src);
    attr(out, "class", align_class(img.align));
    attr(out, "alt", alt_text(img));
    if let Some(title) = &img.title {
        attr(out, "title", title);
    }
    if let Some(width) = img.width {
        out.push_str(&format!(" width=\"{width}\""));
    }
    if let Some(height) = img.height {
        out.push_str(&format!(" height=\"{height}\""));
    }
    out.push_str(" />");
}

pub(crate) fn render_image(out: &mut String, img: &Image) {
    if img.mode == ImageMode::NoLink {
        render_img_tag(out, img);
        return;
    }
    out.push_str("<a");
    attr(out, "href", &img.src);
    attr(out, "class", "media");
    attr(out, "title", &img.target);
    out.push('>');
    match img.mode {
        ImageMode::LinkOnly => escape_into(out, alt_text(img)),
        _ => render_img_tag(out, img),
    }
    out.push_str("</a>");
}

fn render_smiley(out: &mut String, smiley: &Smiley, config: &ParserConfig) {
    if config.use_emoji {
        out.push_str(smiley.glyph);
        return;
    }
    out.push_str("<img");
    attr(out, "src", &Paths::new(config).smiley_src(smiley.image));
    attr(out, "class", "icon smiley");
    attr(out, "alt", smiley.token);
    out.push_str(" />");
}
