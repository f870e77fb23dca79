use crate::{
    config::ParserConfig,
    parsing::{
        ParsedDoc,
        blocks::{ListEvent, ListStack, kinds::ListKind},
        context::HeadingRef,
        inline::{InlineNode, Link, LinkKind},
    },
};

use super::list::render_list;

/// Whether `doc` gets a table of contents under `config`.
pub fn wants_toc(doc: &ParsedDoc, config: &ParserConfig) -> bool {
    config.toc_enabled && !doc.notoc && doc.headings.len() >= config.toc_min_headings
}

/// Writes the table of contents for the headings up to `toc_max_level`.
pub fn render_toc(out: &mut String, headings: &[HeadingRef], config: &ParserConfig) {
    let events = toc_events(headings, config.toc_max_level);
    if events.is_empty() {
        return;
    }
    out.push_str("<div id=\"dw__toc\">\n<h3>Table of Contents</h3>\n<div>\n");
    render_list(out, &events, Some("toc"), config);
    out.push_str("</div>\n</div>\n");
}

/// Headings as list events, nested by level.
fn toc_events(headings: &[HeadingRef], max_level: u8) -> Vec<ListEvent> {
    let mut stack = ListStack::new();
    let mut events = vec![];
    for heading in headings.iter().filter(|h| h.level <= max_level) {
        events.extend(stack.open_or_continue(heading.level as usize, ListKind::Unordered));
        let href = format!("#{}", heading.id);
        events.push(ListEvent::Content(vec![InlineNode::Link(Link {
            kind: LinkKind::Anchor,
            title: href.clone(),
            href,
            class: None,
            children: vec![InlineNode::Text(heading.title.clone())],
        })]));
    }
    events.extend(stack.close_all());
    events
}
