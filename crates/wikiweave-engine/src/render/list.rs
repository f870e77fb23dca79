use crate::{config::ParserConfig, parsing::blocks::ListEvent};

use super::inline::render_inline;

/// Writes a balanced list event stream.
///
/// `class` goes on every list element; the table of contents uses it for
/// `toc`.
pub fn render_list(
    out: &mut String,
    events: &[ListEvent],
    class: Option<&str>,
    config: &ParserConfig,
) {
    for event in events {
        match event {
            ListEvent::OpenList(kind) => {
                // A nested list starts on its own line inside the open item.
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push('<');
                out.push_str(kind.tag());
                if let Some(class) = class {
                    out.push_str(&format!(" class=\"{class}\""));
                }
                out.push_str(">\n");
            }
            ListEvent::CloseList(kind) => {
                out.push_str("</");
                out.push_str(kind.tag());
                out.push_str(">\n");
            }
            ListEvent::OpenItem { level } => {
                out.push_str(&format!("<li class=\"level{level}\">"));
            }
            ListEvent::Content(nodes) => {
                out.push_str("<div class=\"li\">");
                render_inline(out, nodes, config);
                out.push_str("</div>");
            }
            ListEvent::CloseItem => out.push_str("</li>\n"),
        }
    }
}
