use crate::{config::ParserConfig, parsing::footnotes::FootnoteRegistry};

use super::inline::{citation_id, render_inline};

/// Writes the trailing footnote section, one entry per index.
///
/// Each entry starts with one back-reference per citation, the first of
/// which carries the `fn__N` anchor the references point at.
pub fn render_footnotes(out: &mut String, footnotes: &FootnoteRegistry, config: &ParserConfig) {
    if footnotes.is_empty() {
        return;
    }
    out.push_str("<div class=\"footnotes\">\n");
    for note in footnotes.iter() {
        out.push_str("<div class=\"fn\">");
        for occurrence in 1..=note.citations {
            if occurrence > 1 {
                out.push_str(", ");
            }
            let id = if occurrence == 1 {
                format!(" id=\"fn__{}\"", note.index)
            } else {
                String::new()
            };
            out.push_str(&format!(
                "<sup><a href=\"#{}\"{id} class=\"fn_bot\">{})</a></sup>",
                citation_id(note.index, occurrence),
                note.index
            ));
        }
        out.push_str(" <div class=\"content\">");
        render_inline(out, &note.content, config);
        out.push_str("</div></div>\n");
    }
    out.push_str("</div>\n");
}
