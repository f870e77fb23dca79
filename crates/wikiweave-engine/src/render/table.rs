use crate::{
    config::ParserConfig,
    parsing::blocks::{Cell, Table},
};

use super::inline::render_inline;

pub fn render_table(out: &mut String, table: &Table, config: &ParserConfig) {
    out.push_str("<div class=\"table\"><table class=\"inline\">\n");
    for (index, row) in table.rows.iter().enumerate() {
        out.push_str(&format!("<tr class=\"row{index}\">"));
        for cell in &row.cells {
            render_cell(out, cell, config);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table></div>\n");
}

fn render_cell(out: &mut String, cell: &Cell, config: &ParserConfig) {
    let tag = if cell.header { "th" } else { "td" };
    out.push('<');
    out.push_str(tag);
    if let Some(align) = cell.align {
        out.push_str(&format!(" class=\"{}\"", align.class()));
    }
    if cell.colspan > 1 {
        out.push_str(&format!(" colspan=\"{}\"", cell.colspan));
    }
    if cell.rowspan > 1 {
        out.push_str(&format!(" rowspan=\"{}\"", cell.rowspan));
    }
    out.push('>');
    render_inline(out, &cell.content, config);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::{CellAlign, Row};
    use crate::parsing::inline::InlineNode;
    use pretty_assertions::assert_eq;

    fn cell(text: &str, header: bool) -> Cell {
        Cell {
            header,
            align: None,
            colspan: 1,
            rowspan: 1,
            content: vec![InlineNode::Text(text.to_string())],
        }
    }

    #[test]
    fn spans_and_alignment_become_attributes() {
        let table = Table {
            columns: 2,
            rows: vec![
                Row {
                    cells: vec![Cell {
                        colspan: 2,
                        align: Some(CellAlign::Center),
                        ..cell("Title", true)
                    }],
                },
                Row {
                    cells: vec![
                        Cell {
                            rowspan: 2,
                            ..cell("a", false)
                        },
                        cell("b", false),
                    ],
                },
                Row {
                    cells: vec![cell("c", false)],
                },
            ],
        };
        let mut out = String::new();
        render_table(&mut out, &table, &ParserConfig::default());
        assert_eq!(
            out,
            "<div class=\"table\"><table class=\"inline\">\n\
             <tr class=\"row0\"><th class=\"centeralign\" colspan=\"2\">Title</th></tr>\n\
             <tr class=\"row1\"><td rowspan=\"2\">a</td><td>b</td></tr>\n\
             <tr class=\"row2\"><td>c</td></tr>\n\
             </table></div>\n"
        );
    }
}
