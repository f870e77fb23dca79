use crate::parsing::{
    diagnostic::{Diagnostic, DiagnosticKind},
    inline::{
        InlineNode,
        kinds::{Media, NoWiki, Percent, WikiLink},
    },
};

use super::kinds::TableRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Right,
    Center,
}

impl CellAlign {
    /// Alignment from the padding around a cell: two or more spaces on a
    /// side push the content away from it.
    fn from_padding(raw: &str) -> Option<Self> {
        let leading = raw.len() - raw.trim_start().len();
        let trailing = raw.len() - raw.trim_end().len();
        match (leading >= 2, trailing >= 2) {
            (true, true) => Some(CellAlign::Center),
            (true, false) => Some(CellAlign::Right),
            (false, true) => Some(CellAlign::Left),
            (false, false) => None,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CellAlign::Left => "leftalign",
            CellAlign::Right => "rightalign",
            CellAlign::Center => "centeralign",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub header: bool,
    pub align: Option<CellAlign>,
    pub colspan: usize,
    pub rowspan: usize,
    pub content: Vec<InlineNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cells covered by a rowspan from above are not listed.
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: usize,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RawCell<'a> {
    header: bool,
    text: &'a str,
}

/// Splits a row into cells, each typed by the delimiter before it.
///
/// Returns `false` as the second value when the row lacks a closing
/// delimiter; the unterminated remainder then forms the last cell.
/// Delimiters inside links, media, `%%` and `<nowiki>` do not split.
fn split_row(line: &str) -> (Vec<RawCell<'_>>, bool) {
    let line = line.trim();
    let mut cells = vec![];
    let mut current: Option<(bool, usize)> = None;
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];
        if let Some(skip) = protected_len(rest) {
            i += skip;
            continue;
        }
        let Some(c) = rest.chars().next() else { break };
        if c == TableRow::HEADER || c == TableRow::DATA {
            if let Some((header, start)) = current {
                cells.push(RawCell {
                    header,
                    text: &line[start..i],
                });
            }
            current = Some((c == TableRow::HEADER, i + 1));
        }
        i += c.len_utf8();
    }

    match current {
        Some((header, start)) if start < line.len() => {
            cells.push(RawCell {
                header,
                text: &line[start..],
            });
            (cells, false)
        }
        _ => (cells, true),
    }
}

/// Length of a span at the start of `s` whose delimiters must not split cells.
fn protected_len(s: &str) -> Option<usize> {
    const REGIONS: [(&str, &str); 4] = [
        (WikiLink::OPEN, WikiLink::CLOSE),
        (Media::OPEN, Media::CLOSE),
        (Percent::DELIM, Percent::DELIM),
        (NoWiki::OPEN, NoWiki::CLOSE),
    ];
    REGIONS.iter().find_map(|(open, close)| {
        let after = s.strip_prefix(open)?;
        let end = after.find(close)?;
        Some(open.len() + end + close.len())
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Content,
    /// A `:::` with nothing above to extend; shown literally.
    Orphan,
    /// A `:::` folded into the rowspan of the cell above.
    Merged,
    Padding,
}

#[derive(Debug, Clone)]
struct LayoutCell {
    header: bool,
    align: Option<CellAlign>,
    colspan: usize,
    rowspan: usize,
    start: usize,
    text: String,
    role: Role,
}

/// Buffers table rows and resolves the cell grid.
///
/// Colspans are resolved first, per row: each zero-length cell folds into
/// the cell before it. Rowspans are resolved second, per column, on the
/// colspan-adjusted positions: a `:::` cell extends the cell that starts at
/// the same column with the same width in the row above.
#[derive(Debug, Default)]
pub struct TableBuilder {
    rows: Vec<(usize, String)>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: usize, text: &str) {
        self.rows.push((line, text.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Builds the table, parsing cell content with `inline`.
    pub fn build(
        self,
        mut inline: impl FnMut(&str) -> Vec<InlineNode>,
    ) -> (Table, Vec<Diagnostic>) {
        let mut diagnostics = vec![];
        let mut grid = self.colspans(&mut diagnostics);
        self.rowspans(&mut grid, &mut diagnostics);

        let columns = grid
            .iter()
            .map(|row| row.iter().map(|c| c.colspan).sum::<usize>())
            .max()
            .unwrap_or(0);

        let rows = grid
            .into_iter()
            .map(|mut row| {
                let width: usize = row.iter().map(|c| c.colspan).sum();
                for start in width..columns {
                    row.push(LayoutCell {
                        header: false,
                        align: None,
                        colspan: 1,
                        rowspan: 1,
                        start,
                        text: String::new(),
                        role: Role::Padding,
                    });
                }
                Row {
                    cells: row
                        .into_iter()
                        .filter(|c| c.role != Role::Merged)
                        .map(|c| Cell {
                            header: c.header,
                            align: c.align,
                            colspan: c.colspan,
                            rowspan: c.rowspan,
                            content: match c.role {
                                Role::Content if !c.text.is_empty() => inline(&c.text),
                                Role::Orphan => vec![InlineNode::Text(c.text)],
                                _ => vec![],
                            },
                        })
                        .collect(),
                }
            })
            .collect();

        (Table { columns, rows }, diagnostics)
    }

    fn colspans(&self, diagnostics: &mut Vec<Diagnostic>) -> Vec<Vec<LayoutCell>> {
        let mut grid = Vec::with_capacity(self.rows.len());
        for (line, text) in &self.rows {
            let (raw, closed) = split_row(text);
            if !closed {
                diagnostics.push(Diagnostic {
                    line: *line,
                    kind: DiagnosticKind::MalformedTableRow,
                });
            }

            let mut row: Vec<LayoutCell> = vec![];
            let mut start = 0;
            for cell in raw {
                if cell.text.is_empty()
                    && let Some(prev) = row.last_mut()
                {
                    prev.colspan += 1;
                    start += 1;
                    continue;
                }
                let trimmed = cell.text.trim();
                row.push(LayoutCell {
                    header: cell.header,
                    align: CellAlign::from_padding(cell.text),
                    colspan: 1,
                    rowspan: 1,
                    start,
                    text: trimmed.to_string(),
                    role: Role::Content,
                });
                start += 1;
            }
            grid.push(row);
        }
        grid
    }

    fn rowspans(&self, grid: &mut [Vec<LayoutCell>], diagnostics: &mut Vec<Diagnostic>) {
        // For each row, the (row, cell) that owns each column.
        let mut owners: Vec<Vec<(usize, usize)>> = Vec::with_capacity(grid.len());

        for r in 0..grid.len() {
            let mut row_owners = vec![];
            for c in 0..grid[r].len() {
                let (start, colspan) = (grid[r][c].start, grid[r][c].colspan);
                let mut owner = (r, c);

                if grid[r][c].text == TableRow::ROWSPAN {
                    let above = r
                        .checked_sub(1)
                        .and_then(|prev| owners[prev].get(start).copied());
                    match above {
                        Some((or, oc))
                            if grid[or][oc].start == start && grid[or][oc].colspan == colspan =>
                        {
                            grid[or][oc].rowspan += 1;
                            grid[r][c].role = Role::Merged;
                            owner = (or, oc);
                        }
                        _ => {
                            grid[r][c].role = Role::Orphan;
                            diagnostics.push(Diagnostic {
                                line: self.rows[r].0,
                                kind: DiagnosticKind::OrphanRowspan,
                            });
                        }
                    }
                }
                row_owners.extend(std::iter::repeat_n(owner, colspan));
            }
            owners.push(row_owners);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Vec<InlineNode> {
        vec![InlineNode::Text(s.to_string())]
    }

    fn build(lines: &[&str]) -> (Table, Vec<Diagnostic>) {
        let mut builder = TableBuilder::new();
        for (i, line) in lines.iter().enumerate() {
            builder.push(i + 1, line);
        }
        builder.build(text)
    }

    fn spans(table: &Table) -> Vec<Vec<(usize, usize)>> {
        table
            .rows
            .iter()
            .map(|r| r.cells.iter().map(|c| (c.colspan, c.rowspan)).collect())
            .collect()
    }

    #[test]
    fn cells_are_typed_by_preceding_delimiter() {
        let (table, diags) = build(&["^ H1 ^ H2 |", "| a  | b ^"]);
        assert!(diags.is_empty());
        assert_eq!(table.columns, 2);
        let headers: Vec<Vec<bool>> = table
            .rows
            .iter()
            .map(|r| r.cells.iter().map(|c| c.header).collect())
            .collect();
        assert_eq!(headers, vec![vec![true, true], vec![false, false]]);
    }

    #[test]
    fn alignment_from_padding() {
        let (table, _) = build(&["|  center  |  right| left  | none |"]);
        let aligns: Vec<_> = table.rows[0].cells.iter().map(|c| c.align).collect();
        assert_eq!(
            aligns,
            vec![
                Some(CellAlign::Center),
                Some(CellAlign::Right),
                Some(CellAlign::Left),
                None
            ]
        );
    }

    #[test]
    fn empty_cells_fold_into_colspan() {
        let (table, _) = build(&["| wide |||", "| a | b | c |"]);
        assert_eq!(table.columns, 3);
        assert_eq!(spans(&table), vec![vec![(3, 1)], vec![(1, 1), (1, 1), (1, 1)]]);
    }

    #[test]
    fn padded_blank_cells_do_not_fold() {
        let (table, _) = build(&["| a | |"]);
        assert_eq!(spans(&table), vec![vec![(1, 1), (1, 1)]]);
        assert_eq!(table.rows[0].cells[1].content, vec![]);
    }

    #[test]
    fn short_rows_are_padded() {
        let (table, _) = build(&["| a | b | c |", "| d |"]);
        assert_eq!(table.rows[1].cells.len(), 3);
        assert_eq!(table.rows[1].cells[2].content, vec![]);
    }

    #[test]
    fn rowspan_extends_cell_above() {
        let (table, diags) = build(&["| a | b |", "| ::: | c |", "| ::: | d |"]);
        assert!(diags.is_empty());
        assert_eq!(
            spans(&table),
            vec![vec![(1, 3), (1, 1)], vec![(1, 1)], vec![(1, 1)]]
        );
    }

    #[test]
    fn rowspan_uses_colspan_adjusted_columns() {
        let (table, _) = build(&["| a || b |", "| c | d | ::: |"]);
        assert_eq!(table.columns, 3);
        assert_eq!(spans(&table), vec![vec![(2, 1), (1, 2)], vec![(1, 1), (1, 1)]]);
    }

    #[test]
    fn orphan_rowspan_is_literal() {
        let (table, diags) = build(&["| ::: | a |"]);
        assert_eq!(table.rows[0].cells[0].content, text(":::"));
        assert_eq!(diags[0].kind, DiagnosticKind::OrphanRowspan);
    }

    #[test]
    fn delimiters_inside_links_do_not_split() {
        let (table, _) = build(&["| [[page|text]] | {{img.png|t}} | %%a|b%% |"]);
        let cells: Vec<_> = table.rows[0]
            .cells
            .iter()
            .map(|c| InlineNode::plain_text(&c.content))
            .collect();
        assert_eq!(cells, vec!["[[page|text]]", "{{img.png|t}}", "%%a|b%%"]);
    }

    #[test]
    fn unterminated_row_keeps_remainder() {
        let (table, diags) = build(&["| a | rest without close"]);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::MalformedTableRow);
        assert_eq!(table.rows[0].cells[1].content, text("rest without close"));
    }
}
