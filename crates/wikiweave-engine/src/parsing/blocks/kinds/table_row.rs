/// Table rows start with `^` (header cell) or `|` (data cell).
pub struct TableRow;

impl TableRow {
    pub const HEADER: char = '^';
    pub const DATA: char = '|';
    /// A cell holding only this marker extends the cell above it.
    pub const ROWSPAN: &'static str = ":::";

    /// A lone delimiter has no cells and is not a row.
    pub fn matches(line: &str) -> bool {
        let line = line.trim();
        line.len() > 1 && line.starts_with([Self::HEADER, Self::DATA])
    }
}
