use std::collections::HashSet;

use crate::parsing::{
    ParsedDoc,
    blocks::{Block, ListEvent, Table},
};

/// Panics if `doc` breaks a structural invariant.
pub fn check(doc: &ParsedDoc) {
    for block in &doc.blocks {
        match block {
            Block::List(events) => check_list(events),
            Block::Table(table) => check_table(table),
            _ => {}
        }
    }

    for (i, note) in doc.footnotes.iter().enumerate() {
        assert_eq!(note.index, i + 1, "footnote indices must be dense and 1-based");
        assert!(note.citations >= 1, "footnote {} is never cited", note.index);
    }

    let mut ids = HashSet::new();
    for heading in &doc.headings {
        assert!(ids.insert(&heading.id), "duplicate heading id {:?}", heading.id);
    }
}

fn check_list(events: &[ListEvent]) {
    let mut lists = 0usize;
    let mut items = 0usize;
    for event in events {
        match event {
            ListEvent::OpenList(_) => lists += 1,
            ListEvent::CloseList(_) => {
                lists = lists.checked_sub(1).expect("list closed before it was opened");
            }
            ListEvent::OpenItem { .. } => items += 1,
            ListEvent::CloseItem => {
                items = items.checked_sub(1).expect("item closed before it was opened");
            }
            ListEvent::Content(_) => assert!(items > 0, "list content outside an item"),
        }
    }
    assert_eq!((lists, items), (0, 0), "unbalanced list events: {events:?}");
}

/// Every row, counting cells spanned in from rows above, covers exactly
/// `table.columns` columns.
fn check_table(table: &Table) {
    // Remaining rows each column stays occupied by a rowspan from above.
    let mut carried = vec![0usize; table.columns];

    for (r, row) in table.rows.iter().enumerate() {
        let mut covered: Vec<bool> = carried.iter().map(|&n| n > 0).collect();
        let mut col = 0;
        for cell in &row.cells {
            while col < covered.len() && covered[col] {
                col += 1;
            }
            assert!(
                col + cell.colspan <= table.columns,
                "row {r} overflows {} columns",
                table.columns
            );
            for slot in col..col + cell.colspan {
                covered[slot] = true;
                carried[slot] = cell.rowspan;
            }
            col += cell.colspan;
        }
        assert!(
            covered.iter().all(|&c| c),
            "row {r} does not cover {} columns",
            table.columns
        );
        for n in carried.iter_mut() {
            *n = n.saturating_sub(1);
        }
    }
}
