use super::Indent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `*` items, rendered as `<ul>`.
    Unordered,
    /// `-` items, rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// An indented `*` or `-` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Nesting depth: indentation columns / 2.
    pub depth: usize,
    pub kind: ListKind,
    pub content: &'a str,
}

impl<'a> ListItem<'a> {
    pub const UNORDERED: u8 = b'*';
    pub const ORDERED: u8 = b'-';
    pub const MIN_INDENT: usize = 2;

    pub fn parse(line: &'a str) -> Option<Self> {
        let (columns, bytes) = Indent::measure(line);
        if columns < Self::MIN_INDENT {
            return None;
        }
        let rest = &line[bytes..];
        let kind = match rest.as_bytes().first()? {
            &Self::UNORDERED => ListKind::Unordered,
            &Self::ORDERED => ListKind::Ordered,
            _ => return None,
        };
        let after = &rest[1..];
        if !(after.is_empty() || after.starts_with([' ', '\t'])) {
            return None;
        }
        Some(ListItem {
            depth: columns / Indent::TAB_WIDTH,
            kind,
            content: after.trim(),
        })
    }
}
