use super::super::types::InlineNode;

/// Simple wrapping formats. Markers are matched non-greedily and the same
/// format never nests inside itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Strong,
    Emphasis,
    Underline,
    Monospace,
    Subscript,
    Superscript,
    Deleted,
}

impl Format {
    pub const COUNT: usize = 7;

    pub const ALL: [Format; Self::COUNT] = [
        Format::Strong,
        Format::Emphasis,
        Format::Underline,
        Format::Monospace,
        Format::Subscript,
        Format::Superscript,
        Format::Deleted,
    ];

    /// Position in [`Format::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn open(self) -> &'static str {
        match self {
            Format::Strong => "**",
            Format::Emphasis => "//",
            Format::Underline => "__",
            Format::Monospace => "''",
            Format::Subscript => "<sub>",
            Format::Superscript => "<sup>",
            Format::Deleted => "<del>",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Format::Strong => "**",
            Format::Emphasis => "//",
            Format::Underline => "__",
            Format::Monospace => "''",
            Format::Subscript => "</sub>",
            Format::Superscript => "</sup>",
            Format::Deleted => "</del>",
        }
    }

    pub fn wrap(self, children: Vec<InlineNode>) -> InlineNode {
        match self {
            Format::Strong => InlineNode::Strong(children),
            Format::Emphasis => InlineNode::Emphasis(children),
            Format::Underline => InlineNode::Underline(children),
            Format::Monospace => InlineNode::Monospace(children),
            Format::Subscript => InlineNode::Subscript(children),
            Format::Superscript => InlineNode::Superscript(children),
            Format::Deleted => InlineNode::Deleted(children),
        }
    }

    /// The format whose opening marker starts `s`.
    pub fn opening_at(s: &str) -> Option<Format> {
        Self::ALL.into_iter().find(|f| s.starts_with(f.open()))
    }
}

/// `\\` followed by whitespace or the end of the fragment.
pub struct LineBreak;

impl LineBreak {
    pub const MARK: &'static str = "\\\\";

    /// Length of the break marker (plus trailing whitespace) at the start of `s`.
    pub fn len_at(s: &str) -> Option<usize> {
        let after = s.strip_prefix(Self::MARK)?;
        if after.is_empty() {
            return Some(Self::MARK.len());
        }
        if after.starts_with([' ', '\t']) {
            let ws = after.len() - after.trim_start_matches([' ', '\t']).len();
            return Some(Self::MARK.len() + ws);
        }
        None
    }
}
