use std::collections::HashMap;

use super::inline::InlineNode;

/// One registered footnote.
#[derive(Debug, Clone, PartialEq)]
pub struct Footnote {
    /// 1-based index, in first-seen order.
    pub index: usize,
    /// Source text between `((` and `))`, the dedup key.
    pub source: String,
    /// Parsed body, rendered in the footnote section.
    pub content: Vec<InlineNode>,
    /// How many times the footnote is cited; each citation gets a back-reference.
    pub citations: usize,
}

/// The reference emitted where a footnote is cited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Citation {
    pub index: usize,
    /// 1-based occurrence of this footnote in the document.
    pub occurrence: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Registered,
    Cited(usize),
}

/// Marks a point the registry can be rolled back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Footnotes deduplicated by exact source text.
///
/// Identical text anywhere in the document shares one definition and gets
/// one back-reference per citation. Changes are journaled so a speculative
/// inline parse (an unclosed `**` retried as text) can undo its citations.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FootnoteRegistry {
    notes: Vec<Footnote>,
    by_source: HashMap<String, usize>,
    journal: Vec<Change>,
}

impl FootnoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cites an already registered footnote, returning `None` if `source` is new.
    pub fn cite_existing(&mut self, source: &str) -> Option<Citation> {
        let idx = *self.by_source.get(source)?;
        let note = &mut self.notes[idx];
        note.citations += 1;
        self.journal.push(Change::Cited(idx));
        Some(Citation {
            index: note.index,
            occurrence: note.citations,
        })
    }

    /// Registers a new footnote and cites it once.
    ///
    /// Falls back to citing the existing entry if `source` is already known.
    pub fn register(&mut self, source: &str, content: Vec<InlineNode>) -> Citation {
        if let Some(citation) = self.cite_existing(source) {
            return citation;
        }
        let index = self.notes.len() + 1;
        self.by_source.insert(source.to_string(), self.notes.len());
        self.notes.push(Footnote {
            index,
            source: source.to_string(),
            content,
            citations: 1,
        });
        self.journal.push(Change::Registered);
        Citation {
            index,
            occurrence: 1,
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.journal.len())
    }

    /// Undoes every registration and citation made since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        while self.journal.len() > checkpoint.0 {
            match self.journal.pop() {
                Some(Change::Registered) => {
                    if let Some(note) = self.notes.pop() {
                        self.by_source.remove(&note.source);
                    }
                }
                Some(Change::Cited(idx)) => self.notes[idx].citations -= 1,
                None => break,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Footnote> {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Vec<InlineNode> {
        vec![InlineNode::Text(s.to_string())]
    }

    #[test]
    fn indices_follow_first_seen_order() {
        let mut reg = FootnoteRegistry::new();
        assert_eq!(reg.register("a", text("a")).index, 1);
        assert_eq!(reg.register("b", text("b")).index, 2);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn identical_text_shares_an_index() {
        let mut reg = FootnoteRegistry::new();
        let first = reg.register("same", text("same"));
        let second = reg.cite_existing("same").unwrap();
        assert_eq!(first, Citation { index: 1, occurrence: 1 });
        assert_eq!(second, Citation { index: 1, occurrence: 2 });
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.iter().next().unwrap().citations, 2);
    }

    #[test]
    fn near_identical_text_is_distinct() {
        let mut reg = FootnoteRegistry::new();
        reg.register("note", text("note"));
        reg.register("note ", text("note "));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn rollback_undoes_registrations_and_citations() {
        let mut reg = FootnoteRegistry::new();
        reg.register("kept", text("kept"));
        let cp = reg.checkpoint();
        reg.cite_existing("kept");
        reg.register("dropped", text("dropped"));
        reg.rollback(cp);

        assert_eq!(reg.len(), 1);
        assert_eq!(reg.iter().next().unwrap().citations, 1);
        assert!(reg.cite_existing("dropped").is_none());
        assert_eq!(reg.register("next", text("next")).index, 2);
    }
}
