use std::collections::HashMap;

use super::{
    diagnostic::{Diagnostic, DiagnosticKind},
    footnotes::{Checkpoint, FootnoteRegistry},
};

/// The section the parser is currently inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub level: u8,
    /// Content of a literal section is not inline-parsed.
    pub literal: bool,
}

/// A heading recorded for anchors and the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRef {
    pub level: u8,
    pub id: String,
    pub title: String,
}

/// Mutable state for one parse.
///
/// Created fresh for every document and dropped afterwards, so a `Parser`
/// can be shared between threads.
#[derive(Debug, Default)]
pub struct ParseContext {
    pub footnotes: FootnoteRegistry,
    pub diagnostics: Vec<Diagnostic>,
    pub headings: Vec<HeadingRef>,
    pub section: Option<Section>,
    /// Set by `~~NOTOC~~` anywhere in the document.
    pub notoc: bool,
    /// Line currently being processed.
    pub line: usize,
    ids: HashMap<String, usize>,
}

/// Snapshot of the rollback-able parts of a [`ParseContext`].
#[derive(Debug, Clone, Copy)]
pub struct ContextCheckpoint {
    footnotes: Checkpoint,
    diagnostics: usize,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, kind: DiagnosticKind) {
        self.report_at(self.line, kind);
    }

    pub fn report_at(&mut self, line: usize, kind: DiagnosticKind) {
        log::debug!("line {line}: {kind}");
        self.diagnostics.push(Diagnostic { line, kind });
    }

    pub fn in_literal_section(&self) -> bool {
        self.section.as_ref().is_some_and(|s| s.literal)
    }

    /// Returns `slug` or, if taken, `slug` with the next free numeric suffix.
    pub fn unique_id(&mut self, slug: &str) -> String {
        let Some(&last) = self.ids.get(slug) else {
            self.ids.insert(slug.to_string(), 0);
            return slug.to_string();
        };
        let mut count = last;
        let candidate = loop {
            count += 1;
            let candidate = format!("{slug}{count}");
            if !self.ids.contains_key(&candidate) {
                break candidate;
            }
        };
        self.ids.insert(slug.to_string(), count);
        self.ids.insert(candidate.clone(), 0);
        candidate
    }

    pub fn checkpoint(&self) -> ContextCheckpoint {
        ContextCheckpoint {
            footnotes: self.footnotes.checkpoint(),
            diagnostics: self.diagnostics.len(),
        }
    }

    pub fn rollback(&mut self, checkpoint: ContextCheckpoint) {
        self.footnotes.rollback(checkpoint.footnotes);
        self.diagnostics.truncate(checkpoint.diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_ids_get_suffixes() {
        let mut ctx = ParseContext::new();
        assert_eq!(ctx.unique_id("intro"), "intro");
        assert_eq!(ctx.unique_id("intro"), "intro1");
        assert_eq!(ctx.unique_id("intro"), "intro2");
    }

    #[test]
    fn suffix_skips_ids_already_taken() {
        let mut ctx = ParseContext::new();
        assert_eq!(ctx.unique_id("intro1"), "intro1");
        assert_eq!(ctx.unique_id("intro"), "intro");
        assert_eq!(ctx.unique_id("intro"), "intro2");
    }

    #[test]
    fn rollback_truncates_diagnostics() {
        let mut ctx = ParseContext::new();
        ctx.report(DiagnosticKind::MalformedTableRow);
        let cp = ctx.checkpoint();
        ctx.report(DiagnosticKind::OrphanRowspan);
        ctx.rollback(cp);
        assert_eq!(ctx.diagnostics.len(), 1);
    }
}
