pub mod blocks;
pub mod context;
pub mod diagnostic;
pub mod footnotes;
pub mod inline;
pub mod lines;
pub mod namespace;
pub mod paths;
pub mod snapshot;

#[cfg(test)]
mod tests;

use crate::config::ParserConfig;

use blocks::{Block, BlockBuilder, LineClassifier};
use context::HeadingRef;
use diagnostic::Diagnostic;
use footnotes::FootnoteRegistry;
use lines::lines_with_numbers;

/// The result of parsing one document, ready for rendering.
#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
    pub footnotes: FootnoteRegistry,
    pub headings: Vec<HeadingRef>,
    /// Set when the document contains `~~NOTOC~~`.
    pub notoc: bool,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn parse_document(markup: &str, config: &ParserConfig) -> ParsedDoc {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new(config);

    for lr in lines_with_numbers(markup) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let (blocks, ctx) = builder.finish();
    ParsedDoc {
        blocks,
        footnotes: ctx.footnotes,
        headings: ctx.headings,
        notoc: ctx.notoc,
        diagnostics: ctx.diagnostics,
    }
}
