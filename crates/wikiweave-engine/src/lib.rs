//! DokuWiki-style markup to HTML.
//!
//! ```
//! use wikiweave_engine::{Parser, config::ParserConfig};
//!
//! let parser = Parser::new(ParserConfig::default());
//! let html = parser.parse("Hello **world**");
//! assert!(html.contains("<strong>world</strong>"));
//! ```

pub mod config;
pub mod parsing;
pub mod render;

use config::ParserConfig;
use parsing::{diagnostic::Diagnostic, parse_document};

/// A configured converter.
///
/// Holds only the immutable configuration; each call builds its own parse
/// state, so one `Parser` can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

/// HTML plus what was noticed while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
    pub footnote_count: usize,
    pub heading_count: usize,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Converts `markup` to HTML. Never fails: malformed markup degrades to
    /// literal text.
    pub fn parse(&self, markup: &str) -> String {
        self.parse_with_diagnostics(markup).html
    }

    pub fn parse_with_diagnostics(&self, markup: &str) -> Rendered {
        let doc = parse_document(markup, &self.config);
        let html = render::render_document(&doc, &self.config);
        Rendered {
            html,
            footnote_count: doc.footnotes.len(),
            heading_count: doc.headings.len(),
            diagnostics: doc.diagnostics,
        }
    }
}

/// One-shot conversion with a borrowed configuration.
pub fn to_html(markup: &str, config: &ParserConfig) -> String {
    let doc = parse_document(markup, config);
    render::render_document(&doc, config)
}
