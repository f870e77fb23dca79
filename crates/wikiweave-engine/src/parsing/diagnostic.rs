use std::fmt;

use serde::Serialize;

/// A non-fatal finding recorded while parsing.
///
/// Malformed markup always degrades to best-effort output; diagnostics let
/// callers see where that happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based source line the finding refers to.
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// A `<code>`, `<file>`, `<html>` or `<php>` block reached end of input.
    UnterminatedBlock { tag: String },
    /// A table row without a closing delimiter.
    MalformedTableRow,
    /// A `:::` cell with no cell above it to extend.
    OrphanRowspan,
    /// An interwiki link whose prefix is not configured.
    UnknownInterwiki { prefix: String },
    /// A link or media target whose URL scheme is not allowed.
    DisallowedScheme { scheme: String },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnterminatedBlock { tag } => {
                write!(f, "unterminated <{tag}> block closed at end of input")
            }
            DiagnosticKind::MalformedTableRow => {
                write!(f, "table row has no closing delimiter")
            }
            DiagnosticKind::OrphanRowspan => {
                write!(f, "rowspan marker ::: has no cell above it")
            }
            DiagnosticKind::UnknownInterwiki { prefix } => {
                write!(f, "unknown interwiki prefix {prefix:?}")
            }
            DiagnosticKind::DisallowedScheme { scheme } => {
                write!(f, "URL scheme {scheme:?} is not allowed")
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}
