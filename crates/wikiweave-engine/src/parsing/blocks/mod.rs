//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (indentation, markers, tags)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` buffers lines per
//!    block kind and emits `Block`s when a line of another kind, a blank
//!    line or the end of input flushes them
//!
//! ## Modules
//!
//! - **`types`**: `Block` and its payloads
//! - **`kinds`**: block constructs with owned delimiters (headings, quotes,
//!   list items, code tags, rules, table rows)
//! - **`classify`**: `LineClassifier` producing `LineClass`
//! - **`lists`**: `ListStack`, the list nesting tracker
//! - **`table`**: `TableBuilder`, cell splitting and span resolution
//! - **`builder`**: the `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Code, embed and preformatted blocks are raw zones: no inline parsing
//! - List events are balanced once a list block is emitted
//! - Every table row covers exactly `columns` columns

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod lists;
pub mod table;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use lists::{ListEvent, ListStack};
pub use table::{Cell, CellAlign, Row, Table, TableBuilder};
pub use types::{Block, CodeBlock, QuoteLine};
