//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: converts a `ParsedDoc` to a stable, serializable `Snap`
//!   whose `Display` is a compact one-line-per-block outline
//! - **`invariants`**: checks that hold for every parse (balanced lists,
//!   full table rows, dense footnote indices, unique heading ids)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
