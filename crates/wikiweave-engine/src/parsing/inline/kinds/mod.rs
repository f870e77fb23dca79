//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters. The parser refers to
//! these constants; it never hardcodes `[[` or `**`.

pub mod autolink;
pub mod embed;
pub mod escape;
pub mod footnote;
pub mod format;
pub mod image;
pub mod link;
pub mod macros;

pub use autolink::AutoLink;
pub use embed::{Embed, EmbedLang};
pub use escape::{NoWiki, Percent};
pub use footnote::FootnoteMark;
pub use format::{Format, LineBreak};
pub use image::{ImageSpec, Media};
pub use link::{LinkTarget, WikiLink};
pub use macros::Macro;
