use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Errors raised while building an interwiki table.
///
/// These are the only errors the engine reports: malformed markup never
/// fails, a malformed configuration does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterwikiError {
    #[error("interwiki prefix is empty")]
    EmptyPrefix,
    #[error("interwiki prefix {0:?} contains characters outside [A-Za-z0-9_.-]")]
    InvalidPrefix(String),
    #[error("interwiki prefix {0:?} has an empty URL base")]
    EmptyBase(String),
}

/// Prefix to URL-base table for `[[prefix>page]]` links.
///
/// A base containing `{NAME}` has the encoded page substituted in place,
/// any other base has the encoded page appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct Interwiki(BTreeMap<String, String>);

impl Interwiki {
    /// The placeholder replaced by the page name inside a URL base.
    pub const NAME: &'static str = "{NAME}";

    const DEFAULTS: [(&'static str, &'static str); 5] = [
        ("wp", "https://en.wikipedia.org/wiki/{NAME}"),
        ("doku", "https://www.dokuwiki.org/{NAME}"),
        ("google", "https://www.google.com/search?q="),
        ("phpfn", "https://www.php.net/{NAME}"),
        ("man", "http://man.cx/"),
    ];

    /// An empty table, without the built-in prefixes.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds or replaces a prefix, validating both sides.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        base: impl Into<String>,
    ) -> Result<(), InterwikiError> {
        let prefix = prefix.into().trim().to_string();
        let base = base.into().trim().to_string();
        if prefix.is_empty() {
            return Err(InterwikiError::EmptyPrefix);
        }
        if !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        {
            return Err(InterwikiError::InvalidPrefix(prefix));
        }
        if base.is_empty() {
            return Err(InterwikiError::EmptyBase(prefix));
        }
        self.0.insert(prefix.to_ascii_lowercase(), base);
        Ok(())
    }

    /// Looks a prefix up case-insensitively.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.0
            .get(&prefix.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the URL for `page` under `prefix`, or `None` for an unknown prefix.
    pub fn url(&self, prefix: &str, page: &str) -> Option<String> {
        let base = self.get(prefix)?;
        let encoded = urlencoding::encode(page);
        if base.contains(Self::NAME) {
            Some(base.replace(Self::NAME, &encoded))
        } else {
            Some(format!("{base}{encoded}"))
        }
    }
}

impl Default for Interwiki {
    fn default() -> Self {
        Self(
            Self::DEFAULTS
                .iter()
                .map(|(prefix, base)| (prefix.to_string(), base.to_string()))
                .collect(),
        )
    }
}

impl TryFrom<BTreeMap<String, String>> for Interwiki {
    type Error = InterwikiError;

    /// Entries are merged over the built-in prefixes.
    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut table = Self::default();
        for (prefix, base) in map {
            table.insert(prefix, base)?;
        }
        Ok(table)
    }
}

impl From<Interwiki> for BTreeMap<String, String> {
    fn from(table: Interwiki) -> Self {
        table.0
    }
}

/// Immutable options for one [`crate::Parser`].
///
/// Every field has a default, so a partial TOML table deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Base namespace for relative link resolution, e.g. `wiki:howto`.
    pub current_namespace: String,
    /// Prefix for internal page hrefs.
    pub pages_base_path: String,
    /// Prefix for media `src` and hrefs.
    pub media_base_path: String,
    /// Prefix for emoticon images when `use_emoji` is off.
    pub smiley_base_path: String,
    /// Append `.txt` to internal page hrefs (direct paths only).
    pub use_txt_extension: bool,
    /// Use `doku.php?id=` / `fetch.php?media=` hrefs instead of file paths.
    pub use_dokuwiki_paths: bool,
    /// Pass `<html>` content through verbatim instead of showing it as code.
    pub html_embed_allowed: bool,
    pub typography_enabled: bool,
    /// Unicode glyphs instead of image references for emoticons.
    pub use_emoji: bool,
    pub toc_enabled: bool,
    /// Minimum number of headings before a table of contents is emitted.
    pub toc_min_headings: usize,
    /// Deepest heading level listed in the table of contents.
    pub toc_max_level: u8,
    /// Resolve `[[page]]` (no colon) relative to `current_namespace`.
    pub bare_links_relative: bool,
    /// Section titles whose content is rendered without inline markup.
    pub literal_sections: Vec<String>,
    pub interwiki: Interwiki,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            current_namespace: String::new(),
            pages_base_path: String::new(),
            media_base_path: String::new(),
            smiley_base_path: "lib/images/smileys/".to_string(),
            use_txt_extension: false,
            use_dokuwiki_paths: false,
            html_embed_allowed: false,
            typography_enabled: true,
            use_emoji: true,
            toc_enabled: false,
            toc_min_headings: 3,
            toc_max_level: 3,
            bare_links_relative: true,
            literal_sections: Vec::new(),
            interwiki: Interwiki::default(),
        }
    }
}

impl ParserConfig {
    /// Whether `title` names a section whose content is shown literally.
    pub fn is_literal_section(&self, title: &str) -> bool {
        let title = title.trim();
        self.literal_sections
            .iter()
            .any(|name| name.trim().eq_ignore_ascii_case(title))
    }
}
