use std::sync::OnceLock;

use regex::Regex;

/// Bare URLs and `<user@host>` addresses in running text.
pub struct AutoLink;

impl AutoLink {
    pub const SCHEMES: [&'static str; 4] = ["http://", "https://", "ftp://", "www."];
    pub const EMAIL_OPEN: char = '<';

    /// Punctuation that ends a sentence rather than a URL.
    const TRAILING: &'static [char] = &['.', ',', ';', ':', '!', '?', ')', '\''];

    /// Length of the bare URL at the start of `s`.
    pub fn url_len(s: &str) -> Option<usize> {
        if !Self::SCHEMES.iter().any(|scheme| starts_with_ignore_case(s, scheme)) {
            return None;
        }
        let m = url_regex().find(s)?;
        let url = m.as_str().trim_end_matches(Self::TRAILING);
        let scheme_len = Self::SCHEMES
            .iter()
            .find(|scheme| starts_with_ignore_case(s, scheme))
            .map_or(0, |scheme| scheme.len());
        (url.len() > scheme_len).then_some(url.len())
    }

    /// The address and full length of a `<user@host>` at the start of `s`.
    pub fn email_at(s: &str) -> Option<(&str, usize)> {
        if !s.starts_with(Self::EMAIL_OPEN) {
            return None;
        }
        let caps = email_regex().captures(s)?;
        let address = caps.get(1)?.as_str();
        Some((address, caps.get(0)?.end()))
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(?i:https?://|ftp://|www\.)[^\s<>\[\]{}|"]+"#).expect("Invalid URL regex")
    })
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^<([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})>")
            .expect("Invalid email regex")
    })
}
