use crate::parsing::paths::{is_external, url_scheme};

/// `[[target]]` and `[[target|text]]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALIAS: char = '|';
    pub const FRAGMENT: char = '#';
    pub const INTERWIKI: char = '>';
    pub const WWW: &'static str = "www.";
}

/// What a `[[…]]` target points at, decided from its syntax alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    External(&'a str),
    /// A `scheme://` URL whose scheme is not allowed.
    Disallowed { scheme: &'a str },
    Email(&'a str),
    Interwiki { prefix: &'a str, page: &'a str },
    /// An internal page, optionally with a heading fragment. An empty page
    /// means a fragment on the current page.
    Internal {
        page: &'a str,
        fragment: Option<&'a str>,
    },
}

impl<'a> LinkTarget<'a> {
    pub fn classify(target: &'a str) -> Self {
        let target = target.trim();
        if is_external(target) || target.starts_with(WikiLink::WWW) {
            return LinkTarget::External(target);
        }
        if let Some(scheme) = url_scheme(target) {
            return LinkTarget::Disallowed { scheme };
        }
        if let Some((prefix, page)) = target.split_once(WikiLink::INTERWIKI)
            && is_interwiki_prefix(prefix)
        {
            return LinkTarget::Interwiki { prefix, page };
        }
        if is_email(target) {
            return LinkTarget::Email(target);
        }
        match target.split_once(WikiLink::FRAGMENT) {
            Some((page, fragment)) => LinkTarget::Internal {
                page,
                fragment: Some(fragment),
            },
            None => LinkTarget::Internal {
                page: target,
                fragment: None,
            },
        }
    }
}

fn is_interwiki_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// `local@domain.tld` with no whitespace or path characters.
pub fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("http://example.com/a", LinkTarget::External("http://example.com/a"))]
    #[case("www.example.com", LinkTarget::External("www.example.com"))]
    #[case("javascript://%0Aalert(1)", LinkTarget::Disallowed { scheme: "javascript" })]
    #[case("wp>Rust", LinkTarget::Interwiki { prefix: "wp", page: "Rust" })]
    #[case("me@example.org", LinkTarget::Email("me@example.org"))]
    #[case("ns:page#Intro", LinkTarget::Internal { page: "ns:page", fragment: Some("Intro") })]
    #[case("#local", LinkTarget::Internal { page: "", fragment: Some("local") })]
    #[case(" page ", LinkTarget::Internal { page: "page", fragment: None })]
    fn classifies_targets(#[case] target: &str, #[case] expected: LinkTarget<'_>) {
        assert_eq!(LinkTarget::classify(target), expected);
    }

    #[test]
    fn interwiki_prefix_must_be_a_word() {
        assert!(matches!(
            LinkTarget::classify("a b>c"),
            LinkTarget::Internal { .. }
        ));
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a.b+c@host.example"));
        assert!(!is_email("@host.example"));
        assert!(!is_email("user@localhost"));
        assert!(!is_email("user@host."));
    }
}
