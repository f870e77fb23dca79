use crate::config::ParserConfig;

use super::namespace::{BareTarget, resolve_with};

/// Builds hrefs and media sources from resolved ids.
///
/// Direct paths map `ns:page` to `ns/page` under the configured base;
/// DokuWiki paths use the `doku.php` / `fetch.php` query-string form.
#[derive(Debug, Clone, Copy)]
pub struct Paths<'a> {
    config: &'a ParserConfig,
}

impl<'a> Paths<'a> {
    pub const TXT_EXTENSION: &'static str = ".txt";

    pub fn new(config: &'a ParserConfig) -> Self {
        Self { config }
    }

    fn bare(&self) -> BareTarget {
        if self.config.bare_links_relative {
            BareTarget::Relative
        } else {
            BareTarget::AsIs
        }
    }

    /// Resolves a page or media target against the current namespace.
    pub fn resolve(&self, target: &str) -> String {
        resolve_with(target, &self.config.current_namespace, self.bare())
    }

    /// Href for a resolved page id, with an optional already-slugified fragment.
    pub fn page_href(&self, id: &str, fragment: Option<&str>) -> String {
        let mut href = if self.config.use_dokuwiki_paths {
            format!(
                "{}doku.php?id={}",
                base(&self.config.pages_base_path),
                encode_id(id)
            )
        } else {
            let mut path = format!(
                "{}{}",
                base(&self.config.pages_base_path),
                encode_id(id).replace(':', "/")
            );
            if self.config.use_txt_extension {
                path.push_str(Self::TXT_EXTENSION);
            }
            path
        };
        if let Some(fragment) = fragment.filter(|f| !f.is_empty()) {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }

    /// Source URL for a resolved media id.
    pub fn media_src(&self, id: &str) -> String {
        if self.config.use_dokuwiki_paths {
            format!(
                "{}lib/exe/fetch.php?media={}",
                base(&self.config.media_base_path),
                encode_id(id)
            )
        } else {
            format!(
                "{}{}",
                base(&self.config.media_base_path),
                encode_id(id).replace(':', "/")
            )
        }
    }

    /// Source URL for an emoticon image file.
    pub fn smiley_src(&self, file: &str) -> String {
        format!("{}{file}", base(&self.config.smiley_base_path))
    }
}

/// Returns `base` with exactly one trailing slash, or nothing for an empty base.
fn base(base: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

/// Percent-encodes each segment of a cleaned id, keeping the colons.
fn encode_id(id: &str) -> String {
    id.split(':')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join(":")
}

/// Schemes an absolute link or media target may use.
pub const URL_SCHEMES: [&str; 11] = [
    "http", "https", "ftp", "ftps", "telnet", "gopher", "wais", "ed2k", "irc", "ldap", "news",
];

/// The scheme of a `scheme://...` target, allowed or not.
pub fn url_scheme(target: &str) -> Option<&str> {
    let (scheme, _) = target.split_once("://")?;
    let valid = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'));
    valid.then_some(scheme)
}

/// Whether a target is an absolute URL with an allowed scheme.
pub fn is_external(target: &str) -> bool {
    url_scheme(target).is_some_and(|scheme| {
        URL_SCHEMES
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> ParserConfig {
        ParserConfig {
            current_namespace: "wiki".into(),
            pages_base_path: "/pages".into(),
            media_base_path: "/media/".into(),
            ..ParserConfig::default()
        }
    }

    #[test]
    fn direct_page_paths() {
        let config = config();
        let paths = Paths::new(&config);
        assert_eq!(paths.page_href("wiki:syntax", None), "/pages/wiki/syntax");
        assert_eq!(
            paths.page_href("wiki:syntax", Some("links")),
            "/pages/wiki/syntax#links"
        );
    }

    #[test]
    fn txt_extension_is_appended() {
        let config = ParserConfig {
            use_txt_extension: true,
            ..config()
        };
        assert_eq!(
            Paths::new(&config).page_href("a:b", Some("x")),
            "/pages/a/b.txt#x"
        );
    }

    #[test]
    fn dokuwiki_paths_use_query_strings() {
        let config = ParserConfig {
            use_dokuwiki_paths: true,
            use_txt_extension: true,
            ..config()
        };
        let paths = Paths::new(&config);
        assert_eq!(paths.page_href("a:b", None), "/pages/doku.php?id=a:b");
        assert_eq!(
            paths.media_src("wiki:logo.png"),
            "/media/lib/exe/fetch.php?media=wiki:logo.png"
        );
    }

    #[test]
    fn direct_media_paths() {
        let config = config();
        assert_eq!(
            Paths::new(&config).media_src("wiki:logo.png"),
            "/media/wiki/logo.png"
        );
    }

    #[test]
    fn empty_base_stays_relative() {
        let config = ParserConfig::default();
        assert_eq!(Paths::new(&config).page_href("page", None), "page");
    }

    #[test]
    fn resolve_follows_bare_policy() {
        let mut config = config();
        assert_eq!(Paths::new(&config).resolve("page"), "wiki:page");
        config.bare_links_relative = false;
        assert_eq!(Paths::new(&config).resolve("page"), "page");
    }

    #[test]
    fn detects_external_urls() {
        assert!(is_external("http://example.com"));
        assert!(is_external("HTTPS://example.com"));
        assert!(is_external("irc://irc.libera.chat/rust"));
        assert!(!is_external("wiki:page"));
        assert!(!is_external("://nothing"));
        assert!(!is_external("1ab://x"));
    }

    #[test]
    fn unlisted_schemes_are_not_external() {
        assert!(!is_external("javascript://%0Aalert(1)"));
        assert!(!is_external("data://text/html,x"));
        assert_eq!(url_scheme("javascript://%0Aalert(1)"), Some("javascript"));
        assert_eq!(url_scheme("svn+ssh://host/repo"), Some("svn+ssh"));
        assert_eq!(url_scheme("wiki:page"), None);
    }
}
