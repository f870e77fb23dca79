//! Namespace resolution for page and media ids.
//!
//! Ids are colon-delimited paths (`wiki:howto:start`). Link targets may be
//! absolute (`:ns:page`), relative to the current namespace (`.:page`,
//! `..:page`) or bare (`page`).

/// How a target without any `.`/`:` prefix is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BareTarget {
    /// A target without a colon lives in the current namespace.
    Relative,
    /// The target is used as written.
    AsIs,
}

/// Page id used when a target resolves to nothing.
pub const START_PAGE: &str = "start";

const SEPARATOR: char = ':';

/// Resolves `target` against `current` with bare targets treated as relative.
pub fn resolve(target: &str, current: &str) -> String {
    resolve_with(target, current, BareTarget::Relative)
}

/// Resolves `target` against the `current` namespace.
pub fn resolve_with(target: &str, current: &str, bare: BareTarget) -> String {
    let target = target.trim();
    if let Some(rest) = target.strip_suffix(SEPARATOR) {
        let base = resolve_prefixes(rest, current, bare);
        return clean_id(&format!("{base}{SEPARATOR}{START_PAGE}"));
    }
    clean_id(&resolve_prefixes(target, current, bare))
}

fn resolve_prefixes(target: &str, current: &str, bare: BareTarget) -> String {
    if let Some(rest) = target.strip_prefix(SEPARATOR) {
        return rest.to_string();
    }

    if target.starts_with("..") {
        let mut segments: Vec<&str> = current.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
        let mut rest = target;
        while let Some(after) = rest.strip_prefix("..") {
            segments.pop();
            rest = after.strip_prefix(SEPARATOR).unwrap_or(after);
        }
        return join(&segments.join(":"), rest);
    }

    if let Some(after) = target.strip_prefix('.') {
        let rest = after.strip_prefix(SEPARATOR).unwrap_or(after);
        return join(current, rest);
    }

    match bare {
        BareTarget::Relative if !target.contains(SEPARATOR) => join(current, target),
        _ => target.to_string(),
    }
}

fn join(namespace: &str, rest: &str) -> String {
    if namespace.is_empty() {
        rest.to_string()
    } else {
        format!("{namespace}{SEPARATOR}{rest}")
    }
}

/// Normalises an id: lowercase, `/` as separator, whitespace and other
/// disallowed characters as `_`, no empty segments. Empty ids become
/// [`START_PAGE`].
pub fn clean_id(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().flat_map(char::to_lowercase) {
        let mapped = match c {
            '/' | SEPARATOR => SEPARATOR,
            c if c.is_alphanumeric() || matches!(c, '_' | '.' | '-') => c,
            _ => '_',
        };
        if mapped == SEPARATOR && (out.is_empty() || out.ends_with(SEPARATOR)) {
            continue;
        }
        out.push(mapped);
    }
    while out.ends_with(SEPARATOR) {
        out.pop();
    }
    if out.is_empty() {
        START_PAGE.to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(":ns3:page", "ns3:page")]
    #[case("..:parent", "ns1:parent")]
    #[case(".:sibling", "ns1:ns2:sibling")]
    #[case(":", "ns1:ns2:start")]
    #[case("..:..:top", "top")]
    #[case("..:..:..:..:top", "top")]
    #[case("..parent", "ns1:parent")]
    #[case(".sibling", "ns1:ns2:sibling")]
    #[case("page", "ns1:ns2:page")]
    #[case("other:page", "other:page")]
    #[case(":other:", "other:start")]
    #[case("sub:", "ns1:ns2:sub:start")]
    fn resolves_against_current_namespace(#[case] target: &str, #[case] expected: &str) {
        assert_eq!(resolve(target, "ns1:ns2"), expected);
    }

    #[test]
    fn as_is_leaves_bare_targets_alone() {
        assert_eq!(resolve_with("page", "ns1:ns2", BareTarget::AsIs), "page");
        assert_eq!(
            resolve_with(".:page", "ns1:ns2", BareTarget::AsIs),
            "ns1:ns2:page"
        );
    }

    #[test]
    fn empty_namespace_start_page() {
        assert_eq!(resolve(":", ""), "start");
        assert_eq!(resolve("", ""), "start");
        assert_eq!(resolve("..", ""), "start");
    }

    #[rstest]
    #[case("Some Page", "some_page")]
    #[case("ns::page", "ns:page")]
    #[case(":ns:page:", "ns:page")]
    #[case("a/b/c", "a:b:c")]
    #[case("what?!", "what__")]
    #[case("Ünïcode", "ünïcode")]
    fn cleans_ids(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(clean_id(raw), expected);
    }
}
