/// `====== Title ======` headings.
///
/// Both ends need a run of at least two `=`. The opening run sets the
/// level: six is `h1`, two is `h5`; longer runs clamp to `h1`.
pub struct Heading;

impl Heading {
    pub const MARK: char = '=';
    pub const MIN_RUN: usize = 2;
    pub const MAX_RUN: usize = 6;

    /// Returns `(level, title)` for a heading line.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let t = line.trim();
        let open = t.len() - t.trim_start_matches(Self::MARK).len();
        if open < Self::MIN_RUN || open == t.len() {
            return None;
        }
        let inner = &t[open..];
        let close = inner.len() - inner.trim_end_matches(Self::MARK).len();
        if close < Self::MIN_RUN {
            return None;
        }
        let title = inner[..inner.len() - close].trim();
        if title.is_empty() {
            return None;
        }
        let level = (Self::MAX_RUN + 1 - open.min(Self::MAX_RUN)) as u8;
        Some((level, title))
    }

    /// Anchor slug: lowercase, anything but letters and digits becomes a
    /// single `_`, no leading or trailing `_`.
    pub fn slug(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.trim().chars().flat_map(char::to_lowercase) {
            if c.is_alphanumeric() {
                out.push(c);
            } else if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        }
        while out.ends_with('_') {
            out.pop();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("====== One ======", Some((1, "One")))]
    #[case("===== Two =====", Some((2, "Two")))]
    #[case("==== Three ====", Some((3, "Three")))]
    #[case("=== Four ===", Some((4, "Four")))]
    #[case("== Five ==", Some((5, "Five")))]
    #[case("======== Clamped ========", Some((1, "Clamped")))]
    #[case("==== Uneven ==", Some((3, "Uneven")))]
    #[case("= Single =", None)]
    #[case("== No close", None)]
    #[case("====", None)]
    #[case("== ==", None)]
    fn heading_levels(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }

    #[rstest]
    #[case("Introduction", "introduction")]
    #[case("Getting Started!", "getting_started")]
    #[case("  a -- b  ", "a_b")]
    #[case("Ünïcode Title", "ünïcode_title")]
    #[case("!!!", "")]
    fn slugs(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(Heading::slug(text), expected);
    }
}
