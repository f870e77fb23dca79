/// Blockquote lines: a run of `>` markers, one per nesting level.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Strips the `>` run from a line, returning `(depth, byte_offset)`.
    ///
    /// Markers may be separated by spaces (`> > text`); one space after the
    /// last marker belongs to the prefix.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        while i < b.len() && b[i] == Self::PREFIX as u8 {
            depth = depth.saturating_add(1);
            i += 1;
            let mut j = i;
            while j < b.len() && b[j] == b' ' {
                j += 1;
            }
            if j < b.len() && b[j] == Self::PREFIX as u8 {
                i = j;
            }
        }
        if depth > 0 && i < b.len() && b[i] == b' ' {
            i += 1;
        }
        (depth, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefixes("hello"), (0, 0));
        assert_eq!(BlockQuote::strip_prefixes(" > indented"), (0, 0));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> hello"), (1, 2));
        assert_eq!(BlockQuote::strip_prefixes(">hello"), (1, 1));
    }

    #[test]
    fn strip_nested_runs() {
        assert_eq!(BlockQuote::strip_prefixes(">>> deep"), (3, 4));
        assert_eq!(BlockQuote::strip_prefixes("> > spaced"), (2, 4));
    }

    #[test]
    fn bare_marker() {
        assert_eq!(BlockQuote::strip_prefixes(">"), (1, 1));
    }
}
