/// A reference to a single source line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based line number, used in diagnostics.
    pub number: usize,
    /// The line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
}

/// Returns an iterator over the lines of `src` with their numbers.
///
/// A trailing newline does not produce an extra empty line.
pub fn lines_with_numbers(src: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    src.split_inclusive('\n')
        .enumerate()
        .map(|(idx, line)| LineRef {
            number: idx + 1,
            text: line.trim_end_matches(['\r', '\n']),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_lines_from_one() {
        let lines: Vec<_> = lines_with_numbers("a\nb\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], LineRef { number: 1, text: "a" });
        assert_eq!(lines[1], LineRef { number: 2, text: "b" });
    }

    #[test]
    fn strips_crlf() {
        let lines: Vec<_> = lines_with_numbers("a\r\nb").collect();
        assert_eq!(lines[0].text, "a");
        assert_eq!(lines[1].text, "b");
    }

    #[test]
    fn keeps_blank_lines() {
        let lines: Vec<_> = lines_with_numbers("a\n\n\nb").collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].text, "");
        assert_eq!(lines[3].number, 4);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(lines_with_numbers("").count(), 0);
    }
}
