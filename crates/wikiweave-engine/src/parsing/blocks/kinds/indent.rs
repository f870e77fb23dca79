/// Leading indentation, measured in columns with a tab counting as two.
pub struct Indent;

impl Indent {
    pub const TAB_WIDTH: usize = 2;

    /// Returns `(columns, bytes)` of the leading whitespace of `s`.
    pub fn measure(s: &str) -> (usize, usize) {
        let mut columns = 0;
        let mut bytes = 0;
        for b in s.bytes() {
            match b {
                b' ' => columns += 1,
                b'\t' => columns += Self::TAB_WIDTH,
                _ => break,
            }
            bytes += 1;
        }
        (columns, bytes)
    }

    /// Removes up to `columns` columns of leading whitespace.
    pub fn strip(s: &str, columns: usize) -> &str {
        let mut seen = 0;
        let mut bytes = 0;
        for b in s.bytes() {
            if seen >= columns {
                break;
            }
            match b {
                b' ' => seen += 1,
                b'\t' => seen += Self::TAB_WIDTH,
                _ => break,
            }
            bytes += 1;
        }
        &s[bytes..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_count_as_two_columns() {
        assert_eq!(Indent::measure("\t* x"), (2, 1));
        assert_eq!(Indent::measure("  \tx"), (4, 3));
        assert_eq!(Indent::measure("x"), (0, 0));
    }

    #[test]
    fn strip_keeps_deeper_indentation() {
        assert_eq!(Indent::strip("      code", 2), "    code");
        assert_eq!(Indent::strip("\tcode", 2), "code");
        assert_eq!(Indent::strip(" x", 4), "x");
    }
}
