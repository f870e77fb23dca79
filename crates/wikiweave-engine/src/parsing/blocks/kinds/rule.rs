/// A horizontal rule: four or more `-` alone on a line.
pub struct Rule;

impl Rule {
    pub const MARK: char = '-';
    pub const MIN_LEN: usize = 4;

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_LEN && t.chars().all(|c| c == Self::MARK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_dashes_or_more() {
        assert!(Rule::matches("----"));
        assert!(Rule::matches("---------- "));
        assert!(!Rule::matches("---"));
        assert!(!Rule::matches("---- x"));
    }
}
