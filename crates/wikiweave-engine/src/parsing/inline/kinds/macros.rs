/// Control macros: removed from the output, some set document flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
    NoToc,
    NoCache,
}

impl Macro {
    pub const ALL: [Macro; 2] = [Macro::NoToc, Macro::NoCache];

    pub fn token(self) -> &'static str {
        match self {
            Macro::NoToc => "~~NOTOC~~",
            Macro::NoCache => "~~NOCACHE~~",
        }
    }

    /// The macro at the start of `s`, if any.
    pub fn at_start(s: &str) -> Option<Macro> {
        Self::ALL.into_iter().find(|m| s.starts_with(m.token()))
    }

    /// The macro making up all of `line` (ignoring surrounding whitespace).
    pub fn whole_line(line: &str) -> Option<Macro> {
        let trimmed = line.trim();
        Self::ALL.into_iter().find(|m| trimmed == m.token())
    }
}
