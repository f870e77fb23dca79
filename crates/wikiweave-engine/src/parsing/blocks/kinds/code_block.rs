use std::sync::OnceLock;

use regex::Regex;

/// The two tagged verbatim blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTag {
    Code,
    File,
}

impl CodeTag {
    pub fn name(self) -> &'static str {
        match self {
            CodeTag::Code => "code",
            CodeTag::File => "file",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            CodeTag::Code => "</code>",
            CodeTag::File => "</file>",
        }
    }
}

/// An opening `<code lang>` or `<file lang name>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeOpen<'a> {
    pub tag: CodeTag,
    pub lang: Option<&'a str>,
    pub filename: Option<&'a str>,
    /// Text after the opening tag on the same line.
    pub rest: &'a str,
}

/// `-` stands for "no language" so a filename can still be given.
const NO_LANG: &str = "-";

fn open_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^<(code|file)(?:\s+([^\s>]+))?(?:\s+([^\s>]+))?\s*>(.*)$")
            .expect("Invalid code block regex")
    })
}

impl<'a> CodeOpen<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = open_regex().captures(line.trim_start())?;
        let tag = match caps.get(1)?.as_str() {
            "code" => CodeTag::Code,
            _ => CodeTag::File,
        };
        Some(CodeOpen {
            tag,
            lang: caps
                .get(2)
                .map(|m| m.as_str())
                .filter(|lang| *lang != NO_LANG),
            filename: caps.get(3).map(|m| m.as_str()),
            rest: caps.get(4).map_or("", |m| m.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_code_tag() {
        assert_eq!(
            CodeOpen::parse("<code>"),
            Some(CodeOpen {
                tag: CodeTag::Code,
                lang: None,
                filename: None,
                rest: "",
            })
        );
    }

    #[test]
    fn file_with_lang_and_name() {
        let open = CodeOpen::parse("<file rust main.rs>").unwrap();
        assert_eq!(open.tag, CodeTag::File);
        assert_eq!(open.lang, Some("rust"));
        assert_eq!(open.filename, Some("main.rs"));
    }

    #[test]
    fn dash_means_no_language() {
        let open = CodeOpen::parse("<file - notes.txt>").unwrap();
        assert_eq!(open.lang, None);
        assert_eq!(open.filename, Some("notes.txt"));
    }

    #[test]
    fn same_line_content_is_kept() {
        let open = CodeOpen::parse("<code bash>ls -la</code>").unwrap();
        assert_eq!(open.lang, Some("bash"));
        assert_eq!(open.rest, "ls -la</code>");
    }

    #[test]
    fn other_tags_do_not_match() {
        assert_eq!(CodeOpen::parse("<coder>"), None);
        assert_eq!(CodeOpen::parse("text <code>"), None);
    }
}
