/// Languages that can be embedded with `<html>` / `<php>` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedLang {
    Html,
    Php,
}

/// An embed tag pair; lowercase and uppercase spellings are both accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Embed {
    pub lang: EmbedLang,
    pub open: &'static str,
    pub close: &'static str,
}

impl Embed {
    pub const ALL: [Embed; 4] = [
        Embed {
            lang: EmbedLang::Html,
            open: "<html>",
            close: "</html>",
        },
        Embed {
            lang: EmbedLang::Html,
            open: "<HTML>",
            close: "</HTML>",
        },
        Embed {
            lang: EmbedLang::Php,
            open: "<php>",
            close: "</php>",
        },
        Embed {
            lang: EmbedLang::Php,
            open: "<PHP>",
            close: "</PHP>",
        },
    ];

    /// The embed whose opening tag starts `s`.
    pub fn opening_at(s: &str) -> Option<Embed> {
        Self::ALL.into_iter().find(|e| s.starts_with(e.open))
    }
}

impl EmbedLang {
    pub fn name(self) -> &'static str {
        match self {
            EmbedLang::Html => "html",
            EmbedLang::Php => "php",
        }
    }
}
