/// `<nowiki>…</nowiki>`: content is shown literally.
pub struct NoWiki;

impl NoWiki {
    pub const OPEN: &'static str = "<nowiki>";
    pub const CLOSE: &'static str = "</nowiki>";
}

/// `%%…%%`: the short form of [`NoWiki`].
pub struct Percent;

impl Percent {
    pub const DELIM: &'static str = "%%";
}
