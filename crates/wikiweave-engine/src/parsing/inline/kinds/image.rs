use std::sync::OnceLock;

use regex::Regex;

use super::super::types::{Align, ImageMode};

/// `{{target?params|title}}`.
pub struct Media;

impl Media {
    pub const OPEN: &'static str = "{{";
    pub const CLOSE: &'static str = "}}";
    pub const TITLE: char = '|';
    pub const PARAMS: char = '?';
    pub const PARAM_SEPARATOR: char = '&';
}

fn size_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)(?:x(\d+))?$").expect("Invalid image size regex"))
}

/// The syntactic parts of an image reference, before path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub target: String,
    pub align: Align,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub title: Option<String>,
    pub mode: ImageMode,
}

impl ImageSpec {
    /// Parses the text between `{{` and `}}`.
    ///
    /// Alignment comes from the whitespace around the reference: leading
    /// only aligns right, trailing only aligns left, anything else centers.
    pub fn parse(inner: &str) -> Self {
        let (reference, title) = match inner.split_once(Media::TITLE) {
            Some((reference, title)) => (reference, Some(title.trim())),
            None => (inner, None),
        };

        let leading = reference.starts_with(char::is_whitespace);
        let trailing = reference.ends_with(char::is_whitespace);
        let align = match (leading, trailing) {
            (true, false) => Align::Right,
            (false, true) => Align::Left,
            _ => Align::Center,
        };

        let reference = reference.trim();
        let (target, params) = match reference.split_once(Media::PARAMS) {
            Some((target, params)) => (target, params),
            None => (reference, ""),
        };

        let mut spec = ImageSpec {
            target: target.trim().to_string(),
            align,
            width: None,
            height: None,
            title: title.filter(|t| !t.is_empty()).map(str::to_string),
            mode: ImageMode::Linked,
        };

        for param in params.split(Media::PARAM_SEPARATOR).map(str::trim) {
            match param.to_ascii_lowercase().as_str() {
                "" | "direct" => {}
                "linkonly" => spec.mode = ImageMode::LinkOnly,
                "nolink" => spec.mode = ImageMode::NoLink,
                size => {
                    if let Some(caps) = size_regex().captures(size) {
                        spec.width = caps.get(1).and_then(|m| m.as_str().parse().ok());
                        spec.height = caps.get(2).and_then(|m| m.as_str().parse().ok());
                    }
                }
            }
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("img.png", Align::Center)]
    #[case(" img.png ", Align::Center)]
    #[case(" img.png", Align::Right)]
    #[case("img.png ", Align::Left)]
    #[case(" img.png|Title", Align::Right)]
    fn alignment_from_whitespace(#[case] inner: &str, #[case] align: Align) {
        assert_eq!(ImageSpec::parse(inner).align, align);
    }

    #[test]
    fn parses_size_mode_and_title() {
        let spec = ImageSpec::parse("wiki:logo.png?200x50&nolink|The logo");
        assert_eq!(
            spec,
            ImageSpec {
                target: "wiki:logo.png".into(),
                align: Align::Center,
                width: Some(200),
                height: Some(50),
                title: Some("The logo".into()),
                mode: ImageMode::NoLink,
            }
        );
    }

    #[test]
    fn width_only_and_linkonly() {
        let spec = ImageSpec::parse("a.png?120&linkonly");
        assert_eq!(spec.width, Some(120));
        assert_eq!(spec.height, None);
        assert_eq!(spec.mode, ImageMode::LinkOnly);
    }

    #[test]
    fn unknown_params_are_ignored() {
        let spec = ImageSpec::parse("a.png?direct&bogus");
        assert_eq!(spec.mode, ImageMode::Linked);
        assert_eq!(spec.width, None);
    }
}
