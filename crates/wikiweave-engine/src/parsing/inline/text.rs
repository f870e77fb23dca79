//! Substitutions applied to plain text runs: typography entities and
//! emoticons. Both matchers are compiled once and shared by every parse.

use std::sync::OnceLock;

use regex::Regex;

use super::types::{InlineNode, Smiley};

/// Typography replacements in match priority order.
const TYPOGRAPHY: [(&str, &str); 12] = [
    ("<->", "&harr;"),
    ("<=>", "&hArr;"),
    ("->", "&rarr;"),
    ("<-", "&larr;"),
    ("=>", "&rArr;"),
    ("<=", "&lArr;"),
    ("---", "&mdash;"),
    ("--", "&ndash;"),
    ("...", "&hellip;"),
    ("(tm)", "&trade;"),
    ("(c)", "&copy;"),
    ("(r)", "&reg;"),
];

const TIMES: &str = "&times;";

/// Emoticons. Tokens sharing a glyph are listed separately so every token
/// keeps its own alt text.
pub const SMILEYS: &[Smiley] = &[
    smiley("8-)", "😎", "cool.svg"),
    smiley("8-O", "😲", "eek.svg"),
    smiley("8-o", "😲", "eek.svg"),
    smiley(":-(", "😞", "sad.svg"),
    smiley(":-)", "🙂", "smile.svg"),
    smiley("=)", "😊", "smile2.svg"),
    smiley(":-/", "😕", "doubt.svg"),
    smiley(":-\\", "😕", "doubt2.svg"),
    smiley(":-?", "😖", "confused.svg"),
    smiley(":-D", "😄", "biggrin.svg"),
    smiley(":-P", "😛", "razz.svg"),
    smiley(":-o", "😮", "surprised.svg"),
    smiley(":-O", "😮", "surprised.svg"),
    smiley(":-x", "🤐", "silenced.svg"),
    smiley(":-X", "🤐", "silenced.svg"),
    smiley(":-|", "😐", "neutral.svg"),
    smiley(";-)", "😉", "wink.svg"),
    smiley("m(", "🤦", "facepalm.svg"),
    smiley("^_^", "😊", "fun.svg"),
    smiley(":?:", "❓", "question.svg"),
    smiley(":!:", "❗", "exclaim.svg"),
    smiley("LOL", "😂", "lol.svg"),
    smiley("FIXME", "🔧", "fixme.svg"),
    smiley("DELETEME", "🗑️", "deleteme.svg"),
];

const fn smiley(token: &'static str, glyph: &'static str, image: &'static str) -> Smiley {
    Smiley {
        token,
        glyph,
        image,
    }
}

fn typography_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let symbols = TYPOGRAPHY
            .iter()
            .map(|(from, _)| regex::escape(from))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i:{symbols})|\b(\d+)x(\d+)\b")).expect("Invalid typography regex")
    })
}

/// Tokens longest first, so `DELETEME` wins over any shorter overlap. A
/// token must not touch a word character on either side.
fn smiley_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let mut tokens: Vec<&str> = SMILEYS.iter().map(|s| s.token).collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = tokens
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?:^|\W)({alternation})(?:\W|$)")).expect("Invalid smiley regex")
    })
}

fn lookup_smiley(token: &str) -> Option<Smiley> {
    SMILEYS.iter().find(|s| s.token == token).copied()
}

fn typography_entity(symbol: &str) -> Option<&'static str> {
    TYPOGRAPHY
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(symbol))
        .map(|(_, entity)| *entity)
}

/// Appends `text` to `out`, splitting out entities and emoticons.
pub fn push_text(out: &mut Vec<InlineNode>, text: &str, typography: bool) {
    if text.is_empty() {
        return;
    }
    if !typography {
        push_smileys(out, text);
        return;
    }

    let mut last = 0;
    for caps in typography_regex().captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        push_smileys(out, &text[last..whole.start()]);
        match (caps.get(1), caps.get(2)) {
            (Some(w), Some(h)) => {
                push_smileys(out, w.as_str());
                out.push(InlineNode::Entity(TIMES));
                push_smileys(out, h.as_str());
            }
            _ => match typography_entity(whole.as_str()) {
                Some(entity) => out.push(InlineNode::Entity(entity)),
                None => push_smileys(out, whole.as_str()),
            },
        }
        last = whole.end();
    }
    push_smileys(out, &text[last..]);
}

fn push_smileys(out: &mut Vec<InlineNode>, text: &str) {
    let mut last = 0;
    let mut pos = 0;
    while let Some(caps) = smiley_regex().captures_at(text, pos) {
        let Some(token) = caps.get(1) else { break };
        if let Some(smiley) = lookup_smiley(token.as_str()) {
            push_plain(out, &text[last..token.start()]);
            out.push(InlineNode::Smiley(smiley));
            last = token.end();
        }
        pos = token.end();
    }
    push_plain(out, &text[last..]);
}

/// Appends plain text, merging with a preceding text node.
fn push_plain(out: &mut Vec<InlineNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(InlineNode::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(InlineNode::Text(text.to_string()));
    }
}
