//! Block-level tests for the parsing module.
//!
//! Documents are reduced to a one-line-per-block outline (see
//! `snapshot::normalize`) and every parse is run through the invariant
//! checks first.

use pretty_assertions::assert_eq;

use crate::{
    config::ParserConfig,
    parsing::{
        ParsedDoc,
        blocks::{Block, CodeBlock, kinds::CodeTag},
        diagnostic::DiagnosticKind,
        inline::{Align, InlineNode},
        parse_document,
        snapshot::{invariants, normalize},
    },
};

fn parse_with(config: &ParserConfig, src: &str) -> ParsedDoc {
    let doc = parse_document(src, config);
    invariants(&doc);
    doc
}

fn outline_with(config: &ParserConfig, src: &str) -> String {
    normalize(&parse_with(config, src)).to_string()
}

fn outline(src: &str) -> String {
    outline_with(&ParserConfig::default(), src)
}

#[test]
fn document_outline() {
    let src = "\
====== Title ======
Intro with **bold** and [[other]].

  * one
  * two
    - nested

^ H ^ I ^
| a | b |

> quote
----
";
    insta::assert_snapshot!(outline(src), @r#"
Heading(1 #title): "Title"
Paragraph: "Intro with " strong["bold"] " and " link:internal<other>["other"] "."
List: ul( li1[ "one" ] li1[ "two" ol( li2[ "nested" ] ) ] )
Table(2): ^"H" | ^"I" / "a" | "b"
Quote: > "quote"
Rule
"#);
}

#[test]
fn empty_document() {
    let doc = parse_with(&ParserConfig::default(), "");
    assert!(doc.blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse_with(&ParserConfig::default(), "\n  \n\n");
    assert!(doc.blocks.is_empty());
}

#[test]
fn paragraph_lines_are_joined_with_spaces() {
    assert_eq!(outline("one\ntwo\n\nthree"), "Paragraph: \"one two\"\nParagraph: \"three\"\n");
}

#[test]
fn nested_list_from_two_space_base_indent() {
    assert_eq!(
        outline("  * Bold **text**\n    * Italic //text//"),
        "List: ul( li1[ \"Bold \" strong[\"text\"] ul( li2[ \"Italic \" em[\"text\"] ] ) ] )\n"
    );
}

#[test]
fn mode_changes_flush_buffers() {
    assert_eq!(
        outline("text\n  * item\nmore"),
        "Paragraph: \"text\"\nList: ul( li1[ \"item\" ] )\nParagraph: \"more\"\n"
    );
}

#[test]
fn duplicate_headings_get_suffixes() {
    let doc = parse_with(
        &ParserConfig::default(),
        "== Intro ==\n== Intro ==\n== Intro ==",
    );
    let ids: Vec<_> = doc.headings.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["intro", "intro1", "intro2"]);
}

#[test]
fn quote_lines_group_by_depth() {
    assert_eq!(
        outline("> a\n> b\n>> c\n> d"),
        "Quote: > \"a b\" / >> \"c\" / > \"d\"\n"
    );
}

#[test]
fn preformatted_keeps_relative_indent_and_inner_blanks() {
    let doc = parse_with(
        &ParserConfig::default(),
        "  line one\n    line two\n\n  line three\n\nafter",
    );
    assert_eq!(
        doc.blocks,
        vec![
            Block::Preformatted("line one\n  line two\n\nline three".into()),
            Block::Paragraph(vec![InlineNode::Text("after".into())]),
        ]
    );
}

#[test]
fn code_block_is_verbatim() {
    let doc = parse_with(
        &ParserConfig::default(),
        "<code rust>\nfn main() { **x** }\n\n  indented\n</code>",
    );
    assert_eq!(
        doc.blocks,
        vec![Block::Code(CodeBlock {
            tag: CodeTag::Code,
            lang: Some("rust".into()),
            filename: None,
            content: "fn main() { **x** }\n\n  indented".into(),
        })]
    );
}

#[test]
fn single_line_code_with_trailing_text() {
    assert_eq!(
        outline("<file - notes.txt>a < b</file> after"),
        "Code(file notes.txt): \"a < b\"\nParagraph: \"after\"\n"
    );
}

#[test]
fn unterminated_code_is_flushed_and_reported() {
    let doc = parse_with(&ParserConfig::default(), "intro\n<code>\nlet x;\n");
    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(&doc.blocks[1], Block::Code(code) if code.content == "let x;"));
    assert_eq!(doc.diagnostics.len(), 1);
    assert_eq!(doc.diagnostics[0].line, 2);
    assert_eq!(
        doc.diagnostics[0].kind,
        DiagnosticKind::UnterminatedBlock { tag: "code".into() }
    );
}

#[test]
fn html_block_follows_config() {
    let src = "<html>\n<b>x</b>\n</html>";
    assert_eq!(outline(src), "Code(code html): \"<b>x</b>\"\n");

    let config = ParserConfig {
        html_embed_allowed: true,
        ..ParserConfig::default()
    };
    assert_eq!(outline_with(&config, src), "Html: \"<b>x</b>\"\n");
    assert_eq!(outline_with(&config, "<PHP>\necho 1;\n</PHP>"), "Code(code php): \"echo 1;\"\n");
}

#[test]
fn standalone_image_line() {
    let doc = parse_with(&ParserConfig::default(), " {{ wiki:logo.png }}");
    let [Block::Image(image)] = doc.blocks.as_slice() else {
        panic!("expected one image block, got {:?}", doc.blocks);
    };
    assert_eq!(image.src, "wiki/logo.png");
    assert_eq!(image.align, Align::Center);
}

#[test]
fn literal_sections_skip_inline_markup() {
    let config = ParserConfig {
        literal_sections: vec!["Raw".into()],
        ..ParserConfig::default()
    };
    assert_eq!(
        outline_with(&config, "== raw ==\n**not bold**\n== Next ==\n**bold**"),
        "Heading(5 #raw): \"raw\"\nParagraph: \"**not bold**\"\nHeading(5 #next): \"Next\"\nParagraph: strong[\"bold\"]\n"
    );
}

#[test]
fn notoc_macro_line_is_dropped() {
    let doc = parse_with(&ParserConfig::default(), "~~NOTOC~~\ntext");
    assert!(doc.notoc);
    assert_eq!(doc.blocks.len(), 1);
}

#[test]
fn footnotes_shared_across_blocks() {
    assert_eq!(
        outline("a((same))\n\n  * b((same)) c((other))"),
        "Paragraph: \"a\" fn(1.1)\nList: ul( li1[ \"b\" fn(1.2) \" c\" fn(2.1) ] )\nfootnote 1x2: \"same\"\nfootnote 2x1: \"other\"\n"
    );
}

#[test]
fn table_spans_and_diagnostics() {
    assert_eq!(
        outline("^ a ^^\n| b | c |\n| ::: | d\n"),
        "Table(2): ^\"a\" 2x1 / \"b\" 1x2 | \"c\" / \"d\"\n! line 3: table row has no closing delimiter\n"
    );
}
