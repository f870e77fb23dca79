// Benchmark helpers; each bench binary uses a different subset.
#[allow(dead_code)]
pub fn generate_wiki_content(size: usize) -> String {
    let base = "====== Title ======\n\n===== Section =====\n\nParagraph with **bold**, //italic// and a [[wiki:page|link]]((a note)).\n\n  * Bullet point\n    * Nested item\n  * Another item\n\n^ Head ^ Head ^\n| cell | cell |\n\n<code rust>\nfn example() {\n    println!(\"Hello\");\n}\n</code>\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(lines: usize) -> String {
    let line = "Text -> with (c) typography :-) and https://example.com/path and %%raw **text**%% plus ''mono'' \\\\ break\n";
    line.repeat(lines)
}

#[allow(dead_code)]
pub fn generate_unmatched_openers(count: usize) -> String {
    let openers = "** // __ '' <sub> <sup> <del> ".repeat(count);
    format!("{openers}%%**//__''</sub></sup></del>%%\n")
}
