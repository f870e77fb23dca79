//! Entity escaping for text and attribute values.
//!
//! Everything user-supplied goes through here exactly once, at render time.
//! Nodes that already hold markup (`Entity`, `Html`) bypass it.

/// Appends `s` with `& < > " '` escaped.
pub fn escape_into(out: &mut String, s: &str) {
    html_escape::encode_quoted_attribute_to_string(s, out);
}

/// Appends ` name="value"` with the value escaped.
pub fn attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}
