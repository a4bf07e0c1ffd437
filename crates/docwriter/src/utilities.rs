//! Escaping and literal tag rendering.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::attributes::Attributes;

/// Characters that carry meaning in Markdown, plus the backslash itself
static MARKDOWN_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\\`*_{}\[\]()#+\-.!]").expect("valid escape pattern"));

/// Escape markdown special characters
///
/// Backslashes are doubled and every other significant character gets a
/// single backslash in front of it.
pub fn escape_markdown(text: &str) -> String {
    MARKDOWN_SPECIAL.replace_all(text, r"\$0").into_owned()
}

/// Leave an attribute value untouched
pub(crate) fn verbatim(value: &str) -> Cow<'_, str> {
    Cow::Borrowed(value)
}

/// Render `<kind a="x" ...>`, or `<kind a="x" ... />` when self-closing
pub(crate) fn start_tag(
    kind: &str,
    attributes: &Attributes,
    self_closing: bool,
    escape: fn(&str) -> Cow<'_, str>,
) -> String {
    let mut tag = String::with_capacity(kind.len() + 2);
    tag.push('<');
    tag.push_str(kind);
    for (name, value) in attributes {
        tag.push(' ');
        tag.push_str(name);
        tag.push_str("=\"");
        tag.push_str(&escape(value));
        tag.push('"');
    }
    tag.push_str(if self_closing { " />" } else { ">" });
    tag
}

/// Render `</kind>`
pub(crate) fn end_tag(kind: &str) -> String {
    format!("</{kind}>")
}

/// Anchor marking an element's id
pub(crate) fn anchor(id: &str) -> String {
    format!("<a id=\"{id}\"></a>")
}
