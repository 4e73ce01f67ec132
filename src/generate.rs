//! Placeholder XML generation.
//!
//! Three generators live here and stay separate:
//! - [`prefixed`]: `tem:`-prefixed fragment from a flat schema, unwrapping
//!   objects that only hold one array field;
//! - [`plain`]: full envelope from a flat schema, unprefixed, no unwrapping;
//! - [`tree`]: full envelope from a typed schema tree with optional/choice
//!   comments.
//!
//! Every walk returns owned lines; callers join with `\n`.
pub mod plain;
pub mod prefixed;
pub mod tree;

/// Per-level indent.
pub const INDENT_STEP: &str = "   ";

/// Default indent for fragment generation (one level inside `<web:Op>`).
pub const DEFAULT_INDENT: &str = crate::envelope::BODY_INDENT;

/// Leaf body for every element.
pub const PLACEHOLDER: &str = "?";

pub(crate) fn deeper(indent: &str) -> String {
    format!("{indent}{INDENT_STEP}")
}

pub(crate) fn open_tag(indent: &str, name: &str) -> String {
    format!("{indent}<{name}>")
}

pub(crate) fn close_tag(indent: &str, name: &str) -> String {
    format!("{indent}</{name}>")
}

pub(crate) fn leaf(indent: &str, name: &str) -> String {
    format!("{indent}<{name}>{PLACEHOLDER}</{name}>")
}

pub(crate) fn comment(indent: &str, text: &str) -> String {
    format!("{indent}<!--{text}-->")
}

/// `open`, `inner`, `close` as one line list.
pub(crate) fn wrapped(indent: &str, name: &str, inner: Vec<String>) -> Vec<String> {
    let mut lines = Vec::with_capacity(inner.len() + 2);
    lines.push(open_tag(indent, name));
    lines.extend(inner);
    lines.push(close_tag(indent, name));
    lines
}

pub use plain::envelope_from_schema;
pub use prefixed::initial_xml;
pub use tree::envelope_from_node;
