//! Lightweight pretty-printer for request/response XML shown to the user.
//!
//! This is a tokenizer, not a parser: tags and text runs are split with a
//! regex and re-indented by two spaces per level. Malformed input is
//! re-indented on a best-effort basis rather than rejected.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const PAD_STEP: usize = 2;

static CAUSALITY_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:\r\n|\r|\n)?<!--.*?VsDebuggerCausalityData.*?-->").expect("valid regex")
});
static CAUSALITY_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(?:\r\n|\r|\n)?<(\w+:)?VsDebuggerCausalityData.*?</(\w+:)?VsDebuggerCausalityData>")
        .expect("valid regex")
});
static BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s*<").expect("valid regex"));
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(<[^>]+>)|([^<]+)").expect("valid regex"));
static OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^<([^\s>]+)(.*?)(/?>)$").expect("valid regex"));
static TAG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<([^\s>]+)").expect("valid regex"));
static CLOSE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^</([^>]+)>").expect("valid regex"));
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([a-zA-Z0-9_:-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// one attribute per line, aligned after the tag name
    pub align_attributes: bool,
    /// keep `<a>text</a>` on one line
    pub inline_element_values: bool,
    pub hide_causality_data: bool,
}

/// Remove Visual Studio `VsDebuggerCausalityData` comments and elements.
pub fn strip_causality_data(xml: &str) -> String {
    if xml.is_empty() {
        return String::new();
    }
    let xml = CAUSALITY_COMMENT.replace_all(xml, "");
    CAUSALITY_ELEMENT.replace_all(&xml, "").into_owned()
}

pub fn format_xml(xml: &str, options: &FormatOptions) -> String {
    let source = if options.hide_causality_data {
        strip_causality_data(xml)
    } else {
        xml.to_string()
    };
    let collapsed = BETWEEN_TAGS.replace_all(&source, "><");
    let tokens: Vec<&str> = TOKEN.find_iter(&collapsed).map(|m| m.as_str()).collect();

    let mut out = String::new();
    let mut pad: usize = 0;

    for (i, token) in tokens.iter().copied().enumerate() {
        if !token.starts_with('<') {
            let text = token.trim();
            if text.is_empty() {
                continue;
            }
            if out.ends_with('\n') {
                push_line(&mut out, pad, text);
            } else {
                // inline value; the closing tag finishes the line
                out.push_str(text);
            }
            continue;
        }

        if token.starts_with("</") {
            if out.ends_with('\n') {
                pad = pad.saturating_sub(PAD_STEP);
                push_line(&mut out, pad, token);
            } else {
                out.push_str(token);
                out.push('\n');
            }
            continue;
        }

        if token.starts_with("<?") || token.starts_with("<!") {
            push_line(&mut out, pad, token);
            continue;
        }

        let Some(caps) = OPEN_TAG.captures(token) else {
            push_line(&mut out, pad, token);
            continue;
        };
        let tag_name = &caps[1];
        let rest = &caps[2];
        let closing = &caps[3];

        let inline = options.inline_element_values && is_inline_candidate(token, &tokens[i + 1..]);
        let tag = render_open_tag(token, tag_name, rest, closing, pad, options.align_attributes);

        if out.is_empty() || out.ends_with('\n') {
            indent(&mut out, pad);
        }
        out.push_str(&tag);

        if token.ends_with("/>") {
            out.push('\n');
        } else if !inline {
            out.push('\n');
            pad += PAD_STEP;
        }
    }

    out
}

/// `<a>` followed by non-blank text and `</a>`.
fn is_inline_candidate(open: &str, following: &[&str]) -> bool {
    let [text, close, ..] = following else {
        return false;
    };
    if text.starts_with('<') || text.trim().is_empty() || !close.starts_with("</") {
        return false;
    }
    let open_name = TAG_NAME.captures(open).map(|c| c[1].to_string());
    let close_name = CLOSE_NAME.captures(close).map(|c| c[1].to_string());
    open_name.is_some() && open_name == close_name
}

fn render_open_tag(token: &str, name: &str, rest: &str, closing: &str, pad: usize, align: bool) -> String {
    if rest.trim().is_empty() {
        return token.to_string();
    }

    let attributes: Vec<String> = ATTRIBUTE
        .captures_iter(rest)
        .map(|caps| {
            let value = match (caps.get(2), caps.get(3)) {
                (Some(double), _) => format!("\"{}\"", double.as_str()),
                (None, Some(single)) => format!("'{}'", single.as_str()),
                (None, None) => String::new(),
            };
            format!("{}={}", &caps[1], value)
        })
        .collect();

    if attributes.is_empty() {
        return format!("<{name}{rest}{closing}");
    }

    let mut line = format!("<{name}");
    if align && attributes.len() > 1 {
        let column = pad + 1 + name.chars().count() + 1;
        line.push(' ');
        line.push_str(&attributes[0]);
        for attribute in &attributes[1..] {
            line.push('\n');
            line.push_str(&" ".repeat(column));
            line.push_str(attribute);
        }
    } else {
        for attribute in &attributes {
            line.push(' ');
            line.push_str(attribute);
        }
    }
    line.push_str(closing);
    line
}

fn indent(out: &mut String, pad: usize) {
    out.push_str(&" ".repeat(pad));
}

fn push_line(out: &mut String, pad: usize, text: &str) {
    indent(out, pad);
    out.push_str(text);
    out.push('\n');
}
