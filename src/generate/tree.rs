use crate::envelope::{self, BODY_INDENT};
use crate::node::{ChoiceGroup, SchemaNode};

use super::{comment, deeper, leaf, wrapped, PLACEHOLDER};

pub const OPTIONAL_COMMENT: &str = "Optional:";

fn choice_comment(count: usize) -> String {
    format!("You have a CHOICE of the next {count} items at this level")
}

/// Full SOAP envelope for `name`, walking a typed schema tree.
///
/// Optional (`minOccurs` 0) children are preceded by an `Optional:` comment;
/// the first member of each choice group with more than one alternative is
/// preceded by a `CHOICE` comment. Repeated elements are not expanded.
pub fn envelope_from_node(
    name: &str,
    node: Option<&SchemaNode>,
    target_namespace: Option<&str>,
) -> String {
    let body = node.map(|node| root(node, BODY_INDENT).join("\n")).unwrap_or_default();
    envelope::wrap(name, target_namespace, &body)
}

fn root(node: &SchemaNode, indent: &str) -> Vec<String> {
    if node.is_simple() {
        return vec![comment(indent, OPTIONAL_COMMENT), format!("{indent}{PLACEHOLDER}")];
    }
    children(node.children(), indent)
}

fn children(nodes: &[SchemaNode], indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    // groups already announced at this level
    let mut seen: Vec<Option<&ChoiceGroup>> = Vec::new();

    for child in nodes {
        if child.is_choice {
            let group = child.choice_group.as_ref();
            if !seen.contains(&group) {
                let alternatives = nodes
                    .iter()
                    .filter(|sibling| sibling.is_choice && sibling.choice_group.as_ref() == group)
                    .count();
                if alternatives > 1 {
                    lines.push(comment(indent, &choice_comment(alternatives)));
                }
                seen.push(group);
            }
        } else if child.is_min_zero() {
            lines.push(comment(indent, OPTIONAL_COMMENT));
        }

        if child.has_content() {
            let inner = children(child.children(), &deeper(indent));
            lines.extend(wrapped(indent, &child.name, inner));
        } else {
            lines.push(leaf(indent, &child.name));
        }
    }
    lines
}
