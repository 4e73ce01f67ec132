use crate::schema::{FlatSchema, SchemaValue};

use super::{deeper, leaf, wrapped, DEFAULT_INDENT};

/// Namespace alias every fragment element is written under.
pub const FRAGMENT_PREFIX: &str = "tem";

/// Placeholder elements for a flat schema, one per field.
///
/// Returns `""` when there is no schema or it has no fields. `indent` defaults
/// to [`DEFAULT_INDENT`]. Array fields produce a single sample element, and an
/// object whose only field is an array is rendered without its own tag.
pub fn initial_xml(schema: Option<&FlatSchema>, indent: Option<&str>) -> String {
    let Some(schema) = schema else {
        return String::new();
    };
    fields(schema, indent.unwrap_or(DEFAULT_INDENT)).join("\n")
}

fn fields(schema: &FlatSchema, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for field in &schema.fields {
        let tag = format!("{FRAGMENT_PREFIX}:{}", field.name);
        match &field.value {
            SchemaValue::ArrayOf(item) => match item.as_ref() {
                SchemaValue::Nested(inner) => {
                    lines.extend(wrapped(indent, &tag, fields(inner, &deeper(indent))));
                }
                _ => lines.push(leaf(indent, &tag)),
            },
            SchemaValue::Nested(inner) if inner.sole_array_field().is_some() => {
                lines.extend(fields(inner, indent));
            }
            SchemaValue::Nested(inner) => {
                lines.extend(wrapped(indent, &tag, fields(inner, &deeper(indent))));
            }
            SchemaValue::Primitive(_) | SchemaValue::List(_) => lines.push(leaf(indent, &tag)),
        }
    }
    lines
}
