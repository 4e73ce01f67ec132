use crate::envelope::{self, BODY_INDENT};
use crate::schema::{FlatSchema, SchemaValue};

use super::{deeper, leaf, wrapped, PLACEHOLDER};

/// Full SOAP envelope for `operation` with unprefixed placeholder elements.
///
/// Unlike [`initial_xml`](super::initial_xml) there is no namespace prefix on
/// body elements and no unwrapping of single-array objects: every object with
/// at least one field gets its own tag.
pub fn envelope_from_schema(
    operation: &str,
    schema: Option<&FlatSchema>,
    target_namespace: Option<&str>,
) -> String {
    let body = schema
        .map(|schema| fields(schema, BODY_INDENT).join("\n"))
        .unwrap_or_default();
    envelope::wrap(operation, target_namespace, &body)
}

fn fields(schema: &FlatSchema, indent: &str) -> Vec<String> {
    schema
        .fields
        .iter()
        .flat_map(|field| element(&field.name, &field.value, indent))
        .collect()
}

fn element(name: &str, value: &SchemaValue, indent: &str) -> Vec<String> {
    let value = match value {
        SchemaValue::ArrayOf(item) => item.as_ref(),
        other => other,
    };
    if is_complex(value) {
        wrapped(indent, name, content(value, &deeper(indent)))
    } else {
        vec![leaf(indent, name)]
    }
}

/// Has at least one field (or item) left after annotations are removed.
fn is_complex(value: &SchemaValue) -> bool {
    match value {
        SchemaValue::Nested(schema) => !schema.is_empty(),
        SchemaValue::List(items) => !items.is_empty(),
        SchemaValue::ArrayOf(item) => is_complex(item),
        SchemaValue::Primitive(_) => false,
    }
}

fn content(value: &SchemaValue, indent: &str) -> Vec<String> {
    match value {
        SchemaValue::Nested(schema) => fields(schema, indent),
        SchemaValue::List(items) => items.iter().flat_map(|item| content(item, indent)).collect(),
        SchemaValue::ArrayOf(item) => content(item, indent),
        SchemaValue::Primitive(_) => vec![format!("{indent}{PLACEHOLDER}")],
    }
}
