//! Flat (node-soap style) schema description.
//!
//! Upstream WSDL tooling describes an operation's input as an untyped JSON
//! object: field name → type marker, nested object, or `name[]` array marker,
//! sprinkled with annotation keys. We decode that once into a small tagged
//! union so the generators never have to re-inspect key suffixes or JSON types.
use serde_json::{Map, Value};

/// Suffix marking an array field (`tLanguage[]`).
pub const ARRAY_SUFFIX: &str = "[]";

/// Annotation fields emitted next to real fields by the WSDL parser.
pub const METADATA_KEYS: [&str; 2] = ["targetNSAlias", "targetNamespace"];

// ------------------------------- Types ----------------------------------- //

/// Ordered field set. Annotation keys are already gone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatSchema {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// element name, `[]` suffix stripped
    pub name: String,
    pub value: SchemaValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaValue {
    /// type marker such as `xs:int`; the text never reaches the output
    Primitive(String),
    Nested(FlatSchema),
    /// the field key carried the `[]` suffix
    ArrayOf(Box<SchemaValue>),
    /// a bare JSON array; not a documented shape but tolerated
    List(Vec<SchemaValue>),
}

// ------------------------------- Decode ---------------------------------- //

/// True for keys that describe the schema rather than an element.
pub fn is_annotation_key(key: &str) -> bool {
    key.starts_with('$') || METADATA_KEYS.contains(&key)
}

impl FlatSchema {
    /// Decode a JSON description. Anything but an object yields `None`.
    pub fn from_value(value: &Value) -> Option<FlatSchema> {
        match value {
            Value::Object(map) => Some(decode_object(map)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// The single array field when this object only wraps one array.
    pub fn sole_array_field(&self) -> Option<&Field> {
        match self.fields.as_slice() {
            [only] if only.value.is_array() => Some(only),
            _ => None,
        }
    }
}

impl SchemaValue {
    pub fn is_array(&self) -> bool {
        matches!(self, SchemaValue::ArrayOf(_))
    }
}

fn decode_object(map: &Map<String, Value>) -> FlatSchema {
    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        if is_annotation_key(key) {
            tracing::trace!(key = %key, "skipping schema annotation");
            continue;
        }
        fields.push(decode_field(key, value));
    }
    FlatSchema { fields }
}

fn decode_field(key: &str, value: &Value) -> Field {
    match key.strip_suffix(ARRAY_SUFFIX) {
        Some(name) => Field {
            name: name.to_string(),
            value: SchemaValue::ArrayOf(Box::new(decode_value(value))),
        },
        None => Field {
            name: key.to_string(),
            value: decode_value(value),
        },
    }
}

fn decode_value(value: &Value) -> SchemaValue {
    match value {
        Value::Null => SchemaValue::Primitive(String::new()),
        Value::Bool(b) => SchemaValue::Primitive(b.to_string()),
        Value::Number(n) => SchemaValue::Primitive(n.to_string()),
        Value::String(s) => SchemaValue::Primitive(s.clone()),
        Value::Array(xs) => SchemaValue::List(xs.iter().map(decode_value).collect()),
        Value::Object(map) => SchemaValue::Nested(decode_object(map)),
    }
}

// -------------------------------- Tests ---------------------------------- //
