//! Typed schema tree (`fullSchema`) as produced by the WSDL parser.
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Simple,
    Complex,
    #[serde(other)]
    Other,
}

/// `minOccurs` / `maxOccurs` arrive as either strings or numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Occurs {
    Count(u64),
    Decimal(f64),
    Text(String),
}

/// Opaque id shared by the alternatives of one `xs:choice`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ChoiceGroup(pub Value);

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_occurs: Option<Occurs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_occurs: Option<Occurs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SchemaNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub is_choice: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_group: Option<ChoiceGroup>,
}

impl Occurs {
    /// `"0"` or `0`; anything else (including `"00"`) is not optional.
    pub fn is_zero(&self) -> bool {
        match self {
            Occurs::Count(n) => *n == 0,
            Occurs::Decimal(f) => *f == 0.0,
            Occurs::Text(s) => s == "0",
        }
    }
}

impl SchemaNode {
    pub fn simple(name: impl Into<String>) -> Self {
        SchemaNode {
            name: name.into(),
            kind: Some(NodeKind::Simple),
            ..SchemaNode::default()
        }
    }

    pub fn complex(name: impl Into<String>, children: Vec<SchemaNode>) -> Self {
        SchemaNode {
            name: name.into(),
            kind: Some(NodeKind::Complex),
            children: Some(children),
            ..SchemaNode::default()
        }
    }

    pub fn optional(mut self) -> Self {
        self.min_occurs = Some(Occurs::Text("0".into()));
        self
    }

    pub fn in_choice(mut self, group: impl Into<Value>) -> Self {
        self.is_choice = true;
        self.choice_group = Some(ChoiceGroup(group.into()));
        self
    }

    pub fn children(&self) -> &[SchemaNode] {
        self.children.as_deref().unwrap_or_default()
    }

    pub fn is_simple(&self) -> bool {
        self.kind == Some(NodeKind::Simple)
    }

    pub fn is_complex(&self) -> bool {
        self.kind == Some(NodeKind::Complex)
    }

    /// Complex with something to recurse into.
    pub fn has_content(&self) -> bool {
        self.is_complex() && !self.children().is_empty()
    }

    pub fn is_min_zero(&self) -> bool {
        self.min_occurs.as_ref().is_some_and(Occurs::is_zero)
    }
}
