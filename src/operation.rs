//! Operation descriptors and the "best available schema" dispatcher.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::{self, DEFAULT_TARGET_NAMESPACE};
use crate::error::{Result, SoapGenError};
use crate::generate::{envelope_from_node, envelope_from_schema};
use crate::node::SchemaNode;
use crate::path_de::from_value_with_path;
use crate::schema::FlatSchema;

/// One WSDL operation as the parser hands it over. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// flat schema, kept raw and decoded when a request is generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_schema: Option<SchemaNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_endpoint: Option<String>,
}

impl Operation {
    pub fn target_namespace(&self) -> &str {
        match self.target_namespace.as_deref() {
            Some(ns) if !ns.is_empty() => ns,
            _ => DEFAULT_TARGET_NAMESPACE,
        }
    }

    /// Initial request body: the typed tree wins over the flat schema, which
    /// wins over nothing.
    pub fn initial_envelope(&self) -> String {
        let namespace = Some(self.target_namespace());

        if let Some(full_schema) = &self.full_schema {
            let name = if full_schema.name.is_empty() {
                self.name.as_str()
            } else {
                full_schema.name.as_str()
            };
            tracing::debug!(operation = %self.name, element = %name, "generating from full schema");
            return envelope_from_node(name, Some(full_schema), namespace);
        }

        if let Some(input) = self.input.as_ref().and_then(FlatSchema::from_value) {
            tracing::debug!(operation = %self.name, fields = input.len(), "generating from flat input schema");
            return envelope_from_schema(&self.name, Some(&input), namespace);
        }

        tracing::debug!(operation = %self.name, "no schema available, using fallback envelope");
        envelope::fallback(&self.name, namespace)
    }
}

pub fn envelope_for_operation(operation: &Operation) -> String {
    operation.initial_envelope()
}

// ------------------------------ Extraction ------------------------------- //

/// Collect operations from an operation, interface (`operations`), project
/// (`interfaces`), or an array of any of those, in document order.
pub fn operations_from_value(value: &Value) -> Result<Vec<Operation>> {
    let mut out = Vec::new();
    collect(value, "", &mut out)?;
    Ok(out)
}

fn collect(value: &Value, location: &str, out: &mut Vec<Operation>) -> Result<()> {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect(item, &format!("{location}[{index}]"), out)?;
            }
        }
        Value::Object(map) if map.contains_key("interfaces") || map.contains_key("operations") => {
            for key in ["interfaces", "operations"] {
                if let Some(nested) = map.get(key) {
                    let location = if location.is_empty() {
                        key.to_string()
                    } else {
                        format!("{location}.{key}")
                    };
                    collect(nested, &location, out)?;
                }
            }
        }
        Value::Object(_) => {
            let operation = from_value_with_path(value).map_err(|err| relocate(err, location))?;
            out.push(operation);
        }
        _ => {}
    }
    Ok(())
}

/// Make a decode path relative to the whole document.
fn relocate(err: SoapGenError, location: &str) -> SoapGenError {
    match err {
        SoapGenError::Decode { path, message } if !location.is_empty() => SoapGenError::Decode {
            path: format!("{location}.{path}"),
            message,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn operation(value: Value) -> Operation {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn flat_input_with_default_namespace() {
        let op = operation(json!({
            "name": "Add",
            "action": "http://tempuri.org/Add",
            "input": {"intA": "s:int", "intB": "s:int"},
            "requests": [],
        }));
        let out = op.initial_envelope();
        assert!(out.contains(r#"xmlns:web="http://tempuri.org/""#));
        assert!(out.contains("      <web:Add>\n         <intA>?</intA>\n         <intB>?</intB>\n      </web:Add>"));
    }

    #[test]
    fn full_schema_wins_over_input() {
        let op = operation(json!({
            "name": "ListOfContinentsByName",
            "input": {"ignored": "xs:string"},
            "fullSchema": {
                "name": "ListOfContinentsByName",
                "kind": "complex",
                "children": [{"name": "sFilter", "kind": "simple", "minOccurs": "0"}],
            },
            "targetNamespace": "http://www.oorsprong.org/websamples.countryinfo",
        }));
        let full = op.full_schema.as_ref().unwrap();
        assert_eq!(
            op.initial_envelope(),
            envelope_from_node("ListOfContinentsByName", Some(full), Some("http://www.oorsprong.org/websamples.countryinfo"))
        );
        assert!(!op.initial_envelope().contains("ignored"));
    }

    #[test]
    fn schema_name_falls_back_to_operation_name() {
        let op = operation(json!({
            "name": "Ping",
            "fullSchema": {"kind": "complex", "children": [{"name": "x", "kind": "simple"}]},
        }));
        assert!(op.initial_envelope().contains("      <web:Ping>\n         <x>?</x>\n      </web:Ping>"));
    }

    #[test]
    fn nothing_known_gives_fallback() {
        for op in [
            operation(json!({"name": "Ping"})),
            operation(json!({"name": "Ping", "input": null, "targetNamespace": ""})),
            operation(json!({"name": "Ping", "input": "xs:string"})),
        ] {
            assert_eq!(op.initial_envelope(), envelope::fallback("Ping", Some(DEFAULT_TARGET_NAMESPACE)));
        }
    }

    #[test]
    fn empty_flat_input_still_uses_flat_path() {
        let op = operation(json!({"name": "Ping", "input": {}}));
        assert_eq!(op.initial_envelope(), envelope_from_schema("Ping", Some(&FlatSchema::default()), Some(DEFAULT_TARGET_NAMESPACE)));
    }

    #[test]
    fn extracts_from_projects_and_interfaces() {
        let doc = json!([
            {"name": "Calculator", "interfaces": [
                {"name": "CalculatorSoap", "operations": [{"name": "Add"}, {"name": "Subtract"}]},
                {"name": "CalculatorSoap12", "operations": [{"name": "Multiply"}]},
            ]},
            {"operations": [{"name": "Divide"}]},
            {"name": "Standalone", "input": {"a": "xs:int"}},
        ]);
        let names: Vec<_> = operations_from_value(&doc)
            .unwrap()
            .into_iter()
            .map(|op| op.name)
            .collect();
        assert_eq!(names, ["Add", "Subtract", "Multiply", "Divide", "Standalone"]);
    }

    #[test]
    fn bad_operation_reports_path() {
        let doc = json!({"interfaces": [{"operations": [{"name": "Ok"}, {"name": "Bad", "fullSchema": {"children": "nope"}}]}]});
        match operations_from_value(&doc).unwrap_err() {
            SoapGenError::Decode { path, .. } => assert_eq!(path, "interfaces[0].operations[1].fullSchema.children"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
