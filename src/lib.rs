//! Placeholder SOAP request generation from WSDL-derived schema descriptions.
pub mod cli;
pub mod envelope;
pub mod error;
pub mod format;
pub mod generate;
pub mod jq_exec;
pub mod node;
pub mod operation;
pub mod path_de;
pub mod schema;

pub use error::{Result, SoapGenError};
pub use format::{format_xml, strip_causality_data, FormatOptions};
pub use generate::{envelope_from_node, envelope_from_schema, initial_xml};
pub use node::SchemaNode;
pub use operation::{envelope_for_operation, operations_from_value, Operation};
pub use schema::FlatSchema;
