//! SOAP 1.1 envelope frame shared by the envelope generators.

pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Namespace used when an operation does not declare one.
pub const DEFAULT_TARGET_NAMESPACE: &str = "http://tempuri.org/";

/// Body placeholder when nothing is known about the operation's shape.
pub const UNKNOWN_BODY_COMMENT: &str = "<!--Optional:--!>";

/// Indent of the first line inside `<web:Operation>`.
pub const BODY_INDENT: &str = "         ";

/// Wrap `body` (already indented) in the envelope.
///
/// An empty or missing namespace drops the `xmlns:web` declaration rather than
/// emitting it empty. The body always occupies its own line, even when empty.
pub fn wrap(operation: &str, target_namespace: Option<&str>, body: &str) -> String {
    let namespace_declaration = match target_namespace {
        Some(ns) if !ns.is_empty() => format!(r#" xmlns:web="{ns}""#),
        _ => String::new(),
    };
    format!(
        "<soapenv:Envelope xmlns:soapenv=\"{SOAP_ENV_NS}\"{namespace_declaration}>\n\
         \x20  <soapenv:Header/>\n\
         \x20  <soapenv:Body>\n\
         \x20     <web:{operation}>\n\
         {body}\n\
         \x20     </web:{operation}>\n\
         \x20  </soapenv:Body>\n\
         </soapenv:Envelope>"
    )
}

/// Envelope for an operation without any schema.
pub fn fallback(operation: &str, target_namespace: Option<&str>) -> String {
    wrap(
        operation,
        target_namespace,
        &format!("{BODY_INDENT}{UNKNOWN_BODY_COMMENT}"),
    )
}
