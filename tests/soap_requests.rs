use serde_json::{json, Value};
use soapgen::{envelope_for_operation, envelope_from_schema, initial_xml, FlatSchema, Operation};

fn fragment(value: &Value) -> String {
    initial_xml(FlatSchema::from_value(value).as_ref(), None)
}

fn envelope(operation: &str, value: &Value, namespace: &str) -> String {
    envelope_from_schema(operation, FlatSchema::from_value(value).as_ref(), Some(namespace))
}

fn country_info_output() -> Value {
    json!({
        "sISOCode": "xs:string",
        "sName": "xs:string",
        "sCapitalCity": "xs:string",
        "sPhoneCode": "xs:string",
        "sContinentCode": "xs:string",
        "sCurrencyISOCode": "xs:string",
        "sCountryFlag": "xs:string",
        "Languages": {
            "tLanguage[]": {
                "sISOCode": "xs:string",
                "sName": "xs:string",
                "targetNSAlias": "tns",
                "targetNamespace": "http://www.oorsprong.org/websamples.countryinfo"
            },
            "targetNSAlias": "tns",
            "targetNamespace": "http://www.oorsprong.org/websamples.countryinfo"
        },
        "targetNSAlias": "tns",
        "targetNamespace": "http://www.oorsprong.org/websamples.countryinfo"
    })
}

// ---- Fragments ---- //

#[test]
fn fragment_array_of_complex_uses_item_name() {
    let out = fragment(&json!({
        "Languages": {"tLanguage[]": {"sISOCode": "xs:string", "sName": "xs:string"}}
    }));
    for expected in ["<tem:tLanguage>", "</tem:tLanguage>", "<tem:sISOCode>?</tem:sISOCode>", "<tem:sName>?</tem:sName>"] {
        assert!(out.contains(expected), "missing {expected} in\n{out}");
    }
    assert!(!out.contains("tLanguage[]"));
    assert!(!out.contains("<tem:Languages>"));
}

#[test]
fn fragment_array_of_simple() {
    let out = fragment(&json!({"Items": {"string[]": "xs:string"}}));
    assert_eq!(out, "         <tem:string>?</tem:string>");
}

#[test]
fn fragment_drops_metadata_and_dollar_keys() {
    let out = fragment(&json!({
        "name": "xs:string",
        "sISOCode": "xs:string",
        "targetNSAlias": "tns",
        "targetNamespace": "http://example.com",
        "$xmlns": "http://example.com",
        "$targetNamespace": "http://example.com",
    }));
    assert_eq!(
        out,
        "         <tem:name>?</tem:name>\n         <tem:sISOCode>?</tem:sISOCode>"
    );
}

#[test]
fn fragment_for_country_info() {
    assert_eq!(
        fragment(&json!({"sCountryISOCode": "xs:string"})),
        "         <tem:sCountryISOCode>?</tem:sCountryISOCode>"
    );

    let out = fragment(&country_info_output());
    assert_eq!(
        out,
        [
            "         <tem:sISOCode>?</tem:sISOCode>",
            "         <tem:sName>?</tem:sName>",
            "         <tem:sCapitalCity>?</tem:sCapitalCity>",
            "         <tem:sPhoneCode>?</tem:sPhoneCode>",
            "         <tem:sContinentCode>?</tem:sContinentCode>",
            "         <tem:sCurrencyISOCode>?</tem:sCurrencyISOCode>",
            "         <tem:sCountryFlag>?</tem:sCountryFlag>",
            "         <tem:tLanguage>",
            "            <tem:sISOCode>?</tem:sISOCode>",
            "            <tem:sName>?</tem:sName>",
            "         </tem:tLanguage>",
        ]
        .join("\n")
    );
}

#[test]
fn fragment_empty_inputs() {
    assert_eq!(initial_xml(None, None), "");
    assert_eq!(fragment(&Value::Null), "");
    assert_eq!(fragment(&json!({})), "");
    assert_eq!(fragment(&json!(["not", "an", "object"])), "");
}

// ---- Envelopes ---- //

#[test]
fn envelope_for_add() {
    let out = envelope("Add", &json!({"intA": "xs:int", "intB": "xs:int"}), "http://tempuri.org/");
    assert_eq!(
        out,
        [
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:web="http://tempuri.org/">"#,
            "   <soapenv:Header/>",
            "   <soapenv:Body>",
            "      <web:Add>",
            "         <intA>?</intA>",
            "         <intB>?</intB>",
            "      </web:Add>",
            "   </soapenv:Body>",
            "</soapenv:Envelope>",
        ]
        .join("\n")
    );
}

#[test]
fn envelope_nested_and_array_elements() {
    let out = envelope(
        "GetPerson",
        &json!({"Person": {"Name": "xs:string", "Age": "xs:int"}}),
        "http://example.com",
    );
    assert!(out.contains("         <Person>\n            <Name>?</Name>\n            <Age>?</Age>\n         </Person>"));

    let out = envelope(
        "GetItems",
        &json!({"Items[]": {"Name": "xs:string", "Price": "xs:decimal"}}),
        "http://example.com",
    );
    assert!(out.contains("         <Items>\n            <Name>?</Name>\n            <Price>?</Price>\n         </Items>"));
    assert!(!out.contains("Items[]"));
}

#[test]
fn envelope_filters_metadata() {
    let out = envelope(
        "GetCode",
        &json!({"sCode": "xs:string", "targetNSAlias": "tns", "targetNamespace": "http://example.com"}),
        "http://example.com",
    );
    assert!(out.contains("<sCode>?</sCode>"));
    assert!(!out.contains("targetNSAlias"));
    assert!(!out.contains("targetNamespace"));
}

#[test]
fn envelope_keeps_array_wrappers() {
    let out = envelope(
        "FullCountryInfoResult",
        &json!({
            "sISOCode": "xs:string",
            "Languages": {
                "tLanguage[]": {
                    "sISOCode": "xs:string",
                    "sName": "xs:string",
                    "targetNSAlias": "tns",
                    "targetNamespace": "http://www.oorsprong.org/websamples.countryinfo"
                }
            }
        }),
        "http://www.oorsprong.org/websamples.countryinfo",
    );
    assert!(out.contains(
        [
            "         <sISOCode>?</sISOCode>",
            "         <Languages>",
            "            <tLanguage>",
            "               <sISOCode>?</sISOCode>",
            "               <sName>?</sName>",
            "            </tLanguage>",
            "         </Languages>",
        ]
        .join("\n")
        .as_str()
    ));
    assert!(!out.contains("tLanguage[]"));
    assert!(!out.contains("targetNSAlias"));
}

// ---- Operations ---- //

#[test]
fn project_document_to_envelopes() {
    let doc = json!({
        "name": "CountryInfoService",
        "interfaces": [{
            "name": "CountryInfoServiceSoapType",
            "operations": [
                {
                    "name": "FullCountryInfo",
                    "input": {"sCountryISOCode": "xs:string", "targetNSAlias": "tns"},
                    "targetNamespace": "http://www.oorsprong.org/websamples.countryinfo"
                },
                {
                    "name": "ListOfContinentsByName",
                    "fullSchema": {
                        "name": "ListOfContinentsByName",
                        "kind": "complex",
                        "children": [
                            {"name": "sContinentCode", "type": "xs:string", "kind": "simple", "minOccurs": "0"}
                        ]
                    },
                    "targetNamespace": "http://www.oorsprong.org/websamples.countryinfo"
                },
                {"name": "Ping"}
            ]
        }]
    });
    let operations: Vec<Operation> = soapgen::operations_from_value(&doc).unwrap();
    let envelopes: Vec<String> = operations.iter().map(envelope_for_operation).collect();

    assert!(envelopes[0].contains("      <web:FullCountryInfo>\n         <sCountryISOCode>?</sCountryISOCode>\n"));
    assert!(envelopes[1].contains(
        "      <web:ListOfContinentsByName>\n         <!--Optional:-->\n         <sContinentCode>?</sContinentCode>\n"
    ));
    assert!(envelopes[2].contains(r#"xmlns:web="http://tempuri.org/""#));
    assert!(envelopes[2].contains("         <!--Optional:--!>"));

    for (operation, first) in operations.iter().zip(&envelopes) {
        assert_eq!(&envelope_for_operation(operation), first);
    }
}
