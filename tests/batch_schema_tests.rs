//! The serialized record must stay field-exact against the batch-input
//! schema consumed by the generation pipeline.

use casemap::*;
use pretty_assertions::assert_eq;

fn record() -> CaseStudyRecord {
    let draft: CaseStudyDraft = serde_json::from_str(
        r#"{
            "app_input": "An industrial control system managing substation relays.",
            "app_type": "ICS/SCADA",
            "industry_sector": "Energy",
            "sensitive_data": "High",
            "internet_facing": "No",
            "num_employees": "Unknown",
            "compliance_requirements": ["NERC CIP"],
            "technical_ability": "High",
            "authentication": [],
            "selected_technologies": {"modbus": "cpe:2.3:a:modbus:modbus"},
            "selected_versions": {"modbus": "*"}
        }"#,
    )
    .unwrap();
    normalize(&draft.app_input, &draft.attributes).unwrap()
}

#[test]
fn serialized_record_has_exact_schema_keys() {
    let value = serde_json::to_value(record()).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    let mut expected = vec![
        "app_input",
        "app_type",
        "industry_sector",
        "sensitive_data",
        "internet_facing",
        "num_employees",
        "compliance_requirements",
        "technical_ability",
        "authentication",
        "selected_technologies",
        "selected_versions",
    ];
    expected.sort_unstable();
    let mut actual = keys.clone();
    actual.sort_unstable();
    assert_eq!(actual, expected);
}

#[test]
fn levels_serialize_as_plain_strings() {
    let value = serde_json::to_value(record()).unwrap();
    assert_eq!(value["sensitive_data"], "High");
    assert_eq!(value["internet_facing"], "No");
    assert_eq!(value["technical_ability"], "High");
}

#[test]
fn record_round_trips_through_json() {
    let original = record();
    let json = serde_json::to_string(&original).unwrap();
    let parsed: CaseStudyRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn empty_authentication_survives_round_trip() {
    let value = serde_json::to_value(record()).unwrap();
    assert!(value["authentication"].as_array().unwrap().is_empty());
}
