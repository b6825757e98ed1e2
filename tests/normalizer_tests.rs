use casemap::*;
use indoc::indoc;
use std::collections::BTreeSet;

fn draft_json() -> &'static str {
    indoc! {r#"
        {
            "app_input": "A patient-facing web portal that exposes appointment booking and lab results over HTTPS.",
            "app_type": "Web Application",
            "industry_sector": "Healthcare",
            "sensitive_data": "High",
            "internet_facing": "Yes",
            "num_employees": "501-1000",
            "compliance_requirements": ["HIPAA", "HIPAA", " SOC 2 ", ""],
            "technical_ability": "Medium",
            "authentication": ["OAuth2", "SAML"],
            "selected_technologies": {
                "nginx": "cpe:2.3:a:nginx:nginx",
                "postgresql": "cpe:2.3:a:postgresql:postgresql"
            },
            "selected_versions": {
                "nginx": "1.25",
                "postgresql": "*"
            }
        }
    "#}
}

#[test]
fn draft_normalizes_to_canonical_record() {
    let draft: CaseStudyDraft = serde_json::from_str(draft_json()).unwrap();
    let record = normalize(&draft.app_input, &draft.attributes).unwrap();

    assert_eq!(record.sensitive_data, SensitivityLevel::High);
    assert_eq!(record.internet_facing, Exposure::Yes);
    assert_eq!(
        record.compliance_requirements,
        BTreeSet::from(["HIPAA".to_string(), "SOC 2".to_string()])
    );
    assert_eq!(record.selected_versions["postgresql"], VERSION_UNSPECIFIED);
}

#[test]
fn normalize_is_byte_identical_across_calls() {
    let draft: CaseStudyDraft = serde_json::from_str(draft_json()).unwrap();
    let first = normalize(&draft.app_input, &draft.attributes).unwrap();
    let second = normalize(&draft.app_input, &draft.attributes).unwrap();
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn technology_and_version_keys_are_equal_sets() {
    let draft: CaseStudyDraft = serde_json::from_str(draft_json()).unwrap();
    let record = normalize(&draft.app_input, &draft.attributes).unwrap();
    let tech_keys: Vec<_> = record.selected_technologies.keys().collect();
    let version_keys: Vec<_> = record.selected_versions.keys().collect();
    assert_eq!(tech_keys, version_keys);
}

#[test]
fn draft_without_app_type_normalizes_to_unknown() {
    let draft: CaseStudyDraft = serde_json::from_str(
        r#"{
            "app_input": "A kiosk application for ticket sales.",
            "sensitive_data": "Low",
            "technical_ability": "Medium"
        }"#,
    )
    .unwrap();
    let record = normalize(&draft.app_input, &draft.attributes).unwrap();
    assert_eq!(record.app_type, "Unknown");
    assert!(!record.app_type.is_empty());
}

#[test]
fn critical_sensitivity_fails_validation() {
    let mut draft: CaseStudyDraft = serde_json::from_str(draft_json()).unwrap();
    draft.attributes.sensitive_data = "Critical".to_string();
    let err = validate(&draft.attributes).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn empty_description_fails_validation() {
    let draft: CaseStudyDraft = serde_json::from_str(draft_json()).unwrap();
    let err = normalize("", &draft.attributes).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn version_map_orphan_fails_validation() {
    let mut draft: CaseStudyDraft = serde_json::from_str(draft_json()).unwrap();
    draft
        .attributes
        .selected_versions
        .insert("redis".to_string(), "7.2".to_string());
    assert!(validate(&draft.attributes).is_err());
}
