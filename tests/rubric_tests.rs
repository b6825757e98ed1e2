use casemap::*;
use std::collections::BTreeMap;

fn judgments(values: [Judgment; 9]) -> BTreeMap<Criterion, Judgment> {
    Criterion::ALL.iter().copied().zip(values).collect()
}

#[test]
fn all_explicit_is_exceptional() {
    let result = score(
        &judgments([Judgment::Explicit; 9]),
        &TierThresholds::default(),
    )
    .unwrap();
    assert_eq!(result.total, 45);
    assert_eq!(result.tier, QualityTier::Exceptional);
}

#[test]
fn all_absent_is_low() {
    let result = score(
        &judgments([Judgment::Absent; 9]),
        &TierThresholds::default(),
    )
    .unwrap();
    assert_eq!(result.total, 9);
    assert_eq!(result.tier, QualityTier::Low);
}

#[test]
fn case_study_eight_scores_thirty_five_high() {
    // Reported per-criterion scores: [5,5,5,5,5,3,1,1,5].
    use Judgment::*;
    let result = score(
        &judgments([
            Explicit, Explicit, Explicit, Explicit, Explicit, Inferred, Absent, Absent, Explicit,
        ]),
        &TierThresholds::default(),
    )
    .unwrap();
    assert_eq!(result.total, 35);
    assert_eq!(result.tier, QualityTier::High);
}

#[test]
fn case_study_two_total_is_moderate() {
    // Reported total 28 includes a manually-assigned 2, which the tri-state
    // judgment table cannot produce; the tier still classifies correctly.
    assert_eq!(
        classify_tier(28, &TierThresholds::default()),
        QualityTier::Moderate
    );
}

#[test]
fn eight_judgments_are_incomplete_evidence() {
    let mut partial = judgments([Judgment::Explicit; 9]);
    partial.remove(&Criterion::ArchitectureDescription);
    let err = score(&partial, &TierThresholds::default()).unwrap_err();
    match err {
        CasemapError::IncompleteEvidence { missing } => {
            assert_eq!(missing, vec![Criterion::ArchitectureDescription]);
        }
        other => panic!("expected IncompleteEvidence, got {other}"),
    }
}

#[test]
fn rescoring_produces_a_new_equal_report() {
    let input = judgments([Judgment::Inferred; 9]);
    let first = score(&input, &TierThresholds::default()).unwrap();
    let second = score(&input, &TierThresholds::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.total, 27);
    assert_eq!(first.tier, QualityTier::Moderate);
}

#[test]
fn judgments_parse_from_json_file_shape() {
    let json = r#"{
        "architecture_description": "explicit",
        "application_type": "explicit",
        "industry_sector": "explicit",
        "data_sensitivity": "explicit",
        "internet_exposure": "explicit",
        "compliance_requirements": "inferred",
        "authentication_methods": "absent",
        "technical_stack": "absent",
        "threat_details": "explicit"
    }"#;
    let parsed: BTreeMap<Criterion, Judgment> = serde_json::from_str(json).unwrap();
    let result = score(&parsed, &TierThresholds::default()).unwrap();
    assert_eq!(result.total, 35);
    assert_eq!(result.tier, QualityTier::High);
}
