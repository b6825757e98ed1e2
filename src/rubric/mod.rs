//! The fixed nine-criterion case-study rubric.
//!
//! Every criterion receives a tri-state evidence judgment and maps to points
//! through a strict, non-overridable table: explicit -> 5, inferred -> 3,
//! absent -> 1. Scoring either judges all nine criteria or fails; there is
//! no implicit judgment for a missing criterion.

pub mod tiers;

pub use tiers::{classify_tier, CalibrationMismatch, QualityTier, TierThresholds};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::CasemapError;

/// The nine rubric criteria, in fixed order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Presence and quality of an architecture or data-flow description.
    ArchitectureDescription,
    /// Explicitness of the application type.
    ApplicationType,
    /// Explicitness of the industry sector.
    IndustrySector,
    /// Explicitness or inferability of data sensitivity.
    DataSensitivity,
    /// Explicitness of internet-facing status.
    InternetExposure,
    /// Explicitness of compliance requirements.
    ComplianceRequirements,
    /// Explicitness of authentication methods.
    AuthenticationMethods,
    /// Completeness of technical stack details (database, OS, language, framework).
    TechnicalStack,
    /// Completeness and organization of threat details.
    ThreatDetails,
}

impl Criterion {
    pub const ALL: [Criterion; 9] = [
        Criterion::ArchitectureDescription,
        Criterion::ApplicationType,
        Criterion::IndustrySector,
        Criterion::DataSensitivity,
        Criterion::InternetExposure,
        Criterion::ComplianceRequirements,
        Criterion::AuthenticationMethods,
        Criterion::TechnicalStack,
        Criterion::ThreatDetails,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::ArchitectureDescription => "architecture description",
            Criterion::ApplicationType => "application type",
            Criterion::IndustrySector => "industry sector",
            Criterion::DataSensitivity => "data sensitivity",
            Criterion::InternetExposure => "internet exposure",
            Criterion::ComplianceRequirements => "compliance requirements",
            Criterion::AuthenticationMethods => "authentication methods",
            Criterion::TechnicalStack => "technical stack",
            Criterion::ThreatDetails => "threat details",
        }
    }
}

/// Tri-state evidence judgment for one criterion. The judgment itself is an
/// opaque input here; whoever read the case study (human or model) decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Judgment {
    /// Explicit and detailed in the source text.
    Explicit,
    /// Inferred, partial, or implied but not stated outright.
    Inferred,
    /// Absent or not mentioned.
    Absent,
}

impl Judgment {
    /// The strict judgment -> points table.
    pub fn points(&self) -> u32 {
        match self {
            Judgment::Explicit => 5,
            Judgment::Inferred => 3,
            Judgment::Absent => 1,
        }
    }
}

/// One scored criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub judgment: Judgment,
    pub points: u32,
}

/// Complete rubric score: nine criterion scores in rubric order, their sum,
/// and the derived quality tier. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricScore {
    pub scores: Vec<CriterionScore>,
    pub total: u32,
    pub tier: QualityTier,
}

/// Score a full set of evidence judgments.
///
/// Fails with `IncompleteEvidence` naming the missing criteria when fewer
/// than nine judgments are supplied.
pub fn score(
    judgments: &BTreeMap<Criterion, Judgment>,
    thresholds: &TierThresholds,
) -> Result<RubricScore, CasemapError> {
    let missing: Vec<Criterion> = Criterion::ALL
        .iter()
        .filter(|c| !judgments.contains_key(*c))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(CasemapError::IncompleteEvidence { missing });
    }

    let scores: Vec<CriterionScore> = Criterion::ALL
        .iter()
        .map(|&criterion| {
            let judgment = judgments[&criterion];
            CriterionScore {
                criterion,
                judgment,
                points: judgment.points(),
            }
        })
        .collect();

    let total = scores.iter().map(|s| s.points).sum();

    Ok(RubricScore {
        scores,
        total,
        tier: classify_tier(total, thresholds),
    })
}

/// A rubric score plus report metadata, the shape the output writers render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub case_study: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub score: RubricScore,
}

impl ScoreReport {
    pub fn new(case_study: Option<String>, score: RubricScore) -> Self {
        Self {
            case_study,
            timestamp: Utc::now(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_judged(judgment: Judgment) -> BTreeMap<Criterion, Judgment> {
        Criterion::ALL.iter().map(|&c| (c, judgment)).collect()
    }

    #[test]
    fn all_explicit_scores_forty_five_exceptional() {
        let result = score(&all_judged(Judgment::Explicit), &TierThresholds::default()).unwrap();
        assert_eq!(result.total, 45);
        assert_eq!(result.tier, QualityTier::Exceptional);
    }

    #[test]
    fn all_absent_scores_nine_low() {
        let result = score(&all_judged(Judgment::Absent), &TierThresholds::default()).unwrap();
        assert_eq!(result.total, 9);
        assert_eq!(result.tier, QualityTier::Low);
    }

    #[test]
    fn eight_judgments_fail_with_incomplete_evidence() {
        let mut judgments = all_judged(Judgment::Explicit);
        judgments.remove(&Criterion::ThreatDetails);
        let err = score(&judgments, &TierThresholds::default()).unwrap_err();
        match err {
            CasemapError::IncompleteEvidence { missing } => {
                assert_eq!(missing, vec![Criterion::ThreatDetails]);
            }
            other => panic!("expected IncompleteEvidence, got {other}"),
        }
    }

    #[test]
    fn scores_follow_rubric_order() {
        let result = score(&all_judged(Judgment::Inferred), &TierThresholds::default()).unwrap();
        let order: Vec<Criterion> = result.scores.iter().map(|s| s.criterion).collect();
        assert_eq!(order, Criterion::ALL.to_vec());
    }

    #[test]
    fn judgment_points_table_is_fixed() {
        assert_eq!(Judgment::Explicit.points(), 5);
        assert_eq!(Judgment::Inferred.points(), 3);
        assert_eq!(Judgment::Absent.points(), 1);
    }

    #[test]
    fn judgments_deserialize_from_lowercase() {
        let judgments: BTreeMap<Criterion, Judgment> = serde_json::from_str(
            r#"{"architecture_description": "explicit", "threat_details": "absent"}"#,
        )
        .unwrap();
        assert_eq!(
            judgments[&Criterion::ArchitectureDescription],
            Judgment::Explicit
        );
        assert_eq!(judgments[&Criterion::ThreatDetails], Judgment::Absent);
    }
}
