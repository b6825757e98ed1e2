//! STRIDE threat-model shapes and coverage validation.
//!
//! The threat JSON field names (`"Threat Type"`, `"Scenario"`, ...) are
//! fixed by the batch-output format the generation pipeline emits. Coverage
//! validation checks that a generated model carries exactly N threats per
//! STRIDE category; threat types outside the six categories are surfaced,
//! not silently dropped.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// The six STRIDE categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrideCategory {
    Spoofing,
    Tampering,
    Repudiation,
    #[serde(rename = "Information Disclosure")]
    InformationDisclosure,
    #[serde(rename = "Denial of Service")]
    DenialOfService,
    #[serde(rename = "Elevation of Privilege")]
    ElevationOfPrivilege,
}

impl StrideCategory {
    pub const ALL: [StrideCategory; 6] = [
        StrideCategory::Spoofing,
        StrideCategory::Tampering,
        StrideCategory::Repudiation,
        StrideCategory::InformationDisclosure,
        StrideCategory::DenialOfService,
        StrideCategory::ElevationOfPrivilege,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StrideCategory::Spoofing => "Spoofing",
            StrideCategory::Tampering => "Tampering",
            StrideCategory::Repudiation => "Repudiation",
            StrideCategory::InformationDisclosure => "Information Disclosure",
            StrideCategory::DenialOfService => "Denial of Service",
            StrideCategory::ElevationOfPrivilege => "Elevation of Privilege",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// One assumption attached to a threat scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assumption {
    #[serde(rename = "Assumption")]
    pub assumption: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Condition")]
    pub condition: String,
}

/// One generated threat, field-exact against the batch-output JSON. The
/// threat type stays a raw string so unrecognized categories can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    #[serde(rename = "Threat Type")]
    pub threat_type: String,
    #[serde(rename = "Scenario")]
    pub scenario: String,
    #[serde(rename = "Assumptions", default)]
    pub assumptions: Vec<Assumption>,
    #[serde(rename = "Potential Impact")]
    pub potential_impact: String,
    #[serde(rename = "MITRE ATT&CK Keywords", default)]
    pub mitre_keywords: Vec<String>,
}

impl Threat {
    pub fn category(&self) -> Option<StrideCategory> {
        StrideCategory::from_label(&self.threat_type)
    }
}

/// A generated threat model as returned by the generation capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatModel {
    pub threat_model: Vec<Threat>,
    #[serde(default)]
    pub improvement_suggestions: Vec<String>,
}

/// Per-category coverage of a generated threat model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrideCoverage {
    pub counts: BTreeMap<StrideCategory, usize>,
    pub unrecognized: Vec<String>,
    pub expected_per_category: usize,
}

impl StrideCoverage {
    /// True when every category has exactly the expected count and no
    /// unrecognized threat types were seen.
    pub fn is_complete(&self) -> bool {
        self.unrecognized.is_empty()
            && StrideCategory::ALL
                .iter()
                .all(|c| self.counts.get(c).copied().unwrap_or(0) == self.expected_per_category)
    }

    pub fn total_threats(&self) -> usize {
        self.counts.values().sum::<usize>() + self.unrecognized.len()
    }
}

/// One batch's worth of generated threats, as written to the batch-results
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutput {
    #[serde(default)]
    pub case_number: String,
    #[serde(default)]
    pub batch_number: String,
    pub threats: Vec<Threat>,
}

/// Coverage across one or more generated threat models (one entry per batch
/// when assessing batch-output results).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub expected_per_category: usize,
    pub entries: Vec<CoverageEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageEntry {
    pub label: String,
    pub coverage: StrideCoverage,
}

impl CoverageReport {
    pub fn all_complete(&self) -> bool {
        self.entries.iter().all(|e| e.coverage.is_complete())
    }
}

/// Count threats per STRIDE category. Pure; categories with no threats are
/// present in the counts with zero.
pub fn assess_coverage(threats: &[Threat], expected_per_category: usize) -> StrideCoverage {
    let mut counts: BTreeMap<StrideCategory, usize> =
        StrideCategory::ALL.iter().map(|&c| (c, 0)).collect();
    let mut unrecognized = Vec::new();

    for threat in threats {
        match threat.category() {
            Some(category) => *counts.entry(category).or_insert(0) += 1,
            None => unrecognized.push(threat.threat_type.trim().to_string()),
        }
    }

    StrideCoverage {
        counts,
        unrecognized,
        expected_per_category,
    }
}

/// Render a threat model as a Markdown table plus improvement suggestions.
pub fn threat_model_to_markdown(model: &ThreatModel) -> String {
    let mut out = String::new();
    out.push_str("| Threat Type | Scenario | Potential Impact | Assumptions |\n");
    out.push_str("|-------------|----------|------------------|-------------|\n");

    for threat in &model.threat_model {
        let assumptions = if threat.assumptions.is_empty() {
            "No assumptions provided".to_string()
        } else {
            threat
                .assumptions
                .iter()
                .map(|a| {
                    format!(
                        "**{}** (Role: {}, Condition: {})",
                        a.assumption, a.role, a.condition
                    )
                })
                .collect::<Vec<_>>()
                .join("<br>")
        };
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            threat.threat_type, threat.scenario, threat.potential_impact, assumptions
        );
    }

    if !model.improvement_suggestions.is_empty() {
        out.push_str("\n# Improvement Suggestions\n\n");
        for suggestion in &model.improvement_suggestions {
            let _ = writeln!(out, "- {suggestion}");
        }
    }

    out
}
