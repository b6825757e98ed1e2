//! Domain types shared by the normalizer and the rubric scorer.
//!
//! `CaseStudyRecord` is the canonical batch-input schema: its serialized
//! field names are fixed by the downstream generation pipeline and must not
//! drift. A record is constructed once per case study and is immutable
//! thereafter; re-evaluation produces a new value.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Wildcard version meaning "technology identified, version unspecified".
pub const VERSION_UNSPECIFIED: &str = "*";

/// Three-level data sensitivity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SensitivityLevel {
    Low,
    Medium,
    High,
}

impl SensitivityLevel {
    /// Parse a form selection. Returns `None` for anything outside the three
    /// defined levels ("Critical", "Unknown", empty, ...).
    pub fn from_input(value: &str) -> Option<Self> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("low") => Some(SensitivityLevel::Low),
            v if v.eq_ignore_ascii_case("medium") => Some(SensitivityLevel::Medium),
            v if v.eq_ignore_ascii_case("high") => Some(SensitivityLevel::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SensitivityLevel::Low => "Low",
            SensitivityLevel::Medium => "Medium",
            SensitivityLevel::High => "High",
        }
    }
}

impl fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assumed technical ability of the reader of the generated threat model.
/// Same three levels as sensitivity, but the two are distinct axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbilityLevel {
    Low,
    Medium,
    High,
}

impl AbilityLevel {
    pub fn from_input(value: &str) -> Option<Self> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("low") => Some(AbilityLevel::Low),
            v if v.eq_ignore_ascii_case("medium") => Some(AbilityLevel::Medium),
            v if v.eq_ignore_ascii_case("high") => Some(AbilityLevel::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityLevel::Low => "Low",
            AbilityLevel::Medium => "Medium",
            AbilityLevel::High => "High",
        }
    }
}

impl fmt::Display for AbilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internet exposure of the application under study. Anything that is not a
/// clear yes/no collapses to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Exposure {
    Yes,
    No,
    Unknown,
}

impl Exposure {
    pub fn from_input(value: &str) -> Self {
        let v = value.trim();
        if v.eq_ignore_ascii_case("yes") {
            Exposure::Yes
        } else if v.eq_ignore_ascii_case("no") {
            Exposure::No
        } else {
            Exposure::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Exposure::Yes => "Yes",
            Exposure::No => "No",
            Exposure::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical structured input for one case study, serialized field-exact as
/// the batch-input JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyRecord {
    #[serde(rename = "app_input")]
    pub description: String,
    pub app_type: String,
    pub industry_sector: String,
    pub sensitive_data: SensitivityLevel,
    pub internet_facing: Exposure,
    pub num_employees: String,
    pub compliance_requirements: BTreeSet<String>,
    pub technical_ability: AbilityLevel,
    pub authentication: BTreeSet<String>,
    /// Technology name -> CPE identifier prefix.
    pub selected_technologies: BTreeMap<String, String>,
    /// Technology name -> version string, or `*` when unspecified.
    /// Invariant: key set identical to `selected_technologies`.
    pub selected_versions: BTreeMap<String, String>,
}

impl CaseStudyRecord {
    /// Iterate technologies as (name, cpe prefix, version). Version falls
    /// back to `*` defensively, though a validated record never needs it.
    pub fn technologies(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.selected_technologies.iter().map(|(name, cpe)| {
            let version = self
                .selected_versions
                .get(name)
                .map(String::as_str)
                .unwrap_or(VERSION_UNSPECIFIED);
            (name.as_str(), cpe.as_str(), version)
        })
    }

    pub fn technology_count(&self) -> usize {
        self.selected_technologies.len()
    }

    /// True when the record carries no authentication evidence. Distinct
    /// from "Unknown": the attribute was assessed and found empty.
    pub fn has_no_authentication(&self) -> bool {
        self.authentication.is_empty()
    }
}

/// Raw attribute selections as captured from the guided form or a draft
/// schema file. Level fields stay strings here; `normalizer::validate`
/// rejects anything outside the defined enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSelections {
    pub app_type: String,
    pub industry_sector: Option<String>,
    pub sensitive_data: String,
    pub internet_facing: String,
    pub num_employees: Option<String>,
    pub compliance_requirements: Vec<String>,
    pub technical_ability: String,
    pub authentication: Vec<String>,
    pub selected_technologies: BTreeMap<String, String>,
    pub selected_versions: BTreeMap<String, String>,
}

impl Default for AttributeSelections {
    fn default() -> Self {
        Self {
            // Drafts that never picked a type record "Unknown", matching the
            // batch loader's fallback.
            app_type: "Unknown".to_string(),
            industry_sector: None,
            sensitive_data: String::new(),
            internet_facing: String::new(),
            num_employees: None,
            compliance_requirements: Vec::new(),
            // Drafts that never picked an ability default to Medium.
            technical_ability: "Medium".to_string(),
            authentication: Vec::new(),
            selected_technologies: BTreeMap::new(),
            selected_versions: BTreeMap::new(),
        }
    }
}

/// A draft case study file: free text plus raw attribute selections, the
/// shape written by the guided form before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyDraft {
    #[serde(default)]
    pub app_input: String,
    #[serde(flatten)]
    pub attributes: AttributeSelections,
}
