//! Attribute validation and canonicalization.
//!
//! `validate` and `normalize` are pure functions: no side effects, no
//! randomness, identical inputs always produce identical outputs. Callers
//! may normalize many case studies in parallel with no coordination.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::{
    AbilityLevel, AttributeSelections, CaseStudyRecord, Exposure, SensitivityLevel,
};
use crate::errors::CasemapError;

/// Validate raw attribute selections without producing a record.
///
/// Fails when `sensitive_data` or `technical_ability` is outside the defined
/// three-level enumerations, or when the technology and version maps have
/// mismatched key sets. No side effects on success.
pub fn validate(attributes: &AttributeSelections) -> Result<(), CasemapError> {
    validate_sensitivity(&attributes.sensitive_data)?;
    validate_ability(&attributes.technical_ability)?;
    validate_technology_maps(
        &attributes.selected_technologies,
        &attributes.selected_versions,
    )
}

/// Normalize a free-text description plus raw attribute selections into the
/// canonical `CaseStudyRecord`.
pub fn normalize(
    description: &str,
    attributes: &AttributeSelections,
) -> Result<CaseStudyRecord, CasemapError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(CasemapError::validation(
            "app_input",
            "description must be non-empty",
        ));
    }
    validate(attributes)?;

    // Checked by validate above; re-parse rather than unwrap blind strings.
    let sensitive_data = SensitivityLevel::from_input(&attributes.sensitive_data)
        .ok_or_else(|| invalid_level("sensitive_data", &attributes.sensitive_data))?;
    let technical_ability = AbilityLevel::from_input(&attributes.technical_ability)
        .ok_or_else(|| invalid_level("technical_ability", &attributes.technical_ability))?;

    Ok(CaseStudyRecord {
        description: description.to_string(),
        // The record's application type must be non-empty; a blank selection
        // records "Unknown" just like the draft-level default.
        app_type: opaque_or_unknown(Some(&attributes.app_type)),
        industry_sector: opaque_or_unknown(attributes.industry_sector.as_deref()),
        sensitive_data,
        internet_facing: Exposure::from_input(&attributes.internet_facing),
        num_employees: opaque_or_unknown(attributes.num_employees.as_deref()),
        compliance_requirements: collapse_list(&attributes.compliance_requirements),
        technical_ability,
        authentication: collapse_list(&attributes.authentication),
        selected_technologies: trim_map(&attributes.selected_technologies),
        selected_versions: trim_map(&attributes.selected_versions),
    })
}

fn validate_sensitivity(value: &str) -> Result<(), CasemapError> {
    SensitivityLevel::from_input(value)
        .map(|_| ())
        .ok_or_else(|| invalid_level("sensitive_data", value))
}

fn validate_ability(value: &str) -> Result<(), CasemapError> {
    AbilityLevel::from_input(value)
        .map(|_| ())
        .ok_or_else(|| invalid_level("technical_ability", value))
}

/// The technology and version maps must cover exactly the same technologies.
/// A `*` version is valid (version unspecified); a missing entry is not.
fn validate_technology_maps(
    technologies: &BTreeMap<String, String>,
    versions: &BTreeMap<String, String>,
) -> Result<(), CasemapError> {
    let missing_versions: Vec<_> = technologies
        .keys()
        .filter(|k| !versions.contains_key(*k))
        .cloned()
        .collect();
    if !missing_versions.is_empty() {
        return Err(CasemapError::validation(
            "selected_versions",
            format!("no version entry for {}", missing_versions.join(", ")),
        ));
    }

    let orphan_versions: Vec<_> = versions
        .keys()
        .filter(|k| !technologies.contains_key(*k))
        .cloned()
        .collect();
    if !orphan_versions.is_empty() {
        return Err(CasemapError::validation(
            "selected_technologies",
            format!("no technology entry for {}", orphan_versions.join(", ")),
        ));
    }

    Ok(())
}

fn invalid_level(field: &str, value: &str) -> CasemapError {
    CasemapError::validation(
        field,
        format!("`{}` is not one of Low, Medium, High", value.trim()),
    )
}

/// Trim entries, drop empties, de-duplicate into a sorted set. An empty
/// result is valid and means "none found", not "unknown".
fn collapse_list(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn opaque_or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "Unknown".to_string(),
    }
}

fn trim_map(map: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}
