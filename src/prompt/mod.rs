//! Generation-prompt assembly.
//!
//! Pure string construction from a normalized record plus opaque lookup
//! context; the chat-completion call that consumes the prompt is external.

use crate::core::CaseStudyRecord;

/// Opaque vulnerability-context text fetched by the orchestrator. Both
/// sections may be empty when the lookups were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupContext {
    pub nvd: String,
    pub otx: String,
}

/// Build the STRIDE threat-model generation prompt for one record.
/// Deterministic: identical inputs produce identical prompts.
pub fn generation_prompt(record: &CaseStudyRecord, context: &LookupContext) -> String {
    let authentication = join_or_none(record.authentication.iter());
    let compliance = join_or_none(record.compliance_requirements.iter());

    format!(
        r#"Act as a cybersecurity expert in the {industry} sector with more than 20 years of experience using the STRIDE threat modeling methodology to produce comprehensive threat models for a wide range of applications. Your task is to use the application description and additional provided data to produce a list of specific threats for the application.

1. On a scale of Low, Medium, or High, the user's technical ability is: {ability}. Simplify explanations for lower abilities without omitting details. For higher abilities, include all technical aspects; for lower abilities, provide clear, more readable explanations despite their lack of technical experience.

2. For each of the STRIDE categories (Spoofing, Tampering, Repudiation, Information Disclosure, Denial of Service, and Elevation of Privilege), list a mandatory multiple (3) credible threats per category. Each threat scenario should provide a credible scenario in which the threat could occur in the context of the application. It is very important that your responses are tailored to reflect the details you are given.

3. For each threat scenario, assess the potential impact on data confidentiality, integrity, and availability. Describe how the threat could lead to unauthorized disclosure of sensitive information, corruption or tampering of data, and disruption to system or data access. Not every threat scenario will impact all three aspects, but you should consider each in your analysis.

4. Threat models always have assumptions. For each threat scenario, provide a list of assumptions that must be true for the threat to be realized. Each assumption should include a description of the assumption, the role of the actor making the assumption, and the condition under which the assumption is valid.

5. When providing the threat model, use a JSON-formatted response with the keys "threat_model" and "improvement_suggestions". Under "threat_model", include an array of objects with the keys "Threat Type", "Scenario", "Potential Impact", and "MITRE ATT&CK Keywords".

6. Under "MITRE ATT&CK Keywords", include an array of relevant keywords that accurately represent the threat scenario. These should be a mix of specific and broad terms that capture relevant MITRE ATT&CK techniques. Avoid overly narrow terms and consider including related actions (e.g., "injection," "spoofing") and targets (e.g., "network," "device"). Do NOT include STIX IDs, ATT&CK Reference IDs, or Technique IDs.

7. Ensure that the "Potential Impact" is a concise summary string, not a nested object.

8. Under "improvement_suggestions", include an array of strings with suggestions on how the threat modeler can improve their application description to allow the tool to produce a more comprehensive threat model.

APPLICATION TYPE: {app_type}
INDUSTRY SECTOR: {industry}
AUTHENTICATION METHODS: {authentication}
COMPLIANCE REQUIREMENTS: {compliance}
INTERNET FACING: {internet_facing}
SENSITIVE DATA: {sensitive_data}
APPLICATION DESCRIPTION: {description}

HIGH RISK NVD CVE VULNERABILITIES BELOW BASED ON TECHNOLOGIES USED IN THE APPLICATION:
{nvd}

ALIENVAULT OTX PULSE DATA FOR THE INDUSTRY SECTOR:
{otx}

Example of expected JSON response format:

{{
  "threat_model": [
    {{
      "Threat Type": "Spoofing",
      "Scenario": "Example Scenario 1",
      "Assumptions": [
        {{"Assumption": "Example Assumption 1", "Role": "Example Role 1", "Condition": "Example Condition 1"}},
        {{"Assumption": "Example Assumption 2", "Role": "Example Role 2", "Condition": "Example Condition 2"}}
      ],
      "Potential Impact": "Example Potential Impact 1",
      "MITRE ATT&CK Keywords": ["Example Keyword 1", "Example Keyword 2", "Example Keyword 3"]
    }}
  ],
  "improvement_suggestions": [
    "Example improvement suggestion 1.",
    "Example improvement suggestion 2."
  ]
}}
"#,
        industry = record.industry_sector,
        ability = record.technical_ability,
        app_type = record.app_type,
        authentication = authentication,
        compliance = compliance,
        internet_facing = record.internet_facing,
        sensitive_data = record.sensitive_data,
        description = record.description,
        nvd = context.nvd,
        otx = context.otx,
    )
}

fn join_or_none<'a>(values: impl Iterator<Item = &'a String>) -> String {
    let joined = values.cloned().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}
