//! Error types for casemap operations.
//!
//! Both core error kinds are local and synchronous: retrying with the same
//! input reproduces the same error, so callers should surface them and move
//! on to the next record rather than retry. Application-level code uses
//! `anyhow::Result` and converts via `?`.

use crate::rubric::Criterion;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CasemapError {
    /// Malformed or missing required normalizer input.
    #[error("validation failed for `{field}`: {message}")]
    Validation { field: String, message: String },

    /// Scorer given fewer than nine judgments. There is no default judgment
    /// for a missing criterion.
    #[error("incomplete evidence: missing judgments for {} of 9 rubric criteria: {}", .missing.len(), format_criteria(.missing))]
    IncompleteEvidence { missing: Vec<Criterion> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

impl CasemapError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CasemapError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        CasemapError::Parse(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CasemapError::Validation { .. })
    }
}

fn format_criteria(criteria: &[Criterion]) -> String {
    criteria
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field() {
        let err = CasemapError::validation("sensitive_data", "must be Low, Medium, or High");
        assert!(err.is_validation());
        assert!(err.to_string().contains("sensitive_data"));
    }

    #[test]
    fn incomplete_evidence_counts_judged_criteria() {
        let err = CasemapError::IncompleteEvidence {
            missing: vec![Criterion::ThreatDetails],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("1 of 9"));
        assert!(rendered.contains("threat details"));
    }
}
