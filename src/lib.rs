// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod normalizer;
pub mod prompt;
pub mod rubric;
pub mod stride;

// Re-export commonly used types
pub use crate::core::{
    AbilityLevel, AttributeSelections, CaseStudyDraft, CaseStudyRecord, Exposure,
    SensitivityLevel, VERSION_UNSPECIFIED,
};

pub use crate::errors::CasemapError;

pub use crate::normalizer::{normalize, validate};

pub use crate::rubric::{
    classify_tier, score, Criterion, Judgment, QualityTier, RubricScore, ScoreReport,
    TierThresholds,
};

pub use crate::stride::{
    assess_coverage, CoverageReport, StrideCategory, StrideCoverage, Threat, ThreatModel,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
