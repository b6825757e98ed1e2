//! Quality tier classification for rubric totals.
//!
//! The thresholds were calibrated against worked examples rather than
//! derived from a formula, so they live in configuration. When a labeled
//! example disagrees with a computed tier, the disagreement is surfaced via
//! `check_against` rather than the thresholds being silently adjusted.

use serde::{Deserialize, Serialize};

use crate::errors::CasemapError;

/// Quality tier derived from a rubric total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    Low,
    Moderate,
    High,
    Exceptional,
}

impl QualityTier {
    /// Tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            QualityTier::Low => "Low Quality",
            QualityTier::Moderate => "Moderate Quality",
            QualityTier::High => "High Quality",
            QualityTier::Exceptional => "Exceptional Quality",
        }
    }
}

/// Inclusive lower bounds for each tier above Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub exceptional_min: u32,
    pub high_min: u32,
    pub moderate_min: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            exceptional_min: 36,
            high_min: 32,
            moderate_min: 27,
        }
    }
}

impl TierThresholds {
    /// Thresholds must be strictly descending and inside the attainable
    /// total range [9, 45].
    pub fn validate(&self) -> Result<(), CasemapError> {
        if !(self.exceptional_min > self.high_min && self.high_min > self.moderate_min) {
            return Err(CasemapError::validation(
                "tiers",
                format!(
                    "thresholds must satisfy exceptional > high > moderate, got {}/{}/{}",
                    self.exceptional_min, self.high_min, self.moderate_min
                ),
            ));
        }
        if self.moderate_min <= 9 || self.exceptional_min > 45 {
            return Err(CasemapError::validation(
                "tiers",
                "thresholds must fall inside the attainable total range [9, 45]",
            ));
        }
        Ok(())
    }

    /// Compare computed tiers against labeled (total, tier) examples and
    /// return every disagreement. Used to flag calibration drift.
    pub fn check_against(&self, labeled: &[(u32, QualityTier)]) -> Vec<CalibrationMismatch> {
        labeled
            .iter()
            .filter_map(|&(total, expected)| {
                let computed = classify_tier(total, self);
                (computed != expected).then_some(CalibrationMismatch {
                    total,
                    expected,
                    computed,
                })
            })
            .collect()
    }
}

/// A labeled example whose tier disagrees with the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationMismatch {
    pub total: u32,
    pub expected: QualityTier,
    pub computed: QualityTier,
}

/// Pure tier classification. Exposed separately from scoring so that
/// externally-sourced totals can be tiered without a judgment set.
pub fn classify_tier(total: u32, thresholds: &TierThresholds) -> QualityTier {
    if total >= thresholds.exceptional_min {
        QualityTier::Exceptional
    } else if total >= thresholds.high_min {
        QualityTier::High
    } else if total >= thresholds.moderate_min {
        QualityTier::Moderate
    } else {
        QualityTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive_lower_bounds() {
        let t = TierThresholds::default();
        assert_eq!(classify_tier(26, &t), QualityTier::Low);
        assert_eq!(classify_tier(27, &t), QualityTier::Moderate);
        assert_eq!(classify_tier(31, &t), QualityTier::Moderate);
        assert_eq!(classify_tier(32, &t), QualityTier::High);
        assert_eq!(classify_tier(35, &t), QualityTier::High);
        assert_eq!(classify_tier(36, &t), QualityTier::Exceptional);
        assert_eq!(classify_tier(45, &t), QualityTier::Exceptional);
    }

    #[test]
    fn externally_sourced_totals_are_tierable() {
        // Corpus worked example: 28 -> Moderate, even though 28 is not
        // reachable from tri-state judgments alone.
        assert_eq!(
            classify_tier(28, &TierThresholds::default()),
            QualityTier::Moderate
        );
    }

    #[test]
    fn validate_rejects_unordered_thresholds() {
        let t = TierThresholds {
            exceptional_min: 30,
            high_min: 32,
            moderate_min: 27,
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn check_against_flags_disagreements_only() {
        let t = TierThresholds::default();
        let labeled = [
            (28, QualityTier::Moderate),
            (31, QualityTier::Moderate),
            (35, QualityTier::High),
            // Labeled High in the corpus but >= exceptional_min.
            (37, QualityTier::High),
            (41, QualityTier::Exceptional),
        ];
        let mismatches = t.check_against(&labeled);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].total, 37);
        assert_eq!(mismatches[0].computed, QualityTier::Exceptional);
    }
}
