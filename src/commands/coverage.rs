use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::config;
use crate::io;
use crate::io::output::{create_writer, OutputFormat};
use crate::stride::{assess_coverage, BatchOutput, CoverageEntry, CoverageReport, Threat, ThreatModel};

/// The coverage command accepts any of the shapes the pipeline produces:
/// a batch-results array, a single generated model, or a bare threat list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CoverageInput {
    Batches(Vec<BatchOutput>),
    Model(ThreatModel),
    Threats(Vec<Threat>),
}

pub fn check_coverage(
    input: &Path,
    per_category: Option<usize>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let contents = io::read_file(input)
        .with_context(|| format!("failed to read threat model {}", input.display()))?;
    let parsed: CoverageInput = io::parse_json(input, &contents)?;

    let config = config::load_config(Path::new("."));
    let expected = per_category.unwrap_or(config.stride.threats_per_category);

    let entries = match parsed {
        CoverageInput::Batches(batches) => batches
            .iter()
            .map(|batch| CoverageEntry {
                label: batch_label(batch),
                coverage: assess_coverage(&batch.threats, expected),
            })
            .collect(),
        CoverageInput::Model(model) => vec![CoverageEntry {
            label: input.display().to_string(),
            coverage: assess_coverage(&model.threat_model, expected),
        }],
        CoverageInput::Threats(threats) => vec![CoverageEntry {
            label: input.display().to_string(),
            coverage: assess_coverage(&threats, expected),
        }],
    };

    let report = CoverageReport {
        expected_per_category: expected,
        entries,
    };
    if !report.all_complete() {
        log::warn!("{}: STRIDE coverage incomplete", input.display());
    }

    let mut writer = create_writer(format, output.as_deref())?;
    writer.write_coverage(&report)?;

    if report.all_complete() {
        Ok(())
    } else {
        anyhow::bail!("STRIDE coverage incomplete")
    }
}

fn batch_label(batch: &BatchOutput) -> String {
    match (batch.case_number.is_empty(), batch.batch_number.is_empty()) {
        (false, false) => format!(
            "case {} batch {}",
            batch.case_number, batch.batch_number
        ),
        (false, true) => format!("case {}", batch.case_number),
        _ => "batch".to_string(),
    }
}
