use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config;
use crate::io;
use crate::io::output::{create_writer, OutputFormat};
use crate::rubric::{self, Criterion, Judgment, ScoreReport};

pub fn score_judgments(
    input: &Path,
    case_study: Option<String>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let contents = io::read_file(input)
        .with_context(|| format!("failed to read judgments {}", input.display()))?;
    let judgments: BTreeMap<Criterion, Judgment> = io::parse_json(input, &contents)?;

    let config = config::load_config(Path::new("."));
    let score = rubric::score(&judgments, &config.tiers)?;
    log::debug!(
        "scored {}: total {} tier {}",
        input.display(),
        score.total,
        score.tier.label()
    );

    let report = ScoreReport::new(case_study, score);
    let mut writer = create_writer(format, output.as_deref())?;
    writer.write_score(&report)
}
