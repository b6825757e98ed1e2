use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::CaseStudyDraft;
use crate::io;
use crate::io::output::{create_writer, OutputFormat};
use crate::normalizer;

pub fn normalize_draft(
    input: &Path,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let contents = io::read_file(input)
        .with_context(|| format!("failed to read draft {}", input.display()))?;
    let draft: CaseStudyDraft = io::parse_json(input, &contents)?;

    let record = normalizer::normalize(&draft.app_input, &draft.attributes)
        .with_context(|| format!("failed to normalize {}", input.display()))?;
    log::debug!(
        "normalized {} ({} technologies)",
        input.display(),
        record.technology_count()
    );

    let mut writer = create_writer(format, output.as_deref())?;
    writer.write_record(&record)
}
