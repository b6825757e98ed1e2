use anyhow::{Context, Result};
use std::path::Path;

use crate::core::CaseStudyDraft;
use crate::io;
use crate::normalizer;

pub fn validate_draft(input: &Path) -> Result<()> {
    let contents = io::read_file(input)
        .with_context(|| format!("failed to read draft {}", input.display()))?;
    let draft: CaseStudyDraft = io::parse_json(input, &contents)?;

    normalizer::validate(&draft.attributes)?;
    println!("{} is valid", input.display());
    Ok(())
}
