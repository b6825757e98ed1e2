use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::CaseStudyRecord;
use crate::io;
use crate::prompt::{generation_prompt, LookupContext};

pub fn render_prompt(
    input: &Path,
    nvd_context: Option<PathBuf>,
    otx_context: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let contents = io::read_file(input)
        .with_context(|| format!("failed to read record {}", input.display()))?;
    let record: CaseStudyRecord = io::parse_json(input, &contents)?;

    let context = LookupContext {
        nvd: read_context(nvd_context.as_deref())?,
        otx: read_context(otx_context.as_deref())?,
    };

    let prompt = generation_prompt(&record, &context);
    match output {
        Some(path) => Ok(io::write_file(&path, &prompt)?),
        None => {
            print!("{prompt}");
            Ok(())
        }
    }
}

fn read_context(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            io::read_file(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => Ok(String::new()),
    }
}
