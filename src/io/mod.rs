pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::errors::CasemapError;

pub fn read_file(path: &Path) -> Result<String, CasemapError> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<(), CasemapError> {
    fs::write(path, content)?;
    Ok(())
}

/// Parse a JSON document read from `path`, wrapping failures with the file
/// they came from.
pub fn parse_json<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, CasemapError> {
    serde_json::from_str(contents)
        .map_err(|e| CasemapError::parse(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CaseStudyDraft;

    #[test]
    fn read_file_surfaces_io_errors() {
        let err = read_file(Path::new("/nonexistent/casemap-draft.json")).unwrap_err();
        assert!(matches!(err, CasemapError::Io(_)));
    }

    #[test]
    fn parse_json_surfaces_parse_errors_with_path() {
        let err = parse_json::<CaseStudyDraft>(Path::new("draft.json"), "not json").unwrap_err();
        match err {
            CasemapError::Parse(message) => assert!(message.contains("draft.json")),
            other => panic!("expected Parse, got {other}"),
        }
    }

    #[test]
    fn parse_json_round_trips_valid_documents() {
        let draft: CaseStudyDraft =
            parse_json(Path::new("draft.json"), r#"{"app_input": "desc"}"#).unwrap();
        assert_eq!(draft.app_input, "desc");
    }
}
