//! Configuration loading from `.casemap.toml`.
//!
//! Read and parse are split into pure functions; a missing file is silent,
//! a malformed file warns and falls back to defaults.

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rubric::TierThresholds;

pub const CONFIG_FILE_NAME: &str = ".casemap.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CasemapConfig {
    pub tiers: TierThresholds,
    pub stride: StrideConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrideConfig {
    /// Required number of threats per STRIDE category in a generated model.
    pub threats_per_category: usize,
}

impl Default for StrideConfig {
    fn default() -> Self {
        Self {
            threats_per_category: 3,
        }
    }
}

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<CasemapConfig, String> {
    let mut config = toml::from_str::<CasemapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Err(e) = config.tiers.validate() {
        eprintln!("Warning: Invalid tier thresholds: {e}. Using defaults.");
        config.tiers = TierThresholds::default();
    }

    Ok(config)
}

/// Load configuration from `.casemap.toml` in the given directory, falling
/// back to defaults when the file is absent or malformed.
pub fn load_config(dir: &Path) -> CasemapConfig {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let contents = match read_config_file(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return CasemapConfig::default();
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            CasemapConfig::default()
        }
    }
}

pub fn default_config_contents() -> &'static str {
    r#"# Casemap Configuration

[tiers]
# Inclusive lower bounds for quality tiers, calibrated against worked
# examples. Totals below moderate_min are Low Quality.
exceptional_min = 36
high_min = 32
moderate_min = 27

[stride]
threats_per_category = 3
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tier_overrides() {
        let config = parse_and_validate_config(
            "[tiers]\nexceptional_min = 40\nhigh_min = 34\nmoderate_min = 25\n",
        )
        .unwrap();
        assert_eq!(config.tiers.exceptional_min, 40);
        assert_eq!(config.stride.threats_per_category, 3);
    }

    #[test]
    fn invalid_thresholds_fall_back_to_defaults() {
        let config = parse_and_validate_config(
            "[tiers]\nexceptional_min = 10\nhigh_min = 32\nmoderate_min = 27\n",
        )
        .unwrap();
        assert_eq!(config.tiers, TierThresholds::default());
    }

    #[test]
    fn default_contents_round_trip() {
        let config = parse_and_validate_config(default_config_contents()).unwrap();
        assert_eq!(config, CasemapConfig::default());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(dir.path()), CasemapConfig::default());
    }
}
