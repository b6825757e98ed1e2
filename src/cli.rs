use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "casemap")]
#[command(about = "Case study normalization and rubric scoring for threat-model benchmarks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate draft attributes without producing a record
    Validate {
        /// Draft case-study JSON file
        input: PathBuf,
    },

    /// Normalize a draft case study into the canonical batch schema
    Normalize {
        /// Draft case-study JSON file
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score rubric evidence judgments into a quality tier
    Score {
        /// Judgments JSON file (criterion -> explicit|inferred|absent)
        input: PathBuf,

        /// Case study label for the report
        #[arg(long)]
        case_study: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check STRIDE coverage of generated threat models
    Coverage {
        /// Threat model or batch-results JSON file
        input: PathBuf,

        /// Override required threats per STRIDE category
        #[arg(long)]
        per_category: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the generation prompt for a normalized record
    Prompt {
        /// Canonical record JSON file
        input: PathBuf,

        /// File with NVD vulnerability context text
        #[arg(long)]
        nvd_context: Option<PathBuf>,

        /// File with OTX pulse context text
        #[arg(long)]
        otx_context: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a default .casemap.toml
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
