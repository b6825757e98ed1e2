use anyhow::Result;
use casemap::cli::{Cli, Commands};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => casemap::commands::validate::validate_draft(&input),
        Commands::Normalize {
            input,
            format,
            output,
        } => casemap::commands::normalize::normalize_draft(&input, format, output),
        Commands::Score {
            input,
            case_study,
            format,
            output,
        } => casemap::commands::score::score_judgments(&input, case_study, format, output),
        Commands::Coverage {
            input,
            per_category,
            format,
            output,
        } => casemap::commands::coverage::check_coverage(&input, per_category, format, output),
        Commands::Prompt {
            input,
            nvd_context,
            otx_context,
            output,
        } => casemap::commands::prompt::render_prompt(&input, nvd_context, otx_context, output),
        Commands::Init { force } => casemap::commands::init::init_config(force),
    }
}
