//! Output writers for records, score reports, and coverage reports.

use crate::core::CaseStudyRecord;
use crate::rubric::{QualityTier, ScoreReport};
use crate::stride::{CoverageReport, StrideCategory};
use clap::ValueEnum;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_record(&mut self, record: &CaseStudyRecord) -> anyhow::Result<()>;
    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
    fn write_coverage(&mut self, report: &CoverageReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: serde::Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_record(&mut self, record: &CaseStudyRecord) -> anyhow::Result<()> {
        self.write_value(record)
    }

    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_coverage(&mut self, report: &CoverageReport) -> anyhow::Result<()> {
        self.write_value(report)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_record(&mut self, record: &CaseStudyRecord) -> anyhow::Result<()> {
        writeln!(self.writer, "# Case Study Record")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Field | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Application type | {} |", record.app_type)?;
        writeln!(
            self.writer,
            "| Industry sector | {} |",
            record.industry_sector
        )?;
        writeln!(
            self.writer,
            "| Data sensitivity | {} |",
            record.sensitive_data
        )?;
        writeln!(
            self.writer,
            "| Internet facing | {} |",
            record.internet_facing
        )?;
        writeln!(self.writer, "| Employees | {} |", record.num_employees)?;
        writeln!(
            self.writer,
            "| Technical ability | {} |",
            record.technical_ability
        )?;
        writeln!(
            self.writer,
            "| Compliance | {} |",
            join_or_none(record.compliance_requirements.iter())
        )?;
        writeln!(
            self.writer,
            "| Authentication | {} |",
            join_or_none(record.authentication.iter())
        )?;
        writeln!(self.writer)?;

        if record.technology_count() > 0 {
            writeln!(self.writer, "## Technologies")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Technology | CPE prefix | Version |")?;
            writeln!(self.writer, "|------------|------------|---------|")?;
            for (name, cpe, version) in record.technologies() {
                writeln!(self.writer, "| {name} | {cpe} | {version} |")?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "## Description")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", record.description)?;
        Ok(())
    }

    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Rubric Score Report")?;
        writeln!(self.writer)?;
        if let Some(case_study) = &report.case_study {
            writeln!(self.writer, "Case study: {case_study}")?;
        }
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Criterion | Judgment | Points |")?;
        writeln!(self.writer, "|-----------|----------|--------|")?;
        for entry in &report.score.scores {
            writeln!(
                self.writer,
                "| {} | {:?} | {} |",
                entry.criterion.label(),
                entry.judgment,
                entry.points
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Total: {} / 45 — {}**",
            report.score.total,
            report.score.tier.label()
        )?;
        Ok(())
    }

    fn write_coverage(&mut self, report: &CoverageReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# STRIDE Coverage Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Expected threats per category: {}",
            report.expected_per_category
        )?;
        writeln!(self.writer)?;
        for entry in &report.entries {
            writeln!(self.writer, "## {}", entry.label)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Category | Threats |")?;
            writeln!(self.writer, "|----------|---------|")?;
            for category in StrideCategory::ALL {
                let count = entry.coverage.counts.get(&category).copied().unwrap_or(0);
                writeln!(self.writer, "| {} | {} |", category.label(), count)?;
            }
            if !entry.coverage.unrecognized.is_empty() {
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "Unrecognized threat types: {}",
                    entry.coverage.unrecognized.join(", ")
                )?;
            }
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "Verdict: {}",
                if entry.coverage.is_complete() {
                    "complete"
                } else {
                    "incomplete"
                }
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_record(&mut self, record: &CaseStudyRecord) -> anyhow::Result<()> {
        println!("{}", "Case Study Record".bold().blue());
        println!("{}", "=================".blue());
        println!("  Application type:  {}", record.app_type);
        println!("  Industry sector:   {}", record.industry_sector);
        println!("  Data sensitivity:  {}", record.sensitive_data);
        println!("  Internet facing:   {}", record.internet_facing);
        println!("  Technical ability: {}", record.technical_ability);
        println!(
            "  Compliance:        {}",
            join_or_none(record.compliance_requirements.iter())
        );
        println!(
            "  Authentication:    {}",
            join_or_none(record.authentication.iter())
        );
        println!("  Technologies:      {}", record.technology_count());
        Ok(())
    }

    fn write_score(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        println!("{}", "Rubric Score Report".bold().blue());
        println!("{}", "===================".blue());
        if let Some(case_study) = &report.case_study {
            println!("  Case study: {case_study}");
        }
        for entry in &report.score.scores {
            println!(
                "  {:<24} {:?} ({})",
                entry.criterion.label(),
                entry.judgment,
                entry.points
            );
        }
        println!();
        println!(
            "  Total: {} / 45 — {}",
            report.score.total,
            tier_display(report.score.tier)
        );
        Ok(())
    }

    fn write_coverage(&mut self, report: &CoverageReport) -> anyhow::Result<()> {
        println!("{}", "STRIDE Coverage Report".bold().blue());
        println!("{}", "======================".blue());
        for entry in &report.entries {
            let verdict = if entry.coverage.is_complete() {
                "complete".green().to_string()
            } else {
                "incomplete".red().to_string()
            };
            println!("  {}: {} ({} threats)", entry.label, verdict, entry.coverage.total_threats());
            for category in StrideCategory::ALL {
                let count = entry.coverage.counts.get(&category).copied().unwrap_or(0);
                let marker = if count == report.expected_per_category {
                    count.to_string().green().to_string()
                } else {
                    count.to_string().red().to_string()
                };
                println!("    {:<24} {}", category.label(), marker);
            }
            for unknown in &entry.coverage.unrecognized {
                println!("    {} {}", "unrecognized:".yellow(), unknown);
            }
        }
        Ok(())
    }
}

fn tier_display(tier: QualityTier) -> String {
    match tier {
        QualityTier::Exceptional => tier.label().green().bold().to_string(),
        QualityTier::High => tier.label().cyan().to_string(),
        QualityTier::Moderate => tier.label().yellow().to_string(),
        QualityTier::Low => tier.label().red().to_string(),
    }
}

fn join_or_none<'a>(values: impl Iterator<Item = &'a String>) -> String {
    let joined = values.cloned().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

/// Build a writer for the requested format and destination. Terminal output
/// always goes to stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match (format, output) {
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(std::io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(File::create(path)?)))
        }
        (OutputFormat::Terminal, None) => Ok(Box::new(TerminalWriter::new())),
        (OutputFormat::Terminal, Some(_)) => {
            anyhow::bail!("terminal format writes to stdout; use --format json or markdown with --output")
        }
    }
}
