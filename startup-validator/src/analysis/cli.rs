//! CLI argument definitions for the two front ends.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::analysis::scripted::ExampleSelection;
use crate::analysis::workflow::{RunConfig, SectionStyle};
use crate::config::Config;
use crate::report::DEFAULT_ARCHIVE_DAYS;

/// Options shared by both front ends
#[derive(Args, Debug, Clone)]
pub struct RunOptions {
    /// Save a JSON report after a fully successful run
    #[arg(long)]
    pub save: bool,

    /// Directory reports are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Emit structured workflow events on stderr
    #[arg(long)]
    pub events: bool,
}

impl RunOptions {
    /// Combine with the loaded configuration into a run configuration
    pub fn run_config(&self, config: &Config, style: SectionStyle) -> RunConfig {
        RunConfig {
            model: config.model.clone(),
            style,
            save: self.save,
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Autonomous startup validator
///
/// Without a subcommand, prompts for a startup idea and analyzes it across
/// feasibility, market, risk, MVP features, roadmap and a 12-week timeline.
#[derive(Parser, Debug, Clone)]
#[command(name = "startup-validator")]
#[command(about = "Validate a startup idea with a six-step LLM analysis")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Work with saved analysis reports
    #[command(subcommand)]
    Reports(ReportsCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ReportsCommand {
    /// List saved reports
    List {
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
    /// Print a saved report
    Show { path: PathBuf },
    /// Move reports older than N days into archived/
    Archive {
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
        #[arg(long, default_value_t = DEFAULT_ARCHIVE_DAYS)]
        days: u64,
    },
    /// Compare the ideas of two saved reports
    Compare { first: PathBuf, second: PathBuf },
    /// Print the executive summary template
    Summary,
    /// Export a report's timeline as CSV (header row only)
    TimelineCsv { path: PathBuf },
}

/// Run the built-in example ideas through the analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "validate-examples")]
#[command(about = "Analyze built-in example startup ideas")]
#[command(version)]
pub struct ExamplesArgs {
    /// Example to run (1, 2, 3 or all); prompts when omitted
    #[arg(long, value_name = "CHOICE")]
    pub example: Option<String>,

    #[command(flatten)]
    pub run: RunOptions,
}

impl ExamplesArgs {
    /// Parse `--example` if given
    pub fn selection(&self) -> Option<Result<ExampleSelection, String>> {
        self.example.as_deref().map(str::parse)
    }
}
