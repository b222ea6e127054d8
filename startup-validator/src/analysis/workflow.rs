//! Orchestration of a full analysis run.
//!
//! [`run_analysis`] walks [`Step::ALL`] in order, printing a header and the raw
//! model text for each step. The first failing step ends the run: its error is
//! printed and returned, and no later step is invoked.

use std::path::PathBuf;

use startup_validator_sdk::{
    log_error, log_run_complete, log_run_start, log_step_complete, log_step_failed,
    log_step_start,
};

use crate::analysis::step::{run_step, StepError};
use crate::analysis::types::{AnalysisResults, Step};
use crate::client::CompletionClient;
use crate::config::MODEL_NAME;
use crate::report::save_report;

const RULE_WIDTH: usize = 80;

/// Header layout for step sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStyle {
    /// `=` rules with an indented title (interactive front end)
    Banner,
    /// `─` rules with a flush title (scripted front end)
    Rule,
}

/// Settings for one analysis run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Model identifier sent with every completion request
    pub model: String,
    pub style: SectionStyle,
    /// Persist a report after a fully successful run
    pub save: bool,
    /// Directory reports are written to
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model: MODEL_NAME.to_string(),
            style: SectionStyle::Banner,
            save: false,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Print a `=` banner section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("  {}", title);
    println!("{}\n", "=".repeat(RULE_WIDTH));
}

/// Render the header printed before a step's output
pub fn step_header(step: Step, style: SectionStyle) -> String {
    match style {
        SectionStyle::Banner => format!(
            "\n{rule}\n  STEP {}: {}\n{rule}\n",
            step.number(),
            step.title(),
            rule = "=".repeat(RULE_WIDTH)
        ),
        SectionStyle::Rule => format!(
            "\n{rule}\nSTEP {}: {}\n{rule}",
            step.number(),
            step.short_title(),
            rule = "─".repeat(RULE_WIDTH)
        ),
    }
}

fn print_completion(style: SectionStyle) {
    match style {
        SectionStyle::Banner => {
            print_section("ANALYSIS COMPLETE");
            println!("✅ Full 6-step autonomous analysis complete.");
            println!("\nNext steps:");
            println!("  1. Review all recommendations carefully");
            println!("  2. Validate market assumptions with real users");
            println!("  3. Assemble your core team");
            println!("  4. Begin Phase 1 of MVP development");
            println!("  5. Measure and iterate based on user feedback");
            println!("\n{}\n", "=".repeat(RULE_WIDTH));
        }
        SectionStyle::Rule => {
            println!("\n{}", "─".repeat(RULE_WIDTH));
            println!("✅ Analysis complete: all 6 steps finished.");
        }
    }
}

/// Run all six steps for `idea`, stopping at the first failure.
///
/// # Errors
///
/// Returns the [`StepError`] of the first step whose completion call failed.
/// Steps after it are never invoked and no partial results are returned.
pub async fn run_analysis(
    client: &dyn CompletionClient,
    config: &RunConfig,
    idea: &str,
) -> Result<AnalysisResults, StepError> {
    let total = Step::ALL.len();
    log_run_start!(idea, total);

    let mut results = AnalysisResults::default();

    for step in Step::ALL {
        println!("{}", step_header(step, config.style));
        log_step_start!(step.number(), step.title(), total);

        match run_step(client, &config.model, step, idea).await {
            Ok(text) => {
                println!("{}", text);
                log_step_complete!(step.number(), step.title(), text.chars().count());
                results.set(step, text);
            }
            Err(e) => {
                log_error!(e);
                log_step_failed!(step.number(), step.title(), e.source);
                return Err(e);
            }
        }
    }

    print_completion(config.style);
    log_run_complete!(total);

    Ok(results)
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub idea: String,
    pub results: AnalysisResults,
    /// Set when the run was asked to persist a report
    pub report_path: Option<PathBuf>,
}

/// Run the analysis and, if `config.save` is set, write the report.
///
/// A report is only written after all six steps succeeded.
pub async fn analyze_and_persist(
    client: &dyn CompletionClient,
    config: &RunConfig,
    idea: &str,
) -> anyhow::Result<AnalysisOutcome> {
    let results = run_analysis(client, config, idea).await?;

    let report_path = if config.save {
        Some(save_report(&config.output_dir, idea, &results)?)
    } else {
        None
    };

    Ok(AnalysisOutcome {
        idea: idea.to_string(),
        results,
        report_path,
    })
}
