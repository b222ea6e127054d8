use anyhow::Result;
use clap::Parser;
use std::path::Path;

use startup_validator::analysis::cli::{Cli, Command, ReportsCommand, RunOptions};
use startup_validator::analysis::interactive::{run_interactive, InputError};
use startup_validator::analysis::{SectionStyle, Step, StepError};
use startup_validator::client::GroqClient;
use startup_validator::config::Config;
use startup_validator::report::{
    archive_reports, compare_reports, executive_summary, export_timeline_csv, list_reports,
    load_report, Report,
};
use startup_validator_sdk::{log_error, log_warning, set_events_enabled};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    set_events_enabled(cli.run.events);

    match cli.command {
        None => analyze_interactively(&cli.run).await,
        Some(Command::Reports(command)) => run_reports_command(command),
    }
}

async fn analyze_interactively(options: &RunOptions) -> Result<()> {
    // Fail on a missing credential before prompting for anything
    let config = Config::load()?;
    let client = GroqClient::new(&config);
    let run_config = options.run_config(&config, SectionStyle::Banner);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    match run_interactive(&client, &run_config, &mut input).await {
        Ok(_) => Ok(()),
        Err(e) => {
            if let Some(input_error) = e.downcast_ref::<InputError>() {
                log_error!(input_error);
            } else if e.downcast_ref::<StepError>().is_none() {
                // Step failures were already reported next to their section
                log_error!("{:#}", e);
            }
            std::process::exit(1);
        }
    }
}

fn load_or_exit(path: &Path) -> Result<Report> {
    match load_report(path)? {
        Some(report) => Ok(report),
        None => std::process::exit(1),
    }
}

fn print_report(report: &Report) {
    println!("\n{}", "=".repeat(80));
    println!("  REPORT {}", report.timestamp);
    println!("{}", "=".repeat(80));
    println!("\nIdea: {}", report.idea);
    for step in Step::ALL {
        println!("\n--- {} ---\n", step.title());
        println!("{}", report.analysis.get(step));
    }
}

fn run_reports_command(command: ReportsCommand) -> Result<()> {
    match command {
        ReportsCommand::List { dir } => {
            list_reports(&dir)?;
        }
        ReportsCommand::Show { path } => {
            let report = load_or_exit(&path)?;
            print_report(&report);
        }
        ReportsCommand::Archive { dir, days } => {
            archive_reports(&dir, days)?;
        }
        ReportsCommand::Compare { first, second } => {
            let first = load_or_exit(&first)?;
            let second = load_or_exit(&second)?;
            compare_reports(&first, &second);
        }
        ReportsCommand::Summary => {
            print!("{}", executive_summary());
        }
        ReportsCommand::TimelineCsv { path } => {
            let report = load_or_exit(&path)?;
            if !report.analysis.timeline.trim().is_empty() {
                log_warning!("Timeline CSV export emits the header row only; rows are not parsed from model text");
            }
            print!("{}", export_timeline_csv(&report.analysis.timeline));
        }
    }
    Ok(())
}
