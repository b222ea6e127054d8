//! Scripted front end: run the analysis on built-in example ideas.

use std::io::{BufRead, Write};
use std::str::FromStr;

use startup_validator_sdk::log_info;

use crate::analysis::workflow::{analyze_and_persist, AnalysisOutcome, RunConfig};
use crate::client::CompletionClient;

/// Example ideas offered by the scripted front end. The text is sent as-is,
/// surrounding newlines and indentation included.
pub const EXAMPLE_IDEAS: [&str; 3] = [
    concat!(
        "\n",
        "    A mobile-first SaaS platform that uses AI to automate repetitive customer support \n",
        "    tasks. It integrates with popular help desk tools like Zendesk and Intercom, learns \n",
        "    from support patterns, and responds to common questions automatically, escalating \n",
        "    complex issues to humans. Targets small to mid-size e-commerce and SaaS companies \n",
        "    (100-500 employees) currently spending $5K-50K/month on support.\n",
        "    ",
    ),
    concat!(
        "\n",
        "    A B2B marketplace connecting freelance engineers with companies needing short-term \n",
        "    technical talent. Unlike Toptal/Upwork, it focuses exclusively on backend engineers \n",
        "    and DevOps specialists, with 1-3 month projects. Built-in code review, automated \n",
        "    vetting, and escrow payment system.\n",
        "    ",
    ),
    concat!(
        "\n",
        "    An iOS app for fitness enthusiasts that gamifies workout consistency. Users form \n",
        "    squads, compete in monthly challenges, earn points for workouts, and unlock rewards \n",
        "    (discounts at gyms, sports brands). Integrates with Apple Health and popular fitness \n",
        "    apps (Strava, MyFitnessPal).\n",
        "    ",
    ),
];

const PREVIEW_CHARS: usize = 80;

/// Which example(s) to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleSelection {
    /// 1-based example number
    One(usize),
    All,
}

impl FromStr for ExampleSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        if choice.eq_ignore_ascii_case("all") {
            return Ok(ExampleSelection::All);
        }
        match choice.parse::<usize>() {
            Ok(n) if (1..=EXAMPLE_IDEAS.len()).contains(&n) && choice == n.to_string() => {
                Ok(ExampleSelection::One(n))
            }
            _ => Err(format!(
                "Invalid choice '{}'. Expected 1-{} or 'all'",
                choice,
                EXAMPLE_IDEAS.len()
            )),
        }
    }
}

impl ExampleSelection {
    /// `(number, idea)` pairs to run, in order
    pub fn ideas(self) -> Vec<(usize, &'static str)> {
        match self {
            ExampleSelection::All => EXAMPLE_IDEAS
                .iter()
                .enumerate()
                .map(|(i, idea)| (i + 1, *idea))
                .collect(),
            ExampleSelection::One(n) => vec![(n, EXAMPLE_IDEAS[n - 1])],
        }
    }
}

/// First 80 characters of an idea followed by `...`
pub fn preview(idea: &str) -> String {
    let head: String = idea.trim().chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}

/// Print the intro and the numbered example list
pub fn print_menu() {
    println!("\n{}", "=".repeat(80));
    println!("  STARTUP VALIDATOR AGENT - EXAMPLE ANALYSIS");
    println!("{}", "=".repeat(80));
    println!(
        "\nThis script demonstrates the agent with {} example ideas.\n",
        EXAMPLE_IDEAS.len()
    );
    println!("Available examples:");
    for (i, idea) in EXAMPLE_IDEAS.iter().enumerate() {
        println!("  {}. {}", i + 1, preview(idea));
    }
}

/// Prompt for a selection and read the raw answer
pub fn read_selection<R: BufRead>(reader: &mut R) -> std::io::Result<String> {
    print!("\nEnter example number (1, 2, 3, or 'all'): ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Analyze one example idea
pub async fn run_example(
    client: &dyn CompletionClient,
    config: &RunConfig,
    idea: &str,
    number: usize,
) -> anyhow::Result<AnalysisOutcome> {
    println!("\n{}", "=".repeat(80));
    println!("  EXAMPLE {}: STARTUP IDEA ANALYSIS", number);
    println!("{}", "=".repeat(80));
    println!("\nIdea: {}\n", idea.trim());
    println!("Running autonomous 6-step analysis...\n");

    analyze_and_persist(client, config, idea).await
}

/// Analyze the selected examples in sequence, stopping at the first failure
pub async fn run_selection(
    client: &dyn CompletionClient,
    config: &RunConfig,
    selection: ExampleSelection,
) -> anyhow::Result<Vec<AnalysisOutcome>> {
    let ideas = selection.ideas();
    if ideas.len() > 1 {
        log_info!("Running {} examples", ideas.len());
    }

    let mut outcomes = Vec::with_capacity(ideas.len());
    for (number, idea) in ideas {
        outcomes.push(run_example(client, config, idea, number).await?);
    }
    Ok(outcomes)
}
