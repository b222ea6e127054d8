//! Interactive front end: ask the operator for an idea, then analyze it.

use std::io::{BufRead, Write};
use thiserror::Error;

use crate::analysis::types::Step;
use crate::analysis::workflow::{analyze_and_persist, AnalysisOutcome, RunConfig};
use crate::client::CompletionClient;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("No idea provided. Exiting.")]
    EmptyIdea,

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Print the banner and the list of analysis dimensions
pub fn print_intro() {
    println!("\n{}", "=".repeat(80));
    println!("  AUTONOMOUS STARTUP VALIDATOR AGENT");
    println!("{}", "=".repeat(80));
    println!("\nProvide your startup idea and I will analyze it comprehensively across:");
    for step in Step::ALL {
        println!("  {}. {}", step.number(), step.menu_label());
    }
    println!("\n{}\n", "-".repeat(80));
}

/// Prompt for and read one line of idea text, trimmed.
///
/// Empty or whitespace-only input is an [`InputError::EmptyIdea`].
pub fn read_idea<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    print!("📝 Enter your startup idea (be detailed): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;

    let idea = line.trim();
    if idea.is_empty() {
        return Err(InputError::EmptyIdea);
    }
    Ok(idea.to_string())
}

fn print_analyzing(idea: &str) {
    println!("\n{}", "=".repeat(80));
    println!("  ANALYZING YOUR STARTUP IDEA...");
    println!("{}", "=".repeat(80));
    println!("\nIdea: {}\n", idea);
    println!("Running autonomous analysis across all 6 dimensions...");
    println!("(This may take 30-60 seconds)\n");
}

/// Full interactive session: intro, idea prompt, six steps, optional save.
///
/// An empty idea ends the session before any completion call is made.
pub async fn run_interactive<R: BufRead>(
    client: &dyn CompletionClient,
    config: &RunConfig,
    reader: &mut R,
) -> anyhow::Result<AnalysisOutcome> {
    print_intro();
    let idea = read_idea(reader)?;
    print_analyzing(&idea);
    analyze_and_persist(client, config, &idea).await
}
