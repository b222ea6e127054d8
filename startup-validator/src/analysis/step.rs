//! The templated step runner shared by all six analysis steps.

use thiserror::Error;

use crate::analysis::prompts::fill_template;
use crate::analysis::types::Step;
use crate::client::{CompletionClient, CompletionError};

/// A step's completion call failed
#[derive(Debug, Error)]
#[error("Error in {}: {source}", .step.error_label())]
pub struct StepError {
    pub step: Step,
    #[source]
    pub source: CompletionError,
}

/// Build the prompt a step sends for `idea`
pub fn build_prompt(step: Step, idea: &str) -> String {
    fill_template(step.template(), idea)
}

/// Run one analysis step: fill its template, make one completion call and
/// return the model's text untouched.
///
/// Errors are not caught here; the orchestrator decides what a failure means.
pub async fn run_step(
    client: &dyn CompletionClient,
    model: &str,
    step: Step,
    idea: &str,
) -> Result<String, StepError> {
    let prompt = build_prompt(step, idea);
    client
        .complete(model, &prompt)
        .await
        .map_err(|source| StepError { step, source })
}
