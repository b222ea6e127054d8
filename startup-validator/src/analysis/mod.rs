//! Six-step startup idea analysis.
//!
//! ## Module Structure
//!
//! - `prompts` - The six prompt templates and placeholder filling
//! - `types` - Step identifiers and the per-run result set
//! - `step` - Generic templated step runner
//! - `workflow` - Fixed-order orchestration, stop on first failure
//! - `interactive` - Operator-prompted front end
//! - `scripted` - Built-in example ideas front end
//! - `cli` - Command-line argument definitions

pub mod cli;
pub mod interactive;
pub mod prompts;
pub mod scripted;
pub mod step;
pub mod types;
pub mod workflow;

pub use step::{build_prompt, run_step, StepError};
pub use types::{AnalysisResults, Step};
pub use workflow::{analyze_and_persist, run_analysis, AnalysisOutcome, RunConfig, SectionStyle};
