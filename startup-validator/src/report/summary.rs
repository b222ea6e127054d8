//! Presentational helpers over saved reports.
//!
//! None of these read the model text: the comparison lists dimensions to review
//! by hand, the executive summary is a fixed fill-in block and the CSV export
//! only emits its header row.

use serde::Serialize;
use std::collections::BTreeMap;


use crate::report::store::Report;

/// Dimensions an operator should weigh when comparing two ideas
pub const COMPARISON_DIMENSIONS: [&str; 4] = [
    "Feasibility (technical, timeline, budget)",
    "Market opportunity (size, demand, competition)",
    "Risk profile (technical risks, market risks)",
    "MVP clarity (feature simplicity, execution complexity)",
];

/// Header row of the timeline CSV export
pub const TIMELINE_CSV_HEADER: &str = "Week,Phase,Task,Owner,Dependencies,Status\n";

const EXECUTIVE_SUMMARY: &str = r#"
╔════════════════════════════════════════════════════════════════════════════╗
║                     EXECUTIVE SUMMARY                                      ║
╚════════════════════════════════════════════════════════════════════════════╝

RECOMMENDATION:
[Based on overall feasibility, market opportunity, and risks]

KEY METRICS:
- Feasibility: [✅ High / ⚠️ Medium / ❌ Low]
- Market Opportunity: [✅ Large / ⚠️ Medium / ❌ Small]
- Risk Profile: [✅ Low / ⚠️ Medium / ❌ High]
- Time to MVP: [X weeks]
- Estimated Budget: $[X]
- Team Required: [X people]

TOP 3 STRENGTHS:
1. [Strength]
2. [Strength]
3. [Strength]

TOP 3 RISKS:
1. [Risk with mitigation]
2. [Risk with mitigation]
3. [Risk with mitigation]

NEXT STEPS:
1. Validate [key assumption] with users
2. Build MVP with focus on [core feature]
3. Measure [key metric] to validate market fit

═══════════════════════════════════════════════════════════════════════════════
"#;

/// Side-by-side reference to two ideas. `comparison` is always empty: no
/// automated diffing of analysis text is performed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdeaComparison {
    pub idea_1: String,
    pub idea_2: String,
    pub comparison: BTreeMap<String, String>,
}

/// Print both ideas and the review dimensions
pub fn compare_reports(first: &Report, second: &Report) -> IdeaComparison {
    println!("\n{}", "=".repeat(80));
    println!("  STARTUP IDEAS COMPARISON");
    println!("{}", "=".repeat(80));
    println!("\nIDEA 1: {}", first.idea);
    println!("IDEA 2: {}", second.idea);
    println!("\nUse this comparison to identify which idea has better:");
    for dimension in COMPARISON_DIMENSIONS {
        println!("  - {}", dimension);
    }

    IdeaComparison {
        idea_1: first.idea.clone(),
        idea_2: second.idea.clone(),
        comparison: BTreeMap::new(),
    }
}

/// One-page executive summary layout with fill-in slots
pub fn executive_summary() -> &'static str {
    EXECUTIVE_SUMMARY
}

/// Timeline export for project-management tools.
///
/// Only the header row is produced; the free-text timeline is not parsed into
/// rows. Nothing is printed, so the result can be redirected straight to a file.
pub fn export_timeline_csv(_timeline: &str) -> String {
    TIMELINE_CSV_HEADER.to_string()
}
